//! Property animation: easing curves and single-owner tween channels.
//!
//! Each animatable property is a [`Channel`]: a current value plus at most
//! one in-flight [`Tween`] descriptor (start value, target, start time,
//! duration, easing). Starting a new tween replaces the descriptor, so the
//! latest request owns the property until it completes or is replaced.

use glam::Vec2;

/// Easing curves used by the effect envelopes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out: fast start, gentle settle.
    QuadOut,
    /// Cubic ease-out: stronger deceleration, used for pointer follow.
    CubicOut,
}

impl Easing {
    /// Map normalized time t in \[0, 1\] to an eased fraction.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Values a [`Channel`] can interpolate.
pub trait Animatable: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Animatable for Vec2 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

#[derive(Clone, Copy, Debug)]
struct Tween<T> {
    from: T,
    to: T,
    start_sec: f64,
    duration_sec: f32,
    easing: Easing,
}

/// An animated property owning at most one in-flight tween.
#[derive(Clone, Copy, Debug)]
pub struct Channel<T: Animatable> {
    value: T,
    tween: Option<Tween<T>>,
}

impl<T: Animatable> Channel<T> {
    pub fn new(value: T) -> Self {
        Self { value, tween: None }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Begin a tween from the current value toward `to`, replacing any
    /// in-flight tween. A non-positive duration snaps immediately.
    pub fn retarget(&mut self, now_sec: f64, to: T, duration_sec: f32, easing: Easing) {
        if duration_sec <= 0.0 {
            self.value = to;
            self.tween = None;
            return;
        }
        self.tween = Some(Tween {
            from: self.value,
            to,
            start_sec: now_sec,
            duration_sec,
            easing,
        });
    }

    /// Snap to a value, cancelling any in-flight tween.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.tween = None;
    }

    /// Step the channel to `now_sec`. Returns true when the tween finished
    /// during this step; the value then lands exactly on the target.
    pub fn advance(&mut self, now_sec: f64) -> bool {
        let Some(tw) = self.tween else {
            return false;
        };
        let t = ((now_sec - tw.start_sec) / tw.duration_sec as f64) as f32;
        if t >= 1.0 {
            self.value = tw.to;
            self.tween = None;
            true
        } else {
            self.value = T::lerp(tw.from, tw.to, tw.easing.apply(t));
            false
        }
    }
}
