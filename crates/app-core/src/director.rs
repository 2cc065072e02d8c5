//! The effect director: randomized chromatic-aberration bursts, glitch
//! triggering, and pointer-driven model orientation.
//!
//! Timing is deadline-based. The director owns exactly one pending burst
//! deadline and, while the glitch is up, one deactivation deadline; `tick`
//! advances an internal clock by the caller's `dt`, so the same code runs
//! against wall time in the frontend and simulated time in tests.

use std::time::Duration;

use glam::Vec2;
use rand::prelude::*;

use crate::anim::{Channel, Easing};
use crate::constants::{
    BURST_DELAY_MAX_MS, BURST_DELAY_MIN_MS, GLITCH_HOLD_MS, GLITCH_PROBABILITY, ORIENT_TWEEN_SEC,
    SHIFT_ATTACK_SEC, SHIFT_BASELINE, SHIFT_INITIAL, SHIFT_RELEASE_SEC, SHIFT_TARGET_MAX,
};
use crate::state::{EffectSnapshot, OrientationTarget, PointerSample};

/// Tuning parameters, defaulting to the shipped demo behavior.
#[derive(Clone, Debug)]
pub struct DirectorParams {
    pub shift_initial: f32,
    pub shift_baseline: f32,
    pub shift_target_max: f32,
    pub shift_attack_sec: f32,
    pub shift_release_sec: f32,
    pub glitch_probability: f64,
    pub glitch_hold: Duration,
    pub burst_delay_min: Duration,
    pub burst_delay_max: Duration,
    pub orient_tween_sec: f32,
}

impl Default for DirectorParams {
    fn default() -> Self {
        Self {
            shift_initial: SHIFT_INITIAL,
            shift_baseline: SHIFT_BASELINE,
            shift_target_max: SHIFT_TARGET_MAX,
            shift_attack_sec: SHIFT_ATTACK_SEC,
            shift_release_sec: SHIFT_RELEASE_SEC,
            glitch_probability: GLITCH_PROBABILITY,
            glitch_hold: Duration::from_millis(GLITCH_HOLD_MS),
            burst_delay_min: Duration::from_millis(BURST_DELAY_MIN_MS),
            burst_delay_max: Duration::from_millis(BURST_DELAY_MAX_MS),
            orient_tween_sec: ORIENT_TWEEN_SEC,
        }
    }
}

/// Observability events emitted by [`EffectDirector::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DirectorEvent {
    /// A shift burst fired toward `target`.
    ShiftBurst { at_sec: f64, target: f32 },
    /// The glitch flag went up.
    GlitchOn { at_sec: f64 },
    /// The glitch flag dropped back down.
    GlitchOff { at_sec: f64 },
}

/// Shift envelope phase. Serializes attack -> release so a burst can never
/// queue more than one return-to-baseline transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ShiftPhase {
    Idle,
    Attack,
    Release,
}

/// Self-rearming randomized schedule for the burst chain.
#[derive(Clone, Copy, Debug)]
struct BurstSchedule {
    next_at_sec: f64,
}

impl BurstSchedule {
    fn due(&self, now_sec: f64) -> bool {
        self.next_at_sec <= now_sec
    }

    fn rearm(&mut self, rng: &mut StdRng, min: Duration, max: Duration) {
        self.next_at_sec += rng.gen_range(min.as_secs_f64()..max.as_secs_f64());
    }
}

pub struct EffectDirector {
    params: DirectorParams,
    rng: StdRng,
    clock_sec: f64,
    shift: Channel<f32>,
    shift_phase: ShiftPhase,
    glitch_active: bool,
    glitch_off_at: Option<f64>,
    schedule: BurstSchedule,
    orientation: Channel<Vec2>,
    model_present: bool,
}

impl EffectDirector {
    /// Create a director whose first burst fires on the first `tick`.
    pub fn new(params: DirectorParams, seed: u64) -> Self {
        Self {
            shift: Channel::new(params.shift_initial),
            orientation: Channel::new(Vec2::ZERO),
            rng: StdRng::seed_from_u64(seed),
            clock_sec: 0.0,
            shift_phase: ShiftPhase::Idle,
            glitch_active: false,
            glitch_off_at: None,
            schedule: BurstSchedule { next_at_sec: 0.0 },
            model_present: false,
            params,
        }
    }

    /// Current chromatic-aberration magnitude, read by the post pass.
    pub fn shift_amount(&self) -> f32 {
        self.shift.value()
    }

    pub fn glitch_active(&self) -> bool {
        self.glitch_active
    }

    /// Current animated model orientation.
    pub fn orientation(&self) -> OrientationTarget {
        let v = self.orientation.value();
        OrientationTarget {
            pitch: v.y,
            yaw: v.x,
        }
    }

    pub fn model_present(&self) -> bool {
        self.model_present
    }

    /// Flip once the model asset has been delivered; until then pointer
    /// motion is ignored.
    pub fn set_model_present(&mut self, present: bool) {
        self.model_present = present;
    }

    /// True when the shift envelope has fully settled back to baseline.
    pub fn shift_settled(&self) -> bool {
        self.shift_phase == ShiftPhase::Idle && !self.shift.is_animating()
    }

    pub fn snapshot(&self) -> EffectSnapshot {
        EffectSnapshot {
            shift_amount: self.shift_amount(),
            glitch_active: self.glitch_active,
            orientation: self.orientation(),
        }
    }

    /// Advance simulated time by `dt`, firing any due bursts, stepping the
    /// animated channels and applying the glitch-off deadline. Events are
    /// appended to `out_events`.
    pub fn tick(&mut self, dt: Duration, out_events: &mut Vec<DirectorEvent>) {
        self.clock_sec += dt.as_secs_f64();

        while self.schedule.due(self.clock_sec) {
            let at_sec = self.schedule.next_at_sec;
            self.trigger_burst(at_sec, out_events);
            self.schedule.rearm(
                &mut self.rng,
                self.params.burst_delay_min,
                self.params.burst_delay_max,
            );
        }

        if self.shift.advance(self.clock_sec) {
            match self.shift_phase {
                ShiftPhase::Attack => {
                    self.shift_phase = ShiftPhase::Release;
                    self.shift.retarget(
                        self.clock_sec,
                        self.params.shift_baseline,
                        self.params.shift_release_sec,
                        Easing::QuadOut,
                    );
                }
                ShiftPhase::Release => self.shift_phase = ShiftPhase::Idle,
                ShiftPhase::Idle => {}
            }
        }

        if let Some(off_at) = self.glitch_off_at {
            if self.clock_sec >= off_at {
                self.clear_glitch();
                out_events.push(DirectorEvent::GlitchOff { at_sec: off_at });
            }
        }

        self.orientation.advance(self.clock_sec);
    }

    /// Steer the model toward the pointer. Every call supersedes any
    /// in-flight orientation tween; ignored until a model is present.
    pub fn pointer_moved(&mut self, sample: PointerSample) {
        if !self.model_present {
            return;
        }
        self.orientation.retarget(
            self.clock_sec,
            Vec2::new(sample.x, sample.y),
            self.params.orient_tween_sec,
            Easing::CubicOut,
        );
    }

    /// Drop the glitch flag. Safe to call at any time, including when the
    /// flag is already down.
    pub fn clear_glitch(&mut self) {
        self.glitch_active = false;
        self.glitch_off_at = None;
    }

    /// One burst of the randomized effect chain: retarget the shift
    /// envelope and roll the glitch trigger.
    fn trigger_burst(&mut self, at_sec: f64, out_events: &mut Vec<DirectorEvent>) {
        let target = self.rng.gen_range(0.0..self.params.shift_target_max);
        self.shift_phase = ShiftPhase::Attack;
        self.shift
            .retarget(at_sec, target, self.params.shift_attack_sec, Easing::QuadOut);
        log::debug!("[fx] shift burst target={target:.4}");
        out_events.push(DirectorEvent::ShiftBurst { at_sec, target });

        if self.rng.gen_bool(self.params.glitch_probability) {
            self.glitch_active = true;
            self.glitch_off_at = Some(at_sec + self.params.glitch_hold.as_secs_f64());
            log::debug!("[fx] glitch on");
            out_events.push(DirectorEvent::GlitchOn { at_sec });
        }
    }
}
