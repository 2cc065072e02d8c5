use app_core::{Animatable, Channel, Easing};
use glam::Vec2;

#[test]
fn easing_endpoints_are_exact() {
    for easing in [Easing::Linear, Easing::QuadOut, Easing::CubicOut] {
        assert_eq!(easing.apply(0.0), 0.0, "{easing:?} must start at 0");
        assert_eq!(easing.apply(1.0), 1.0, "{easing:?} must end at 1");
    }
}

#[test]
fn easing_clamps_out_of_range_time() {
    for easing in [Easing::Linear, Easing::QuadOut, Easing::CubicOut] {
        assert_eq!(easing.apply(-0.5), 0.0);
        assert_eq!(easing.apply(1.5), 1.0);
    }
}

#[test]
fn easing_is_monotonic() {
    for easing in [Easing::Linear, Easing::QuadOut, Easing::CubicOut] {
        let mut prev = 0.0f32;
        for i in 1..=100 {
            let v = easing.apply(i as f32 / 100.0);
            assert!(v >= prev, "{easing:?} not monotonic at step {i}");
            prev = v;
        }
    }
}

#[test]
fn ease_out_curves_lead_linear() {
    // ease-out moves fast early, so it stays at or above linear
    for i in 0..=100 {
        let t = i as f32 / 100.0;
        assert!(Easing::QuadOut.apply(t) >= t - 1e-6);
        assert!(Easing::CubicOut.apply(t) >= Easing::QuadOut.apply(t) - 1e-6);
    }
}

#[test]
fn channel_completion_lands_exactly_on_target() {
    let mut ch = Channel::new(0.0f32);
    ch.retarget(0.0, 1.0, 1.0, Easing::QuadOut);
    assert!(ch.is_animating());

    let done = ch.advance(0.5);
    assert!(!done);
    assert!(ch.value() > 0.0 && ch.value() < 1.0);

    let done = ch.advance(2.0);
    assert!(done, "advancing past the end completes the tween");
    assert_eq!(ch.value(), 1.0);
    assert!(!ch.is_animating());

    // a completed channel stays put
    assert!(!ch.advance(3.0));
    assert_eq!(ch.value(), 1.0);
}

#[test]
fn retarget_replaces_the_in_flight_tween() {
    let mut ch = Channel::new(0.0f32);
    ch.retarget(0.0, 1.0, 1.0, Easing::QuadOut);
    ch.advance(0.5);
    assert_eq!(ch.value(), 0.75); // quad-out midpoint

    // latest request takes ownership, starting from the current value
    ch.retarget(0.5, -1.0, 1.0, Easing::Linear);
    ch.advance(1.0);
    assert_eq!(ch.value(), -0.125); // halfway from 0.75 toward -1

    let done = ch.advance(1.6);
    assert!(done);
    assert_eq!(ch.value(), -1.0);
}

#[test]
fn zero_duration_retarget_snaps() {
    let mut ch = Channel::new(1.0f32);
    ch.retarget(0.0, 5.0, 0.0, Easing::Linear);
    assert_eq!(ch.value(), 5.0);
    assert!(!ch.is_animating());
}

#[test]
fn set_cancels_the_tween() {
    let mut ch = Channel::new(0.0f32);
    ch.retarget(0.0, 1.0, 1.0, Easing::CubicOut);
    ch.set(2.0);
    assert!(!ch.is_animating());
    assert!(!ch.advance(10.0));
    assert_eq!(ch.value(), 2.0);
}

#[test]
fn vec2_channel_interpolates_both_axes() {
    let mut ch = Channel::new(Vec2::ZERO);
    ch.retarget(0.0, Vec2::new(1.0, -2.0), 1.0, Easing::Linear);
    ch.advance(0.5);
    assert_eq!(ch.value(), Vec2::new(0.5, -1.0));
    ch.advance(1.0);
    assert_eq!(ch.value(), Vec2::new(1.0, -2.0));
}

#[test]
fn lerp_endpoints_are_exact() {
    assert_eq!(<f32 as Animatable>::lerp(0.25, 0.75, 0.0), 0.25);
    assert_eq!(<f32 as Animatable>::lerp(0.25, 0.75, 1.0), 0.75);
    assert_eq!(<Vec2 as Animatable>::lerp(Vec2::ZERO, Vec2::ONE, 1.0), Vec2::ONE);
}
