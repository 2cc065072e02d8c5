// Shared effect and camera tuning constants used by the director and the
// native frontend.

// Chromatic aberration (RGB shift)
pub const SHIFT_INITIAL: f32 = 0.0020; // uniform value before the first burst
pub const SHIFT_BASELINE: f32 = 0.0025; // resting amount between bursts
pub const SHIFT_TARGET_MAX: f32 = 0.01; // burst targets are drawn from [0, this)
pub const SHIFT_ATTACK_SEC: f32 = 0.2; // ramp up to the burst target
pub const SHIFT_RELEASE_SEC: f32 = 0.1; // settle back to baseline

// Glitch trigger
pub const GLITCH_PROBABILITY: f64 = 0.05; // chance per burst
pub const GLITCH_HOLD_MS: u64 = 200; // how long the flag stays up

// Burst scheduling (randomized, self-rearming)
pub const BURST_DELAY_MIN_MS: u64 = 1000;
pub const BURST_DELAY_MAX_MS: u64 = 3000; // exclusive

// Pointer follow
pub const ORIENT_TWEEN_SEC: f32 = 0.5;

// Camera
pub const CAMERA_FOV_DEG: f32 = 30.0;
pub const CAMERA_Z_INITIAL: f32 = 3.0; // standoff before the model arrives
pub const CAMERA_Z_VIEW: f32 = 6.0; // pulled back once the model is in
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
