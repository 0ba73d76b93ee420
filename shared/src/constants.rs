// Ticker speed multipliers
pub const REST_SPEED: f64 = 1.0;
pub const PRESS_SPEED: f64 = 2.0;
pub const MAX_DRAG_SPEED: f64 = 4.0;
pub const DRAG_DISTANCE_DIVISOR: f64 = 10.0;

// Hold-acceleration ramp
pub const HOLD_STEP: f64 = 0.2;
pub const HOLD_CEILING: f64 = 3.5;
pub const HOLD_DELAY_MS: u32 = 300;
pub const HOLD_INTERVAL_MS: u32 = 200;

// Per-frame smoothing toward the target multiplier
pub const SMOOTHING_FACTOR: f64 = 0.1;
pub const SNAP_THRESHOLD: f64 = 0.1;

pub const RELEASE_GRACE_MS: u32 = 1000;

// Width in px one marquee cycle travels; turns px/s into an animation duration
pub const LANE_TRACK_PX: f64 = 600.0;

// Wheel
pub const FULL_TURN_DEGREES: f64 = 360.0;
pub const POINTER_OFFSET_DEGREES: f64 = 270.0;
pub const FLICK_THRESHOLD: f64 = 5.0;
pub const FLICK_FACTOR: f64 = 0.1;

// Mouse events this soon after a touch are browser-emulated
pub const EMULATED_MOUSE_WINDOW_MS: f64 = 800.0;

pub const ROLL_REDIRECT_MS: u32 = 10_000;
