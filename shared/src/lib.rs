pub mod constants;
pub mod error;
pub mod pointer;
pub mod shared_spin_wheel;
pub mod shared_ticker;

pub use error::ConfigError;
pub use pointer::{pointer_angle, Bounds, EmulatedMouseGuard, Point, PointerSource};
