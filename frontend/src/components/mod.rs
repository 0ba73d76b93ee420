pub mod numbers_ticker;
pub mod spin_wheel;
pub mod ticker_handles;

pub use numbers_ticker::NumbersTicker;
pub use spin_wheel::SpinWheel;
