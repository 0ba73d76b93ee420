pub mod results;
pub mod roll;
