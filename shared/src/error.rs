use std::fmt;

/// Rejected widget configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NoLanes,
    EmptyLane(usize),
    InvalidLaneSpeed { lane: usize, speed: f64 },
    InvalidSmoothing(f64),
    InvalidSnapThreshold(f64),
    InvalidSpeedBounds,
    DuplicateSectionId(u32),
    InvalidRotation,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLanes => write!(f, "Ticker needs at least one lane"),
            Self::EmptyLane(lane) => write!(f, "Lane {} has no items", lane),
            Self::InvalidLaneSpeed { lane, speed } => {
                write!(f, "Lane {} has invalid base speed {}", lane, speed)
            }
            Self::InvalidSmoothing(factor) => {
                write!(f, "Smoothing factor {} must be in (0, 1]", factor)
            }
            Self::InvalidSnapThreshold(threshold) => {
                write!(f, "Snap threshold {} must be positive", threshold)
            }
            Self::InvalidSpeedBounds => write!(f, "Speed multipliers must be positive and ordered"),
            Self::DuplicateSectionId(id) => write!(f, "Section id {} appears more than once", id),
            Self::InvalidRotation => write!(f, "Initial rotation must be a finite number"),
        }
    }
}

impl std::error::Error for ConfigError {}
