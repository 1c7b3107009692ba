use std::{error::Error, fmt};

/// The reason why the distance and heading cannot be calculated
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// Target position is exactly the same as the source one,
    /// so there is no direction to head to
    SamePosition,
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::SamePosition => "target position equals source position",
        };

        write!(f, "{msg}")
    }
}

impl Error for ProjectionError {}
