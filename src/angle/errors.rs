use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

/// Failure to read a position written in the Degree-Minute-Second notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDmsError {
    /// Nothing to parse
    EmptyString,
    /// The string does not look like `117°29′50.5″N`
    DmsNotation,
    /// Some part of the notation is not a valid number
    Float(ParseFloatError),
    /// The letter is not one of the `N`, `S`, `E` or `W`
    Direction(char),
}

enum_trivial_from_impl!(ParseFloatError => ParseDmsError:Float);

impl fmt::Display for ParseDmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse DMS position: ")?;
        match self {
            Self::EmptyString => write!(f, "empty string provided"),
            Self::DmsNotation => write!(f, "not a Degree-Minute-Second notation"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Direction(c) => write!(f, "unknown cardinal direction {c:?}"),
        }
    }
}

impl Error for ParseDmsError {}
