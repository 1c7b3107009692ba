//! Positions in the Degree-Minute-Second notation
//! and their conversion into the signed decimal degrees.

use std::{convert::Infallible, fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::StripChar;

use super::{
    consts::{ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE, SECONDS_IN_MINUTE},
    errors::ParseDmsError,
};

use self::CardinalDirection::{East, North, South, West};

/// One of the four main points of the compass
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CardinalDirection {
    /// Northern latitude, positive
    North,
    /// Southern latitude, negative
    South,
    /// Eastern longitude, positive
    East,
    /// Western longitude, negative
    West,
}

impl CardinalDirection {
    /// Recognize the full English name of the direction (`"North"`, `"South"`, `"East"` or `"West"`).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "North" => Some(North),
            "South" => Some(South),
            "East" => Some(East),
            "West" => Some(West),
            _ => None,
        }
    }

    /// The full English name of the direction
    pub const fn label(self) -> &'static str {
        match self {
            North => "North",
            South => "South",
            East => "East",
            West => "West",
        }
    }

    /// The southern and western positions get the minus sign in decimal degrees
    pub const fn is_negative(self) -> bool {
        matches!(self, South | West)
    }

    const fn letter(self) -> char {
        match self {
            North => 'N',
            South => 'S',
            East => 'E',
            West => 'W',
        }
    }
}

impl TryFrom<char> for CardinalDirection {
    type Error = ParseDmsError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(North),
            'S' => Ok(South),
            'E' => Ok(East),
            'W' => Ok(West),
            _ => Err(ParseDmsError::Direction(c)),
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.label())
        } else {
            write!(f, "{}", self.letter())
        }
    }
}

/// The latitude or longitude given by unsigned degrees, minutes and seconds
/// and the cardinal direction defining its sign.
///
/// The parts are not checked, so the minutes (or seconds) can have a fractional part
/// and even exceed the 60.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DmsPosition {
    /// Missing direction (or unrecognized label) does not change the sign
    pub direction: Option<CardinalDirection>,
    /// Whole (or fractional) degrees
    pub degrees: f64,
    /// Arc minutes
    pub minutes: f64,
    /// Arc seconds
    pub seconds: f64,
}

impl DmsPosition {
    /// Construct a position in the given direction
    pub const fn new(direction: CardinalDirection, degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            direction: Some(direction),
            degrees,
            minutes,
            seconds,
        }
    }

    /// Construct a position using the full name of the direction (e.g. `"South"`).
    ///
    /// Any unknown label is silently accepted as a positive direction.
    pub fn with_label(label: &str, degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            direction: CardinalDirection::from_label(label),
            degrees,
            minutes,
            seconds,
        }
    }

    /// Signed decimal degrees: negative for the southern and western positions.
    ///
    /// ```
    /// # use geodistance::{DmsPosition, CardinalDirection::West};
    /// let lon = DmsPosition::new(West, 70.0, 30.0, 0.0);
    /// assert_eq!(lon.to_decimal_degrees(), -70.5);
    /// ```
    pub fn to_decimal_degrees(self) -> f64 {
        let min_in_deg = f64::from(MINUTES_IN_DEGREE);
        let sec_in_deg = f64::from(u16::from(MINUTES_IN_DEGREE) * u16::from(SECONDS_IN_MINUTE));

        let decimal = self.degrees + self.minutes / min_in_deg + self.seconds / sec_in_deg;
        match self.direction {
            Some(direction) if direction.is_negative() => -decimal,
            _ => decimal,
        }
    }

    fn parse_dms(s: &str, direction: Option<CardinalDirection>) -> Result<Self, ParseDmsError> {
        let capture = RE_UNICODE
            .captures(s)
            .or_else(|| RE_ASCII.captures(s))
            .ok_or(ParseDmsError::DmsNotation)?;

        let degrees = capture
            .name("deg")
            .ok_or(ParseDmsError::DmsNotation)?
            .as_str()
            .parse()?;
        let minutes = capture.name("min").map_or("0", |m| m.as_str()).parse()?;
        let seconds = capture.name("sec").map_or("0", |m| m.as_str()).parse()?;

        Ok(Self {
            direction,
            degrees,
            minutes,
            seconds,
        })
    }
}

/// Convert the position to the decimal degrees.
///
/// The conversion never fails, the `Result` is only here to mirror
/// the signature of the [projection](crate::spherical_earth_projection).
pub fn convert_dms_to_decimal_degrees(position: &DmsPosition) -> Result<f64, Infallible> {
    Ok(position.to_decimal_degrees())
}

/// Construct regular expression to parse Degree-Minute-Second representation of a position
fn parse_dms_re(is_ascii: bool) -> String {
    let (deg, min, sec) = if is_ascii {
        ("\\*?", '\'', '"')
    } else {
        ("°", ARC_MINUTE_SIGN, ARC_SECOND_SIGN)
    };

    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<deg>\d{{1,3}}(?:\.\d+)?)                    # mandatory degree VALUE, can be fractional
        {deg}                                           # degree sign (can be mandatory or optional)
        (?:\x20?                                        # minutes and seconds group optionally started with the space
            (?P<min>[0-5]?\d(?:\.\d+)?)                     # minutes VALUE [0..60)
            {min}                                           # arcminute sign
            (?:\x20?                                        # seconds group optionally started with the space
                (?P<sec>[0-5]?\d(?:\.\d+)?)                     # seconds VALUE [0..60)
                {sec}                                           # arcsecond sign
            )?                                              # seconds are optional
        )?                                              # minutes and seconds are optional
        $                                           # match the whole line till the end
        "#
    )
}

lazy_static! {
    static ref RE_UNICODE: Regex = Regex::new(&parse_dms_re(false)).expect("Unicode regex is valid");
    static ref RE_ASCII: Regex = Regex::new(&parse_dms_re(true)).expect("ASCII regex is valid");
}

impl FromStr for DmsPosition {
    type Err = ParseDmsError;

    /// The hemisphere letter can be either at the end or at the beginning
    /// and can be separated from the angle with a single space:
    /// `117°29′50.5″N`, `N 117°29′50.5″`, `117*29'50.5" N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rest, last) = s.split_last().ok_or(ParseDmsError::EmptyString)?;
        if last.is_ascii_alphabetic() {
            let direction = CardinalDirection::try_from(last)?;
            // single space is allowed
            let rest = rest.as_str().strip_suffix_char(' ').unwrap_or(rest);
            return Self::parse_dms(&rest, Some(direction));
        }

        let (first, rest) = s.split_first().ok_or(ParseDmsError::EmptyString)?;
        if first.is_ascii_alphabetic() {
            let direction = CardinalDirection::try_from(first)?;
            let rest = rest.as_str().strip_prefix_char(' ').unwrap_or(rest);
            return Self::parse_dms(&rest, Some(direction));
        }

        Self::parse_dms(s, None)
    }
}

impl fmt::Display for DmsPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.degrees, DEGREE_SIGN)?;

        if self.minutes != 0.0 || self.seconds != 0.0 {
            write!(f, "{}{}", self.minutes, ARC_MINUTE_SIGN)?;
        }

        if self.seconds != 0.0 {
            write!(f, "{}{}", self.seconds, ARC_SECOND_SIGN)?;
        }

        if let Some(direction) = self.direction {
            write!(f, "{direction}")?;
        }

        Ok(())
    }
}
