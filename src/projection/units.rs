use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::consts::{
    FOOT_IN_METER, INTERNATIONAL_NAUTICAL_MILE_IN_METER, KILOMETER_IN_METER, MILE_IN_METER,
    YARD_IN_METER,
};

/// The units the distance is reported in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthUnit {
    /// SI base unit
    Meter,
    /// 1000 meters
    Kilometer,
    /// International nautical mile, exactly 1852 meters
    NauticalMile,
    /// International statute mile, 1609.344 meters
    StatuteMile,
    /// International foot, 0.3048 meters
    Foot,
    /// International yard, 0.9144 meters
    Yard,
}

impl LengthUnit {
    /// All the supported units
    pub const ALL: [Self; 6] = [
        Self::Meter,
        Self::Kilometer,
        Self::NauticalMile,
        Self::StatuteMile,
        Self::Foot,
        Self::Yard,
    ];

    /// How many meters are in the unit
    pub const fn meters(self) -> f64 {
        match self {
            Self::Meter => 1.0,
            Self::Kilometer => KILOMETER_IN_METER,
            Self::NauticalMile => INTERNATIONAL_NAUTICAL_MILE_IN_METER,
            Self::StatuteMile => MILE_IN_METER,
            Self::Foot => FOOT_IN_METER,
            Self::Yard => YARD_IN_METER,
        }
    }

    /// Conventional abbreviation
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::NauticalMile => "NM",
            Self::StatuteMile => "mi",
            Self::Foot => "ft",
            Self::Yard => "yd",
        }
    }

    /// Express the distance given in meters in this unit
    pub fn from_meters(self, meters: f64) -> f64 {
        meters / self.meters()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
