/// Mean radius of the earth taken as a sphere
pub(crate) const EARTH_RADIUS_IN_METER: f64 = 6_371_009.0;

pub(crate) const KILOMETER_IN_METER: f64 = 1000.0;
pub(crate) const INTERNATIONAL_NAUTICAL_MILE_IN_METER: f64 = 1852.0;
pub(crate) const MILE_IN_METER: f64 = 1609.344;
pub(crate) const FOOT_IN_METER: f64 = 0.3048;
pub(crate) const YARD_IN_METER: f64 = 0.9144;
