//! Distance and heading between two positions on a spherical earth projected to a flat plane.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    angle::{
        degrees_to_radians,
        dms::CardinalDirection::{self, East, North, South, West},
        normalize_compass_heading, radians_to_degrees,
    },
    utils::round_to_places,
};

mod consts;
mod errors;
mod units;

pub use errors::ProjectionError;
pub use units::LengthUnit;

use consts::EARTH_RADIUS_IN_METER;

/// Source and target positions in signed decimal degrees
/// (northern latitudes and eastern longitudes are positive).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPosition {
    /// Latitude of the current position
    pub src_latitude: f64,
    /// Longitude of the current position
    pub src_longitude: f64,
    /// Latitude of the position to head to
    pub tgt_latitude: f64,
    /// Longitude of the position to head to
    pub tgt_longitude: f64,
    /// Number of decimal places to keep in the results
    #[cfg_attr(feature = "serde", serde(default))]
    pub precision: u8,
}

impl GeoPosition {
    /// Construct the pair of positions with the results rounded to the whole numbers
    pub const fn new(
        src_latitude: f64,
        src_longitude: f64,
        tgt_latitude: f64,
        tgt_longitude: f64,
    ) -> Self {
        Self {
            src_latitude,
            src_longitude,
            tgt_latitude,
            tgt_longitude,
            precision: 0,
        }
    }

    /// Keep the given number of decimal places in the results
    pub const fn with_precision(self, precision: u8) -> Self {
        Self { precision, ..self }
    }

    /// Calculate the distance and heading from the source position to the target one.
    ///
    /// # Errors
    /// See [`spherical_earth_projection`].
    pub fn project(&self) -> Result<HeadingResult, ProjectionError> {
        spherical_earth_projection(self)
    }
}

/// Distance in various units and the compass heading to the target position
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct HeadingResult {
    /// Distance corrected for the convergence of the meridians
    pub distance_meter: f64,
    /// Kilometers
    pub distance_kilometer: f64,
    /// Direction to the target measured clockwise from the north, `[0, 360)`
    pub heading_degrees: f64,
    /// Distance with longitude and latitude differences treated as equal in length
    pub uncorrected_distance_meter: f64,
    /// International nautical mile
    pub distance_nautical_mile: f64,
    /// Statute mile
    pub distance_mile: f64,
    /// Feet
    pub distance_foot: f64,
    /// Yards
    pub distance_yard: f64,
    /// Target latitude is greater than the source one
    pub north_bound: bool,
    /// Target latitude is less than the source one
    pub south_bound: bool,
    /// Target longitude is greater than the source one
    pub east_bound: bool,
    /// Target longitude is less than the source one
    pub west_bound: bool,
}

impl HeadingResult {
    /// The corrected distance in the given units
    pub const fn distance(&self, unit: LengthUnit) -> f64 {
        match unit {
            LengthUnit::Meter => self.distance_meter,
            LengthUnit::Kilometer => self.distance_kilometer,
            LengthUnit::NauticalMile => self.distance_nautical_mile,
            LengthUnit::StatuteMile => self.distance_mile,
            LengthUnit::Foot => self.distance_foot,
            LengthUnit::Yard => self.distance_yard,
        }
    }

    /// The general directions of the movement:
    /// the meridional one (if any) goes first, then the zonal one (if any).
    pub fn bounds(&self) -> Vec<CardinalDirection> {
        [
            (self.north_bound, North),
            (self.south_bound, South),
            (self.east_bound, East),
            (self.west_bound, West),
        ]
        .into_iter()
        .filter_map(|(is_bound, direction)| is_bound.then_some(direction))
        .collect()
    }
}

/// Use a spherical earth projected to a flat plane to calculate
/// the distance and heading from the source position to the target one.
///
/// The longitude difference is scaled by the cosine of the mean latitude.
/// Every distance is rounded to the requested precision,
/// the units other than meters are derived from the already rounded meters.
///
/// Neither the poles nor the 180th meridian are handled specially.
///
/// ```
/// # use geodistance::{spherical_earth_projection, GeoPosition};
/// let geo = GeoPosition::new(1.0, 1.0, -1.0, -1.0);
/// let heading = spherical_earth_projection(&geo).unwrap();
/// assert_eq!(heading.distance_meter, 314_507.0);
/// assert_eq!(heading.heading_degrees, 225.0);
/// assert!(heading.south_bound && heading.west_bound);
/// ```
///
/// # Errors
/// When the target position is exactly the same as the source one,
/// [`ProjectionError::SamePosition`] is returned.
#[allow(clippy::float_cmp)]
pub fn spherical_earth_projection(geo: &GeoPosition) -> Result<HeadingResult, ProjectionError> {
    let precision = geo.precision;

    let src_lat = degrees_to_radians(geo.src_latitude);
    let tgt_lat = degrees_to_radians(geo.tgt_latitude);
    let ad_lat = (tgt_lat - src_lat).abs();

    let src_lon = degrees_to_radians(geo.src_longitude);
    let tgt_lon = degrees_to_radians(geo.tgt_longitude);
    let ad_lon = (tgt_lon - src_lon).abs();

    // moving over the poles is ignored
    let north_bound = geo.tgt_latitude > geo.src_latitude;
    let south_bound = geo.tgt_latitude < geo.src_latitude;
    // moving over the 180th meridian is ignored
    let east_bound = geo.tgt_longitude > geo.src_longitude;
    let west_bound = geo.tgt_longitude < geo.src_longitude;

    if src_lat == tgt_lat && src_lon == tgt_lon {
        debug!(
            lat = geo.src_latitude,
            lon = geo.src_longitude,
            "Cannot head to the same position"
        );
        return Err(ProjectionError::SamePosition);
    }

    let uncorrected = EARTH_RADIUS_IN_METER * (ad_lat * ad_lat + ad_lon * ad_lon).sqrt();

    let mean_lat = (src_lat + tgt_lat) / 2.0;
    let correction = mean_lat.cos();
    let ad_lon_corrected = correction * ad_lon;
    let distance =
        EARTH_RADIUS_IN_METER * (ad_lat * ad_lat + ad_lon_corrected * ad_lon_corrected).sqrt();

    let d_lat = tgt_lat - src_lat;
    let d_lon = tgt_lon - src_lon;
    let bearing = radians_to_degrees(d_lon.atan2(d_lat));
    trace!(
        ad_lat,
        ad_lon,
        correction,
        distance,
        bearing,
        "Projected to a flat plane"
    );

    let distance_meter = round_to_places(distance, precision);
    let in_units = |unit: LengthUnit| round_to_places(unit.from_meters(distance_meter), precision);

    Ok(HeadingResult {
        distance_meter,
        distance_kilometer: in_units(LengthUnit::Kilometer),
        heading_degrees: round_to_places(normalize_compass_heading(bearing), precision),
        uncorrected_distance_meter: round_to_places(uncorrected, precision),
        distance_nautical_mile: in_units(LengthUnit::NauticalMile),
        distance_mile: in_units(LengthUnit::StatuteMile),
        distance_foot: in_units(LengthUnit::Foot),
        distance_yard: in_units(LengthUnit::Yard),
        north_bound,
        south_bound,
        east_bound,
        west_bound,
    })
}

#[cfg(test)]
mod tests {
    use crate::angle::dms::DmsPosition;

    use super::*;

    #[test]
    fn north_east() {
        let geo = GeoPosition::new(60.0, 19.0, 61.0, 20.0);
        let expected = HeadingResult {
            distance_meter: 123_945.0,
            distance_kilometer: 124.0,
            heading_degrees: 45.0,
            uncorrected_distance_meter: 157_254.0,
            distance_nautical_mile: 67.0,
            distance_mile: 77.0,
            distance_foot: 406_644.0,
            distance_yard: 135_548.0,
            north_bound: true,
            south_bound: false,
            east_bound: true,
            west_bound: false,
        };

        assert_eq!(spherical_earth_projection(&geo).unwrap(), expected);
    }

    #[test]
    fn south_west_over_the_origin() {
        let geo = GeoPosition::new(1.0, 1.0, -1.0, -1.0);
        let expected = HeadingResult {
            distance_meter: 314_507.0,
            distance_kilometer: 315.0,
            heading_degrees: 225.0,
            uncorrected_distance_meter: 314_507.0,
            distance_nautical_mile: 170.0,
            distance_mile: 195.0,
            distance_foot: 1_031_847.0,
            distance_yard: 343_949.0,
            north_bound: false,
            south_bound: true,
            east_bound: false,
            west_bound: true,
        };

        assert_eq!(geo.project().unwrap(), expected);
    }

    #[test]
    fn same_position_is_error() {
        let geo = GeoPosition::new(10.0, 15.0, 10.0, 15.0);
        let err = spherical_earth_projection(&geo).unwrap_err();
        assert_eq!(err, ProjectionError::SamePosition);
        assert_eq!(err.to_string(), "target position equals source position");
    }

    #[test]
    fn precision_is_ignored_for_same_position() {
        let geo = GeoPosition::new(-33.45, -70.66, -33.45, -70.66).with_precision(4);
        assert!(geo.project().is_err());
    }

    #[test]
    fn two_decimals() {
        let lat = DmsPosition::with_label("North", 59.0, 18.1, 0.0);
        let lon = DmsPosition::with_label("East", 18.0, 36.9, 0.0);
        let geo = GeoPosition::new(
            60.567,
            19.011,
            lat.to_decimal_degrees(),
            lon.to_decimal_degrees(),
        )
        .with_precision(2);

        let heading = geo.project().unwrap();
        assert_eq!(heading.distance_meter, 142_417.78);
        assert_eq!(heading.distance_kilometer, 142.42);
        assert_eq!(heading.uncorrected_distance_meter, 147_428.26);
        assert_eq!(heading.distance_nautical_mile, 76.9);
        assert_eq!(heading.distance_mile, 88.49);
        assert_eq!(heading.distance_foot, 467_249.93);
        assert_eq!(heading.distance_yard, 155_749.98);
        assert_eq!(heading.heading_degrees, 197.38);
        assert_eq!(heading.bounds(), [South, West]);
    }

    #[test]
    fn along_the_equator() {
        let heading = GeoPosition::new(0.0, 0.0, 0.0, 1.0).project().unwrap();
        assert_eq!(heading.distance_meter, 111_195.0);
        assert_eq!(heading.uncorrected_distance_meter, 111_195.0);
        assert_eq!(heading.heading_degrees, 90.0);
        assert_eq!(heading.bounds(), [East]);
    }

    #[test]
    fn along_the_meridian() {
        let heading = GeoPosition::new(0.0, 0.0, 1.0, 0.0).project().unwrap();
        assert_eq!(heading.distance_meter, 111_195.0);
        assert_eq!(heading.heading_degrees, 0.0);
        assert_eq!(heading.bounds(), [North]);
    }

    #[test]
    fn parallel_is_shorter_than_uncorrected() {
        let heading = GeoPosition::new(10.0, 10.0, 10.0, 9.0).project().unwrap();
        assert_eq!(heading.distance_meter, 109_506.0);
        assert_eq!(heading.distance_kilometer, 110.0);
        assert_eq!(heading.uncorrected_distance_meter, 111_195.0);
        assert_eq!(heading.heading_degrees, 270.0);
        assert!(!heading.north_bound && !heading.south_bound);
        assert_eq!(heading.bounds(), [West]);
    }

    #[test]
    fn units_are_derived_from_rounded_meters() {
        let heading = GeoPosition::new(48.8566, 2.3522, 51.5074, -0.1278)
            .with_precision(3)
            .project()
            .unwrap();

        for unit in LengthUnit::ALL {
            let expected = round_to_places(heading.distance_meter / unit.meters(), 3);
            assert_eq!(heading.distance(unit), expected, "{unit}");
        }
    }

    #[test]
    fn heading_is_compass_direction() {
        let targets = [
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (-1.0, 1.0),
            (-1.0, 0.0),
            (-1.0, -1.0),
            (0.0, -1.0),
            (1.0, -1.0),
        ];

        let headings: Vec<_> = targets
            .iter()
            .map(|&(lat, lon)| {
                GeoPosition::new(0.0, 0.0, lat, lon)
                    .project()
                    .unwrap()
                    .heading_degrees
            })
            .collect();
        assert_eq!(
            headings,
            [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0]
        );
    }

    #[test]
    fn distance_grows_with_latitude_difference() {
        let mut previous = 0.0;
        for step in 1..=50 {
            let tgt_lat = 40.0 + f64::from(step) * 0.1;
            let heading = GeoPosition::new(40.0, 5.0, tgt_lat, 5.5)
                .with_precision(3)
                .project()
                .unwrap();
            assert!(heading.distance_meter >= previous, "at {tgt_lat}");
            previous = heading.distance_meter;
        }
    }

    #[test]
    fn distance_grows_with_longitude_difference() {
        let mut previous = 0.0;
        for step in 1..=50 {
            let tgt_lon = -3.0 - f64::from(step) * 0.1;
            let heading = GeoPosition::new(-20.0, -3.0, -20.0, tgt_lon)
                .project()
                .unwrap();
            assert!(heading.distance_meter >= previous, "at {tgt_lon}");
            previous = heading.distance_meter;
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_default_precision() {
        let geo: GeoPosition = serde_json::from_str(
            r#"{"src_latitude":60.0,"src_longitude":19.0,"tgt_latitude":61.0,"tgt_longitude":20.0}"#,
        )
        .unwrap();
        assert_eq!(geo, GeoPosition::new(60.0, 19.0, 61.0, 20.0));

        let json = serde_json::to_value(geo.project().unwrap()).unwrap();
        assert_eq!(json["distance_meter"], 123_945.0);
        assert_eq!(json["north_bound"], true);
    }
}
