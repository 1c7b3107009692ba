//! Distance and compass heading between two geographic positions.
//!
//! The earth is treated as a sphere locally projected onto a flat plane
//! (equirectangular projection): the longitude difference is scaled by the cosine
//! of the mean latitude and the distance is taken by Pythagoras.
//!
//! ```
//! use geodistance::{GeoPosition, LengthUnit};
//!
//! let geo = GeoPosition::new(60.0, 19.0, 61.0, 20.0);
//! let heading = geo.project().unwrap();
//!
//! assert_eq!(heading.distance(LengthUnit::Meter), 123_945.0);
//! assert_eq!(heading.distance(LengthUnit::Kilometer), 124.0);
//! assert_eq!(heading.heading_degrees, 45.0);
//! assert!(heading.north_bound && heading.east_bound);
//! ```
//!
//! Note that the longitude is singular at the poles, so the results near them
//! can be inaccurate or completely wrong.
//! The discontinuity at the 180th meridian is not taken into account either.

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_crate_level_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    degrees_to_radians,
    dms::{convert_dms_to_decimal_degrees, CardinalDirection, DmsPosition},
    normalize_compass_heading, radians_to_degrees, ParseDmsError,
};
pub use projection::{
    spherical_earth_projection, GeoPosition, HeadingResult, LengthUnit, ProjectionError,
};
pub use utils::round_to_places;

mod angle;
mod projection;
mod utils;
