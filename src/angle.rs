//! Floating point angles: conversion between degrees and radians
//! and the compass representation of a bearing.

use num_traits::{Float, FloatConst};

mod consts;
pub mod dms;
mod errors;

pub use errors::ParseDmsError;

use consts::{FULL_TURN_DEG, HALF_TURN_DEG};

/// Convert the angle from degrees to radians.
///
/// Computed as `degrees * π / 180` rather than with a single precomputed
/// factor, so the whole multiples of the right angle convert exactly:
///
/// ```
/// # use geodistance::degrees_to_radians;
/// assert_eq!(degrees_to_radians(180.0), std::f64::consts::PI);
/// ```
pub fn degrees_to_radians<F>(degrees: F) -> F
where
    F: Float + FloatConst + From<u16>,
{
    let straight: F = HALF_TURN_DEG.into();
    degrees * F::PI() / straight
}

/// Convert the angle from radians to degrees.
pub fn radians_to_degrees<F>(radians: F) -> F
where
    F: Float + FloatConst + From<u16>,
{
    let straight: F = HALF_TURN_DEG.into();
    radians * straight / F::PI()
}

/// Represent a signed bearing (as returned by the `atan2`)
/// as a compass heading measured clockwise from the north in the range `[0, 360)`.
///
/// The bearing is expected to be in the range `(-360, 360)`,
/// the full turn is added only once.
pub fn normalize_compass_heading<F>(degrees: F) -> F
where
    F: Float + From<u16>,
{
    if degrees < F::zero() {
        let complete: F = FULL_TURN_DEG.into();
        degrees + complete
    } else {
        degrees
    }
}
