//! Pixel/inch/centimetre conversion for the UI boundary.
//!
//! The model always stores pixels; a control panel converts to and from
//! whatever unit the user picked. Units are a closed enum rather than
//! ambient strings, so a typo'd alias fails once at the parse boundary
//! instead of drifting through call sites.

use std::fmt;
use std::str::FromStr;

use crate::errors::UnitError;

/// Screen resolution assumed by the drafting model.
pub const PX_PER_INCH: f64 = 72.0;

/// Exact metric definition of the inch.
pub const CM_PER_INCH: f64 = 2.54;

/// A display unit understood by the converter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    Pixel,
    Inch,
    Centimetre,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Pixel => write!(f, "pixels"),
            Unit::Inch => write!(f, "in"),
            Unit::Centimetre => write!(f, "cm"),
        }
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    /// Exact, case-sensitive alias matching. Anything outside the three
    /// alias sets is an [`UnitError::Unknown`]: unit strings come from
    /// developer-controlled widget configuration, so a miss is a defect
    /// to surface, not user input to forgive.
    fn from_str(s: &str) -> Result<Unit, UnitError> {
        match s {
            "pixels" | "pixel" | "pix" | "p" => Ok(Unit::Pixel),
            "inches" | "inch" | "in" => Ok(Unit::Inch),
            "centimetres" | "centimeters" | "cm" => Ok(Unit::Centimetre),
            _ => Err(UnitError::Unknown { unit: s.to_string() }),
        }
    }
}

/// Convert `value` between display units.
///
/// Pixel results are whole numbers, truncated toward zero to match the
/// integer pixel store. Inch and centimetre results are rounded to one
/// decimal place with ties away from zero (`f64::round` semantics).
///
/// Converting to a coarse unit and back is lossy by design: a pixel
/// count that is not a multiple of 72 will not survive a trip through
/// inches, because the display value only carries one decimal.
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Pixel, Unit::Pixel) => value.trunc(),
        (Unit::Pixel, Unit::Inch) => round1(value / PX_PER_INCH),
        (Unit::Pixel, Unit::Centimetre) => round1(value * CM_PER_INCH / PX_PER_INCH),
        (Unit::Inch, Unit::Pixel) => (value * PX_PER_INCH).trunc(),
        (Unit::Inch, Unit::Inch) => round1(value),
        (Unit::Inch, Unit::Centimetre) => round1(value * CM_PER_INCH),
        (Unit::Centimetre, Unit::Pixel) => (value * PX_PER_INCH / CM_PER_INCH).trunc(),
        (Unit::Centimetre, Unit::Inch) => round1(value / CM_PER_INCH),
        (Unit::Centimetre, Unit::Centimetre) => round1(value),
    }
}

/// Convert a display value into the integer pixels the model stores.
pub fn to_pixels(value: f64, from: Unit) -> i64 {
    convert(value, from, Unit::Pixel) as i64
}

/// Round to one decimal place, ties away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
