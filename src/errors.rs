//! Error types with rich diagnostics using miette
//!
//! Recoverable errors (unknown key, out-of-range value, odd surface
//! dimension) are raised before anything is written, so a caller that
//! sees one can keep using the pattern as it was. `Inconsistent` is the
//! exception: it reports a broken internal invariant and aborts whatever
//! update raised it.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Pattern Errors
// ============================================================================

/// Errors raised by measurement mutation and boundary updates
#[derive(Error, Diagnostic, Debug)]
pub enum PatternError {
    #[error("'{key}' key does not exist")]
    #[diagnostic(code(garmpa::pattern::unknown_key))]
    UnknownKey { key: String },

    #[error("'{value}' value is not within range for '{key}' key")]
    #[diagnostic(
        code(garmpa::pattern::out_of_range),
        help("valid values for '{key}' are {min}..={max}")
    )]
    OutOfRange {
        key: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{dimension} must be a multiple of 2, got {value}")]
    #[diagnostic(
        code(garmpa::pattern::odd_dimension),
        help("the outline is mirrored about the surface centre, so both dimensions must be even")
    )]
    OddDimension {
        dimension: &'static str,
        value: i64,
    },

    /// A measurement escaped its bounds, or lost them entirely.
    ///
    /// This is a defect in a boundary policy or a default table, not bad
    /// user input. Propagate it and stop; the pattern may be mid-update.
    #[error("measurement state is inconsistent: {detail}")]
    #[diagnostic(code(garmpa::pattern::inconsistent))]
    Inconsistent { detail: String },
}

// ============================================================================
// Unit Errors
// ============================================================================

/// Errors from unit alias parsing
#[derive(Error, Diagnostic, Debug)]
pub enum UnitError {
    #[error("unit '{unit}' is not defined")]
    #[diagnostic(
        code(garmpa::units::unknown_unit),
        help("known units are pixels, inches, and centimetres")
    )]
    Unknown { unit: String },
}
