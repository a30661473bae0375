//! Garment pattern abstractions.
//!
//! A pattern owns a measurement store and a derived list of polylines,
//! regenerated after every successful mutation. [`Pattern`] is the seam
//! a control panel talks to; [`sleeve::Sleeve`] is the one concrete
//! variant so far.

pub mod sleeve;

pub use sleeve::Sleeve;

use crate::errors::PatternError;
use crate::types::Polyline;

/// Capability interface every garment variant implements.
///
/// Implementations keep `lines` a pure function of the measurement
/// state: the two mutators are the only write paths and both finish by
/// regenerating the geometry, so callers never observe stale lines.
pub trait Pattern {
    /// Current pixel value for `key`, or `None` for an undeclared key.
    fn get(&self, key: &str) -> Option<i64>;

    /// Lower bound for `key`, `None` when undeclared or not yet assigned.
    fn min(&self, key: &str) -> Option<i64>;

    /// Upper bound for `key`, `None` when undeclared or not yet assigned.
    fn max(&self, key: &str) -> Option<i64>;

    /// Declaration-order `(key, value)` pairs as of this call.
    fn items(&self) -> Box<dyn Iterator<Item = (&str, i64)> + '_>;

    /// Validated write of one measurement.
    ///
    /// On success the line geometry is regenerated; on error nothing
    /// changes, values and lines included.
    fn set(&mut self, key: &str, value: i64) -> Result<(), PatternError>;

    /// Recompute per-key bounds from new drawing-surface dimensions.
    ///
    /// `None` leaves the corresponding dimension's bounds untouched.
    /// Implementations decide which keys follow the width and which the
    /// height, must re-check every measurement against the new bounds,
    /// and regenerate the geometry before returning.
    fn set_boundaries(
        &mut self,
        max_width: Option<i64>,
        max_height: Option<i64>,
    ) -> Result<(), PatternError>;

    /// The derived polylines, in a stable drawing order.
    fn lines(&self) -> &[Polyline];
}
