//! Drafting core for editable sewing-pattern diagrams.
//!
//! A [`Pattern`] owns a set of named integer pixel measurements, each
//! constrained to a range derived from the drawing surface, and derives
//! from them the polylines a UI draws. Edits flow one way: convert the
//! user's unit to pixels, validate and store, regenerate the geometry,
//! redraw. A rejected edit changes nothing, so the diagram on screen is
//! always a valid pattern.
//!
//! [`Sleeve`] is the concrete garment; [`units::convert`] handles the
//! pixel/inch/centimetre boundary; [`panel`] packages both for control
//! panels.
//!
//! ```
//! use garmpa::{Pattern, Sleeve};
//!
//! let mut sleeve = Sleeve::new(540, 900)?;
//! sleeve.set("wrist", 288)?;
//! for line in sleeve.lines() {
//!     // hand the vertices (or line.flat()) to a canvas
//!     assert!(line.points().len() >= 2);
//! }
//! # Ok::<(), garmpa::PatternError>(())
//! ```

pub mod errors;
pub mod log;
pub mod measure;
pub mod panel;
pub mod pattern;
pub mod types;
pub mod units;

pub use errors::{PatternError, UnitError};
pub use pattern::{Pattern, Sleeve};
pub use types::Polyline;
pub use units::{Unit, convert};
