//! The sleeve pattern: seven measurements and the drafted outline they
//! derive.
//!
//! The outline is drawn in a fixed reference frame taken from the
//! surface bounds (`width = max(shoulder)`, `height = max(arm)`), so the
//! diagram stays centred while individual measurements move.

use glam::dvec2;

use super::Pattern;
use crate::errors::PatternError;
use crate::measure::Measurements;
use crate::types::Polyline;

/// Default measurement values in pixels, at 72 px per inch: a 12 in arm,
/// 6 in shoulder and bicep, 2 in gap and variance, 5 in elbow, 4.5 in
/// wrist.
const DEFAULTS: [(&str, i64); 7] = [
    ("arm", 864),
    ("gap", 144),
    ("variance", 144),
    ("shoulder", 432),
    ("bicep", 432),
    ("elbow", 360),
    ("wrist", 324),
];

/// Floor shared by every measurement; below this the outline degenerates.
const MIN_VALUE: i64 = 5;

/// Keys whose upper bound follows the surface width.
const WIDTH_BOUND_KEYS: [&str; 5] = ["variance", "shoulder", "bicep", "elbow", "wrist"];

/// A drafted sleeve: centre fold, two arm seams, bicep and wrist lines,
/// and a Gaussian shoulder-cap curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Sleeve {
    measurements: Measurements,
    lines: Vec<Polyline>,
}

impl Sleeve {
    /// Build a sleeve sized to a drawing surface.
    ///
    /// Both dimensions must be even, and the default measurements must
    /// fit inside the bounds they imply; a surface smaller than the
    /// defaults fails with [`PatternError::Inconsistent`].
    pub fn new(max_width: i64, max_height: i64) -> Result<Sleeve, PatternError> {
        let mut measurements = Measurements::with_defaults(&DEFAULTS);
        for (key, _) in DEFAULTS {
            measurements.set_min(key, MIN_VALUE);
        }

        let mut sleeve = Sleeve {
            measurements,
            lines: Vec::new(),
        };
        sleeve.set_boundaries(Some(max_width), Some(max_height))?;
        Ok(sleeve)
    }

    /// Regenerate the outline from the current measurement state.
    fn create_lines(&self) -> Vec<Polyline> {
        let m = &self.measurements;
        let (Some(width), Some(height)) = (m.max("shoulder"), m.max("arm")) else {
            return Vec::new();
        };
        let (Some(arm), Some(bicep), Some(gap), Some(wrist)) =
            (m.get("arm"), m.get("bicep"), m.get("gap"), m.get("wrist"))
        else {
            return Vec::new();
        };
        let (Some(shoulder), Some(variance)) = (m.get("shoulder"), m.get("variance")) else {
            return Vec::new();
        };

        let (width, height) = (width as f64, height as f64);
        let (arm, bicep_w, gap_h, wrist_w) = (arm as f64, bicep as f64, gap as f64, wrist as f64);

        let top = (height - arm) / 2.0;
        let bottom = (height + arm) / 2.0;
        let bicep_y = top + gap_h;
        let centre_x = width / 2.0;

        // TODO: draft a forearm taper through the elbow measurement; it
        // is stored and editable but nothing draws it yet.
        let lines = vec![
            // Centre arm, the fold line the sleeve is mirrored about
            Polyline::segment(dvec2(centre_x, top), dvec2(centre_x, bottom)),
            // Left arm seam, bicep line down to the wrist
            Polyline::segment(
                dvec2((width - bicep_w) / 2.0, bicep_y),
                dvec2((width - wrist_w) / 2.0, bottom),
            ),
            // Right arm seam, mirrored about the centre
            Polyline::segment(
                dvec2((width + bicep_w) / 2.0, bicep_y),
                dvec2((width + wrist_w) / 2.0, bottom),
            ),
            shoulder_curve(shoulder, variance, gap_h, centre_x, bicep_y),
            // Bicep line
            Polyline::segment(
                dvec2((width - bicep_w) / 2.0, bicep_y),
                dvec2((width + bicep_w) / 2.0, bicep_y),
            ),
            // Wrist line
            Polyline::segment(
                dvec2((width - wrist_w) / 2.0, bottom),
                dvec2((width + wrist_w) / 2.0, bottom),
            ),
        ];

        crate::log::debug!(count = lines.len(), "outline regenerated");
        lines
    }
}

/// Sample the shoulder cap: a Gaussian bell rising `gap` pixels above the
/// bicep baseline, one vertex per pixel column across the shoulder.
///
/// The raw Gaussian is shifted so its sampled minimum is zero and then
/// normalized by the shifted maximum, which pins the curve's tails to the
/// baseline and its apex exactly `gap` above it regardless of `variance`.
fn shoulder_curve(shoulder: i64, variance: i64, gap: f64, centre_x: f64, baseline: f64) -> Polyline {
    let half = shoulder / 2;
    let variance = variance as f64;

    let gaussians: Vec<f64> = (-half..=half)
        .map(|sx| (-0.5 * (sx as f64 / variance).powi(2)).exp())
        .collect();
    let floor = gaussians.iter().copied().fold(f64::INFINITY, f64::min);
    let peak = gaussians.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = peak - floor;

    let points = (-half..=half)
        .zip(gaussians)
        .map(|(sx, g)| {
            let normalized = if span > 0.0 { (g - floor) / span } else { 0.0 };
            let y = (-gap * normalized + baseline).trunc();
            dvec2(sx as f64 + centre_x, y)
        })
        .collect();

    Polyline::new(points)
}

fn ensure_even(dimension: &'static str, value: i64) -> Result<(), PatternError> {
    if value % 2 != 0 {
        return Err(PatternError::OddDimension { dimension, value });
    }
    Ok(())
}

impl Pattern for Sleeve {
    fn get(&self, key: &str) -> Option<i64> {
        self.measurements.get(key)
    }

    fn min(&self, key: &str) -> Option<i64> {
        self.measurements.min(key)
    }

    fn max(&self, key: &str) -> Option<i64> {
        self.measurements.max(key)
    }

    fn items(&self) -> Box<dyn Iterator<Item = (&str, i64)> + '_> {
        Box::new(self.measurements.items())
    }

    fn set(&mut self, key: &str, value: i64) -> Result<(), PatternError> {
        // shoulder and bicep stay equal: the cap is drafted exactly as
        // wide as the upper arm it joins.
        if key == "shoulder" || key == "bicep" {
            self.measurements.check("shoulder", value)?;
            self.measurements.check("bicep", value)?;
            self.measurements.set("shoulder", value)?;
            self.measurements.set("bicep", value)?;
        } else {
            self.measurements.set(key, value)?;
        }

        crate::log::debug!(key, value, "measurement updated");
        self.lines = self.create_lines();
        Ok(())
    }

    fn set_boundaries(
        &mut self,
        max_width: Option<i64>,
        max_height: Option<i64>,
    ) -> Result<(), PatternError> {
        // Validate both dimensions before touching any bound, so a
        // rejected resize leaves the previous boundaries intact.
        if let Some(width) = max_width {
            ensure_even("width", width)?;
        }
        if let Some(height) = max_height {
            ensure_even("height", height)?;
        }

        if let Some(width) = max_width {
            for key in WIDTH_BOUND_KEYS {
                self.measurements.set_max(key, width);
            }
        }
        if let Some(height) = max_height {
            self.measurements.set_max("arm", height);
            // The gap climbs up from the bicep line, which itself sits a
            // full arm's length above the wrist; half the surface is as
            // far as it can go.
            self.measurements.set_max("gap", height / 2);
        }

        self.measurements.assert_consistent()?;
        crate::log::debug!(?max_width, ?max_height, "boundaries updated");
        self.lines = self.create_lines();
        Ok(())
    }

    fn lines(&self) -> &[Polyline] {
        &self.lines
    }
}
