//! Control-panel arithmetic: what a UI shows and how its edits come
//! back.
//!
//! The widgets themselves belong to the embedding toolkit; this module
//! owns the unit conversion on both sides of them. Sliders are populated
//! from [`rows`], and every edit funnels back through [`apply_scale`] or
//! [`apply_resize`] so the model only ever sees validated pixels.

use crate::errors::PatternError;
use crate::pattern::Pattern;
use crate::units::{self, Unit};

/// One measurement slider's worth of display data, converted into
/// `unit`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleRow {
    pub key: String,
    /// Title-cased key, ready to label a widget.
    pub label: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub unit: Unit,
}

/// Display rows for every fully-bounded measurement, in declaration
/// order.
///
/// Rows are plain data and never live-update; call again after a unit
/// switch, an applied edit, or a boundary change.
pub fn rows(pattern: &dyn Pattern, unit: Unit) -> Vec<ScaleRow> {
    pattern
        .items()
        .filter_map(|(key, value)| {
            let min = pattern.min(key)?;
            let max = pattern.max(key)?;
            Some(ScaleRow {
                key: key.to_string(),
                label: title_case(key),
                value: units::convert(value as f64, Unit::Pixel, unit),
                min: units::convert(min as f64, Unit::Pixel, unit),
                max: units::convert(max as f64, Unit::Pixel, unit),
                unit,
            })
        })
        .collect()
}

/// Apply a slider edit expressed in `unit`.
///
/// Returns the pixel value actually stored, for echoing back into the
/// widget.
pub fn apply_scale(
    pattern: &mut dyn Pattern,
    key: &str,
    value: f64,
    unit: Unit,
) -> Result<i64, PatternError> {
    let px = units::to_pixels(value, unit);
    pattern.set(key, px)?;
    Ok(px)
}

/// Apply a drawing-surface resize expressed in `unit`.
pub fn apply_resize(
    pattern: &mut dyn Pattern,
    width: Option<f64>,
    height: Option<f64>,
    unit: Unit,
) -> Result<(), PatternError> {
    pattern.set_boundaries(
        width.map(|w| units::to_pixels(w, unit)),
        height.map(|h| units::to_pixels(h, unit)),
    )
}

/// Capitalize the key for use as a widget label.
fn title_case(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Sleeve;

    fn sleeve() -> Sleeve {
        Sleeve::new(540, 900).unwrap()
    }

    #[test]
    fn rows_convert_values_and_bounds() {
        let sleeve = sleeve();
        let rows = rows(&sleeve, Unit::Inch);
        assert_eq!(rows.len(), 7);

        let arm = &rows[0];
        assert_eq!(arm.key, "arm");
        assert_eq!(arm.label, "Arm");
        assert_eq!(arm.value, 12.0);
        assert_eq!(arm.min, 0.1);
        assert_eq!(arm.max, 12.5);
        assert_eq!(arm.unit, Unit::Inch);
    }

    #[test]
    fn rows_follow_the_requested_unit() {
        let sleeve = sleeve();
        let in_cm = rows(&sleeve, Unit::Centimetre);
        // gap is 144px = 2in = 5.08cm, displayed as 5.1
        let gap = in_cm.iter().find(|row| row.key == "gap").unwrap();
        assert_eq!(gap.value, 5.1);

        let in_px = rows(&sleeve, Unit::Pixel);
        let gap = in_px.iter().find(|row| row.key == "gap").unwrap();
        assert_eq!(gap.value, 144.0);
        assert_eq!(gap.max, 450.0);
    }

    #[test]
    fn apply_scale_converts_then_sets() {
        let mut sleeve = sleeve();
        let px = apply_scale(&mut sleeve, "wrist", 4.0, Unit::Inch).unwrap();
        assert_eq!(px, 288);
        assert_eq!(sleeve.get("wrist"), Some(288));
    }

    #[test]
    fn apply_scale_propagates_rejections() {
        let mut sleeve = sleeve();
        // 20in is 1440px, far past the 540px width bound
        let err = apply_scale(&mut sleeve, "wrist", 20.0, Unit::Inch).unwrap_err();
        assert!(matches!(err, PatternError::OutOfRange { .. }));
        assert_eq!(sleeve.get("wrist"), Some(324));
    }

    #[test]
    fn apply_resize_converts_both_dimensions() {
        let mut sleeve = sleeve();
        apply_resize(&mut sleeve, Some(8.0), Some(14.0), Unit::Inch).unwrap();
        assert_eq!(sleeve.max("shoulder"), Some(576));
        assert_eq!(sleeve.max("arm"), Some(1008));
        assert_eq!(sleeve.max("gap"), Some(504));
    }

    #[test]
    fn apply_resize_rejects_an_odd_pixel_result() {
        let mut sleeve = sleeve();
        // 4.3in truncates to 309px
        let err = apply_resize(&mut sleeve, Some(4.3), None, Unit::Inch).unwrap_err();
        assert!(matches!(err, PatternError::OddDimension { value: 309, .. }));
        assert_eq!(sleeve.max("shoulder"), Some(540));
    }

    #[test]
    fn title_case_capitalizes_the_first_letter() {
        assert_eq!(title_case("shoulder"), "Shoulder");
        assert_eq!(title_case(""), "");
    }
}
