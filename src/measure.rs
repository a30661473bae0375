//! The measurement store: a declaration-ordered record of named integer
//! pixel values with per-key bounds.
//!
//! The store is the only writer of measurement values and every write is
//! range-checked, so `min <= value <= max` survives any sequence of
//! calls. Patterns layer boundary policy and derived geometry on top.

use indexmap::IndexMap;

use crate::errors::PatternError;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Slot {
    value: i64,
    min: Option<i64>,
    max: Option<i64>,
}

/// Named integer measurements with range-checked mutation.
///
/// Keys are declared once, with defaults, at construction; bounds start
/// unset and are assigned by the owning pattern's boundary policy before
/// any value is mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurements {
    slots: IndexMap<&'static str, Slot>,
}

impl Measurements {
    /// Build a store from `(key, default)` pairs, preserving their order.
    pub fn with_defaults(defaults: &[(&'static str, i64)]) -> Measurements {
        let slots = defaults
            .iter()
            .map(|&(key, value)| {
                (
                    key,
                    Slot {
                        value,
                        min: None,
                        max: None,
                    },
                )
            })
            .collect();
        Measurements { slots }
    }

    /// Current value for `key`, or `None` for an undeclared key.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.slots.get(key).map(|slot| slot.value)
    }

    /// Lower bound for `key`, `None` when undeclared or not yet assigned.
    pub fn min(&self, key: &str) -> Option<i64> {
        self.slots.get(key).and_then(|slot| slot.min)
    }

    /// Upper bound for `key`, `None` when undeclared or not yet assigned.
    pub fn max(&self, key: &str) -> Option<i64> {
        self.slots.get(key).and_then(|slot| slot.max)
    }

    /// Declaration-order `(key, value)` pairs as of this call.
    pub fn items(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.slots.iter().map(|(&key, slot)| (key, slot.value))
    }

    /// Validate `value` against `key`'s bounds without writing it.
    pub fn check(&self, key: &str, value: i64) -> Result<(), PatternError> {
        let slot = self
            .slots
            .get(key)
            .ok_or_else(|| PatternError::UnknownKey {
                key: key.to_string(),
            })?;
        let (Some(min), Some(max)) = (slot.min, slot.max) else {
            return Err(PatternError::Inconsistent {
                detail: format!("'{key}' has no bounds assigned"),
            });
        };
        if value < min || value > max {
            return Err(PatternError::OutOfRange {
                key: key.to_string(),
                value,
                min,
                max,
            });
        }
        Ok(())
    }

    /// Range-checked write. A failed set leaves the store untouched.
    pub fn set(&mut self, key: &str, value: i64) -> Result<(), PatternError> {
        self.check(key, value)?;
        if let Some(slot) = self.slots.get_mut(key) {
            slot.value = value;
        }
        Ok(())
    }

    /// Assign the lower bound for `key` (boundary-policy write path).
    pub(crate) fn set_min(&mut self, key: &'static str, min: i64) {
        debug_assert!(self.slots.contains_key(key), "unknown key '{key}'");
        if let Some(slot) = self.slots.get_mut(key) {
            slot.min = Some(min);
        }
    }

    /// Assign the upper bound for `key` (boundary-policy write path).
    pub(crate) fn set_max(&mut self, key: &'static str, max: i64) {
        debug_assert!(self.slots.contains_key(key), "unknown key '{key}'");
        if let Some(slot) = self.slots.get_mut(key) {
            slot.max = Some(max);
        }
    }

    /// Check every measurement against its bounds.
    ///
    /// A violation here means a boundary policy or a default table is
    /// wrong, not that user input was bad; callers propagate the
    /// [`PatternError::Inconsistent`] and stop.
    pub fn assert_consistent(&self) -> Result<(), PatternError> {
        for (&key, slot) in &self.slots {
            let (Some(min), Some(max)) = (slot.min, slot.max) else {
                return Err(PatternError::Inconsistent {
                    detail: format!("'{key}' has no bounds assigned"),
                });
            };
            if slot.value < min || slot.value > max {
                return Err(PatternError::Inconsistent {
                    detail: format!(
                        "'{key}' value {} escapes its range {min}..={max}",
                        slot.value
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded() -> Measurements {
        let mut store = Measurements::with_defaults(&[("arm", 100), ("gap", 20)]);
        store.set_min("arm", 5);
        store.set_max("arm", 200);
        store.set_min("gap", 5);
        store.set_max("gap", 50);
        store
    }

    #[test]
    fn defaults_are_readable_in_declaration_order() {
        let store = bounded();
        let items: Vec<(&str, i64)> = store.items().collect();
        assert_eq!(items, vec![("arm", 100), ("gap", 20)]);
    }

    #[test]
    fn items_restarts_from_the_top() {
        let store = bounded();
        let first: Vec<(&str, i64)> = store.items().collect();
        let second: Vec<(&str, i64)> = store.items().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn set_within_range_updates_value() {
        let mut store = bounded();
        store.set("arm", 150).unwrap();
        assert_eq!(store.get("arm"), Some(150));
    }

    #[test]
    fn set_at_bounds_is_accepted() {
        let mut store = bounded();
        store.set("arm", 5).unwrap();
        assert_eq!(store.get("arm"), Some(5));
        store.set("arm", 200).unwrap();
        assert_eq!(store.get("arm"), Some(200));
    }

    #[test]
    fn set_out_of_range_is_rejected_and_leaves_value() {
        let mut store = bounded();
        let err = store.set("arm", 201).unwrap_err();
        assert!(matches!(err, PatternError::OutOfRange { .. }));
        assert_eq!(store.get("arm"), Some(100));
    }

    #[test]
    fn set_unknown_key_is_rejected() {
        let mut store = bounded();
        let err = store.set("hem", 10).unwrap_err();
        assert!(matches!(err, PatternError::UnknownKey { key } if key == "hem"));
        assert_eq!(store.get("hem"), None);
    }

    #[test]
    fn set_without_bounds_is_an_internal_error() {
        let mut store = Measurements::with_defaults(&[("arm", 100)]);
        let err = store.set("arm", 50).unwrap_err();
        assert!(matches!(err, PatternError::Inconsistent { .. }));
    }

    #[test]
    fn consistency_passes_for_a_bounded_store() {
        assert!(bounded().assert_consistent().is_ok());
    }

    #[test]
    fn consistency_fails_when_bounds_shrink_past_a_value() {
        let mut store = bounded();
        store.set_max("arm", 50);
        let err = store.assert_consistent().unwrap_err();
        assert!(matches!(err, PatternError::Inconsistent { .. }));
    }

    #[test]
    fn consistency_fails_when_bounds_are_missing() {
        let store = Measurements::with_defaults(&[("arm", 100)]);
        assert!(matches!(
            store.assert_consistent().unwrap_err(),
            PatternError::Inconsistent { .. }
        ));
    }
}
