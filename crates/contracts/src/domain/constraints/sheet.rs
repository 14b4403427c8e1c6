use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::day::DaySlot;
use super::snapshot::{ConstraintSnapshot, DayRecord, ProductRecord};
use crate::domain::catalog::InventoryItem;

/// Day-level constraint record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayConstraint {
    pub is_holiday: bool,
}

/// Per-(day, item) constraint record.
///
/// `min_order_value` and `availability` are kept as entered; the editor
/// does not clamp or parse them (availability is advisory 0-100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConstraint {
    pub min_order_value: String,
    pub availability: String,
    pub is_disabled: bool,
}

impl Default for ProductConstraint {
    fn default() -> Self {
        Self {
            min_order_value: String::new(),
            availability: "100".to_string(),
            is_disabled: false,
        }
    }
}

/// Field update accepted by [`ConstraintSheet::set_product_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductUpdate {
    MinOrderValue(String),
    Availability(String),
    Disabled(bool),
}

/// Collaborator receiving the full sheet state when the operator saves.
///
/// Fire-and-forget: the sheet persists nothing itself and does not
/// consult a result.
pub trait SaveSink {
    fn constraints_saved(&self, snapshot: ConstraintSnapshot);
}

/// In-memory constraint state for the 7-day scheduling window.
///
/// Every (day, item) pair of the seeded cross product always has a
/// record. Writes against unknown keys are rejected, never inserted, so
/// the maps stay dense for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSheet {
    days: Vec<DaySlot>,
    items: Vec<InventoryItem>,
    day_constraints: HashMap<String, DayConstraint>,
    product_constraints: HashMap<String, HashMap<String, ProductConstraint>>,
}

impl ConstraintSheet {
    /// Builds the sheet with default records for the full (day, item)
    /// cross product.
    pub fn new(days: Vec<DaySlot>, items: Vec<InventoryItem>) -> Self {
        let day_constraints = days
            .iter()
            .map(|day| (day.key.clone(), DayConstraint::default()))
            .collect();
        let product_constraints = days
            .iter()
            .map(|day| {
                let per_item = items
                    .iter()
                    .map(|item| (item.id.clone(), ProductConstraint::default()))
                    .collect();
                (day.key.clone(), per_item)
            })
            .collect();

        Self {
            days,
            items,
            day_constraints,
            product_constraints,
        }
    }

    pub fn days(&self) -> &[DaySlot] {
        &self.days
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn is_holiday(&self, day_key: &str) -> bool {
        self.day_constraints
            .get(day_key)
            .map(|c| c.is_holiday)
            .unwrap_or(false)
    }

    pub fn product(&self, day_key: &str, item_id: &str) -> Option<&ProductConstraint> {
        self.product_constraints
            .get(day_key)?
            .get(item_id)
    }

    /// Displayed/usable state of an item on a day: the day-level holiday
    /// override wins over the item-level flag. Derived on every call;
    /// either input can change independently, so this is never cached.
    pub fn effective_enabled(&self, day_key: &str, item_id: &str) -> bool {
        if self.is_holiday(day_key) {
            return false;
        }
        self.product(day_key, item_id)
            .map(|c| !c.is_disabled)
            .unwrap_or(false)
    }

    /// Marks or unmarks a day as a holiday. The per-item flags stored for
    /// that day are left untouched; the override only affects derived
    /// reads.
    pub fn set_day_holiday(&mut self, day_key: &str, value: bool) -> Result<(), String> {
        let record = self
            .day_constraints
            .get_mut(day_key)
            .ok_or_else(|| format!("unknown day key: {day_key}"))?;
        record.is_holiday = value;
        Ok(())
    }

    /// Updates one field of a (day, item) record.
    ///
    /// `MinOrderValue` and `Availability` are rejected while the pair is
    /// not effectively enabled; the edit controls are disabled in that
    /// state and the store enforces the same rule. `Disabled` is rejected
    /// only on holidays, where the per-item switch itself is locked.
    pub fn set_product_field(
        &mut self,
        day_key: &str,
        item_id: &str,
        update: ProductUpdate,
    ) -> Result<(), String> {
        let editable = self.effective_enabled(day_key, item_id);
        let holiday = self.is_holiday(day_key);
        let record = self
            .product_constraints
            .get_mut(day_key)
            .and_then(|per_item| per_item.get_mut(item_id))
            .ok_or_else(|| format!("unknown constraint record: {day_key}/{item_id}"))?;

        match update {
            ProductUpdate::MinOrderValue(value) => {
                if !editable {
                    return Err(format!("{day_key}/{item_id} is not editable"));
                }
                record.min_order_value = value;
            }
            ProductUpdate::Availability(value) => {
                if !editable {
                    return Err(format!("{day_key}/{item_id} is not editable"));
                }
                record.availability = value;
            }
            ProductUpdate::Disabled(value) => {
                if holiday {
                    return Err(format!("{day_key} is marked as a holiday"));
                }
                record.is_disabled = value;
            }
        }
        Ok(())
    }

    /// Full copy of the current state, in seed order. Pure read.
    pub fn snapshot(&self) -> ConstraintSnapshot {
        let days = self
            .days
            .iter()
            .map(|day| DayRecord {
                day: day.key.clone(),
                is_holiday: self.is_holiday(&day.key),
            })
            .collect();

        let mut products = Vec::with_capacity(self.days.len() * self.items.len());
        for day in &self.days {
            for item in &self.items {
                if let Some(record) = self.product(&day.key, &item.id) {
                    products.push(ProductRecord {
                        day: day.key.clone(),
                        item_id: item.id.clone(),
                        min_order_value: record.min_order_value.clone(),
                        availability: record.availability.clone(),
                        is_disabled: record.is_disabled,
                    });
                }
            }
        }

        ConstraintSnapshot { days, products }
    }

    /// Hands the current snapshot to the acknowledgement collaborator.
    pub fn save(&self, sink: &dyn SaveSink) {
        sink.constraints_saved(self.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::NaiveDate;

    use super::super::day::upcoming_week;
    use super::*;

    fn sample_items() -> Vec<InventoryItem> {
        vec![
            InventoryItem::new("1", "Premium Coffee Beans", "PCB-001", "Beverages"),
            InventoryItem::new("2", "Organic Tea Leaves", "OTL-002", "Beverages"),
            InventoryItem::new("3", "Artisan Bread", "AB-003", "Bakery"),
            InventoryItem::new("4", "Fresh Pastries", "FP-004", "Bakery"),
            InventoryItem::new("5", "Seasonal Fruits", "SF-005", "Produce"),
            InventoryItem::new("6", "Local Vegetables", "LV-006", "Produce"),
        ]
    }

    fn sheet() -> ConstraintSheet {
        let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        ConstraintSheet::new(upcoming_week(start), sample_items())
    }

    fn day_key(sheet: &ConstraintSheet, index: usize) -> String {
        sheet.days()[index].key.clone()
    }

    #[test]
    fn initialization_covers_full_cross_product() {
        let sheet = sheet();
        let snapshot = sheet.snapshot();

        assert_eq!(snapshot.days.len(), 7);
        assert_eq!(snapshot.products.len(), 42);
        assert!(snapshot.days.iter().all(|d| !d.is_holiday));
        for record in &snapshot.products {
            assert_eq!(record.min_order_value, "");
            assert_eq!(record.availability, "100");
            assert!(!record.is_disabled);
        }
    }

    #[test]
    fn holiday_disables_every_item_for_that_day_only() {
        let mut sheet = sheet();
        let day0 = day_key(&sheet, 0);
        let day1 = day_key(&sheet, 1);

        sheet.set_day_holiday(&day0, true).unwrap();

        for item in sample_items() {
            assert!(!sheet.effective_enabled(&day0, &item.id));
            assert!(sheet.effective_enabled(&day1, &item.id));
        }
    }

    #[test]
    fn holiday_overrides_item_flag() {
        let mut sheet = sheet();
        let day0 = day_key(&sheet, 0);

        // Item flag stays false; the day override alone flips the
        // derived state.
        sheet.set_day_holiday(&day0, true).unwrap();
        assert!(!sheet.effective_enabled(&day0, "1"));
        assert!(!sheet.product(&day0, "1").unwrap().is_disabled);
    }

    #[test]
    fn effective_state_follows_item_flag_outside_holidays() {
        let mut sheet = sheet();
        let day0 = day_key(&sheet, 0);

        assert!(sheet.effective_enabled(&day0, "3"));
        sheet
            .set_product_field(&day0, "3", ProductUpdate::Disabled(true))
            .unwrap();
        assert!(!sheet.effective_enabled(&day0, "3"));
        sheet
            .set_product_field(&day0, "3", ProductUpdate::Disabled(false))
            .unwrap();
        assert!(sheet.effective_enabled(&day0, "3"));
    }

    #[test]
    fn holiday_toggle_preserves_stored_item_flags() {
        let mut sheet = sheet();
        let day0 = day_key(&sheet, 0);

        sheet
            .set_product_field(&day0, "2", ProductUpdate::Disabled(true))
            .unwrap();
        sheet.set_day_holiday(&day0, true).unwrap();
        sheet.set_day_holiday(&day0, false).unwrap();

        assert!(sheet.product(&day0, "2").unwrap().is_disabled);
        assert!(!sheet.product(&day0, "1").unwrap().is_disabled);
        assert!(sheet.effective_enabled(&day0, "1"));
        assert!(!sheet.effective_enabled(&day0, "2"));
    }

    #[test]
    fn value_writes_are_rejected_while_item_is_disabled() {
        let mut sheet = sheet();
        let day0 = day_key(&sheet, 0);

        sheet
            .set_product_field(&day0, "4", ProductUpdate::Disabled(true))
            .unwrap();

        let min_order =
            sheet.set_product_field(&day0, "4", ProductUpdate::MinOrderValue("250".into()));
        let availability =
            sheet.set_product_field(&day0, "4", ProductUpdate::Availability("50".into()));

        assert!(min_order.is_err());
        assert!(availability.is_err());
        let record = sheet.product(&day0, "4").unwrap();
        assert_eq!(record.min_order_value, "");
        assert_eq!(record.availability, "100");
    }

    #[test]
    fn value_writes_are_rejected_on_holidays() {
        let mut sheet = sheet();
        let day0 = day_key(&sheet, 0);

        sheet.set_day_holiday(&day0, true).unwrap();

        assert!(sheet
            .set_product_field(&day0, "1", ProductUpdate::MinOrderValue("100".into()))
            .is_err());
        assert!(sheet
            .set_product_field(&day0, "1", ProductUpdate::Disabled(true))
            .is_err());
        let record = sheet.product(&day0, "1").unwrap();
        assert_eq!(record.min_order_value, "");
        assert!(!record.is_disabled);
    }

    #[test]
    fn item_switch_stays_writable_for_disabled_items() {
        let mut sheet = sheet();
        let day0 = day_key(&sheet, 0);

        sheet
            .set_product_field(&day0, "5", ProductUpdate::Disabled(true))
            .unwrap();
        // Re-enabling a disabled item is the one write that must stay
        // possible, otherwise the state could never be unwound.
        sheet
            .set_product_field(&day0, "5", ProductUpdate::Disabled(false))
            .unwrap();
        assert!(sheet.effective_enabled(&day0, "5"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut sheet = sheet();
        let day0 = day_key(&sheet, 0);

        assert!(sheet.set_day_holiday("2030-01-01", true).is_err());
        assert!(sheet
            .set_product_field("2030-01-01", "1", ProductUpdate::Disabled(true))
            .is_err());
        assert!(sheet
            .set_product_field(&day0, "missing", ProductUpdate::Disabled(true))
            .is_err());
        assert!(!sheet.effective_enabled(&day0, "missing"));
    }

    struct RecordingSink {
        received: RefCell<Option<ConstraintSnapshot>>,
    }

    impl SaveSink for RecordingSink {
        fn constraints_saved(&self, snapshot: ConstraintSnapshot) {
            *self.received.borrow_mut() = Some(snapshot);
        }
    }

    #[test]
    fn save_hands_over_the_full_unmodified_snapshot() {
        let mut sheet = sheet();
        let day0 = day_key(&sheet, 0);
        sheet.set_day_holiday(&day0, true).unwrap();
        sheet
            .set_product_field(&day_key(&sheet, 1), "6", ProductUpdate::Availability("75".into()))
            .unwrap();

        let sink = RecordingSink {
            received: RefCell::new(None),
        };
        sheet.save(&sink);

        let received = sink.received.borrow().clone().unwrap();
        assert_eq!(received.days.len(), 7);
        assert_eq!(received.products.len(), 42);
        // Saving is a pure read: a second snapshot matches what the sink
        // got.
        assert_eq!(sheet.snapshot(), received);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snapshot = sheet().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"isHoliday\":false"));
        assert!(json.contains("\"minOrderValue\":\"\""));
    }
}
