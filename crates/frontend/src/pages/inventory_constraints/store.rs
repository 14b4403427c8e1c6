use contracts::domain::catalog::InventoryItem;
use contracts::domain::constraints::{
    upcoming_week, ConstraintSheet, ConstraintSnapshot, DaySlot, ProductUpdate, SaveSink,
};
use leptos::prelude::*;

use crate::shared::toast::ToastService;

/// Catalog shown in the editor. Reference data normally provided by the
/// product service; seeded here.
pub fn sample_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("1", "Premium Coffee Beans", "PCB-001", "Beverages"),
        InventoryItem::new("2", "Organic Tea Leaves", "OTL-002", "Beverages"),
        InventoryItem::new("3", "Artisan Bread", "AB-003", "Bakery"),
        InventoryItem::new("4", "Fresh Pastries", "FP-004", "Bakery"),
        InventoryItem::new("5", "Seasonal Fruits", "SF-005", "Produce"),
        InventoryItem::new("6", "Local Vegetables", "LV-006", "Produce"),
    ]
}

/// Reactive wrapper around [`ConstraintSheet`], constructed at page
/// mount and passed down to the grid components.
///
/// All mutation goes through the sheet so its guard rules hold; rejected
/// writes are logged and otherwise ignored, matching the disabled state
/// of the corresponding controls.
#[derive(Clone, Copy)]
pub struct ConstraintStore {
    sheet: RwSignal<ConstraintSheet>,
}

impl ConstraintStore {
    pub fn new(sheet: ConstraintSheet) -> Self {
        Self {
            sheet: RwSignal::new(sheet),
        }
    }

    /// Sheet for the next seven days starting today.
    pub fn for_upcoming_week(items: Vec<InventoryItem>) -> Self {
        let today = chrono::Local::now().date_naive();
        Self::new(ConstraintSheet::new(upcoming_week(today), items))
    }

    pub fn days(&self) -> Vec<DaySlot> {
        self.sheet.with_untracked(|s| s.days().to_vec())
    }

    pub fn items(&self) -> Vec<InventoryItem> {
        self.sheet.with_untracked(|s| s.items().to_vec())
    }

    pub fn is_holiday(&self, day_key: &str) -> bool {
        self.sheet.with(|s| s.is_holiday(day_key))
    }

    pub fn effective_enabled(&self, day_key: &str, item_id: &str) -> bool {
        self.sheet.with(|s| s.effective_enabled(day_key, item_id))
    }

    pub fn min_order_value(&self, day_key: &str, item_id: &str) -> String {
        self.sheet.with(|s| {
            s.product(day_key, item_id)
                .map(|c| c.min_order_value.clone())
                .unwrap_or_default()
        })
    }

    pub fn availability(&self, day_key: &str, item_id: &str) -> String {
        self.sheet.with(|s| {
            s.product(day_key, item_id)
                .map(|c| c.availability.clone())
                .unwrap_or_default()
        })
    }

    pub fn set_day_holiday(&self, day_key: &str, value: bool) {
        self.sheet.update(|s| {
            if let Err(err) = s.set_day_holiday(day_key, value) {
                log::warn!("holiday update rejected: {err}");
            }
        });
    }

    pub fn set_product_field(&self, day_key: &str, item_id: &str, update: ProductUpdate) {
        self.sheet.update(|s| {
            if let Err(err) = s.set_product_field(day_key, item_id, update) {
                log::warn!("constraint update rejected: {err}");
            }
        });
    }

    /// Hands the full current snapshot to the sink. Pure read.
    pub fn save(&self, sink: &dyn SaveSink) {
        self.sheet.with_untracked(|s| s.save(sink));
    }
}

/// Toast-backed acknowledgement collaborator for the editor's save
/// action.
pub struct ToastSaveSink {
    toasts: ToastService,
}

impl ToastSaveSink {
    pub fn new(toasts: ToastService) -> Self {
        Self { toasts }
    }
}

impl SaveSink for ToastSaveSink {
    fn constraints_saved(&self, snapshot: ConstraintSnapshot) {
        log::info!(
            "saving constraints: {} day records, {} product records",
            snapshot.days.len(),
            snapshot.products.len()
        );
        if let Ok(json) = serde_json::to_string(&snapshot) {
            log::debug!("constraint snapshot: {json}");
        }
        self.toasts.notify(
            "Constraints Saved",
            "Inventory constraints have been updated successfully.",
        );
    }
}
