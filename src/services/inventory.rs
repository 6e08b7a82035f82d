use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{AlertLevel, SupplyItem};

/// Quantity below which an item is flagged
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 20;

/// Errors that can occur when updating supplies
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Unknown supply item: {0}")]
    UnknownItem(String),
}

#[derive(Debug, Clone)]
struct SupplyEntry {
    item: String,
    quantity: u32,
}

/// Mock supply table with a derived low-stock alert
///
/// Only quantities are stored; the alert is recomputed on every read.
#[derive(Debug)]
pub struct SupplyInventory {
    entries: RwLock<Vec<SupplyEntry>>,
    low_stock_threshold: u32,
}

impl SupplyInventory {
    pub fn new<I, S>(items: I, low_stock_threshold: u32) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let entries = items
            .into_iter()
            .map(|(item, quantity)| SupplyEntry {
                item: item.into(),
                quantity,
            })
            .collect();

        Self {
            entries: RwLock::new(entries),
            low_stock_threshold,
        }
    }

    /// Seed stock used by the demo UI
    pub fn with_seed_stock(low_stock_threshold: u32) -> Self {
        Self::new([("FIV Kit", 15), ("Hormônios", 50)], low_stock_threshold)
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    /// Current items with freshly derived alert levels
    pub async fn snapshot(&self) -> Vec<SupplyItem> {
        self.entries
            .read()
            .await
            .iter()
            .map(|entry| self.to_item(entry))
            .collect()
    }

    /// Overwrite the quantity of a known item
    pub async fn update(&self, item: &str, quantity: u32) -> Result<SupplyItem, InventoryError> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.item == item)
            .ok_or_else(|| InventoryError::UnknownItem(item.to_string()))?;

        entry.quantity = quantity;
        let updated = self.to_item(entry);
        drop(entries);

        if updated.alert == AlertLevel::Low {
            tracing::warn!("Low stock for {}: {} left", updated.item, updated.quantity);
        }

        Ok(updated)
    }

    fn to_item(&self, entry: &SupplyEntry) -> SupplyItem {
        SupplyItem {
            item: entry.item.clone(),
            quantity: entry.quantity,
            alert: alert_level(entry.quantity, self.low_stock_threshold),
        }
    }
}

#[inline]
pub fn alert_level(quantity: u32, low_stock_threshold: u32) -> AlertLevel {
    if quantity < low_stock_threshold {
        AlertLevel::Low
    } else {
        AlertLevel::Ok
    }
}
