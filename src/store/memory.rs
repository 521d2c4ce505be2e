//! In-process product store.

use std::sync::Mutex;

use crate::domain::{ProductRecord, VendorId};
use crate::error::StoreError;

use super::ProductStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ProductRecord>>,
    reject_writes: Option<String>,
    write_calls: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write with `reason`. Reads still succeed.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            reject_writes: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Every record inserted so far, in insertion order.
    pub fn records(&self) -> Vec<ProductRecord> {
        lock(&self.records).clone()
    }

    /// Number of `insert_many` calls made, including rejected ones.
    pub fn write_calls(&self) -> usize {
        *lock(&self.write_calls)
    }
}

impl ProductStore for MemoryStore {
    fn insert_many(&self, records: &[ProductRecord]) -> Result<usize, StoreError> {
        *lock(&self.write_calls) += 1;
        if let Some(reason) = &self.reject_writes {
            return Err(StoreError::Rejected(reason.clone()));
        }
        lock(&self.records).extend_from_slice(records);
        Ok(records.len())
    }

    fn find_by_vendor(&self, vendor: &VendorId) -> Result<Vec<ProductRecord>, StoreError> {
        Ok(lock(&self.records)
            .iter()
            .filter(|r| &r.vendor == vendor)
            .cloned()
            .collect())
    }
}

// A poisoned lock only means another holder panicked mid-push; the Vec is still usable.
fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellValue, Numeric};

    fn record(vendor: &str, model: &str) -> ProductRecord {
        ProductRecord {
            vendor: VendorId::new(vendor),
            manufacturer: "Ricoh".to_string(),
            model: model.to_string(),
            speed: CellValue::Integer(25),
            description: "mono".to_string(),
            cost: Numeric::Integer(900),
            installation: CellValue::Integer(80),
            profit_margin: Numeric::Float(0.2),
            min_volume: Numeric::Integer(1),
            max_volume: Numeric::Integer(2000),
            total_machine_cost: Numeric::Integer(1060),
        }
    }

    #[test]
    fn find_filters_by_vendor() {
        let store = MemoryStore::new();
        store.insert_many(&[record("a", "M1"), record("b", "M2"), record("a", "M3")]).unwrap();

        let found: Vec<String> = store
            .find_by_vendor(&VendorId::new("a"))
            .unwrap()
            .into_iter()
            .map(|r| r.model)
            .collect();
        assert_eq!(found, vec!["M1".to_string(), "M3".to_string()]);
    }

    #[test]
    fn rejecting_store_keeps_nothing() {
        let store = MemoryStore::rejecting("offline");
        let err = store.insert_many(&[record("a", "M1")]).unwrap_err();
        assert!(matches!(err, StoreError::Rejected(ref r) if r == "offline"));
        assert!(store.records().is_empty());
        assert_eq!(store.write_calls(), 1);
    }
}
