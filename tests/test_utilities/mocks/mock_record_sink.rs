use runtime_inventory::prelude::*;
use std::sync::Mutex;

/// Mock RecordSink that records offered records, optionally bounded
pub struct MockRecordSink {
    capacity: Option<usize>,
    pub records: Mutex<Vec<ArchiveRecord>>,
}

impl MockRecordSink {
    pub fn new() -> Self {
        Self {
            capacity: None,
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn locators(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|record| record.locator().to_string())
            .collect()
    }
}

impl RecordSink for MockRecordSink {
    fn offer(&self, record: ArchiveRecord) -> std::result::Result<(), InventoryError> {
        let mut records = self.records.lock().unwrap();
        if self.capacity.is_some_and(|capacity| records.len() >= capacity) {
            return Err(InventoryError::QueueSaturated {
                locator: record.locator().to_string(),
            });
        }
        records.push(record);
        Ok(())
    }
}
