use crate::inventory::domain::ArchiveRecord;
use crate::shared::error::InventoryError;

/// RecordSink port for the outbound delivery queue
///
/// Many producers may offer concurrently; a report controller drains the
/// other end.
pub trait RecordSink: Send + Sync {
    /// Offers a record without blocking
    ///
    /// # Arguments
    /// * `record` - The archive record to deliver
    ///
    /// # Errors
    /// Returns `InventoryError::QueueSaturated` if the queue is full or closed.
    /// The record is dropped in that case.
    fn offer(&self, record: ArchiveRecord) -> Result<(), InventoryError>;
}
