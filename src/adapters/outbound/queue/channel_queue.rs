use crate::inventory::domain::ArchiveRecord;
use crate::ports::outbound::RecordSink;
use crate::shared::error::InventoryError;
use tokio::sync::mpsc;

enum Sender {
    Bounded(mpsc::Sender<ArchiveRecord>),
    Unbounded(mpsc::UnboundedSender<ArchiveRecord>),
}

enum Receiver {
    Bounded(mpsc::Receiver<ArchiveRecord>),
    Unbounded(mpsc::UnboundedReceiver<ArchiveRecord>),
}

/// ChannelQueue adapter: producer side of the delivery queue
///
/// Backed by a tokio mpsc channel. Offers never block: a full or closed
/// channel rejects the record.
pub struct ChannelQueue {
    sender: Sender,
}

/// Consumer side of the delivery queue, held by the report controller
pub struct RecordReceiver {
    receiver: Receiver,
}

impl ChannelQueue {
    /// Creates a queue holding at most `capacity` records, or an unbounded
    /// one when `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> (Self, RecordReceiver) {
        if capacity == 0 {
            let (tx, rx) = mpsc::unbounded_channel();
            (
                Self {
                    sender: Sender::Unbounded(tx),
                },
                RecordReceiver {
                    receiver: Receiver::Unbounded(rx),
                },
            )
        } else {
            let (tx, rx) = mpsc::channel(capacity);
            (
                Self {
                    sender: Sender::Bounded(tx),
                },
                RecordReceiver {
                    receiver: Receiver::Bounded(rx),
                },
            )
        }
    }
}

impl RecordSink for ChannelQueue {
    fn offer(&self, record: ArchiveRecord) -> Result<(), InventoryError> {
        let locator = record.locator().to_string();
        let accepted = match &self.sender {
            Sender::Bounded(tx) => tx.try_send(record).is_ok(),
            Sender::Unbounded(tx) => tx.send(record).is_ok(),
        };
        if accepted {
            Ok(())
        } else {
            Err(InventoryError::QueueSaturated { locator })
        }
    }
}

impl RecordReceiver {
    /// Waits for the next record; `None` once every producer is gone and the
    /// queue is empty.
    pub async fn recv(&mut self) -> Option<ArchiveRecord> {
        match &mut self.receiver {
            Receiver::Bounded(rx) => rx.recv().await,
            Receiver::Unbounded(rx) => rx.recv().await,
        }
    }

    pub fn try_recv(&mut self) -> Option<ArchiveRecord> {
        match &mut self.receiver {
            Receiver::Bounded(rx) => rx.try_recv().ok(),
            Receiver::Unbounded(rx) => rx.try_recv().ok(),
        }
    }

    /// Takes everything currently queued without waiting.
    pub fn drain(&mut self) -> Vec<ArchiveRecord> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}
