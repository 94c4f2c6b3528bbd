/// Delivery queue adapters
mod channel_queue;

pub use channel_queue::{ChannelQueue, RecordReceiver};
