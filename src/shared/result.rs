/// Type alias for Result with anyhow::Error as the error type.
/// Use cases and adapters return this; the engine itself uses `InventoryError`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
