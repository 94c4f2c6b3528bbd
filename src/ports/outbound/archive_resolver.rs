use crate::inventory::domain::ArchiveRecord;
use crate::shared::error::InventoryError;

/// ArchiveResolver port for turning an origin location into an archive identity
///
/// Implementations read the archive but never modify or move it.
pub trait ArchiveResolver: Send + Sync {
    /// Resolves an origin location to an archive record
    ///
    /// # Arguments
    /// * `origin` - Path, `file:` URL or nested `outer!/inner.jar` expression
    ///
    /// # Returns
    /// The archive's content hash and manifest attributes
    ///
    /// # Errors
    /// - `InventoryError::NotAnArchive` if the origin is not an archive (callers
    ///   treat this as a no-op)
    /// - `InventoryError::Io` / `InventoryError::Zip` if the archive cannot be read
    fn resolve(&self, origin: &str) -> Result<ArchiveRecord, InventoryError>;
}
