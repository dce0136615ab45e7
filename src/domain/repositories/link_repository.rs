//! Repository trait for link record storage.

use crate::domain::entities::LinkRecord;
use crate::domain::error::StoreError;

/// Storage primitive behind the shortcode store.
///
/// Implementations must make [`LinkRepository::insert_if_absent`] a single
/// atomic step: two concurrent inserts for the same code can never both
/// succeed.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - DashMap-backed map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkRepository: Send + Sync {
    /// Inserts `record` unless a record with the same code is already held.
    ///
    /// Expired records still occupy their code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShortcodeConflict`] if the code is taken.
    fn insert_if_absent(&self, record: LinkRecord) -> Result<(), StoreError>;

    /// Finds a record by its code, regardless of expiry.
    fn find_by_code(&self, code: &str) -> Option<LinkRecord>;

    /// Number of records physically held, expired ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
