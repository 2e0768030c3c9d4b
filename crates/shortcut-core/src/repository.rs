use crate::error::StorageError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, StorageError>;

/// A mapping from short codes to original URLs.
///
/// Implementations must be safe to share across request tasks.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Inserts or overwrites the association for `code`.
    ///
    /// Later writes for the same code silently replace earlier ones;
    /// there is no uniqueness enforcement and no collision signal.
    async fn put(&self, code: &ShortCode, url: String) -> Result<()>;

    /// Retrieves the original URL for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<String>>;
}
