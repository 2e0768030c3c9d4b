use crate::error::ShortenerError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens the given URL and returns the short code under which it
    /// was stored.
    async fn shorten(&self, original_url: &str) -> Result<ShortCode>;

    /// Resolves a short code to the original URL.
    /// Returns `None` if the code is unknown.
    async fn resolve(&self, code: &ShortCode) -> Result<Option<String>>;
}
