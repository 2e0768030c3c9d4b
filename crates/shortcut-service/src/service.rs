use async_trait::async_trait;
use shortcut_core::{validate, Repository, ShortCode, Shortener, ShortenerError};
use shortcut_generator::Generator;
use std::sync::Arc;

/// A concrete implementation of the [`Shortener`] trait.
///
/// This service wraps a [`Repository`] and a [`Generator`] to handle:
/// - URL validation
/// - Short code derivation
/// - Storing the code-to-URL association
///
/// Note: generated codes are not guaranteed unique. When two URLs derive
/// the same code, the later `shorten` call overwrites the earlier
/// association.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` from a repository and a generator.
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, original_url: &str) -> Result<ShortCode, ShortenerError> {
        if !validate::is_valid(original_url) {
            return Err(ShortenerError::InvalidUrl(format!(
                "not a shortenable url: {}",
                original_url
            )));
        }

        let code = self.generator.generate(original_url);

        self.repository
            .put(&code, original_url.to_owned())
            .await?;

        Ok(code)
    }

    async fn resolve(&self, code: &ShortCode) -> Result<Option<String>, ShortenerError> {
        Ok(self.repository.get(code).await?)
    }
}
