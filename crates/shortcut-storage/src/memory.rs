use async_trait::async_trait;
use shortcut_core::{Repository, ShortCode, StorageError};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

type Result<T> = std::result::Result<T, StorageError>;

/// In-memory implementation of the [`Repository`] trait.
///
/// Every read and write goes through a single store-wide mutex; the
/// critical sections are short map operations. Associations live for
/// the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::with_capacity(capacity)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|err| StorageError::Poisoned(err.to_string()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn put(&self, code: &ShortCode, url: String) -> Result<()> {
        self.lock()?.insert(code.as_str().to_owned(), url);
        Ok(())
    }

    async fn get(&self, code: &ShortCode) -> Result<Option<String>> {
        Ok(self.lock()?.get(code.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ShortCode {
        ShortCode::new(s)
    }

    #[tokio::test]
    async fn put_and_get() {
        let repo = InMemoryRepository::new();

        repo.put(&code("abc12"), "https://example.com".to_owned())
            .await
            .unwrap();

        let url = repo.get(&code("abc12")).await.unwrap();
        assert_eq!(url.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        assert!(repo.get(&code("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_overwrites_existing_entry() {
        let repo = InMemoryRepository::new();

        repo.put(&code("abc12"), "https://first.example.com".to_owned())
            .await
            .unwrap();
        repo.put(&code("abc12"), "https://second.example.com".to_owned())
            .await
            .unwrap();

        let url = repo.get(&code("abc12")).await.unwrap();
        assert_eq!(url.as_deref(), Some("https://second.example.com"));
    }

    #[tokio::test]
    async fn with_capacity_starts_empty() {
        let repo = InMemoryRepository::with_capacity(16);

        assert!(repo.get(&code("abc12")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_access() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let c = ShortCode::new(format!("code{:02}", i));
                repo.put(&c, format!("https://example{}.com", i))
                    .await
                    .unwrap();
            }));
        }

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let c = ShortCode::new(format!("code{:02}", i));
                let _ = repo.get(&c).await;
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let c = ShortCode::new(format!("code{:02}", i));
            let url = repo.get(&c).await.unwrap().unwrap();
            assert_eq!(url, format!("https://example{}.com", i));
        }
    }
}
