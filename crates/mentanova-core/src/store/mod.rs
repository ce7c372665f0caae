//! Durable key-value storage for client credentials.
//!
//! The [`KeyValueStore`] trait abstracts the storage medium (a JSON file on
//! disk for the CLI, an in-memory map for tests). [`SessionStore`] layers the
//! session semantics on top: the access token lives under
//! [`ACCESS_TOKEN_KEY`] and the optional refresh token under
//! [`REFRESH_TOKEN_KEY`].
//!
//! Implementations must be `Send + Sync`. Writes are last-write-wins; no
//! locking is provided beyond what the backend does internally.

pub mod memory;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Session;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Abstract string key-value storage that survives process restarts.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Session view over a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    pub async fn access_token(&self) -> Result<Option<String>> {
        self.inner.get(ACCESS_TOKEN_KEY).await
    }

    pub async fn refresh_token(&self) -> Result<Option<String>> {
        self.inner.get(REFRESH_TOKEN_KEY).await
    }

    /// The current session, or `None` when no access token is stored.
    pub async fn load(&self) -> Result<Option<Session>> {
        let Some(access_token) = self.access_token().await? else {
            return Ok(None);
        };
        Ok(Some(Session {
            access_token,
            refresh_token: self.refresh_token().await?,
        }))
    }

    /// Replace the stored session. A missing refresh token removes any
    /// previously stored one.
    pub async fn save(&self, session: &Session) -> Result<()> {
        self.inner
            .set(ACCESS_TOKEN_KEY, &session.access_token)
            .await?;
        match &session.refresh_token {
            Some(token) => self.inner.set(REFRESH_TOKEN_KEY, token).await,
            None => self.inner.remove(REFRESH_TOKEN_KEY).await,
        }
    }

    pub async fn set_access_token(&self, token: &str) -> Result<()> {
        self.inner.set(ACCESS_TOKEN_KEY, token).await
    }

    pub async fn set_refresh_token(&self, token: &str) -> Result<()> {
        self.inner.set(REFRESH_TOKEN_KEY, token).await
    }

    /// Delete both keys.
    pub async fn clear(&self) -> Result<()> {
        self.inner.remove(ACCESS_TOKEN_KEY).await?;
        self.inner.remove(REFRESH_TOKEN_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryStore;
    use super::*;

    #[tokio::test]
    async fn test_save_load_clear() {
        let backend = Arc::new(InMemoryStore::new());
        let store = SessionStore::new(backend.clone());
        assert!(store.load().await.unwrap().is_none());

        let session = Session {
            access_token: "acc".to_string(),
            refresh_token: Some("ref".to_string()),
        };
        store.save(&session).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(session));
        assert_eq!(backend.len(), 2);

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        assert!(store.refresh_token().await.unwrap().is_none());
        assert!(backend.is_empty());
    }

    #[tokio::test]
    async fn test_save_without_refresh_drops_old_refresh() {
        let store = SessionStore::new(Arc::new(InMemoryStore::new()));
        store.set_refresh_token("stale").await.unwrap();
        store
            .save(&Session {
                access_token: "acc".to_string(),
                refresh_token: None,
            })
            .await
            .unwrap();
        assert!(store.refresh_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_refresh_without_access_is_not_a_session() {
        let store = SessionStore::new(Arc::new(InMemoryStore::new()));
        store.set_refresh_token("orphan").await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
