//! Mock implementation of RefreshTokenStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

use super::r#trait::RefreshTokenStore;

/// In-memory refresh token store for tests, keyed by token hash.
pub struct MockRefreshTokenStore {
    records: Arc<RwLock<HashMap<String, RefreshTokenRecord>>>,
}

impl MockRefreshTokenStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of records currently held for a subject.
    pub async fn count_for_subject(&self, subject: &str) -> usize {
        let records = self.records.read().await;
        records.values().filter(|r| r.subject == subject).count()
    }
}

impl Default for MockRefreshTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenStore for MockRefreshTokenStore {
    async fn insert(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, DomainError> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.token_hash) {
            return Err(DomainError::Conflict {
                message: "token hash already present".to_string(),
            });
        }

        records.insert(record.token_hash.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(token_hash).cloned())
    }

    async fn find_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.values().find(|r| r.subject == subject).cloned())
    }

    async fn delete_by_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        Ok(records.remove(token_hash).is_some())
    }

    async fn delete_by_subject(&self, subject: &str) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, r| r.subject != subject);
        Ok(before - records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MockRefreshTokenStore::new();
        let record = RefreshTokenRecord::new("alice", "hash-1".to_string());

        store.insert(record.clone()).await.unwrap();

        let found = store.find_by_token("hash-1").await.unwrap().unwrap();
        assert_eq!(found, record);

        let by_subject = store.find_by_subject("alice").await.unwrap().unwrap();
        assert_eq!(by_subject, record);
    }

    #[tokio::test]
    async fn test_duplicate_insert_conflicts() {
        let store = MockRefreshTokenStore::new();
        store
            .insert(RefreshTokenRecord::new("alice", "hash-1".to_string()))
            .await
            .unwrap();

        let result = store
            .insert(RefreshTokenRecord::new("bob", "hash-1".to_string()))
            .await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_deletes_are_idempotent() {
        let store = MockRefreshTokenStore::new();
        store
            .insert(RefreshTokenRecord::new("alice", "hash-1".to_string()))
            .await
            .unwrap();

        assert!(store.delete_by_token("hash-1").await.unwrap());
        assert!(!store.delete_by_token("hash-1").await.unwrap());

        assert_eq!(store.delete_by_subject("alice").await.unwrap(), 0);
    }
}
