use std::collections::HashMap;
use crate::domain::{models::auth::AdminSession, ports::AdminSessionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemorySessionRepo {
    sessions: RwLock<HashMap<String, AdminSession>>,
}

impl MemorySessionRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminSessionRepository for MemorySessionRepo {
    async fn create(&self, session: &AdminSession) -> Result<(), AppError> {
        self.sessions.write().await.insert(session.token_hash.clone(), session.clone());
        Ok(())
    }
    async fn find(&self, token_hash: &str) -> Result<Option<AdminSession>, AppError> {
        Ok(self.sessions.read().await.get(token_hash).cloned())
    }
    async fn delete(&self, token_hash: &str) -> Result<(), AppError> {
        self.sessions.write().await.remove(token_hash);
        Ok(())
    }
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at >= now);
        Ok((before - sessions.len()) as u64)
    }
}
