use std::sync::Arc;
use crate::domain::{models::auth::AdminSession, ports::AdminSessionRepository};
use crate::error::AppError;
use crate::config::Config;
use chrono::{Utc, Duration};
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Sha256, Digest};

pub struct AuthService {
    repo: Arc<dyn AdminSessionRepository>,
    config: Config,
}

impl AuthService {
    pub fn new(repo: Arc<dyn AdminSessionRepository>, config: Config) -> Self {
        Self { repo, config }
    }

    /// Checks the configured demo credentials. Returns the raw session token and the stored session.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, AdminSession), AppError> {
        if !email.trim().eq_ignore_ascii_case(&self.config.admin_email) || password != self.config.admin_password {
            return Err(AppError::Unauthorized);
        }

        let raw_token: String = rand::thread_rng().sample_iter(&Alphanumeric).take(64).map(char::from).collect();
        let csrf_token: String = rand::thread_rng().sample_iter(&Alphanumeric).take(32).map(char::from).collect();
        let now = Utc::now();

        let session = AdminSession {
            token_hash: self.hash_token(&raw_token),
            email: self.config.admin_email.clone(),
            csrf_token,
            expires_at: now + Duration::hours(self.config.admin_session_hours),
            created_at: now,
        };

        self.repo.create(&session).await?;
        Ok((raw_token, session))
    }

    pub async fn authenticate(&self, raw_token: &str) -> Result<AdminSession, AppError> {
        let token_hash = self.hash_token(raw_token);

        let session = self.repo.find(&token_hash).await?
            .ok_or(AppError::Unauthorized)?;

        if session.expires_at < Utc::now() {
            self.repo.delete(&token_hash).await?;
            return Err(AppError::Unauthorized);
        }

        Ok(session)
    }

    pub async fn logout(&self, raw_token: &str) -> Result<(), AppError> {
        let token_hash = self.hash_token(raw_token);
        self.repo.delete(&token_hash).await
    }

    pub async fn purge_expired(&self) -> Result<u64, AppError> {
        self.repo.delete_expired(Utc::now()).await
    }

    pub fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}
