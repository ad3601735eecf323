use std::collections::HashMap;
use crate::domain::{models::draft::{BookingDraft, DraftPhase}, ports::{DraftEdit, DraftRepository}};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryDraftRepo {
    drafts: RwLock<HashMap<String, BookingDraft>>,
}

impl MemoryDraftRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DraftRepository for MemoryDraftRepo {
    async fn create(&self, draft: &BookingDraft) -> Result<BookingDraft, AppError> {
        let mut drafts = self.drafts.write().await;
        if drafts.contains_key(&draft.id) {
            return Err(AppError::Conflict("Draft already exists".into()));
        }
        drafts.insert(draft.id.clone(), draft.clone());
        Ok(draft.clone())
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<BookingDraft>, AppError> {
        Ok(self.drafts.read().await.get(id).cloned())
    }
    async fn modify(&self, id: &str, edit: DraftEdit) -> Result<BookingDraft, AppError> {
        let mut drafts = self.drafts.write().await;
        let slot = drafts.get_mut(id)
            .ok_or(AppError::NotFound("Draft not found".into()))?;
        let mut draft = slot.clone();
        edit(&mut draft)?;
        *slot = draft.clone();
        Ok(draft)
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut drafts = self.drafts.write().await;
        match drafts.get(id) {
            None => Err(AppError::NotFound("Draft not found".into())),
            Some(d) if d.phase == DraftPhase::AwaitingPayment => {
                Err(AppError::Conflict("Payment is being processed".into()))
            }
            Some(_) => {
                drafts.remove(id);
                Ok(())
            }
        }
    }
    async fn list_completed_before(&self, cutoff: DateTime<Utc>) -> Result<Vec<BookingDraft>, AppError> {
        Ok(self.drafts.read().await.values()
            .filter(|d| d.phase == DraftPhase::Completed && d.completed_at.is_some_and(|at| at <= cutoff))
            .cloned()
            .collect())
    }
    async fn delete_idle_since(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let mut drafts = self.drafts.write().await;
        let before = drafts.len();
        // A draft mid-payment is never evicted.
        drafts.retain(|_, d| d.phase == DraftPhase::AwaitingPayment || d.updated_at > cutoff);
        Ok((before - drafts.len()) as u64)
    }
}
