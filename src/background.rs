use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use tokio::time::sleep;
use tracing::{error, info, debug, info_span, Instrument};
use crate::state::AppState;
use crate::domain::models::draft::{BookingDraft, DraftPhase};
use crate::error::AppError;

pub async fn start_background_worker(state: Arc<AppState>) {
    info!("Starting draft sweeper...");

    let interval = Duration::from_secs(state.config.draft_sweep_interval_secs.max(1));

    loop {
        let span = info_span!("draft_sweep");
        if let Err(e) = sweep_drafts(&state).instrument(span).await {
            error!("Draft sweep failed: {:?}", e);
        }
        sleep(interval).await;
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepOutcome {
    pub reset: usize,
    pub evicted: u64,
    pub expired_sessions: u64,
}

/// Resets drafts whose confirmation has been on screen long enough, drops abandoned ones
/// and forgets expired admin sessions.
pub async fn sweep_drafts(state: &AppState) -> Result<SweepOutcome, AppError> {
    let now = Utc::now();
    let reset_cutoff = now - chrono::Duration::seconds(state.config.draft_reset_after_secs);
    let idle_cutoff = now - chrono::Duration::seconds(state.config.draft_idle_ttl_secs);

    let mut outcome = SweepOutcome::default();

    for draft in state.draft_repo.list_completed_before(reset_cutoff).await? {
        // The guest may have reset or discarded it since the listing.
        let reset = state.draft_repo.modify(&draft.id, Box::new(move |d: &mut BookingDraft| {
            if d.phase != DraftPhase::Completed || d.completed_at.is_none_or(|at| at > reset_cutoff) {
                return Err(AppError::Conflict("Draft changed since listing".into()));
            }
            d.reset();
            Ok(())
        })).await;

        match reset {
            Ok(_) => {
                outcome.reset += 1;
                debug!(draft_id = %draft.id, "Completed draft reset");
            }
            Err(AppError::NotFound(_)) | Err(AppError::Conflict(_)) => {}
            Err(e) => return Err(e),
        }
    }

    outcome.evicted = state.draft_repo.delete_idle_since(idle_cutoff).await?;
    outcome.expired_sessions = state.auth_service.purge_expired().await?;

    if outcome.reset > 0 || outcome.evicted > 0 || outcome.expired_sessions > 0 {
        info!(
            reset = outcome.reset,
            evicted = outcome.evicted,
            expired_sessions = outcome.expired_sessions,
            "Sweep finished"
        );
    }
    Ok(outcome)
}
