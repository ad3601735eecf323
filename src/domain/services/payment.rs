use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Stand-in for a payment provider: a fixed wait that always succeeds. Not cancellable.
pub async fn simulate_payment(delay_ms: u64) {
    info!(delay_ms, "Processing simulated payment");
    if delay_ms > 0 {
        sleep(Duration::from_millis(delay_ms)).await;
    }
}
