//! Local stand-in for form delivery.
//!
//! Nothing leaves the process: the payload is logged after a fixed pause and
//! the submission always succeeds.

use std::time::Duration;

use serde::Serialize;

/// Wait `delay`, log `payload`, and return the time it was "delivered".
pub async fn simulate_delivery<T: Serialize>(kind: &str, payload: &T, delay: Duration) -> jiff::Timestamp {
    tokio::time::sleep(delay).await;

    match serde_json::to_string(payload) {
        Ok(body) => tracing::info!(kind, %body, "form submitted"),
        Err(e) => tracing::info!(kind, error = %e, "form submitted (payload not serializable)"),
    }

    jiff::Timestamp::now()
}
