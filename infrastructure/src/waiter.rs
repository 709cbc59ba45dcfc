//! Wall-clock courtesy delay

use async_trait::async_trait;
use newsdesk_application::Waiter;
use std::time::Duration;

/// [`Waiter`] backed by `tokio::time::sleep`
pub struct TokioWaiter;

#[async_trait]
impl Waiter for TokioWaiter {
    async fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
