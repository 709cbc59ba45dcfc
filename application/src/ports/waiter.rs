//! Courtesy delay port

use async_trait::async_trait;
use std::time::Duration;

/// Pauses between successful generations to go easy on the service
#[async_trait]
pub trait Waiter: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Waiter that returns immediately
pub struct NoWait;

#[async_trait]
impl Waiter for NoWait {
    async fn wait(&self, _duration: Duration) {}
}
