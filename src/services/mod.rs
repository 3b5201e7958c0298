//! Application services layer.
//!
//! A service is the unit of work a controller runs. Concrete services
//! implement [`Service`] and are injected into a
//! [`DefaultController`](crate::api::DefaultController).

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Single-operation service contract.
#[cfg_attr(any(test, feature = "test-utils"), automock(type Output = serde_json::Value;))]
#[async_trait]
pub trait Service: Send + Sync {
    /// Payload placed under `data` in the success envelope
    type Output: Serialize + Send;

    async fn run(&self) -> AppResult<Self::Output>;
}
