//! Transport collaborator trait
//!
//! The HTTP client itself lives outside this core. Timeouts, retries and
//! cancellation are entirely the transport's responsibility; this layer
//! only awaits the envelope and decides whether the response is still
//! current.

use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// The backend HTTP boundary consumed by the grid.
///
/// Implementations map failures to [`GridError::Transport`]; the grid
/// never inspects status codes or bodies beyond the JSON envelope.
///
/// [`GridError::Transport`]: crate::GridError::Transport
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request with query parameters
    async fn get(&self, url: &str, params: &HashMap<String, String>) -> Result<Value>;

    /// Issue a POST request with a JSON body
    async fn post(&self, url: &str, body: &Value) -> Result<Value>;
}
