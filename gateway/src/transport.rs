use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::Result;
use crate::request::ApiRequest;

/// A request as it goes out on the wire: the immutable descriptor plus
/// the resolved `Authorization` header value, when one applies.
#[derive(Debug, Clone)]
pub struct WireRequest {
    pub request: ApiRequest,
    pub authorization: Option<String>,
}

/// Any HTTP response the server produced. `body` is `Value::Null` when
/// the payload was not JSON.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Raw HTTP dependency injected into the gateway.
///
/// Implementations return `Ok` for every response the server produced,
/// whatever its status code, and `Err(Error::Transport)` only when no
/// response was received at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: WireRequest) -> Result<WireResponse>;
}
