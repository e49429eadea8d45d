use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Response body wrapper used by every backend endpoint.
///
/// `data` is kept as raw JSON; callers decode it once the gateway has
/// checked `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub status: ResultStatus,
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Backend-level outcome carried inside the envelope, independent of the
/// HTTP status code. Values the client does not know about decode to
/// `Unknown` rather than failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultStatus {
    Success,
    Error,
    Timeout,
    #[serde(other)]
    Unknown,
}
