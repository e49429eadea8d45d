use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::Error;
use crate::error::Result;
use crate::request::ApiRequest;
use crate::request::Method;
use crate::transport::Transport;
use crate::transport::WireRequest;
use crate::transport::WireResponse;

/// Matches the request timeout the admin console has always used.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(50);

/// Production [`Transport`] over a shared `reqwest::Client`.
///
/// `base_url` must end with a trailing slash so relative endpoint paths
/// join underneath it (`https://host/api/` + `users` = `/api/users`).
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(base_url: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Use a caller-configured client (custom timeout, proxy, extra
    /// default headers).
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self
            .base_url
            .join(&request.path)
            .map_err(|err| Error::Transport {
                message: format!("invalid request path {}: {err}", request.path),
            })?;
        for (key, value) in &request.query {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: WireRequest) -> Result<WireResponse> {
        let url = self.url_for(&request.request)?;
        let mut builder = match request.request.method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
            Method::Put => self.http.put(url),
            Method::Delete => self.http.delete(url),
        };
        if let Some(body) = &request.request.body {
            builder = builder.json(body);
        }
        if let Some(authorization) = &request.authorization {
            builder = builder.header(reqwest::header::AUTHORIZATION, authorization);
        }

        let response = builder.send().await?;
        let status = response.status();
        // Non-JSON payloads surface as Null and turn into an envelope
        // error at the gateway, not a transport panic.
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Ok(WireResponse { status, body })
    }
}
