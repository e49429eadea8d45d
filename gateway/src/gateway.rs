use std::sync::Arc;

use orgdesk_protocol::Envelope;
use orgdesk_protocol::ResultStatus;
use orgdesk_protocol::TokenPair;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::json;
use tokio::sync::Mutex;
use tokio::sync::oneshot;
use tracing::debug;
use tracing::warn;

use crate::error::Error;
use crate::error::Result;
use crate::notify::UserNotifier;
use crate::request::ApiRequest;
use crate::session::SessionStore;
use crate::transport::Transport;
use crate::transport::WireRequest;
use crate::transport::WireResponse;

/// Path of the token refresh endpoint, relative to the API base.
pub const REFRESH_PATH: &str = "auth/refresh";

/// Fallback for a success-status response whose envelope carries no
/// message.
const REQUEST_FAILED: &str = "the request could not be completed";

/// Waiters parked on an in-flight refresh, drained in insertion order
/// when it settles. `in_flight` and the queue are only touched with the
/// lock held, so a burst of 401s elects exactly one leader.
#[derive(Default)]
struct RefreshState {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<Result<String>>>,
}

enum RefreshRole {
    Leader,
    Waiter(oneshot::Receiver<Result<String>>),
}

/// Authenticated front door to the admin backend.
///
/// One instance per process; every service client holds an `Arc` to it.
/// Outbound, it attaches `Authorization: Bearer <access>` for the
/// current session. Inbound, it unwraps the response envelope, and on a
/// first 401 runs the refresh protocol: a single refresh call per
/// expiry, with every other 401-hit caller queued until it settles.
pub struct SessionGateway {
    transport: Arc<dyn Transport>,
    session: Arc<SessionStore>,
    notifier: Arc<dyn UserNotifier>,
    refresh: Mutex<RefreshState>,
}

impl SessionGateway {
    pub fn new(
        transport: Arc<dyn Transport>,
        session: Arc<SessionStore>,
        notifier: Arc<dyn UserNotifier>,
    ) -> Self {
        Self {
            transport,
            session,
            notifier,
            refresh: Mutex::new(RefreshState::default()),
        }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Perform a call and decode the envelope `data` into `T`.
    pub async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let data = self.perform(request).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Perform a call and return the raw envelope `data`.
    pub async fn perform(&self, request: ApiRequest) -> Result<Value> {
        let authorization = self.bearer();
        self.submit(request, authorization, false).await
    }

    fn bearer(&self) -> Option<String> {
        self.session
            .access_token()
            .map(|token| format!("Bearer {token}"))
    }

    async fn submit(
        &self,
        request: ApiRequest,
        authorization: Option<String>,
        retried: bool,
    ) -> Result<Value> {
        let wire = WireRequest {
            request: request.clone(),
            authorization,
        };
        match self.transport.execute(wire).await {
            Ok(response) if response.status.is_success() => unwrap_envelope(&response.body),
            Ok(response) => {
                Box::pin(self.handle_http_failure(request, response, retried)).await
            }
            Err(err) => {
                let message = err.to_string();
                warn!(path = %request.path, %message, "request failed without a response");
                self.notifier.error(&message);
                Err(err)
            }
        }
    }

    /// Non-2xx handling: the refresh state machine.
    ///
    /// A first 401 is recovered through the refresh protocol; everything
    /// else (other statuses, or a 401 on an already-retried attempt) is
    /// surfaced once to the user and propagated.
    async fn handle_http_failure(
        &self,
        request: ApiRequest,
        response: WireResponse,
        retried: bool,
    ) -> Result<Value> {
        let envelope = decode_envelope(&response.body);
        let had_envelope = envelope.is_some();
        let message = envelope
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| format!("request failed with status {}", response.status));

        if response.status != StatusCode::UNAUTHORIZED || retried {
            self.notifier.error(&message);
            return Err(terminal_error(response.status, had_envelope, message));
        }

        let Some(refresh_token) = self.session.refresh_token() else {
            debug!(path = %request.path, "unauthorized without a refresh token, signing out");
            self.session.sign_out();
            self.notifier.error(&message);
            return Err(Error::Unauthorized { message });
        };

        match self.join_refresh().await {
            RefreshRole::Waiter(outcome) => {
                let token = match outcome.await {
                    Ok(settled) => settled?,
                    Err(_) => {
                        return Err(Error::RefreshFailed {
                            message: "refresh settled without a token".to_string(),
                        });
                    }
                };
                self.submit(request, Some(format!("Bearer {token}")), true)
                    .await
            }
            RefreshRole::Leader => self.lead_refresh(request, refresh_token).await,
        }
    }

    /// Atomic check-then-set on the refresh flag: either become the one
    /// caller performing the refresh, or park on the queue.
    async fn join_refresh(&self) -> RefreshRole {
        let mut state = self.refresh.lock().await;
        if state.in_flight {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            RefreshRole::Waiter(rx)
        } else {
            state.in_flight = true;
            RefreshRole::Leader
        }
    }

    async fn lead_refresh(&self, request: ApiRequest, refresh_token: String) -> Result<Value> {
        debug!(path = %request.path, "access token rejected, refreshing session");
        let outcome = self.call_refresh_endpoint(&refresh_token).await;

        // Clear the flag and take the queue in one locked step, so a 401
        // that lands after this point starts a fresh cycle instead of
        // parking on a queue nobody will drain.
        let waiters = {
            let mut state = self.refresh.lock().await;
            state.in_flight = false;
            std::mem::take(&mut state.waiters)
        };

        match outcome {
            Ok(tokens) => {
                self.session.set_tokens(tokens.clone());
                for waiter in waiters {
                    let _ = waiter.send(Ok(tokens.access_token.clone()));
                }
                self.submit(
                    request,
                    Some(format!("Bearer {}", tokens.access_token)),
                    true,
                )
                .await
            }
            Err(err) => {
                let message = refresh_failure_message(&err);
                warn!(%message, "session refresh failed, signing out");
                for waiter in waiters {
                    let _ = waiter.send(Err(Error::RefreshFailed {
                        message: message.clone(),
                    }));
                }
                self.session.sign_out();
                self.notifier.error(&message);
                Err(Error::RefreshFailed { message })
            }
        }
    }

    /// One refresh round trip against the transport. Goes straight to the
    /// transport so a rejected refresh can never recurse into the 401
    /// handler.
    async fn call_refresh_endpoint(&self, refresh_token: &str) -> Result<TokenPair> {
        let request =
            ApiRequest::post(REFRESH_PATH).json(json!({ "refreshToken": refresh_token }));
        let wire = WireRequest {
            request,
            authorization: self.bearer(),
        };
        let response = self.transport.execute(wire).await?;
        if !response.status.is_success() {
            let message = decode_envelope(&response.body)
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| format!("refresh rejected with status {}", response.status));
            return Err(Error::RefreshFailed { message });
        }
        let data = unwrap_envelope(&response.body)?;
        Ok(serde_json::from_value(data)?)
    }
}

fn terminal_error(status: StatusCode, had_envelope: bool, message: String) -> Error {
    if status == StatusCode::UNAUTHORIZED {
        Error::Unauthorized { message }
    } else if had_envelope {
        Error::Api { message }
    } else {
        Error::Transport { message }
    }
}

fn refresh_failure_message(err: &Error) -> String {
    match err {
        Error::RefreshFailed { message } => message.clone(),
        other => other.to_string(),
    }
}

fn decode_envelope(body: &Value) -> Option<Envelope> {
    if !body.is_object() {
        return None;
    }
    serde_json::from_value(body.clone()).ok()
}

fn unwrap_envelope(body: &Value) -> Result<Value> {
    let Some(envelope) = decode_envelope(body) else {
        return Err(Error::Transport {
            message: "response is not an API envelope".to_string(),
        });
    };
    if envelope.status == ResultStatus::Success {
        Ok(envelope.data)
    } else {
        Err(Error::Api {
            message: envelope
                .message
                .unwrap_or_else(|| REQUEST_FAILED.to_string()),
        })
    }
}
