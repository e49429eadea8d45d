use std::sync::Arc;

use orgdesk_gateway::ApiRequest;
use orgdesk_gateway::Result;
use orgdesk_gateway::SessionGateway;
use orgdesk_protocol::SignInRequest;
use orgdesk_protocol::SignInResponse;
use orgdesk_protocol::SignUpRequest;
use orgdesk_protocol::UserInfo;
use tracing::debug;

/// Sign-in/sign-up flows. The returned token pair is written straight
/// into the shared session store so subsequent calls go out
/// authenticated.
pub struct AuthClient {
    gateway: Arc<SessionGateway>,
}

impl AuthClient {
    pub fn new(gateway: Arc<SessionGateway>) -> Self {
        Self { gateway }
    }

    pub async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse> {
        let response: SignInResponse = self
            .gateway
            .call(ApiRequest::post("auth/signin").json(serde_json::to_value(request)?))
            .await?;
        self.gateway.session().set_tokens(response.tokens.clone());
        debug!(user = %response.user.email, "signed in");
        Ok(response)
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SignInResponse> {
        let response: SignInResponse = self
            .gateway
            .call(ApiRequest::post("auth/signup").json(serde_json::to_value(request)?))
            .await?;
        self.gateway.session().set_tokens(response.tokens.clone());
        Ok(response)
    }

    /// Profile of the signed-in user.
    pub async fn me(&self) -> Result<UserInfo> {
        self.gateway.call(ApiRequest::get("auth/me")).await
    }

    /// Local sign-out: clears the session; no backend call involved.
    pub fn sign_out(&self) {
        self.gateway.session().sign_out();
    }
}
