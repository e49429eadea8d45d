use serde::Deserialize;
use serde::Serialize;

use crate::entity::UserInfo;

/// Credential pair held for a signed-in user.
///
/// The access token rides on every request as a bearer header; the
/// refresh token is only ever sent to the refresh endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// `data` payload of the sign-in and sign-up endpoints: the token pair
/// plus the signed-in user, flattened into one object on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub user: UserInfo,
}
