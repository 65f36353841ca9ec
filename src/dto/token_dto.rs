use serde::{Deserialize, Serialize};

/// Body of a successful POST /token or POST /token/refresh.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenReadDto {
    pub access_token: String,
    pub token_type: String,
}

/// Claims carried by an access token. `sub` is optional so that a
/// structurally valid token without a subject is reported as a credential
/// problem rather than a parse failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenClaimsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<i64>,
    pub exp: i64,
}
