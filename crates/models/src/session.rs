use serde::{Deserialize, Serialize};

/// Stored proof of authentication, kept across runs. Written only after a
/// successful login; there is no expiry tracking — a stale token is only
/// discovered when the server rejects a later call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub user_data: serde_json::Value,
}

impl Session {
    pub fn new(access_token: String, token_type: String, user_data: serde_json::Value) -> Self {
        Self { access_token, token_type, user_data }
    }

    /// Token value to place behind the `Bearer` scheme.
    pub fn bearer_token(&self) -> &str {
        &self.access_token
    }
}
