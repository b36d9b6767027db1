use serde::{Deserialize, Serialize};

/// localStorage key written by the Google sign-in flow
pub const GOOGLE_AUTH_KEY: &str = "google";
/// localStorage key written by the username/password (JWT) sign-in flow
pub const JWT_AUTH_KEY: &str = "jwt";

/// Record persisted under [`GOOGLE_AUTH_KEY`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleAuthRecord {
    pub token: String,
}

/// Record persisted under [`JWT_AUTH_KEY`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtAuthRecord {
    pub token: JwtToken,
}

/// The JWT login stores its token either wrapped (`{"token": {"token": "..."}}`)
/// or bare (`{"token": "..."}`), depending on the client version that wrote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JwtToken {
    Nested { token: String },
    Direct(String),
}

impl JwtToken {
    /// Bearer value, preferring the nested form
    pub fn bearer(&self) -> &str {
        match self {
            JwtToken::Nested { token } => token,
            JwtToken::Direct(token) => token,
        }
    }
}
