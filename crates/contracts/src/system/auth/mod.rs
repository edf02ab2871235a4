use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/api/accounts/login/";
pub const LOGIN_FAILED_MESSAGE: &str = "የተሳሳት ስም ወይም ቁልፍ";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// An authenticated session. Holds the token the backend issued at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    /// `None` for an empty token.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self { token })
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value of the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Token {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session() {
        assert!(Session::new("  ").is_none());
        let session = Session::new("abc123").unwrap();
        assert_eq!(session.authorization_header(), "Token abc123");
        assert_eq!(session.token(), "abc123");
    }

    #[test]
    fn test_login_response_decodes() {
        let resp: LoginResponse = serde_json::from_str(r#"{"token": "t0k"}"#).unwrap();
        assert_eq!(resp.token, "t0k");
    }
}
