use serde::{Deserialize, Serialize};

use crate::error::AlertError;

/// Body of `POST /register` and `POST /login`.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Both fields present and non-empty, or [`AlertError::MissingCredentials`].
    pub fn require(self) -> Result<(String, String), AlertError> {
        let email = self
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        let password = self.password.filter(|p| !p.is_empty());
        match (email, password) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(AlertError::MissingCredentials),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_count_as_missing() {
        let req = CredentialsRequest {
            email: Some("   ".into()),
            password: Some("pw".into()),
        };
        assert!(matches!(req.require(), Err(AlertError::MissingCredentials)));

        let req = CredentialsRequest {
            email: Some("a@example.com".into()),
            password: Some(String::new()),
        };
        assert!(matches!(req.require(), Err(AlertError::MissingCredentials)));
    }

    #[test]
    fn email_is_trimmed() {
        let req = CredentialsRequest {
            email: Some(" a@example.com ".into()),
            password: Some(" pw ".into()),
        };
        let (email, password) = req.require().unwrap();
        assert_eq!(email, "a@example.com");
        assert_eq!(password, " pw ");
    }
}
