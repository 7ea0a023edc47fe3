use crate::models::{LoginRequest, SignupRequest};
use chrono::{DateTime, Utc};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

/// Errors from the simulated auth flow
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// A signed-in session issued by the simulated backend
#[derive(Debug, Clone, serde::Serialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Simulated authentication service
///
/// There is no backend: requests are validated, the configured latency is
/// awaited (the original form simulates its API call with a 1500 ms timeout),
/// and a fresh session is issued. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct AuthService {
    simulated_latency: Duration,
}

impl AuthService {
    pub fn new(simulated_latency_ms: u64) -> Self {
        Self {
            simulated_latency: Duration::from_millis(simulated_latency_ms),
        }
    }

    pub async fn sign_up(&self, request: &SignupRequest) -> Result<AuthSession, AuthError> {
        request.validate()?;

        if request.password != request.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        tracing::info!("Signing up {}", request.email);
        tokio::time::sleep(self.simulated_latency).await;

        Ok(self.issue_session(format!("{} {}", request.first_name, request.last_name)))
    }

    pub async fn log_in(&self, request: &LoginRequest) -> Result<AuthSession, AuthError> {
        request.validate()?;

        tracing::info!("Logging in {}", request.email);
        tokio::time::sleep(self.simulated_latency).await;

        let display_name = request
            .email
            .split('@')
            .next()
            .unwrap_or(&request.email)
            .to_string();

        Ok(self.issue_session(display_name))
    }

    fn issue_session(&self, display_name: String) -> AuthSession {
        AuthSession {
            token: Uuid::new_v4().to_string(),
            user_id: Uuid::new_v4().to_string(),
            display_name,
            created_at: Utc::now(),
        }
    }
}
