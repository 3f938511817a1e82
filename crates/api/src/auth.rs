//! Remote form actions: sign-in and registration.
//!
//! Both actions make exactly one network call and collapse every outcome,
//! transport failures included, into a [`SubmissionResult`]. Retrying is
//! left to the user resubmitting the form.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use common::types::{ApiResponse, ErrorMessage};
use forms::{AuthApi, FieldError, FormValues, SubmissionResult};
use models::auth::{LoginInput, RegisterInput, RegisteredUser};

use crate::{ApiClient, ApiError};

/// Wire shape of the credential sign-in endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    pub ok: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiClient {
    async fn post_sign_in(&self, input: &LoginInput) -> Result<SignInResponse, ApiError> {
        let resp = self
            .http
            .post(self.url("/auth/signin"))
            .json(input)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        resp.json::<SignInResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post_register(
        &self,
        input: &RegisterInput,
    ) -> Result<ApiResponse<RegisteredUser>, ApiError> {
        let resp = self
            .http
            .post(self.url("/auth/register"))
            .json(input)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        resp.json::<ApiResponse<RegisteredUser>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// A falsy success indicator without a structured message maps to the
/// localized fallback; so does any transport failure.
fn normalize_sign_in(
    outcome: Result<SignInResponse, ApiError>,
    fallback: &str,
) -> SubmissionResult {
    match outcome {
        Ok(resp) if resp.ok => SubmissionResult::Success { redirect_target: resp.url },
        Ok(resp) => SubmissionResult::GlobalError {
            message: resp
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        },
        Err(err) => {
            debug!(error = %err, "sign-in transport failure");
            SubmissionResult::GlobalError { message: fallback.to_string() }
        }
    }
}

/// Registration envelopes carry either per-field errors (mapped 1:1, field
/// names passed through verbatim) or a single message.
fn normalize_register(
    outcome: Result<ApiResponse<RegisteredUser>, ApiError>,
    fallback: &str,
) -> SubmissionResult {
    match outcome {
        Ok(ApiResponse::Success(_)) => SubmissionResult::Success { redirect_target: None },
        Ok(ApiResponse::Error(err)) => match err.message {
            ErrorMessage::Fields(fields) => SubmissionResult::FieldErrors(
                fields
                    .into_iter()
                    .map(|f| FieldError::new(f.field, f.error_message))
                    .collect(),
            ),
            ErrorMessage::Text(message) => SubmissionResult::GlobalError { message },
        },
        Err(err) => {
            debug!(error = %err, "registration transport failure");
            SubmissionResult::GlobalError { message: fallback.to_string() }
        }
    }
}

fn login_input(values: &FormValues) -> LoginInput {
    LoginInput {
        username: values.get("username").to_string(),
        password: values.get("password").to_string(),
    }
}

fn register_input(values: &FormValues) -> RegisterInput {
    RegisterInput {
        username: values.get("username").to_string(),
        first_name: values.get("firstName").to_string(),
        last_name: values.get("lastName").to_string(),
        email: values.get("email").to_string(),
        password: values.get("password").to_string(),
        password_confirm: values.get("passwordConfirm").to_string(),
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn sign_in(&self, values: &FormValues) -> SubmissionResult {
        let outcome = self.post_sign_in(&login_input(values)).await;
        normalize_sign_in(outcome, self.fallback_message())
    }

    async fn register(&self, values: &FormValues) -> SubmissionResult {
        let outcome = self.post_register(&register_input(values)).await;
        normalize_register(outcome, self.fallback_message())
    }
}
