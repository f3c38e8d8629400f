use crate::models::ErrorResponse;
use crate::services::classifier::{classify, ErrorCategory};
use crate::services::providers::ProviderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Message returned when `pergunta` is missing or blank.
pub const QUESTION_REQUIRED_MESSAGE: &str = "O campo \"pergunta\" é obrigatório";

/// Failure of a single question request.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{}", QUESTION_REQUIRED_MESSAGE)]
    Validation,

    #[error("{}: {detail}", .category.user_message())]
    Provider {
        category: ErrorCategory,
        detail: String,
    },
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Validation => StatusCode::BAD_REQUEST,
            GatewayError::Provider { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        let detail = err.to_string();
        GatewayError::Provider {
            category: classify(&detail),
            detail,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            GatewayError::Validation => ErrorResponse {
                erro: QUESTION_REQUIRED_MESSAGE.to_string(),
                detalhes: None,
            },
            GatewayError::Provider { category, detail } => ErrorResponse {
                erro: category.user_message().to_string(),
                detalhes: Some(detail),
            },
        };

        (status, Json(body)).into_response()
    }
}
