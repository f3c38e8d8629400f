use crate::error::GatewayError;
use crate::models::{AskRequest, AskResponse};
use crate::startup::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};

/// `POST /api/perguntar`
///
/// A body that is not a JSON object is treated as an empty one, which then
/// fails validation like a missing `pergunta`.
#[tracing::instrument(skip(state, payload))]
pub async fn ask_question(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, GatewayError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable request body");
            AskRequest::default()
        }
    };

    let result = state
        .gateway
        .answer_question(request.question(), request.history())
        .await;

    match result {
        Ok(answer) => {
            tracing::info!(
                source = answer.source.as_str(),
                with_history = request.history().is_some(),
                answer_len = answer.text.len(),
                "Question answered"
            );
            Ok(Json(AskResponse {
                resposta: answer.text,
            }))
        }
        Err(GatewayError::Validation) => {
            tracing::info!("Rejected request without question");
            Err(GatewayError::Validation)
        }
        Err(GatewayError::Provider { category, detail }) => {
            tracing::error!(
                category = ?category,
                detail = %detail,
                "Provider failed to answer question"
            );
            Err(GatewayError::Provider { category, detail })
        }
    }
}
