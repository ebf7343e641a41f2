use crate::dtos::{ExplainResponse, SequenceRequest};
use crate::services::providers::ProviderError;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Ask the configured text provider for a short description of the sequence.
/// Reports 501 when no provider is configured.
pub async fn explain(
    State(state): State<AppState>,
    Json(req): Json<SequenceRequest>,
) -> Result<Json<ExplainResponse>, AppError> {
    let Some(provider) = state.text_provider.as_ref() else {
        return Err(AppError::NotImplemented("LLM not configured.".to_string()));
    };

    let prompt = format!(
        "Explain briefly what is notable about this DNA snippet. \
         Include GC%, length, and whether reverse-complement suggests palindromic hints. \
         DNA: {}",
        req.sequence
    );

    let explanation = provider.generate(&prompt).await.map_err(|e| match e {
        ProviderError::NotConfigured(msg) => AppError::NotImplemented(msg),
        other => {
            tracing::error!(error = %other, "Text provider call failed");
            AppError::UpstreamError(other.to_string())
        }
    })?;

    Ok(Json(ExplainResponse { explanation }))
}
