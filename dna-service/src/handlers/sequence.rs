use crate::dtos::{GcResponse, RevCompResponse, SequenceRequest};
use crate::services::sequence;
use axum::Json;
use service_core::error::AppError;

/// Compute the GC content of the submitted sequence.
pub async fn gc(Json(req): Json<SequenceRequest>) -> Result<Json<GcResponse>, AppError> {
    let gc_percent =
        sequence::gc_percent(&req.sequence).map_err(|e| AppError::BadRequest(e.into()))?;

    Ok(Json(GcResponse { gc_percent }))
}

/// Compute the reverse complement. The transform is total, so this handler
/// has no failure path.
pub async fn revcomp(Json(req): Json<SequenceRequest>) -> Json<RevCompResponse> {
    Json(RevCompResponse {
        revcomp: sequence::reverse_complement(&req.sequence),
    })
}
