use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SequenceRequest {
    pub sequence: String,
}

#[derive(Debug, Serialize)]
pub struct GcResponse {
    pub gc_percent: f64,
}

#[derive(Debug, Serialize)]
pub struct RevCompResponse {
    pub revcomp: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}
