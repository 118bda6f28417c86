use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use numclass_facts::FactsError;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// A specialized [`ClassificationError`] enum of this crate.
#[derive(Debug, Error)]
pub enum ClassificationError {
    /// The `number` query parameter was missing, empty, or not a base-10 integer.
    #[error("`{raw}` is not a valid base-10 integer")]
    InvalidNumber { raw: String },

    /// The fun-fact fetch failed; the request cannot be completed.
    #[error(transparent)]
    Facts(#[from] FactsError),
}

impl IntoResponse for ClassificationError {
    fn into_response(self) -> Response {
        match self {
            // Contract: echo the raw input back to the caller.
            Self::InvalidNumber { raw } => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": true, "number": raw })))
                    .into_response()
            },
            Self::Facts(source) => {
                warn!(%source, "fun fact lookup failed");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({ "error": true, "message": "fun fact service unavailable" })),
                )
                    .into_response()
            },
        }
    }
}
