//! # Number Classification
//!
//! Feature slice for the classify-number endpoint. It combines pure
//! number-theoretic predicates ([`classifier`]) with the cached fun-fact
//! client and exposes a single route:
//!
//! `GET /api/numberclassification/classify-number?number=<value>`
//!
//! ## Contract
//! * Valid input → `200` with number, primality, perfection, property tags,
//!   digit sum, and a fun fact.
//! * Missing/empty/non-integer input → `400` echoing the raw input.
//! * Fun-fact service failure → `502` with a generic error body.

mod api;
pub mod classifier;
mod error;

pub use crate::api::ClassificationResponse;
pub use crate::classifier::{Classification, classify, digit_sum, is_armstrong, is_perfect, is_prime};
pub use crate::error::ClassificationError;

use axum::extract::FromRef;
use numclass_facts::FactsClient;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes contributed by this slice.
pub fn classification_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
    FactsClient: FromRef<S>,
{
    OpenApiRouter::<S>::new().routes(routes!(api::classify_number_handler))
}
