use crate::classifier::{self, Classification};
use crate::error::ClassificationError;
use axum::Json;
use axum::extract::{Query, State};
use numclass_domain::constants::CLASSIFICATION_TAG;
use numclass_facts::FactsClient;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

/// Query parameters of the classify-number endpoint.
///
/// A missing `number` parameter deserializes to the empty string so that
/// missing and empty inputs share one validation path (and one echo).
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct ClassifyParams {
    /// The integer to classify, as a raw string.
    #[serde(default)]
    number: String,
}

/// Classification result returned on success.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClassificationResponse {
    /// The classified integer.
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    /// Parity tag plus `armstrong` when applicable, sorted alphabetically.
    #[schema(value_type = Vec<String>)]
    pub properties: Vec<&'static str>,
    pub digit_sum: u32,
    /// Short text fact about the number, fetched from the trivia service.
    pub fun_fact: String,
}

impl ClassificationResponse {
    fn new(classification: Classification, fun_fact: String) -> Self {
        Self {
            number: classification.number,
            is_prime: classification.is_prime,
            is_perfect: classification.is_perfect,
            properties: classification.properties,
            digit_sum: classification.digit_sum,
            fun_fact,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/numberclassification/classify-number",
    params(ClassifyParams),
    responses(
        (status = OK, description = "Classification of the given integer", body = ClassificationResponse),
        (status = BAD_REQUEST, description = "Missing or non-integer `number` parameter"),
        (status = BAD_GATEWAY, description = "Fun-fact service unavailable"),
    ),
    tag = CLASSIFICATION_TAG,
)]
pub(crate) async fn classify_number_handler(
    State(facts): State<FactsClient>,
    Query(params): Query<ClassifyParams>,
) -> Result<Json<ClassificationResponse>, ClassificationError> {
    let number = parse_number(&params.number)
        .ok_or_else(|| ClassificationError::InvalidNumber { raw: params.number })?;

    let classification = classifier::classify(number);
    debug!(number, ?classification.properties, "classified");

    let fun_fact = facts.fun_fact(number).await?;

    Ok(Json(ClassificationResponse::new(classification, fun_fact)))
}

/// Validates the raw query value: empty/whitespace-only and anything that is
/// not a base-10 `i64` are rejected.
fn parse_number(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
