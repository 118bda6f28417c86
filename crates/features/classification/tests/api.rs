use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use numclass_classification::classification_router;
use numclass_facts::FactsClient;
use tower::ServiceExt;

const CLASSIFY: &str = "/api/numberclassification/classify-number";

fn app(server: &MockServer) -> Router {
    let facts = FactsClient::builder().base_url(server.base_url()).init().expect("facts client");
    let (router, _api) = classification_router::<FactsClient>().split_for_parts();
    router.with_state(facts)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response =
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn valid_number_is_classified() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/28/math");
        then.status(200).body("28 is a perfect number.");
    });

    let (status, body) = get_json(app(&server), &format!("{CLASSIFY}?number=28")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], 28);
    assert_eq!(body["is_prime"], false);
    assert_eq!(body["is_perfect"], true);
    assert_eq!(body["properties"], serde_json::json!(["even"]));
    assert_eq!(body["digit_sum"], 10);
    assert_eq!(body["fun_fact"], "28 is a perfect number.");
}

#[tokio::test]
async fn armstrong_properties_are_sorted() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/153/math");
        then.status(200).body("153 is an Armstrong number.");
    });

    let (status, body) = get_json(app(&server), &format!("{CLASSIFY}?number=153")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["properties"], serde_json::json!(["armstrong", "odd"]));
}

#[tokio::test]
async fn non_numeric_input_is_rejected_with_echo() {
    let server = MockServer::start();

    let (status, body) = get_json(app(&server), &format!("{CLASSIFY}?number=abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": true, "number": "abc" }));
}

#[tokio::test]
async fn missing_parameter_echoes_an_empty_string() {
    let server = MockServer::start();

    let (status, body) = get_json(app(&server), CLASSIFY).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": true, "number": "" }));
}

#[tokio::test]
async fn whitespace_only_input_echoes_the_raw_value() {
    let server = MockServer::start();

    let (status, body) = get_json(app(&server), &format!("{CLASSIFY}?number=%20%20")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": true, "number": "  " }));
}

#[tokio::test]
async fn upstream_failure_surfaces_as_bad_gateway() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/7/math");
        then.status(500).body("boom");
    });

    let (status, body) = get_json(app(&server), &format!("{CLASSIFY}?number=7")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn repeated_requests_reuse_the_cached_fact() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/42/math");
        then.status(200).body("42 is the answer.");
    });

    let facts = FactsClient::builder().base_url(server.base_url()).init().expect("facts client");
    let (router, _api) = classification_router::<FactsClient>().split_for_parts();
    let app = router.with_state(facts);

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("{CLASSIFY}?number=42"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    mock.assert_hits(1);
}
