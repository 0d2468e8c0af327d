//! Integration tests for ranking HTTP endpoints.
//!
//! These tests drive the assembled router end to end:
//! 1. Request bodies deserialize into commands
//! 2. Decisions are stored and can be fetched back
//! 3. Errors come back as `{code, message}` with the right status

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use deepcal::adapters::http::{app_router, RankingAppState};
use deepcal::adapters::InMemoryDecisionRepository;
use deepcal::config::ServerConfig;
use deepcal::domain::ranking::EngineSettings;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let state = RankingAppState::new(
        Arc::new(InMemoryDecisionRepository::new()),
        EngineSettings::default(),
    );
    app_router(state, &ServerConfig::default())
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn two_carrier_request() -> Value {
    json!({
        "criteria": [
            {"name": "cost", "type": "cost"},
            {"name": "transit_time", "type": "cost"}
        ],
        "alternatives": [
            {"id": "A", "label": "Alpha Freight", "values": [100, 2]},
            {"id": "B", "label": "Bravo Logistics", "values": [200, 1]}
        ]
    })
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn equal_weights_tie_is_broken_by_input_order() {
    let (status, body) = send(app(), post("/api/decisions", two_carrier_request())).await;

    assert_eq!(status, StatusCode::CREATED);
    let ranking = body["result"]["ranking"].as_array().unwrap();
    assert_eq!(ranking[0]["alternative_id"], "A");
    assert_eq!(ranking[0]["rank"], 1);
    assert_eq!(ranking[1]["alternative_id"], "B");
    assert_eq!(body["result"]["weights"]["method"], "equal");
    assert!(body["summary"].as_str().unwrap().starts_with("Recommended: Alpha Freight"));
}

#[tokio::test]
async fn stored_decision_can_be_fetched() {
    let app = app();
    let mut request = two_carrier_request();
    request["judgments"] = json!([
        {"criterion": "transit_time", "over": "cost", "level": "strong"}
    ]);
    request["sensitivity"] = json!(true);

    let (status, created) = send(app.clone(), post("/api/decisions", request)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["result"]["ranking"][0]["alternative_id"], "B");
    assert!(created["sensitivity"]["perturbations"].is_array());

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = send(app, get(&format!("/api/decisions/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn unknown_decision_is_404() {
    let uri = format!("/api/decisions/{}", uuid::Uuid::new_v4());
    let (status, body) = send(app(), get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_decision_id_is_400() {
    let (status, body) = send(app(), get("/api/decisions/not-a-uuid")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn misaligned_alternative_is_400() {
    let mut request = two_carrier_request();
    request["alternatives"] = json!([{"id": "A", "values": [100]}]);

    let (status, body) = send(app(), post("/api/decisions", request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DIMENSION_MISMATCH");
    assert!(body["message"].as_str().unwrap().contains("'A'"));
}

#[tokio::test]
async fn out_of_range_triple_is_400() {
    let request = json!({
        "criteria": [{"name": "cost", "type": "cost"}, {"name": "risk", "type": "cost"}],
        "judgments": [{
            "criterion": "cost",
            "over": "risk",
            "triple": {"truth": 1.2, "indeterminacy": 0.1, "falsity": 0.0}
        }]
    });

    let (status, body) = send(app(), post("/api/weights", request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn weights_endpoint_reports_consistency() {
    let request = json!({
        "criteria": [
            {"name": "cost", "type": "cost"},
            {"name": "reliability", "type": "benefit"}
        ],
        "judgments": [
            {"criterion": "cost", "over": "reliability",
             "triple": {"truth": 0.8, "indeterminacy": 0.2, "falsity": 0.2}}
        ]
    });

    let (status, body) = send(app(), post("/api/weights", request)).await;
    assert_eq!(status, StatusCode::OK);

    let weights: Vec<f64> = serde_json::from_value(body["weights"].clone()).unwrap();
    assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    assert!(weights[0] > weights[1]);
    assert_eq!(body["consistent"], true);
    assert_eq!(body["method"], "geometric_mean");
}

#[tokio::test]
async fn unknown_criterion_in_judgment_is_400() {
    let request = json!({
        "criteria": [{"name": "cost", "type": "cost"}],
        "judgments": [{"criterion": "cost", "over": "speed", "level": "moderate"}]
    });

    let (status, body) = send(app(), post("/api/weights", request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CRITERION_NOT_FOUND");
}

#[tokio::test]
async fn quotes_rank_with_standard_presets() {
    let request = json!({
        "quotes": [
            {
                "forwarder": "premium",
                "label": "Premium Air",
                "cost": 3000,
                "transit_days": 4,
                "reliability": 0.97,
                "risk": 0.02
            },
            {
                "forwarder": "budget",
                "label": "Budget Sea",
                "cost": 1200,
                "transit_days": {"lower": 4, "upper": 6},
                "reliability": {"truth": 0.9, "indeterminacy": 0.1, "falsity": 0.05},
                "risk": 0.03
            }
        ]
    });

    let (status, body) = send(app(), post("/api/quotes/rank", request)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["result"]["ranking"][0]["alternative_id"], "budget");
    assert_eq!(
        body["result"]["weights"]["criteria"],
        json!(["cost", "transit_time", "reliability", "risk"])
    );
}

#[tokio::test]
async fn empty_alternatives_give_empty_ranking() {
    let request = json!({"criteria": [{"name": "cost", "type": "cost"}]});

    let (status, body) = send(app(), post("/api/decisions", request)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["result"]["ranking"], json!([]));
    assert_eq!(body["summary"], "No alternatives were ranked.");
}
