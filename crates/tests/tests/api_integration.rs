use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use itinera_api::{build_app, build_router, ApiConfig, ApiState};
use itinera_core::PlannerConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

const API_KEY: &str = "dev-itinera-key";

fn app() -> Router {
    build_router(ApiState::new(&ApiConfig::default(), PlannerConfig::default()))
}

fn plan_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/plan")
        .header("content-type", "application/json")
        .header("x-api-key", API_KEY)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = json_body(response).await;
    assert_eq!(parsed["status"], "ok");
    assert!(parsed["metrics"].get("requests_total").is_some());
}

#[tokio::test]
async fn plan_requires_api_key() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/plan")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "location": "Kochi", "budget": "10000", "people": 2 }).to_string(),
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["error"], "unauthorized");
}

#[tokio::test]
async fn plan_returns_full_itinerary() {
    let response = app()
        .oneshot(plan_request(json!({
            "location": "Nowhereville",
            "budget": "$500",
            "people": 4
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let plan = json_body(response).await;
    assert_eq!(plan["city"], "Nowhereville");
    assert_eq!(plan["currency"], "usd");

    let hotels = plan["hotels"].as_array().unwrap();
    assert_eq!(hotels.len(), 3);
    assert!(hotels.iter().all(|hotel| hotel["capacity"].as_u64() >= Some(4)));

    let attractions = plan["attractions"].as_array().unwrap();
    assert_eq!(attractions.len(), 3);
    for attraction in attractions {
        assert!(attraction["name"]
            .as_str()
            .unwrap()
            .starts_with("Nowhereville "));
        assert_eq!(attraction["transport"].as_array().unwrap().len(), 4);
        assert!(attraction.get("bestTime").is_some());
        assert!(attraction.get("entryCost").is_some());
    }

    // $500 is above the extended-trip threshold once converted
    assert_eq!(plan["days"].as_array().unwrap().len(), 3);
    assert!(plan["totalEstimated"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn seeded_requests_are_reproducible() {
    let body = json!({
        "location": "ooty",
        "budget": 18000,
        "people": "3",
        "seed": 99
    });

    let first = json_body(app().oneshot(plan_request(body.clone())).await.unwrap()).await;
    let second = json_body(app().oneshot(plan_request(body)).await.unwrap()).await;
    assert_eq!(first, second);
    assert_eq!(first["currency"], "inr");
}

#[tokio::test]
async fn cities_lists_curated_destinations() {
    let request = Request::builder()
        .uri("/v1/cities")
        .header("x-api-key", API_KEY)
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await["cities"],
        json!(["Varkala", "Kochi", "Ooty"])
    );
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/plan")
        .header("content-type", "application/json")
        .header("x-api-key", API_KEY)
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
    assert_eq!(json_body(response).await["error"], "invalid_body");
}

#[tokio::test]
async fn missing_fields_fall_back_to_defaults() {
    let response = app()
        .oneshot(plan_request(json!({ "location": "Varkala" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let plan = json_body(response).await;
    assert_eq!(plan["currency"], "inr");
    assert!(plan["hotels"]
        .as_array()
        .unwrap()
        .iter()
        .all(|hotel| hotel["price"].as_u64() >= Some(600)));
}

#[tokio::test]
async fn non_scalar_fields_still_produce_a_plan() {
    for body in [
        json!({ "location": "Kochi", "budget": "₹8000", "people": null }),
        json!({ "location": "Kochi", "budget": true, "people": 2 }),
        json!({ "location": "Kochi", "budget": null, "people": [3] }),
    ] {
        let response = app().oneshot(plan_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let plan = json_body(response).await;
        assert_eq!(plan["currency"], "inr");
        assert_eq!(plan["hotels"].as_array().unwrap().len(), 3);
    }
}

#[tokio::test]
async fn fractional_party_gets_enough_beds() {
    let response = app()
        .oneshot(plan_request(json!({
            "location": "Kochi",
            "budget": "₹20000",
            "people": 2.5,
            "seed": 1
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let plan = json_body(response).await;
    let hotels = plan["hotels"].as_array().unwrap();
    assert!(hotels.iter().all(|hotel| hotel["capacity"] == 3));
    let prices = hotels
        .iter()
        .map(|hotel| hotel["price"].as_u64().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(prices, vec![1750, 2125, 2500]);
}

#[tokio::test]
async fn app_built_from_config_serves_health() {
    let app = build_app(&ApiConfig::default()).expect("app should build");
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn rate_limit_rejects_after_quota() {
    let config = ApiConfig {
        rate_limit_window: Duration::from_secs(60),
        rate_limit_max: 2,
        ..ApiConfig::default()
    };
    let app = build_router(ApiState::new(&config, PlannerConfig::default()));

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(plan_request(json!({ "location": "Kochi" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(plan_request(json!({ "location": "Kochi" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key(header::RETRY_AFTER));
}
