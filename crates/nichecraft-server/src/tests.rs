//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use nichecraft_core::PROGRESS_STEPS;
use std::time::Duration;
use tower::ServiceExt;

fn setup_test_app() -> Router {
    create_router(None, ServerConfig::new(StudioConfig::instant()))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Split an event-stream body into its JSON payloads
fn parse_sse(body: &str) -> Vec<serde_json::Value> {
    assert!(body.ends_with("\n\n"), "stream must end on a frame boundary");
    body.split("\n\n")
        .filter(|frame| !frame.is_empty())
        .map(|frame| {
            let data = frame
                .strip_prefix("data: ")
                .unwrap_or_else(|| panic!("unexpected frame: {:?}", frame));
            serde_json::from_str(data).unwrap()
        })
        .collect()
}

// ========== Catalog API Tests ==========

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_list_product_types() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/product-types")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let types = json.as_array().unwrap();
    assert_eq!(types.len(), 6);
    assert_eq!(types[0]["id"], "ebook");
    assert_eq!(types[0]["label"], "eBook");
    assert_eq!(types[3]["label"], "Coloring Book");
    assert_eq!(types[5]["description"], "Business templates");
}

#[tokio::test]
async fn test_security_headers() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.contains_key("content-security-policy"));
}

// ========== Research API Tests ==========

#[tokio::test]
async fn test_research_planner() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/research",
            r#"{"category": "productivity planner"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0]["title"],
        "90-Day Goal Setting & Productivity Planner"
    );
    assert_eq!(results[0]["platform"], "Etsy");
    assert_eq!(results[0]["searchVolume"], 45000);
    assert_eq!(results[0]["trend"], "Rising Fast");
    assert_eq!(results[1]["platform"], "Amazon KDP");
    assert_eq!(results[1]["buyingIntent"], 92);
}

#[tokio::test]
async fn test_research_wedding_templates() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/research",
            r#"{"category": "wedding templates"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let titles: Vec<&str> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"Social Media Content Planner Templates"));
    assert!(titles.contains(&"Business Proposal & Invoice Template Bundle"));
}

#[tokio::test]
async fn test_research_fallback() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json("/api/research", r#"{"category": "Qwertyzzz"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "Qwertyzzz Ultimate Guide & Workbook");
    assert_eq!(results[0]["keywords"][0], "qwertyzzz");
    assert_eq!(results[0]["keywords"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_research_missing_category() {
    for body in [r#"{}"#, r#"{"category": ""}"#, r#"{"category": null}"#] {
        let app = setup_test_app();
        let response = app.oneshot(post_json("/api/research", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_body_json(response).await;
        assert_eq!(json["error"], "Category is required");
    }
}

#[tokio::test]
async fn test_research_malformed_body() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json("/api/research", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Research failed");
}

#[tokio::test(start_paused = true)]
async fn test_research_waits_for_configured_delay() {
    let mut studio = StudioConfig::instant();
    studio.research.delay = Duration::from_secs(2);
    let app = create_router(None, ServerConfig::new(studio));

    let start = tokio::time::Instant::now();
    let response = app
        .oneshot(post_json("/api/research", r#"{"category": "diary"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(start.elapsed() >= Duration::from_secs(2));
}

// ========== Generate API Tests ==========

#[tokio::test]
async fn test_generate_streams_progress_then_product() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/generate",
            r#"{"productType": "ebook", "topic": "Mindfulness"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/event-stream"
    );
    assert_eq!(response.headers()["cache-control"], "no-cache");

    let events = parse_sse(&get_body_text(response).await);
    assert_eq!(events.len(), 9);

    for (event, label) in events.iter().zip(PROGRESS_STEPS) {
        assert_eq!(event, &serde_json::json!({ "progress": label }));
    }

    let product = &events[8]["product"];
    assert_eq!(product["title"], "Mindfulness - Professional eBook");
    assert_eq!(product["type"], "eBook");
    assert!(product["description"]
        .as_str()
        .unwrap()
        .contains("Mindfulness eBook"));
    assert_eq!(product["downloadUrl"], "/api/download/sample-product.pdf");
}

#[tokio::test]
async fn test_generate_unknown_type() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/api/generate",
            r#"{"productType": "poster", "topic": "Mountains"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let events = parse_sse(&get_body_text(response).await);
    assert_eq!(events.len(), 9);

    let product = &events[8]["product"];
    assert!(product.get("type").is_none());
    assert!(product["description"]
        .as_str()
        .unwrap()
        .contains("Mountains"));
}

#[tokio::test]
async fn test_generate_missing_fields() {
    for body in [
        r#"{"topic": "Cats"}"#,
        r#"{"productType": "ebook"}"#,
        r#"{"productType": "", "topic": "Cats"}"#,
        r#"{"productType": "ebook", "topic": ""}"#,
    ] {
        let app = setup_test_app();
        let response = app.oneshot(post_json("/api/generate", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_body_json(response).await;
        assert_eq!(json["error"], "Product type and topic are required");
    }
}

#[tokio::test]
async fn test_generate_malformed_body() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_json("/api/generate", "[1, 2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Generation failed");
}

// ========== Config Tests ==========

#[test]
fn test_parse_origins() {
    assert_eq!(
        parse_origins("http://localhost:5173, https://studio.example.com,,"),
        vec!["http://localhost:5173", "https://studio.example.com"]
    );
    assert!(parse_origins("").is_empty());
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let config = ServerConfig {
        allowed_origins: vec!["http://localhost:5173".to_string()],
        studio: StudioConfig::instant(),
    };
    let app = create_router(None, config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("origin", "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
}
