use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::integration::common::{TEST_API_KEY, setup_test_app};

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app();

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unauthenticated_request_returns_401() {
    let app = setup_test_app();

    let response = app
        .oneshot(Request::get("/v1/bookmarks").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "unauthorized");
}

#[tokio::test]
async fn wrong_api_key_returns_401() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::get("/v1/bookmarks")
                .header("authorization", "Bearer wrong-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Bookmarks (v1)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_and_list_bookmarks_v1() {
    let app = setup_test_app();

    let create_body = serde_json::json!({
        "url": "https://example.com",
        "title": "Example"
    });

    // Create bookmark
    let response = app
        .clone()
        .oneshot(
            Request::post("/v1/bookmarks")
                .header("authorization", format!("Bearer {TEST_API_KEY}"))
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&create_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["url"], "https://example.com");
    assert_eq!(json["title"], "Example");
    // Tags only exist in the v2 representation
    assert!(json.get("tags").is_none());

    // List bookmarks
    let response = app
        .oneshot(
            Request::get("/v1/bookmarks")
                .header("authorization", format!("Bearer {TEST_API_KEY}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["bookmarks"][0]["title"], "Example");
}

// ---------------------------------------------------------------------------
// Bookmarks (v2)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_and_get_bookmark_v2() {
    let app = setup_test_app();

    let create_body = serde_json::json!({
        "url": "https://doc.rust-lang.org",
        "title": "The Book",
        "tags": ["rust", "reference"]
    });

    // Create bookmark
    let response = app
        .clone()
        .oneshot(
            Request::post("/v2/bookmarks")
                .header("authorization", format!("Bearer {TEST_API_KEY}"))
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&create_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["tags"], serde_json::json!(["rust", "reference"]));
    let id = json["id"].as_str().unwrap().to_string();

    // Get bookmark
    let response = app
        .oneshot(
            Request::get(format!("/v2/bookmarks/{id}"))
                .header("authorization", format!("Bearer {TEST_API_KEY}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["url"], "https://doc.rust-lang.org");
    assert_eq!(json["tags"], serde_json::json!(["rust", "reference"]));
}

#[tokio::test]
async fn list_bookmarks_filters_by_tag() {
    let app = setup_test_app();

    for (title, tag) in [("A", "rust"), ("B", "web")] {
        let create_body = serde_json::json!({
            "url": format!("https://{title}.test"),
            "title": title,
            "tags": [tag]
        });

        let response = app
            .clone()
            .oneshot(
                Request::post("/v2/bookmarks")
                    .header("authorization", format!("Bearer {TEST_API_KEY}"))
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&create_body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(
            Request::get("/v2/bookmarks?tag=rust")
                .header("authorization", format!("Bearer {TEST_API_KEY}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["bookmarks"][0]["title"], "A");
}

#[tokio::test]
async fn delete_bookmark_then_gone() {
    let app = setup_test_app();

    let create_body = serde_json::json!({
        "url": "https://gone.test",
        "title": "Ephemeral"
    });

    let response = app
        .clone()
        .oneshot(
            Request::post("/v2/bookmarks")
                .header("authorization", format!("Bearer {TEST_API_KEY}"))
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&create_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let id = json["id"].as_str().unwrap().to_string();

    // Delete bookmark
    let response = app
        .clone()
        .oneshot(
            Request::delete(format!("/v2/bookmarks/{id}"))
                .header("authorization", format!("Bearer {TEST_API_KEY}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting again reports not found
    let response = app
        .oneshot(
            Request::delete(format!("/v2/bookmarks/{id}"))
                .header("authorization", format!("Bearer {TEST_API_KEY}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn get_unknown_bookmark_returns_404() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::get(format!("/v2/bookmarks/{}", uuid::Uuid::new_v4()))
                .header("authorization", format!("Bearer {TEST_API_KEY}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
