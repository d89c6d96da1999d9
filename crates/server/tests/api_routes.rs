use std::{sync::Arc, time::Duration};

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use models::{Recipe, Source};
use serde_json::{json, Value};
use service::storage::InMemoryStore;
use tower::ServiceExt;

use server::{startup::build_app, AppState};

fn app() -> Router {
    build_app(AppState::in_memory(Duration::from_secs(10)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Option<String>, Vec<u8>) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .expect("request");
    let res = app.clone().oneshot(req).await.expect("response");
    let status = res.status();
    let location = res
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().expect("location header").to_string());
    let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("body");
    (status, location, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(app, "GET", uri, None).await;
    let value = if body.is_empty() { Value::Null } else { serde_json::from_slice(&body).expect("json body") };
    (status, value)
}

async fn create(app: &Router, uri: &str, body: Value) -> String {
    let (status, location, resp) = send(app, "POST", uri, Some(&body.to_string())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(resp.is_empty());
    location.expect("location")
}

#[tokio::test]
async fn empty_collections_list_as_empty_arrays() {
    let app = app();
    for uri in ["/api/recipes", "/api/recipes/", "/api/sources", "/api/sources/"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn source_create_then_list_and_get() {
    let app = app();
    let location = create(&app, "/api/sources", json!({"title": "My Cookbook", "type": "book"})).await;

    let (status, list) = get_json(&app, "/api/sources").await;
    assert_eq!(status, StatusCode::OK);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "My Cookbook");
    assert_eq!(items[0]["type"], "book");
    let id = items[0]["id"].as_str().expect("id");
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(location, format!("/api/sources/{id}"));

    let (status, one) = get_json(&app, &location).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one, items[0]);
}

#[tokio::test]
async fn source_with_unknown_type_is_rejected_and_not_stored() {
    let app = app();
    let (status, _, body) = send(&app, "POST", "/api/sources", Some(r#"{"title":"Blog","type":"blog"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());

    let (_, list) = get_json(&app, "/api/sources").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn source_update_does_not_check_type() {
    let app = app();
    let location = create(&app, "/api/sources", json!({"title": "Site", "type": "url"})).await;

    let (status, _, _) = send(&app, "PUT", &location, Some(r#"{"title":"Renamed","type":"zine"}"#)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, one) = get_json(&app, &location).await;
    assert_eq!(one["title"], "Renamed");
    assert_eq!(one["type"], "zine");
}

#[tokio::test]
async fn recipe_round_trip_preserves_fields() {
    let app = app();
    let source_location = create(&app, "/api/sources", json!({"title": "Grandma", "type": "custom"})).await;
    let source_id = source_location.rsplit('/').next().expect("id").to_string();

    let input = json!({
        "title": "Apple Pie",
        "sourceId": source_id,
        "sourceAnnotation": "page 12",
        "category": "dessert",
        "allergens": ["gluten", "dairy"]
    });
    let location = create(&app, "/api/recipes", input.clone()).await;

    let (status, recipe) = get_json(&app, &location).await;
    assert_eq!(status, StatusCode::OK);
    for field in ["title", "sourceId", "sourceAnnotation", "category", "allergens"] {
        assert_eq!(recipe[field], input[field], "{field}");
    }
    assert_eq!(location, format!("/api/recipes/{}", recipe["id"].as_str().expect("id")));
}

#[tokio::test]
async fn recipe_source_reference_is_not_checked_for_existence() {
    let app = app();
    let dangling = "0123456789abcdef01234567";
    let location = create(&app, "/api/recipes", json!({"title": "Orphan", "sourceId": dangling})).await;
    let (_, recipe) = get_json(&app, &location).await;
    assert_eq!(recipe["sourceId"], dangling);
    assert_eq!(recipe["allergens"], json!([]));
}

#[tokio::test]
async fn recipe_put_is_a_full_replace() {
    let app = app();
    let location = create(
        &app,
        "/api/recipes",
        json!({
            "title": "Old",
            "sourceId": "0123456789abcdef01234567",
            "sourceAnnotation": "note",
            "category": "main",
            "allergens": ["egg"]
        }),
    )
    .await;

    let update = r#"{"title":"New","sourceId":"","sourceAnnotation":"","category":"","allergens":[]}"#;
    let (status, _, body) = send(&app, "PUT", &location, Some(update)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (_, recipe) = get_json(&app, &location).await;
    assert_eq!(recipe["title"], "New");
    assert_eq!(recipe["sourceId"], "");
    assert_eq!(recipe["sourceAnnotation"], "");
    assert_eq!(recipe["category"], "");
    assert_eq!(recipe["allergens"], json!([]));
}

#[tokio::test]
async fn malformed_bodies_and_source_ids_are_400() {
    let app = app();
    let (status, _, _) = send(&app, "POST", "/api/recipes", Some("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _, _) = send(&app, "POST", "/api/recipes", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _, _) = send(&app, "POST", "/api/recipes", Some(r#"{"sourceId":"xyz"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _, _) = send(&app, "POST", "/api/sources", Some(r#"{"title": 5}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let location = create(&app, "/api/recipes", json!({"title": "Keep"})).await;
    let (status, _, _) = send(&app, "PUT", &location, Some("[]")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _, _) = send(&app, "PUT", &location, Some(r#"{"sourceId":"short"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, recipe) = get_json(&app, &location).await;
    assert_eq!(recipe["title"], "Keep");
}

#[tokio::test]
async fn array_bodies_are_rejected_and_leave_records_untouched() {
    let app = app();
    let (status, _, _) = send(&app, "POST", "/api/sources", Some(r#"["My Cookbook","book"]"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _, _) = send(&app, "POST", "/api/recipes", Some("[]")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, list) = get_json(&app, "/api/sources").await;
    assert_eq!(list, json!([]));

    let location = create(&app, "/api/recipes", json!({"title": "Keep", "category": "main", "allergens": ["egg"]})).await;
    let (status, _, _) = send(&app, "PUT", &location, Some("[]")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, recipe) = get_json(&app, &location).await;
    assert_eq!(recipe["title"], "Keep");
    assert_eq!(recipe["category"], "main");
    assert_eq!(recipe["allergens"], json!(["egg"]));
}

#[tokio::test]
async fn null_fields_decode_as_empty_values() {
    let app = app();
    let location = create(
        &app,
        "/api/recipes",
        json!({"title": null, "sourceId": "0123456789abcdef01234567", "category": null, "allergens": null}),
    )
    .await;
    let (_, recipe) = get_json(&app, &location).await;
    assert_eq!(recipe["title"], "");
    assert_eq!(recipe["category"], "");
    assert_eq!(recipe["allergens"], json!([]));

    let (status, _, _) = send(&app, "PUT", &location, Some(r#"{"title":"Stew","sourceId":null,"sourceAnnotation":null}"#)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, recipe) = get_json(&app, &location).await;
    assert_eq!(recipe["title"], "Stew");
    assert_eq!(recipe["sourceId"], "");

    let source = create(&app, "/api/sources", json!({"title": null, "type": "book"})).await;
    let (status, _, _) = send(&app, "PUT", &source, Some(r#"{"title":null,"type":"url"}"#)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, one) = get_json(&app, &source).await;
    assert_eq!(one["title"], "");
    assert_eq!(one["type"], "url");
}

#[tokio::test]
async fn malformed_and_unknown_ids_are_404() {
    let app = app();
    let unknown = "5f1d7a3e9b1e8a6c4d2f0a11";
    for base in ["/api/recipes", "/api/sources"] {
        for id in ["not-an-id", unknown] {
            let uri = format!("{base}/{id}");
            let (status, _, body) = send(&app, "GET", &uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
            assert!(body.is_empty());
            let (status, _, _) = send(&app, "DELETE", &uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {uri}");
            let (status, _, _) = send(&app, "PUT", &uri, Some(r#"{"title":"x","type":"book"}"#)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "PUT {uri}");
        }
    }
}

#[tokio::test]
async fn unknown_id_wins_over_malformed_body_on_put() {
    let app = app();
    let (status, _, _) = send(&app, "PUT", "/api/sources/5f1d7a3e9b1e8a6c4d2f0a11", Some("{oops")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = app();
    let location = create(&app, "/api/sources", json!({"title": "Gone", "type": "url"})).await;
    let (status, _, body) = send(&app, "DELETE", &location, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    let (status, _, _) = send(&app, "GET", &location, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn each_post_creates_a_new_record() {
    let app = app();
    let a = create(&app, "/api/recipes", json!({"title": "Same"})).await;
    let b = create(&app, "/api/recipes", json!({"title": "Same"})).await;
    assert_ne!(a, b);
    let (_, list) = get_json(&app, "/api/recipes").await;
    assert_eq!(list.as_array().expect("array").len(), 2);
}

#[tokio::test]
async fn slow_store_yields_500() {
    let state = AppState::new(
        Arc::new(InMemoryStore::<Recipe>::with_latency(Duration::from_millis(500))),
        Arc::new(InMemoryStore::<Source>::new()),
        Duration::from_millis(20),
    );
    let app = build_app(state);
    let (status, _, body) = send(&app, "GET", "/api/recipes", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let app = app();
    let (status, health) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");

    let (status, doc) = get_json(&app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/recipes/{id}"].is_object());
}
