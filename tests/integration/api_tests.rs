//! API integration tests
//!
//! Each test drives the full router in-process against its own catalog file.

use std::{path::PathBuf, sync::Arc};

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookish_api::{api, repository::JsonFileStore, AppState};

struct TestApp {
    router: Router,
    path: PathBuf,
    _dir: tempfile::TempDir,
}

impl TestApp {
    fn with_catalog(catalog: Value) -> Self {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("books.json");
        std::fs::write(&path, catalog.to_string()).expect("Failed to write catalog");
        Self::at(dir, path)
    }

    fn with_catalog_text(text: &str) -> Self {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("books.json");
        std::fs::write(&path, text).expect("Failed to write catalog");
        Self::at(dir, path)
    }

    fn without_catalog() -> Self {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("books.json");
        Self::at(dir, path)
    }

    fn at(dir: tempfile::TempDir, path: PathBuf) -> Self {
        let store = Arc::new(JsonFileStore::new(&path));
        Self {
            router: api::router(AppState::new(store)),
            path,
            _dir: dir,
        }
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn stored(&self) -> Value {
        let data = std::fs::read_to_string(&self.path).expect("Failed to read catalog");
        serde_json::from_str(&data).expect("Catalog is not JSON")
    }
}

fn sample_catalog() -> Value {
    json!({
        "B1": {"author": "A", "genre": "Fiction", "rating": 4.5},
        "B2": {"author": "C", "genre": "Poetry", "rating": 1.0, "borrowed_by": "U9"},
        "B3": {"author": "B", "genre": "Fiction", "rating": 3.0, "pages": 200}
    })
}

#[tokio::test]
async fn test_welcome_and_about() {
    let app = TestApp::with_catalog(json!({}));

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "welcome to my Bookish Api"}));

    let (status, body) = app.get("/about").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"about": "this is about page of my Api"}));
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::without_catalog();

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_view_returns_collection_unmodified() {
    let app = TestApp::with_catalog(sample_catalog());

    let (status, body) = app.get("/view").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, sample_catalog());

    let ids: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(ids, vec!["B1", "B2", "B3"]);
}

#[tokio::test]
async fn test_get_book() {
    let app = TestApp::with_catalog(sample_catalog());

    let (status, body) = app.get("/book/B2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"author": "C", "genre": "Poetry", "rating": 1.0, "borrowed_by": "U9", "status": "Borrowed"})
    );
}

#[tokio::test]
async fn test_get_unknown_book() {
    let app = TestApp::with_catalog(sample_catalog());

    let (status, body) = app.get("/book/B404").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "book not found"}));
}

#[tokio::test]
async fn test_sort_by_author() {
    let app = TestApp::with_catalog(sample_catalog());

    let (status, body) = app.get("/sort?sort_by=author").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"author": "A", "genre": "Fiction", "rating": 4.5},
            {"author": "B", "genre": "Fiction", "rating": 3.0, "pages": 200},
            {"author": "C", "genre": "Poetry", "rating": 1.0, "borrowed_by": "U9"}
        ])
    );
}

#[tokio::test]
async fn test_sort_by_rating_desc() {
    let app = TestApp::with_catalog(sample_catalog());

    let (status, body) = app.get("/sort?sort_by=rating&order=desc").await;
    assert_eq!(status, StatusCode::OK);
    let ratings: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["rating"].as_f64().unwrap())
        .collect();
    assert_eq!(ratings, vec![4.5, 3.0, 1.0]);
}

#[tokio::test]
async fn test_sort_by_status_desc_keeps_file_order() {
    let app = TestApp::with_catalog(sample_catalog());

    let (status, body) = app.get("/sort?sort_by=status&order=desc").await;
    assert_eq!(status, StatusCode::OK);
    let authors: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["author"].as_str().unwrap())
        .collect();
    assert_eq!(authors, vec!["A", "C", "B"]);
}

#[tokio::test]
async fn test_sort_by_genre_desc_keeps_ties_in_file_order() {
    let app = TestApp::with_catalog(sample_catalog());

    let (status, body) = app.get("/sort?sort_by=genre&order=desc").await;
    assert_eq!(status, StatusCode::OK);
    let authors: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["author"].as_str().unwrap())
        .collect();
    assert_eq!(authors, vec!["C", "A", "B"]);
}

#[tokio::test]
async fn test_sort_every_field_and_order() {
    let app = TestApp::with_catalog(sample_catalog());

    for field in ["title", "author", "genre", "rating", "status"] {
        for order in ["asc", "desc"] {
            let (status, body) = app.get(&format!("/sort?sort_by={}&order={}", field, order)).await;
            assert_eq!(status, StatusCode::OK, "sort_by={} order={}", field, order);
            assert_eq!(body.as_array().unwrap().len(), 3);
        }
    }
}

#[tokio::test]
async fn test_sort_invalid_field() {
    let app = TestApp::with_catalog(sample_catalog());

    let (status, body) = app.get("/sort?sort_by=pages").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "invalid field select from ['title', 'author', 'genre', 'rating', 'status']"
    );
}

#[tokio::test]
async fn test_sort_invalid_order() {
    let app = TestApp::with_catalog(sample_catalog());

    let (status, body) = app.get("/sort?sort_by=rating&order=up").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "invalid order selecte between asc or desc");
}

#[tokio::test]
async fn test_sort_missing_field() {
    let app = TestApp::with_catalog(sample_catalog());

    let (status, _) = app.get("/sort").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_add_then_get() {
    let app = TestApp::with_catalog(json!({"B1": {"author": "A", "genre": "Fiction", "rating": 4.5}}));

    let (status, body) = app
        .post("/add", json!({"id": "B2", "author": "X", "genre": "Y", "rating": 3.0}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "book created sucessfully"}));

    assert_eq!(
        app.stored(),
        json!({
            "B1": {"author": "A", "genre": "Fiction", "rating": 4.5},
            "B2": {"author": "X", "genre": "Y", "rating": 3.0}
        })
    );

    let (status, body) = app.get("/book/B2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"author": "X", "genre": "Y", "rating": 3.0, "status": "Available"})
    );
}

#[tokio::test]
async fn test_add_duplicate() {
    let catalog = json!({"B1": {"author": "A", "genre": "Fiction", "rating": 4.5}});
    let app = TestApp::with_catalog(catalog.clone());

    let (status, body) = app
        .post("/add", json!({"id": "B1", "author": "Other", "genre": "Other", "rating": 1.0}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "message": "book is in database",
            "book_detail": {"author": "A", "genre": "Fiction", "rating": 4.5}
        })
    );
    assert_eq!(app.stored(), catalog);
}

#[tokio::test]
async fn test_add_writes_json_dump_layout() {
    let app = TestApp::with_catalog_text(r#"{"B1": {"author": "Jos\u00e9", "genre": "Fiction", "rating": 4.5}}"#);

    let (status, _) = app
        .post("/add", json!({"id": "B2", "author": "Zoë", "genre": "Y", "rating": 3.0, "pages": 12}))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let text = std::fs::read_to_string(&app.path).expect("Failed to read catalog");
    assert_eq!(
        text,
        r#"{"B1": {"author": "Jos\u00e9", "genre": "Fiction", "rating": 4.5}, "B2": {"author": "Zo\u00eb", "pages": 12, "genre": "Y", "rating": 3.0}}"#
    );
}

#[tokio::test]
async fn test_add_invalid_books() {
    let app = TestApp::with_catalog(json!({}));

    let invalid = [
        json!({"id": "B1", "genre": "Y", "rating": 3.0}),
        json!({"id": "B1", "author": "X", "genre": "Y", "rating": 5.0}),
        json!({"id": "B1", "author": "X", "genre": "Y", "rating": -1.0}),
        json!({"id": "B1", "author": "X", "genre": "Y", "rating": 2.0, "pages": 0}),
    ];

    for book in invalid {
        let (status, body) = app.post("/add", book.clone()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", book);
        assert!(body["detail"].is_string());
    }
    assert_eq!(app.stored(), json!({}));
}

#[tokio::test]
async fn test_add_borrowed_book_keeps_optional_fields() {
    let app = TestApp::with_catalog(json!({}));

    let (status, _) = app
        .post(
            "/add",
            json!({
                "id": "B7",
                "author": "X",
                "city": "Lyon",
                "pages": 310,
                "genre": "Y",
                "rating": 0.0,
                "borrowed_by": "U1",
                "borrowed_date": "2024-03-01T10:00:00Z",
                "due_date": null
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let stored = app.stored();
    assert!(stored["B7"].get("due_date").is_none());
    assert!(stored["B7"].get("id").is_none());
    assert_eq!(stored["B7"]["city"], "Lyon");

    let (_, body) = app.get("/book/B7").await;
    assert_eq!(body["status"], "Borrowed");
}

#[tokio::test]
async fn test_missing_catalog_file() {
    let app = TestApp::without_catalog();

    let (status, body) = app.get("/view").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "storage error"}));
}
