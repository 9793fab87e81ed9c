use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mergington::{build_router, ActivityStore};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub store: ActivityStore,
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

/// Router over a fresh seeded store, serving the repository's `static/` directory.
pub fn setup_test_app() -> TestApp {
    let store = ActivityStore::seeded();
    let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");
    TestApp {
        router: build_router(store.clone(), static_dir),
        store,
    }
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("readable body")
            .to_bytes()
            .to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri).await
    }

    pub async fn signup(&self, activity_path: &str, email_query: &str) -> TestResponse {
        let uri = format!("/activities/{activity_path}/signup?email={email_query}");
        self.request(Method::POST, &uri).await
    }

    pub async fn activities(&self) -> Value {
        let response = self.get("/activities").await;
        assert_eq!(response.status, StatusCode::OK);
        response.json()
    }
}
