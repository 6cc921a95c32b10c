#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use bookshelf::router::init_router;
use bookshelf::state::AppState;
use bookshelf_core::hash_password;
use bookshelf_db::init_memory_pool;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

/// Fresh app over its own in-memory database and metrics registry.
pub async fn setup_test_app() -> TestApp {
    let pool = init_memory_pool().await.unwrap();
    let state = AppState::with_pool(pool).unwrap();
    TestApp {
        router: init_router(state.clone()),
        state,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.send(request("GET", uri, token, None)).await
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
        self.send(request("POST", uri, token, Some(body))).await
    }

    pub async fn put_json(&self, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
        self.send(request("PUT", uri, token, Some(body))).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.send(request("DELETE", uri, token, None)).await
    }

    pub async fn register(&self, username: &str, password: &str) -> Response<Body> {
        self.post_json(
            "/auth/register",
            None,
            serde_json::json!({ "username": username, "password": password }),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(format!("username={username}&password={password}")))
            .unwrap();
        self.send(request).await
    }

    /// Registers a regular user and returns a bearer token for it.
    pub async fn user_token(&self, username: &str) -> String {
        let response = self.register(username, "password123").await;
        assert_eq!(response.status(), StatusCode::CREATED);
        self.token_for(username, "password123").await
    }

    /// Inserts an admin directly (admins cannot be registered over HTTP)
    /// and returns a bearer token for it.
    pub async fn admin_token(&self, username: &str) -> String {
        let hashed = hash_password("adminpass123").unwrap();
        sqlx::query("INSERT INTO users (username, password_hash, role) VALUES ($1, $2, 'admin')")
            .bind(username)
            .bind(&hashed)
            .execute(&self.state.db)
            .await
            .unwrap();
        self.token_for(username, "adminpass123").await
    }

    pub async fn token_for(&self, username: &str, password: &str) -> String {
        let response = self.login(username, password).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        body["access_token"].as_str().unwrap().to_string()
    }

    pub async fn create_book(&self, admin_token: &str, body: Value) -> Value {
        let response = self.post_json("/books/", Some(admin_token), body).await;
        assert_eq!(response.status(), StatusCode::OK);
        json_body(response).await
    }
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn json_body(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn text_body(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
