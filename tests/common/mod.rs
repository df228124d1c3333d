use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use calilog_api::{
    posts::{
        models::post::Post,
        repository::{memory::MemoryPostRepository, PostRepository},
        service::PostService,
    },
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub repository: Arc<MemoryPostRepository>,
    pub service: PostService,
}

pub fn test_app() -> TestApp {
    let repository = Arc::new(MemoryPostRepository::new());
    let service = PostService::new(repository.clone());

    TestApp {
        repository,
        service,
    }
}

impl TestApp {
    pub async fn seed(&self, title: &str, content: &str) -> i64 {
        self.repository
            .save(Post::new(title, content))
            .await
            .unwrap()
            .id
            .unwrap()
    }

    pub async fn seed_numbered(&self, count: usize) {
        let posts = (0..count)
            .map(|i| Post::new(&format!("title{}", i), &format!("content{}", i)))
            .collect();

        self.repository.save_all(posts).await.unwrap();
    }

    pub fn router(&self) -> Router {
        let service = PostService::new(self.repository.clone());
        calilog_api::router(AppState::new(service))
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();

        let body = match bytes.is_empty() {
            true => Value::Null,
            false => serde_json::from_slice(&bytes).unwrap(),
        };

        (status, body)
    }
}
