//! Shared helpers for the API integration tests.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use mongodb::bson::Document;
use pessoas_api::model::{SeedPerson, StorageError};
use pessoas_api::storage::PeopleStore;

/// In-memory store serving a fixed set of documents.
pub struct FixedStore(pub Vec<Document>);

#[async_trait]
impl PeopleStore for FixedStore {
    async fn fetch_all(&self) -> Result<Vec<Document>, StorageError> {
        Ok(self.0.clone())
    }

    async fn replace_all(&self, people: &[SeedPerson]) -> Result<usize, StorageError> {
        Ok(people.len())
    }
}

/// Store whose every call fails like an unreachable database.
pub struct DownStore;

#[async_trait]
impl PeopleStore for DownStore {
    async fn fetch_all(&self) -> Result<Vec<Document>, StorageError> {
        Err(StorageError::Query("No available servers".into()))
    }

    async fn replace_all(&self, _people: &[SeedPerson]) -> Result<usize, StorageError> {
        Err(StorageError::Write("No available servers".into()))
    }
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
