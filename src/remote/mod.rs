/// Remote image fetching
///
/// This module handles:
/// - Asking the dog API for a random image URI (dog_api.rs)
/// - Downloading the bytes behind that URI so the UI can draw them

pub mod dog_api;

use async_trait::async_trait;

use crate::error::AppResult;

pub use dog_api::DogApi;

#[async_trait]
pub trait RandomImageSource: Send + Sync {
    /// Request a random image and return its URI
    async fn fetch_random(&self) -> AppResult<String>;

    /// Download the image behind a URI returned by `fetch_random`
    async fn download(&self, uri: &str) -> AppResult<Vec<u8>>;
}
