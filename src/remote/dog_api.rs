use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use super::RandomImageSource;
use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Body of the random image endpoint
///
/// Only `message` is used; `status` is kept for logging.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RandomImageResponse {
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// HTTP client for the dog API
#[derive(Debug, Clone)]
pub struct DogApi {
    client: reqwest::Client,
    endpoint: String,
}

impl DogApi {
    pub fn new(config: &Config) -> AppResult<Self> {
        // No timeout: a hung request simply never completes
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get_ok(&self, url: &str) -> AppResult<reqwest::Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "HTTP status: {}",
                response.status()
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl RandomImageSource for DogApi {
    async fn fetch_random(&self) -> AppResult<String> {
        debug!("🌐 GET {}", self.endpoint);

        let body = self.get_ok(&self.endpoint).await?.text().await?;
        let parsed: RandomImageResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::Network(format!("Invalid response body: {}", e)))?;

        info!(
            "🐶 Random image: {} (status: {})",
            parsed.message,
            parsed.status.as_deref().unwrap_or("unknown")
        );

        Ok(parsed.message)
    }

    async fn download(&self, uri: &str) -> AppResult<Vec<u8>> {
        let bytes = self.get_ok(uri).await?.bytes().await?;
        debug!("⬇️  Downloaded {} bytes from {}", bytes.len(), uri);

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> DogApi {
        let config =
            Config::default().with_endpoint(format!("{}/api/breeds/image/random", server.uri()));
        DogApi::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_random_returns_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/breeds/image/random"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "https://x/dog.jpg",
                "status": "success"
            })))
            .mount(&server)
            .await;

        let uri = api_for(&server).fetch_random().await.unwrap();
        assert_eq!(uri, "https://x/dog.jpg");
    }

    #[tokio::test]
    async fn test_fetch_random_ignores_extra_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "https://x/pug.jpg",
                "breed": "pug"
            })))
            .mount(&server)
            .await;

        let uri = api_for(&server).fetch_random().await.unwrap();
        assert_eq!(uri, "https://x/pug.jpg");
    }

    #[tokio::test]
    async fn test_non_success_status_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = api_for(&server).fetch_random().await.unwrap_err();
        assert_eq!(
            err,
            AppError::Network("HTTP status: 503 Service Unavailable".to_string())
        );
    }

    #[tokio::test]
    async fn test_unparsable_body_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let err = api_for(&server).fetch_random().await.unwrap_err();
        assert!(matches!(err, AppError::Network(msg) if msg.starts_with("Invalid response body")));
    }

    #[tokio::test]
    async fn test_unmatched_route_is_network_error() {
        // No mocks mounted: the server answers 404
        let server = MockServer::start().await;

        let err = api_for(&server).fetch_random().await.unwrap_err();
        assert!(matches!(err, AppError::Network(msg) if msg.contains("404")));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let config = Config::default().with_endpoint("http://127.0.0.1:1/random");
        let err = DogApi::new(&config).unwrap().fetch_random().await.unwrap_err();

        assert!(matches!(err, AppError::Network(_)));
    }

    #[tokio::test]
    async fn test_download_returns_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/breeds/pug/1.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF, 0xD9]))
            .mount(&server)
            .await;

        let bytes = api_for(&server)
            .download(&format!("{}/breeds/pug/1.jpg", server.uri()))
            .await
            .unwrap();
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xD9]);
    }
}
