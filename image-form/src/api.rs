//! REST access to the image endpoint

use crate::models::NewImage;

#[cfg(feature = "http")]
use crate::models::ImagesPage;

/// Error type for image API requests
#[derive(Debug)]
pub enum ApiError {
    NetworkError(String),
    ServerError(u16),
    JsonError(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ApiError::ServerError(status) => write!(f, "Server returned status: {}", status),
            ApiError::JsonError(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Creates image records on the server
#[allow(async_fn_in_trait)]
pub trait ImageApi {
    async fn create_image(&self, image: &NewImage) -> Result<(), ApiError>;
}

impl<T: ImageApi + ?Sized> ImageApi for &T {
    async fn create_image(&self, image: &NewImage) -> Result<(), ApiError> {
        (**self).create_image(image).await
    }
}

#[cfg(feature = "http")]
/// HTTP client for `/api/images`
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: std::time::Duration,
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl ApiClient {
    /// Create a client for the API at `base_url`
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self, ApiError> {
        let timeout = std::time::Duration::from_secs(timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent("UpFi/0.1.0")
            .build()
            .map_err(|e| ApiError::NetworkError(format!("Client build failed: {}", e)))?;

        Ok(Self {
            base_url,
            timeout,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Time after which a request fails instead of hanging
    pub fn timeout(&self) -> std::time::Duration {
        self.timeout
    }

    fn images_url(&self) -> String {
        format!("{}/api/images", self.base_url.trim_end_matches('/'))
    }

    /// Fetch one page of images, starting after the `after` cursor
    pub async fn list_images(&self, after: Option<&str>) -> Result<ImagesPage, ApiError> {
        let mut request = self.client.get(self.images_url());
        if let Some(cursor) = after {
            request = request.query(&[("after", cursor)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::NetworkError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ApiError::ServerError(response.status().as_u16()));
        }

        response
            .json::<ImagesPage>()
            .await
            .map_err(|e| ApiError::JsonError(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(feature = "http")]
impl ImageApi for ApiClient {
    async fn create_image(&self, image: &NewImage) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.images_url())
            .json(image)
            .send()
            .await
            .map_err(|e| ApiError::NetworkError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ApiError::ServerError(response.status().as_u16()));
        }

        log::info!("Image '{}' registered", image.title);
        Ok(())
    }
}


#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::ServerError(500).to_string(),
            "Server returned status: 500"
        );
        assert!(ApiError::NetworkError("refused".to_string())
            .to_string()
            .contains("refused"));
    }
}
