//! Image upload to an external image host
//!
//! The picked file is sent as a multipart form to an imgbb compatible
//! endpoint. The URL returned by the host is what the form later submits as
//! the image URL.

use serde::Deserialize;

/// Configuration of the image host
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHostConfig {
    pub upload_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

/// Result type for upload operations
pub type UploadResult<T> = Result<T, UploadError>;

/// Errors that can occur during an image upload
#[derive(Debug)]
pub enum UploadError {
    NetworkError(String),
    ServerError(u16),
    InvalidResponse(String),
    MissingApiKey,
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::NetworkError(e) => write!(f, "Network error: {}", e),
            UploadError::ServerError(status) => write!(f, "Image host returned status: {}", status),
            UploadError::InvalidResponse(e) => write!(f, "Invalid image host response: {}", e),
            UploadError::MissingApiKey => write!(f, "No image host API key configured"),
        }
    }
}

impl std::error::Error for UploadError {}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        UploadError::NetworkError(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ImageHostResponse {
    data: ImageHostData,
}

#[derive(Debug, Deserialize)]
struct ImageHostData {
    url: String,
}

/// Client for uploading picked files to the image host
#[derive(Clone)]
pub struct ImageHostClient {
    config: ImageHostConfig,
    client: reqwest::Client,
}

impl ImageHostClient {
    pub fn new(config: ImageHostConfig) -> UploadResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent("UpFi/0.1.0")
            .build()?;

        Ok(Self { config, client })
    }

    /// Upload `bytes` and return the public URL of the stored image
    pub async fn upload(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> UploadResult<String> {
        if self.config.api_key.is_empty() {
            return Err(UploadError::MissingApiKey);
        }

        let size = bytes.len();
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(&self.config.upload_url)
            .query(&[("key", self.config.api_key.as_str())])
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            log::error!("Upload of {} failed with status {}", file_name, status);
            return Err(UploadError::ServerError(status));
        }

        let body = response.text().await?;
        let url = parse_upload_response(&body)?;
        log::info!("Uploaded {} ({} bytes) to {}", file_name, size, url);
        Ok(url)
    }
}

fn parse_upload_response(body: &str) -> UploadResult<String> {
    let parsed: ImageHostResponse =
        serde_json::from_str(body).map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

    if parsed.data.url.is_empty() {
        return Err(UploadError::InvalidResponse("empty image URL".to_string()));
    }

    Ok(parsed.data.url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upload_response() {
        let body = r#"{"data":{"id":"abc","url":"https://i.ibb.co/abc/sunset.png"},"success":true,"status":200}"#;
        assert_eq!(
            parse_upload_response(body).unwrap(),
            "https://i.ibb.co/abc/sunset.png"
        );
    }

    #[test]
    fn test_parse_upload_response_rejects_garbage() {
        assert!(matches!(
            parse_upload_response("not json"),
            Err(UploadError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_upload_response(r#"{"data":{"url":""}}"#),
            Err(UploadError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_upload_requires_api_key() {
        let client = ImageHostClient::new(ImageHostConfig {
            upload_url: "https://api.imgbb.com/1/upload".to_string(),
            api_key: String::new(),
            timeout_secs: 5,
        })
        .unwrap();

        let result = client.upload("a.png", "image/png", vec![1, 2, 3]).await;
        assert!(matches!(result, Err(UploadError::MissingApiKey)));
    }
}
