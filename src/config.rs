use crate::error::AppError;
use image_form::{ApiClient, ImageFormContext, ImageHostClient, ImageHostConfig, MissingImagePolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the configuration file
pub const CONFIG_FILE: &str = "upfi.toml";

/// Application configuration
///
/// Loaded from `upfi.toml` (path overridable with `UPFI_CONFIG`), then
/// individual values can be overridden through `UPFI_*` environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub image_host_url: String,
    pub image_host_api_key: String,
    pub request_timeout_secs: u64,
    pub missing_image_policy: MissingImagePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            image_host_url: "https://api.imgbb.com/1/upload".to_string(),
            image_host_api_key: String::new(),
            request_timeout_secs: 60,
            missing_image_policy: MissingImagePolicy::WarnAndContinue,
        }
    }
}

impl AppConfig {
    pub fn from_toml(s: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads the config file if present and applies environment overrides
    pub fn load() -> Result<Self, AppError> {
        let path = std::env::var("UPFI_CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string());

        let config = if Path::new(&path).exists() {
            log::info!("Loading configuration from {}", path);
            Self::from_toml(&std::fs::read_to_string(&path)?)?
        } else {
            log::debug!("No configuration file at {}, using defaults", path);
            Self::default()
        };

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("UPFI_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Some(url) = lookup("UPFI_IMAGE_HOST_URL") {
            self.image_host_url = url;
        }
        if let Some(key) = lookup("UPFI_IMAGE_HOST_KEY") {
            self.image_host_api_key = key;
        }
        self
    }

    /// Build the collaborators used by the image form
    pub fn form_context(&self) -> Result<ImageFormContext, AppError> {
        let api = ApiClient::new(self.api_base_url.clone(), self.request_timeout_secs)?;
        let uploader = ImageHostClient::new(ImageHostConfig {
            upload_url: self.image_host_url.clone(),
            api_key: self.image_host_api_key.clone(),
            timeout_secs: self.request_timeout_secs,
        })?;

        if self.image_host_api_key.is_empty() {
            log::warn!("UPFI_IMAGE_HOST_KEY is not set, image uploads will fail");
        }

        let mut context = ImageFormContext::new(api, uploader);
        context.missing_image_policy = self.missing_image_policy;
        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            api_base_url = "https://upfi.example.com"
            missing_image_policy = "block"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base_url, "https://upfi.example.com");
        assert_eq!(config.missing_image_policy, MissingImagePolicy::Block);
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.image_host_url, AppConfig::default().image_host_url);
    }

    #[test]
    fn test_invalid_toml() {
        let result = AppConfig::from_toml("request_timeout_secs = \"soon\"");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::default().with_overrides(|key| match key {
            "UPFI_API_BASE_URL" => Some("https://api.example.com".to_string()),
            "UPFI_IMAGE_HOST_KEY" => Some("secret".to_string()),
            _ => None,
        });

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.image_host_api_key, "secret");
        assert_eq!(config.image_host_url, AppConfig::default().image_host_url);
    }

    #[test]
    fn test_form_context_carries_policy() {
        let config = AppConfig {
            missing_image_policy: MissingImagePolicy::Block,
            ..AppConfig::default()
        };

        let context = config.form_context().unwrap();
        assert_eq!(context.missing_image_policy, MissingImagePolicy::Block);
        assert_eq!(context.api.base_url(), "http://localhost:3000");
        assert_eq!(context.api.timeout(), std::time::Duration::from_secs(60));
    }
}
