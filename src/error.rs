use image_form::{ApiError, UploadError};
use std::fmt;

/// Central error type of the UpFi app
#[derive(Debug)]
pub enum AppError {
    /// Invalid configuration file
    Config(toml::de::Error),
    /// Filesystem error while reading the configuration
    Filesystem(std::io::Error),
    /// Image API error
    Api(ApiError),
    /// Image host error
    Upload(UploadError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Api(e) => write!(f, "API error: {}", e),
            AppError::Upload(e) => write!(f, "Upload error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}

impl From<UploadError> for AppError {
    fn from(e: UploadError) -> Self {
        AppError::Upload(e)
    }
}

/// Messages shown in the UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(_) | AppError::Filesystem(_) => {
                "Não foi possível carregar a configuração.".to_string()
            }
            AppError::Api(_) => "Não foi possível falar com o servidor.".to_string(),
            AppError::Upload(_) => "Falha no envio da imagem".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let err: AppError = ApiError::ServerError(502).into();
        assert!(matches!(err, AppError::Api(ApiError::ServerError(502))));
        assert_eq!(err.to_string(), "API error: Server returned status: 502");

        let err: AppError = UploadError::MissingApiKey.into();
        assert_eq!(err.user_message(), "Falha no envio da imagem");
    }

    #[test]
    fn test_config_error_message() {
        let err = crate::config::AppConfig::from_toml("api_base_url = 3").unwrap_err();
        assert_eq!(
            err.user_message(),
            "Não foi possível carregar a configuração."
        );
    }
}
