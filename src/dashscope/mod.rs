pub mod image_client;
pub mod mapper;

use crate::{
    config::DashScopeConfig,
    error::{QigenError, Result},
};
use reqwest::Client;

pub use image_client::ImageClient;

/// Facade over the DashScope API. Construction is where credentials are
/// checked, so request handlers can assume a usable client.
#[derive(Clone, Debug)]
pub struct DashScopeClient {
    image_client: ImageClient,
}

impl DashScopeClient {
    pub fn new(config: DashScopeConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| QigenError::ConfigError("DASHSCOPE_API_KEY is not set".into()))?;
        let api_url = config
            .api_url
            .ok_or_else(|| QigenError::ConfigError("DASHSCOPE_API_URL is not set".into()))?;

        Ok(Self {
            image_client: ImageClient::new(Client::new(), api_key, api_url),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_requires_api_key() {
        let config = DashScopeConfig::new().with_api_url("https://example.com/api/v1");
        let err = DashScopeClient::new(config).unwrap_err();
        assert!(matches!(err, QigenError::ConfigError(_)));
        assert!(err.to_string().contains("DASHSCOPE_API_KEY"));
    }

    #[test]
    fn new_requires_api_url() {
        let config = DashScopeConfig::new().with_api_key("sk-test");
        let err = DashScopeClient::new(config).unwrap_err();
        assert!(matches!(err, QigenError::ConfigError(_)));
        assert!(err.to_string().contains("DASHSCOPE_API_URL"));
    }

    #[test]
    fn new_succeeds_with_full_config() {
        let config = DashScopeConfig::new()
            .with_api_key("sk-test")
            .with_api_url("https://example.com/api/v1");
        assert!(DashScopeClient::new(config).is_ok());
    }
}
