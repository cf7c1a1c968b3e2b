//! Client configuration

use crate::error::ClientResult;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the reservation API
    pub base_url: String,
}

impl ClientConfig {
    /// Create a new ClientConfig from environment variables
    ///
    /// # Environment Variables
    /// - `RESERVANT_API_URL`: base URL of the API (default: "http://localhost:8080")
    pub fn from_env() -> ClientResult<Self> {
        let base_url = std::env::var("RESERVANT_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        Ok(Self::new(base_url))
    }

    /// Create a configuration for an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ClientConfig { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_default_base_url() {
        // SAFETY: guarded by #[serial], no other thread touches the var
        unsafe { std::env::remove_var("RESERVANT_API_URL") };
        let config = ClientConfig::from_env().expect("Failed to create client config");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    #[serial]
    fn test_config_from_env_override() {
        unsafe { std::env::set_var("RESERVANT_API_URL", "https://reservas.example.com/") };
        let config = ClientConfig::from_env().expect("Failed to create client config");
        assert_eq!(config.base_url, "https://reservas.example.com");
        unsafe { std::env::remove_var("RESERVANT_API_URL") };
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://localhost:8080///");
        assert_eq!(config.base_url, "http://localhost:8080");
    }
}
