//! Web server configuration.

/// Settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct WebServerConfig {
    /// Address and port the server listens on
    pub bind_address: String,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

impl WebServerConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// `FOLIO_BIND_ADDRESS` replaces the default listen address.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(address) = std::env::var("FOLIO_BIND_ADDRESS") {
            if !address.trim().is_empty() {
                config.bind_address = address.trim().to_string();
            }
        }

        config
    }
}
