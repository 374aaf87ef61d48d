//! Centralized configuration for Newsline.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::time::Duration;

use crate::mode::RuntimeMode;

/// Central configuration for all Newsline components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct NewslineConfig {
    pub server: ServerConfig,
    pub search: SearchConfig,
    /// Runtime mode the services start in unless overridden on the CLI.
    pub mode: RuntimeMode,
}

/// HTTP server bind configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host the API server binds to
    pub host: String,
    /// Port the API server binds to
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Article index connection configuration.
///
/// Points the search provider at an OpenSearch-compatible index holding
/// the crawled articles.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the article index
    pub base_url: String,
    /// Name of the index holding crawled articles
    pub index: String,
    /// Timeout applied to each index request
    pub request_timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9200".to_string(),
            index: "articles".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl NewslineConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Server configuration overrides
        if let Ok(host) = std::env::var("NEWSLINE_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("NEWSLINE_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.server.port = port;
            }
        }

        // Article index overrides
        if let Ok(url) = std::env::var("NEWSLINE_SEARCH_URL") {
            config.search.base_url = url;
        }

        if let Ok(index) = std::env::var("NEWSLINE_SEARCH_INDEX") {
            config.search.index = index;
        }

        if let Ok(timeout) = std::env::var("NEWSLINE_SEARCH_TIMEOUT") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.search.request_timeout = Duration::from_secs(seconds);
            }
        }

        // Runtime mode override
        if let Ok(mode) = std::env::var("NEWSLINE_MODE") {
            if let Ok(mode) = mode.parse::<RuntimeMode>() {
                config.mode = mode;
            }
        }

        config
    }

    /// Creates a configuration optimized for testing.
    pub fn for_testing() -> Self {
        Self {
            search: SearchConfig {
                request_timeout: Duration::from_secs(1),
                ..SearchConfig::default()
            },
            mode: RuntimeMode::Development,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = NewslineConfig::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.search.base_url, "http://localhost:9200");
        assert_eq!(config.search.index, "articles");
        assert_eq!(config.search.request_timeout, Duration::from_secs(10));
        assert_eq!(config.mode, RuntimeMode::Development);
    }

    #[test]
    fn test_testing_preset() {
        let config = NewslineConfig::for_testing();

        assert_eq!(config.search.request_timeout, Duration::from_secs(1));
        assert!(config.mode.is_development());
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("NEWSLINE_HOST", "0.0.0.0");
            std::env::set_var("NEWSLINE_PORT", "9090");
            std::env::set_var("NEWSLINE_SEARCH_URL", "http://index.internal:9200");
            std::env::set_var("NEWSLINE_SEARCH_INDEX", "articles-v2");
            std::env::set_var("NEWSLINE_SEARCH_TIMEOUT", "3");
            std::env::set_var("NEWSLINE_MODE", "production");
        }

        let config = NewslineConfig::from_env();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.search.base_url, "http://index.internal:9200");
        assert_eq!(config.search.index, "articles-v2");
        assert_eq!(config.search.request_timeout, Duration::from_secs(3));
        assert_eq!(config.mode, RuntimeMode::Production);

        // Unparseable values fall back to defaults
        unsafe {
            std::env::set_var("NEWSLINE_PORT", "not-a-port");
            std::env::set_var("NEWSLINE_MODE", "staging");
        }

        let config = NewslineConfig::from_env();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.mode, RuntimeMode::Development);

        // Cleanup
        unsafe {
            std::env::remove_var("NEWSLINE_HOST");
            std::env::remove_var("NEWSLINE_PORT");
            std::env::remove_var("NEWSLINE_SEARCH_URL");
            std::env::remove_var("NEWSLINE_SEARCH_INDEX");
            std::env::remove_var("NEWSLINE_SEARCH_TIMEOUT");
            std::env::remove_var("NEWSLINE_MODE");
        }
    }
}
