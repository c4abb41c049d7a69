mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Resolves the process configuration from the environment. This is the only
/// place that reads environment variables; everything downstream receives the
/// resolved `Config`.
pub fn load() -> Result<Config> {
    let api_key =
        env::var("API_KEY").map_err(|_| Error::config("API_KEY environment variable is not set"))?;

    let port = match env::var("PORT") {
        Ok(value) => value
            .parse::<u16>()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", value)))?,
        Err(_) => types::default_port(),
    };

    debug!("Configuration resolved with listen port {}", port);

    Ok(Config {
        llm: LlmConfig { api_key },
        server: ServerConfig {
            host: types::default_host(),
            port,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_port(), 3000);
    }

    // Environment mutation is process-global, so all env-dependent cases run
    // in a single test.
    #[test]
    fn test_load_from_env() {
        unsafe {
            std::env::remove_var("API_KEY");
            std::env::remove_var("PORT");
        }
        let err = load().unwrap_err();
        assert!(err.to_string().contains("API_KEY"));

        unsafe {
            std::env::set_var("API_KEY", "test-key");
        }
        let config = load().unwrap();
        assert_eq!(config.llm.api_key, "test-key");
        assert_eq!(config.server.port, 3000);

        unsafe {
            std::env::set_var("PORT", "8123");
        }
        let config = load().unwrap();
        assert_eq!(config.server.port, 8123);

        unsafe {
            std::env::set_var("PORT", "not-a-port");
        }
        let err = load().unwrap_err();
        assert!(err.to_string().contains("Invalid PORT value"));

        unsafe {
            std::env::remove_var("API_KEY");
            std::env::remove_var("PORT");
        }
    }
}
