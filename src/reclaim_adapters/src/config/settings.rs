use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::constants;

/// Settings for the storefront API client.
///
/// Layered: built-in defaults, then an optional JSON file (path from
/// `RECLAIM_SETTINGS_FILE`, default `reclaim.json`), then the
/// `RECLAIM_API__BASE_URL` and `RECLAIM_API__TIMEOUT_MILLIS` environment
/// overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    pub api: ApiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_millis: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

impl ClientSettings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings_file = std::env::var(constants::env::SETTINGS_FILE_ENV_VAR)
            .unwrap_or_else(|_| "reclaim.json".to_string());

        let mut builder = Config::builder()
            .set_default("api.base_url", constants::prod::api::BASE_URL)?
            .set_default(
                "api.timeout_millis",
                constants::prod::api::TIMEOUT.as_millis() as u64,
            )?
            .add_source(File::with_name(&settings_file).required(false));

        if let Ok(base_url) = std::env::var(constants::env::API_BASE_URL_ENV_VAR) {
            builder = builder.set_override("api.base_url", base_url)?;
        }
        if let Ok(timeout) = std::env::var(constants::env::API_TIMEOUT_ENV_VAR) {
            builder = builder.set_override("api.timeout_millis", timeout)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Settings pointed at an arbitrary base URL, with the short test
    /// timeout. Used by integration tests against a local mock server.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiSettings {
                base_url: base_url.into(),
                timeout_millis: constants::test::api::TIMEOUT.as_millis() as u64,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_storefront_backend() {
        let settings = ClientSettings::load().expect("defaults always deserialize");
        assert!(settings.api.base_url.starts_with("http"));
        assert!(settings.api.timeout().as_millis() > 0);
    }

    #[test]
    fn for_base_url_uses_the_test_timeout() {
        let settings = ClientSettings::for_base_url("http://127.0.0.1:9999");
        assert_eq!(settings.api.base_url, "http://127.0.0.1:9999");
        assert_eq!(settings.api.timeout(), constants::test::api::TIMEOUT);
    }

    #[test]
    fn env_overrides_take_precedence_over_defaults() {
        unsafe {
            std::env::set_var(constants::env::API_BASE_URL_ENV_VAR, "http://10.0.0.9:4000");
            std::env::set_var(constants::env::API_TIMEOUT_ENV_VAR, "750");
        }
        let settings = ClientSettings::load().expect("env overrides deserialize");
        unsafe {
            std::env::remove_var(constants::env::API_BASE_URL_ENV_VAR);
            std::env::remove_var(constants::env::API_TIMEOUT_ENV_VAR);
        }
        assert_eq!(settings.api.base_url, "http://10.0.0.9:4000");
        assert_eq!(settings.api.timeout(), std::time::Duration::from_millis(750));
    }
}
