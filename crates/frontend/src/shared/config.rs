use serde::Deserialize;

use super::api_utils::api_base;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub refresh: RefreshConfig,
    pub highlight: HighlightConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same host as the page, backend port"
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RefreshConfig {
    pub interval_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HighlightConfig {
    /// Delay before scrolling to the highlighted order, lets layout settle
    pub scroll_delay_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[refresh]
interval_ms = 10000

[highlight]
scroll_delay_ms = 500
"#;

/// Build-time override for the backend address
const API_URL_OVERRIDE: Option<&str> = option_env!("ORDER_HISTORY_API_URL");

impl AppConfig {
    /// Parse a TOML config
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Embedded defaults plus the build-time API override
    pub fn load() -> Self {
        let mut config = match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid embedded config, using built-in values: {}", e);
                Self::fallback()
            }
        };
        if let Some(url) = API_URL_OVERRIDE.filter(|u| !u.trim().is_empty()) {
            config.api.base_url = url.trim().to_string();
        }
        config
    }

    fn fallback() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
            },
            refresh: RefreshConfig { interval_ms: 10_000 },
            highlight: HighlightConfig {
                scroll_delay_ms: 500,
            },
        }
    }

    /// Backend base URL, derived from the page location when not configured
    pub fn api_url(&self) -> String {
        if self.api.base_url.is_empty() {
            api_base()
        } else {
            self.api.base_url.trim_end_matches('/').to_string()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load()
    }
}
