//! API configuration
//!
//! The web build has no filesystem or process environment, so values are
//! baked in at compile time from `CATDEX_*` variables. Unset or empty
//! variables fall back to defaults.

use reqwest::Url;
use tracing::{info, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.thecatapi.com/v1";
pub const DEFAULT_IMAGES_PER_PAGE: u32 = 12;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL of The Cat API, without trailing slash
    pub base_url: Url,
    /// Sent as `x-api-key` when present
    pub api_key: Option<String>,
    /// Images requested per breed on the home page
    pub images_per_page: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            images_per_page: DEFAULT_IMAGES_PER_PAGE,
        }
    }
}

impl ApiConfig {
    pub fn load() -> Self {
        let config = Self::from_values(
            option_env!("CATDEX_API_BASE_URL"),
            option_env!("CATDEX_API_KEY"),
            option_env!("CATDEX_IMAGES_PER_PAGE"),
        );
        info!(
            "API config: base_url={}, api_key_set={}, images_per_page={}",
            config.base_url,
            config.api_key.is_some(),
            config.images_per_page
        );
        config
    }

    fn from_values(
        base_url: Option<&str>,
        api_key: Option<&str>,
        images_per_page: Option<&str>,
    ) -> Self {
        let base_url = match base_url.filter(|s| !s.is_empty()) {
            Some(raw) => match Url::parse(raw.trim_end_matches('/')) {
                Ok(url) if !url.cannot_be_a_base() => url,
                _ => {
                    warn!("Ignoring invalid CATDEX_API_BASE_URL '{}'", raw);
                    default_base_url()
                }
            },
            None => default_base_url(),
        };

        let images_per_page = match images_per_page.filter(|s| !s.is_empty()) {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!("Ignoring invalid CATDEX_IMAGES_PER_PAGE '{}'", raw);
                    DEFAULT_IMAGES_PER_PAGE
                }
            },
            None => DEFAULT_IMAGES_PER_PAGE,
        };

        Self {
            base_url,
            api_key: api_key.filter(|k| !k.is_empty()).map(str::to_string),
            images_per_page,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}
