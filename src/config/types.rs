use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Movie database API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API (e.g. "https://api.themoviedb.org").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key appended to every request as a query parameter. May be
    /// supplied or overridden by the `CINESEARCH_API_KEY` environment
    /// variable.
    #[serde(default)]
    pub api_key: String,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
        }
    }
}
