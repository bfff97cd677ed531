use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

/// Runtime configuration, merged from built-in defaults and
/// `TODONOTION_`-prefixed environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Photo-search API base. The API key rides in the query string.
    pub photos_base_url: Url,
    pub photos_api_key: String,
    /// Self-hosted posts API base (`auth/*` and `todos` live under it).
    pub posts_base_url: Url,
    pub database_url: String,
    pub loglevel: String,
    pub proxy: Option<Url>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            photos_base_url: Url::parse("https://pixabay.com/api/")
                .expect("default photos base URL is valid"),
            photos_api_key: "40521554-653259fd6834861c55e904c4e".to_string(),
            posts_base_url: Url::parse("http://127.0.0.1:1717/api/")
                .expect("default posts base URL is valid"),
            database_url: "sqlite:todonotion.sqlite".to_string(),
            loglevel: "info".to_string(),
            proxy: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("TODONOTION_"))
            .extract()
    }
}

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("FATAL: invalid configuration"));
