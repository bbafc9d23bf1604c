use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub default_language: String,
    pub page_size: u32,
    pub health_poll_interval_ms: u32,
    pub notification_timeout_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_language: "fr".to_string(),
            page_size: 20,
            health_poll_interval_ms: 30_000,
            notification_timeout_ms: 5_000,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_path = "/api"

[ui]
default_language = "fr"
page_size = 20
health_poll_interval_ms = 30000
notification_timeout_ms = 5000
"#;

/// URL of the optional override, resolved against the page
const CONFIG_URL: &str = "config.toml";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

fn default_config() -> AppConfig {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("embedded configuration is invalid: {}", e);
            AppConfig {
                api: ApiConfig {
                    base_path: "/api".to_string(),
                },
                ui: UiConfig::default(),
            }
        }
    }
}

/// Load configuration once at startup.
///
/// Search order:
/// 1. `config.toml` served next to the page
/// 2. Falls back to embedded default config
pub async fn load_config() {
    let config = match fetch_override().await {
        Ok(Some(config)) => {
            log::info!("Loaded configuration from {}", CONFIG_URL);
            config
        }
        Ok(None) => {
            log::info!("Using default embedded configuration");
            default_config()
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", CONFIG_URL, e);
            default_config()
        }
    };
    if CONFIG.set(config).is_err() {
        log::warn!("configuration already initialised");
    }
}

async fn fetch_override() -> Result<Option<AppConfig>, String> {
    let response = gloo_net::http::Request::get(CONFIG_URL)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Ok(None);
    }
    let text = response.text().await.map_err(|e| e.to_string())?;
    parse_config(&text).map(Some).map_err(|e| e.to_string())
}

/// Active configuration; the embedded default until `load_config` has run.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(default_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_path, "/api");
        assert_eq!(config.ui.health_poll_interval_ms, 30_000);
        assert_eq!(config.ui.default_language, "fr");
    }

    #[test]
    fn test_ui_section_is_optional() {
        let config = parse_config("[api]\nbase_path = \"https://api.educafric.com/api\"\n").unwrap();
        assert_eq!(config.api.base_path, "https://api.educafric.com/api");
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_partial_ui_section_keeps_defaults() {
        let config = parse_config("[api]\nbase_path = \"/api\"\n[ui]\npage_size = 50\n").unwrap();
        assert_eq!(config.ui.page_size, 50);
        assert_eq!(config.ui.notification_timeout_ms, 5_000);
    }

    #[test]
    fn test_missing_api_section_is_rejected() {
        assert!(parse_config("[ui]\npage_size = 10\n").is_err());
    }
}
