use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub backend: BackendSettings,
    pub site: SiteSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub url: String,
    pub timeout_secs: u64,
}

impl BackendSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Fixed copy for the hero, nav and footer
#[derive(Debug, Deserialize, Clone)]
pub struct SiteSettings {
    pub owner_name: String,
    pub tagline: String,
    pub intro: String,
    pub scene_url: String,
}

fn settings_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.addr", "0.0.0.0:8080")?
        .set_default("backend.url", DEFAULT_BACKEND_URL)?
        .set_default("backend.timeout_secs", 8_i64)?
        .set_default("site.owner_name", "Aryan Gupta")?
        .set_default("site.tagline", "Visual Designer | Systems Thinker | Storyteller")?
        .set_default(
            "site.intro",
            "A minimal, editorial-style portfolio showcasing research-driven design, systems thinking, and expressive visuals.",
        )?
        .set_default(
            "site.scene_url",
            "https://prod.spline.design/xzUirwcZB9SOxUWt/scene.splinecode",
        )
}

/// Defaults, then `config/portfolio.toml`, then `PORTFOLIO__*` variables.
/// `BACKEND_URL` wins over everything for the backend address.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let backend_url = std::env::var("BACKEND_URL")
        .ok()
        .filter(|url| !url.trim().is_empty());

    let settings = settings_builder()?
        .add_source(config::File::with_name("config/portfolio").required(false))
        .add_source(
            config::Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("backend.url", backend_url)?
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Join the backend base URL and an endpoint path
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
