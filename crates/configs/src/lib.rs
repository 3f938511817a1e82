use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the storefront backend, e.g. `https://shop.example.com/api/v1`
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000/api/v1".into(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            page_size: default_page_size(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
fn default_locale() -> String {
    "en".into()
}
fn default_page_size() -> u32 {
    12
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` when present (a missing file means defaults),
    /// fill in environment overrides, then validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default().unwrap_or_default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.api.normalize_from_env();
        self.api.validate()?;
        self.ui.normalize_from_env();
        self.ui.validate()?;
        Ok(())
    }
}

impl ApiConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(url) = std::env::var("STOREFRONT_API_URL") {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(anyhow!(
                "api.base_url is empty; set it in config.toml or STOREFRONT_API_URL"
            ));
        }
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("api.base_url must start with http:// or https://"));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow!("api.timeout_secs must be a positive number of seconds"));
        }
        Ok(())
    }
}

impl UiConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(locale) = std::env::var("STOREFRONT_LOCALE") {
            if !locale.trim().is_empty() {
                self.locale = locale;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.locale.trim().is_empty() {
            return Err(anyhow!("ui.locale must not be empty"));
        }
        if self.page_size == 0 || self.page_size > 100 {
            return Err(anyhow!("ui.page_size must be in 1..=100"));
        }
        Ok(())
    }
}
