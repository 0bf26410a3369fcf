use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub branding: BrandingConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the invoice API, including the `/api` prefix
    pub base_url: String,
}

/// Issuer details printed on every invoice
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BrandingConfig {
    pub app_title: String,
    pub company_name: String,
    pub address: String,
    pub contact_line: String,
    /// Path of the logo, relative to the API host (not the `/api` prefix)
    pub logo_path: String,
    pub bank_name: String,
    pub account_number: String,
    pub account_holder: String,
    pub thank_you_note: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub search_debounce_ms: u32,
    pub redirect_delay_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://invtax-backend.stayvie.com/api"

[branding]
app_title = "Tax Plus"
company_name = "Tax Plus Indonesia"
address = "Jl. Dinoyo 131-133 Surabaya, 60265"
contact_line = "@taxplus.id | taxplus.idn@gmail.com | +62822-2340-2300"
logo_path = "/Logo.png"
bank_name = "BCA"
account_number = "4649989980"
account_holder = "Octavianus Stevie Lianto"
thank_you_note = "Terima kasih atas kepercayaan Anda."

[ui]
search_debounce_ms = 400
redirect_delay_ms = 1500
"#;

/// `<meta>` tag that overrides `api.base_url` per deployment
const API_BASE_META: &str = "invoice-api-base";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "/api".to_string(),
            },
            branding: BrandingConfig {
                app_title: "Invoice".to_string(),
                company_name: String::new(),
                address: String::new(),
                contact_line: String::new(),
                logo_path: "/Logo.png".to_string(),
                bank_name: String::new(),
                account_number: String::new(),
                account_holder: String::new(),
                thank_you_note: String::new(),
            },
            ui: UiConfig {
                search_debounce_ms: crate::shared::debounce::SEARCH_DEBOUNCE_MS,
                redirect_delay_ms: 1500,
            },
        }
    }
}

impl AppConfig {
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Apply a base URL override, ignoring blank values
    pub fn with_api_base(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.api.base_url = url;
        }
        self
    }

    /// API base without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// Host that serves static assets: the API base with its `/api` suffix removed
    pub fn asset_base(&self) -> &str {
        let base = self.api_base();
        base.strip_suffix("/api").unwrap_or(base)
    }

    pub fn logo_url(&self) -> String {
        format!("{}{}", self.asset_base(), self.branding.logo_path)
    }
}

/// Load configuration for this page
///
/// Starts from the embedded default and applies the `<meta>` override when present.
pub fn load_config() -> AppConfig {
    let base = match AppConfig::parse(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("embedded config is invalid, using built-in defaults: {}", e);
            AppConfig::default()
        }
    };
    let config = base.with_api_base(read_meta(API_BASE_META));
    log::info!("Using invoice API at {}", config.api_base());
    config
}

/// Configuration provided at the app root
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided in context")
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    let element = document.query_selector(&selector).ok()??;
    element.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "https://invtax-backend.stayvie.com/api");
        assert_eq!(config.ui.search_debounce_ms, 400);
        assert_eq!(config.ui.redirect_delay_ms, 1500);
        assert_eq!(config.branding.bank_name, "BCA");
    }

    #[test]
    fn test_logo_url_strips_api_prefix() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.logo_url(), "https://invtax-backend.stayvie.com/Logo.png");

        let local = config.with_api_base(Some("http://localhost:5000/api/".to_string()));
        assert_eq!(local.api_base(), "http://localhost:5000/api");
        assert_eq!(local.logo_url(), "http://localhost:5000/Logo.png");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = AppConfig::default().with_api_base(Some("   ".to_string()));
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.logo_url(), "/Logo.png");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(AppConfig::parse("[api]\nbase_url = \"x\"").is_err());
    }
}
