// src/config.rs
use crate::domain::seo::SiteSettings;
use std::env;
use thiserror::Error;
use url::Url;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    site: SiteSettings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_site_url() -> String {
    "http://localhost:3000".into()
}

fn default_site_name() -> String {
    "Content Site".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let site_url = get("SITE_URL").unwrap_or_else(default_site_url);
        let parsed = Url::parse(&site_url)
            .map_err(|err| ConfigError::Invalid(format!("SITE_URL `{site_url}`: {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "SITE_URL must use http or https, got `{}`",
                parsed.scheme()
            )));
        }

        let mut site =
            SiteSettings::new(site_url, get("SITE_NAME").unwrap_or_else(default_site_name));
        site.description = get("SITE_DESCRIPTION").unwrap_or_default();
        site.logo_url = get("SITE_LOGO_URL");
        site.default_image = get("SITE_DEFAULT_IMAGE");
        site.twitter_handle = get("SITE_TWITTER_HANDLE");
        if let Some(locale) = get("SITE_LOCALE") {
            site.locale = locale;
        }

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            allowed_origins,
            site,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub const fn site(&self) -> &SiteSettings {
        &self.site
    }

    pub fn into_site(self) -> SiteSettings {
        self.site
    }
}
