//! Server configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use prefs::{InitPolicy, PaletteKind, StoreKind};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ASSETS_DIR: &str = "client/pkg";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BIND address: {0}")]
    InvalidBind(String),

    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid COOKIE_SECURE value: {0}")]
    InvalidBool(String),

    #[error("invalid {key}: {value}")]
    InvalidTheme { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// Secret the cookie signing key is derived from. `None` means a random
    /// key per process.
    pub cookie_secret: Option<String>,
    pub cookie_secure: bool,
    /// Known category names, sorted and deduplicated.
    pub categories: Vec<String>,
    /// Directory holding the compiled browser bundle, served at `/pkg`.
    pub assets_dir: PathBuf,
    /// Palette the stylesheets and page roots use.
    pub palette: PaletteKind,
    /// Init policy advertised to the browser; `None` keeps each store's
    /// default.
    pub theme_init: Option<InitPolicy>,
    /// Store variant the home page toggle uses (`local` or `cookie`).
    pub home_store: StoreKind,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `BIND`: default `0.0.0.0`
    /// - `PORT`: default 8080
    /// - `COOKIE_SECRET`: random per process when absent or empty
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default false
    /// - `CATEGORIES`: comma-separated category names
    /// - `ASSETS_DIR`: default `client/pkg`
    /// - `THEME_PALETTE`: `solarized` (default) or `contrast`
    /// - `THEME_INIT`: `light_only`, `always` or `never`
    /// - `HOME_THEME_STORE`: `cookie` (default) or `local`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = get("BIND").unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let bind = bind_raw
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidBind(bind_raw.clone()))?;

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let cookie_secure = match get("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool(raw))?,
            None => false,
        };

        let cookie_secret = get("COOKIE_SECRET").filter(|s| !s.is_empty());
        let categories = parse_categories(get("CATEGORIES").as_deref().unwrap_or_default());
        let assets_dir = get("ASSETS_DIR").map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);

        let palette = parse_theme(&get, "THEME_PALETTE")?.unwrap_or_default();
        let theme_init = parse_theme(&get, "THEME_INIT")?;
        let home_store = match parse_theme(&get, "HOME_THEME_STORE")? {
            Some(StoreKind::Remote) => {
                return Err(ConfigError::InvalidTheme { key: "HOME_THEME_STORE", value: "remote".into() });
            }
            Some(kind) => kind,
            None => StoreKind::Cookie,
        };

        Ok(Self { bind, port, cookie_secret, cookie_secure, categories, assets_dir, palette, theme_init, home_store })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_theme<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match get(key) {
        Some(raw) => raw.parse().map(Some).map_err(|_| ConfigError::InvalidTheme { key, value: raw }),
        None => Ok(None),
    }
}

fn parse_categories(raw: &str) -> Vec<String> {
    let mut categories: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect();
    categories.sort();
    categories.dedup();
    categories
}
