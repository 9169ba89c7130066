//! Server configuration from environment variables.
//!
//! DESIGN
//! ======
//! Everything has a default so `cargo leptos watch` works with no `.env`.
//! Leptos' own options (site root, output name) come from the cargo-leptos
//! metadata and are read separately via `get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::ParseIntError;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Override for the decorative photo directory served at `/photos`.
    pub photos_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, photos_dir: None }
    }
}

impl ServerConfig {
    /// Read `PORT` and `PHOTOS_DIR` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] for an unparseable `PORT`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let photos_dir = get("PHOTOS_DIR").map(PathBuf::from);

        Ok(Self { port, photos_dir })
    }

    /// Directory served at `/photos`: the override, or `photos/` under the
    /// Leptos site root where cargo-leptos copies `public/`.
    #[must_use]
    pub fn resolve_photos_dir(&self, site_root: &Path) -> PathBuf {
        self.photos_dir.clone().unwrap_or_else(|| site_root.join("photos"))
    }
}
