//! Configuration loading and resolution

mod loader;

pub use loader::{generate_default_config, GableConfig, GableFile};

use std::collections::BTreeMap;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Bundle key: filesystem path to the built site content
pub const KEY_PATH: &str = "path";

/// Bundle key: document served for the root and for missing objects
pub const KEY_INDEX_DOCUMENT: &str = "indexDocument";

/// Bundle key: hostname the site is served at
pub const KEY_FRONTEND_HOST: &str = "frontend_host";

/// Bundle key: name of the pre-existing hosted DNS zone
pub const KEY_ZONE_HOST: &str = "zone_host";

/// Bundle key: domain the TLS certificate was issued for
pub const KEY_CERT_HOST: &str = "cert_host";

/// Default site content directory, relative to the working directory
pub const DEFAULT_CONTENT_PATH: &str = "../frontend/dist";

/// Default index document
pub const DEFAULT_INDEX_DOCUMENT: &str = "index.html";

const RECOGNIZED_KEYS: &[&str] = &[
    KEY_PATH,
    KEY_INDEX_DOCUMENT,
    KEY_FRONTEND_HOST,
    KEY_ZONE_HOST,
    KEY_CERT_HOST,
];

/// The raw site key-value bundle, as read from gable.yaml.
///
/// Keys are plain strings; [`SiteConfig::resolve`] turns the bundle into a
/// fully typed configuration, failing on absent required keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigBundle(BTreeMap<String, String>);

impl ConfigBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bundle from key-value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Insert or replace a value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up an optional value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Look up an optional value, falling back to a default when absent
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Look up a required value; absence is a configuration error naming the key
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| Error::missing_configuration(key))
    }

    /// Iterate over the keys in the bundle
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Whether the bundle holds no values
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fully resolved site configuration.
///
/// Built once from the [`ConfigBundle`] at the entry point; everything
/// downstream consumes this struct instead of reading raw keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Directory holding the built site content
    pub content_path: Utf8PathBuf,

    /// Document served for the root URL and used as the error document
    pub index_document: String,

    /// Base hostname the site is served at (before pull-request scoping)
    pub frontend_host: String,

    /// Name of the pre-existing hosted DNS zone
    pub zone_host: String,

    /// Domain the TLS certificate was issued for
    pub cert_host: String,
}

impl SiteConfig {
    /// Resolve the raw bundle into a typed configuration.
    ///
    /// `path` and `indexDocument` have defaults; `frontend_host`, `zone_host`
    /// and `cert_host` are required. Unrecognized keys are logged and ignored.
    pub fn resolve(bundle: &ConfigBundle) -> Result<Self> {
        for key in bundle.keys() {
            if !RECOGNIZED_KEYS.contains(&key) {
                warn!("Ignoring unrecognized site configuration key: {key}");
            }
        }

        Ok(Self {
            content_path: Utf8PathBuf::from(bundle.get_or(KEY_PATH, DEFAULT_CONTENT_PATH)),
            index_document: bundle
                .get_or(KEY_INDEX_DOCUMENT, DEFAULT_INDEX_DOCUMENT)
                .to_string(),
            frontend_host: bundle.require(KEY_FRONTEND_HOST)?.to_string(),
            zone_host: bundle.require(KEY_ZONE_HOST)?.to_string(),
            cert_host: bundle.require(KEY_CERT_HOST)?.to_string(),
        })
    }
}
