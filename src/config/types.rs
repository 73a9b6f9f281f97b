use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Namespace the person record lives under.
pub const DEFAULT_NAMESPACE: &str = "ListaLudzi";

/// Public name→gender inference endpoint.
pub const DEFAULT_GENDERIZE_URL: &str = "https://api.genderize.io";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub genderize: GenderizeConfig,
}

/// Where the key-value store keeps its data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding one file per namespace.
    /// `None` resolves to `dirs::data_dir()/personform`.
    pub dir: Option<PathBuf>,
    /// Namespace (file stem) of the person record.
    pub namespace: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Directory the store files are written to.
    pub fn resolved_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("personform"),
        }
    }
}

/// Gender inference service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderizeConfig {
    /// Base URL the `name` query parameter is appended to.
    pub base_url: String,
}

impl Default for GenderizeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GENDERIZE_URL.to_string(),
        }
    }
}
