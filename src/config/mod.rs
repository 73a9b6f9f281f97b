//! Application configuration loaded from `config.toml`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, GenderizeConfig, StoreConfig, DEFAULT_GENDERIZE_URL, DEFAULT_NAMESPACE,
};
