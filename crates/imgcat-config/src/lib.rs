//! imgcat preset configuration.
//!
//! Provides an optional TOML preset holding default layout, spacing, crop
//! and output settings. All sections use defaults so partial presets work;
//! command-line flags take precedence over anything loaded here.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use imgcat_config::load_config;
//!
//! let config = load_config(None).expect("failed to load preset");
//! println!("{:?}", config.layout.kind);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::ImgcatConfig;
pub use toml_loader::{create_default_config, default_config_path};

use imgcat_common::ConfigError;
use std::path::Path;

/// Load the preset at `path`, or the platform default preset when `None`.
///
/// An explicit path must exist; the platform default may be absent.
pub fn load_config(path: Option<&Path>) -> Result<ImgcatConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}
