//! TOML preset loading and creation.

use crate::schema::ImgcatConfig;
use crate::validation;
use imgcat_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load a preset from a specific TOML file path.
///
/// Missing fields take their defaults. The result is validated and a
/// validation failure is returned as an error.
pub fn load_from_path(path: &Path) -> Result<ImgcatConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: ImgcatConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;

    info!("loaded preset from {}", path.display());
    Ok(config)
}

/// Load the preset from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/imgcat/config.toml`
/// On Linux: `~/.config/imgcat/config.toml`
///
/// A missing file, or a platform without a config directory, yields defaults.
pub fn load_default() -> Result<ImgcatConfig, ConfigError> {
    let Ok(path) = default_config_path() else {
        debug!("no platform config directory, using defaults");
        return Ok(ImgcatConfig::default());
    };

    if !path.exists() {
        debug!("no preset at {}, using defaults", path.display());
        return Ok(ImgcatConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default preset path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("imgcat").join("config.toml"))
}

/// Write the documented default preset to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::ParseError(format!(
                    "failed to create config directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default preset at {}", path.display());
    Ok(())
}

/// Generate the default TOML preset content with comments.
fn default_config_toml() -> String {
    r##"# imgcat preset
# Schema version 1
# Only set what you want to change -- command-line flags override every value.

[layout]
# kind = "vertical"      # vertical, horizontal, tiling
# width = 256            # cell width, > 0
# height = 256           # cell height, > 0
# wrap = 0               # images per column/row before wrapping, 0 = no wrap
# columns = 4            # tiling column count, >= 1

[spacing]
# gap = 0                # pixels between cells
# margin = 0             # pixels around the whole composite

[source]
# x = 0                  # crop origin read from every input
# y = 0

[output]
# background = "#ffffff" # #rrggbb, #rrggbbaa or rgba(r,g,b,a)
# quality = 90           # JPEG quality, 1-100
# composite = "overwrite" # overwrite, overlay (default: overlay for tiling)
"##
    .to_string()
}
