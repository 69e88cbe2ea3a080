//! Preset schema types.
//!
//! All structs use `serde(default)` so partial presets work. Command-line
//! flags override every value set here.

mod layout;
mod output;

pub use layout::*;
pub use output::*;

use serde::{Deserialize, Serialize};

/// Root of a `config.toml` preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImgcatConfig {
    pub layout: LayoutSection,
    pub spacing: SpacingSection,
    pub source: SourceSection,
    pub output: OutputSection,
}
