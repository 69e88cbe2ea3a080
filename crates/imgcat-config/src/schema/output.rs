//! Output encoding and compositing preset section.

use imgcat_common::CompositePolicy;
use serde::{Deserialize, Serialize};

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Canvas fill color, `#rrggbb`, `#rrggbbaa` or `rgba(r,g,b,a)`.
    pub background: String,
    /// JPEG quality (valid range: 1-100).
    pub quality: u8,
    /// overwrite or overlay; unset picks per layout.
    pub composite: Option<CompositePolicy>,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            background: "#ffffff".into(),
            quality: 90,
            composite: None,
        }
    }
}
