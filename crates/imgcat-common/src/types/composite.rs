use serde::{Deserialize, Serialize};
use std::fmt;

/// How source pixels are combined with the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositePolicy {
    /// Replace destination pixels, alpha included.
    #[default]
    Overwrite,
    /// Source-over alpha blend onto the destination.
    Overlay,
}

impl fmt::Display for CompositePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositePolicy::Overwrite => f.write_str("overwrite"),
            CompositePolicy::Overlay => f.write_str("overlay"),
        }
    }
}
