//! Layout, spacing and source-crop preset sections.

use imgcat_layout::LayoutKind;
use serde::{Deserialize, Serialize};

/// `[layout]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSection {
    /// vertical, horizontal or tiling.
    pub kind: LayoutKind,
    /// Cell width in pixels (must be > 0 when set).
    pub width: Option<u32>,
    /// Cell height in pixels (must be > 0 when set).
    pub height: Option<u32>,
    /// Images per column (vertical) or row (horizontal); 0 = no wrap.
    pub wrap: u32,
    /// Tiling column count (must be >= 1 when set).
    pub columns: Option<u32>,
}

/// `[spacing]` section. Setting either field selects gap/margin spacing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingSection {
    pub gap: Option<u32>,
    pub margin: Option<u32>,
}

/// `[source]` section: crop origin applied to every input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSection {
    pub x: u32,
    pub y: u32,
}
