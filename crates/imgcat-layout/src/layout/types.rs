//! Layout engine types and configuration.

use std::fmt;
use std::num::NonZeroU32;

use imgcat_common::{LayoutError, Point, Size};
use serde::{Deserialize, Serialize};

/// Layout selector without its parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Vertical,
    Horizontal,
    Tiling,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayoutKind::Vertical => "vertical",
            LayoutKind::Horizontal => "horizontal",
            LayoutKind::Tiling => "tiling",
        };
        f.write_str(name)
    }
}

/// How cell positions are assigned to image indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutMode {
    /// Stack downward; with `wrap`, start a new column every `wrap` images.
    Vertical { wrap: Option<NonZeroU32> },
    /// Stack rightward; with `wrap`, start a new row every `wrap` images.
    Horizontal { wrap: Option<NonZeroU32> },
    /// Fixed column count, always wrapping after `columns` images.
    Tiling { columns: NonZeroU32 },
}

impl Default for LayoutMode {
    fn default() -> Self {
        LayoutMode::Vertical { wrap: None }
    }
}

impl LayoutMode {
    /// Vertical stack. A `wrap` of 0 means no wrapping.
    pub fn vertical(wrap: u32) -> Self {
        LayoutMode::Vertical {
            wrap: NonZeroU32::new(wrap),
        }
    }

    /// Horizontal stack. A `wrap` of 0 means no wrapping.
    pub fn horizontal(wrap: u32) -> Self {
        LayoutMode::Horizontal {
            wrap: NonZeroU32::new(wrap),
        }
    }

    pub fn tiling(columns: u32) -> Result<Self, LayoutError> {
        let columns = NonZeroU32::new(columns).ok_or(LayoutError::ZeroColumns)?;
        Ok(LayoutMode::Tiling { columns })
    }

    pub fn kind(&self) -> LayoutKind {
        match self {
            LayoutMode::Vertical { .. } => LayoutKind::Vertical,
            LayoutMode::Horizontal { .. } => LayoutKind::Horizontal,
            LayoutMode::Tiling { .. } => LayoutKind::Tiling,
        }
    }
}

/// Immutable layout description: mode plus the size of every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutConfig {
    mode: LayoutMode,
    cell: Size,
}

impl LayoutConfig {
    /// Both cell dimensions must be non-zero.
    pub fn new(mode: LayoutMode, cell_width: u32, cell_height: u32) -> Result<Self, LayoutError> {
        if cell_width == 0 || cell_height == 0 {
            return Err(LayoutError::ZeroCellDimension {
                width: cell_width,
                height: cell_height,
            });
        }
        Ok(Self {
            mode,
            cell: Size::new(cell_width, cell_height),
        })
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn cell(&self) -> Size {
        self.cell
    }
}

/// Spacing applied by the [`SpacingPolicy::GapMargin`] policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpacingConfig {
    /// Pixels between adjacent cells.
    pub gap: u32,
    /// Pixels between the canvas edge and the outermost cells.
    pub margin: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SpacingPolicy {
    /// Cells are exactly adjacent; the canvas is sized analytically.
    #[default]
    None,
    /// Cells are separated by a gap and surrounded by a margin; the canvas is
    /// sized from the extent of every placement.
    GapMargin(SpacingConfig),
}

/// Computes placements and the canvas size for a list of images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutEngine {
    pub config: LayoutConfig,
    pub spacing: SpacingPolicy,
    /// Crop origin read from every source image.
    pub source: Point,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            spacing: SpacingPolicy::None,
            source: Point::ORIGIN,
        }
    }

    pub fn with_spacing(mut self, spacing: SpacingPolicy) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_source(mut self, source: Point) -> Self {
        self.source = source;
        self
    }
}
