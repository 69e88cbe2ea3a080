//! Layout policy: index to (column, row).

use serde::Serialize;

use super::{LayoutConfig, LayoutMode};

/// Grid cell an image occupies, counted in cells rather than pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellPosition {
    pub col: usize,
    pub row: usize,
}

impl CellPosition {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl LayoutConfig {
    /// Cell occupied by the image at `index`. Total for every index.
    pub fn cell_position(&self, index: usize) -> CellPosition {
        match self.mode() {
            LayoutMode::Vertical { wrap: None } => CellPosition::new(0, index),
            LayoutMode::Vertical { wrap: Some(k) } => {
                let k = k.get() as usize;
                CellPosition::new(index / k, index % k)
            }
            LayoutMode::Horizontal { wrap: None } => CellPosition::new(index, 0),
            LayoutMode::Horizontal { wrap: Some(k) } => {
                let k = k.get() as usize;
                CellPosition::new(index % k, index / k)
            }
            LayoutMode::Tiling { columns } => {
                let c = columns.get() as usize;
                CellPosition::new(index % c, index / c)
            }
        }
    }
}
