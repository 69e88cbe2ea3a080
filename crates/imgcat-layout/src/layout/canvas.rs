//! Analytic canvas sizing for gapless layouts.

use imgcat_common::{LayoutError, Size};

use super::{LayoutConfig, LayoutMode};

impl LayoutConfig {
    /// Number of (columns, rows) occupied by `count` images.
    pub fn grid_dimensions(&self, count: u32) -> (u32, u32) {
        if count == 0 {
            return (0, 0);
        }
        match self.mode() {
            LayoutMode::Vertical { wrap: None } => (1, count),
            LayoutMode::Vertical { wrap: Some(k) } => (count.div_ceil(k.get()), count.min(k.get())),
            LayoutMode::Horizontal { wrap: None } => (count, 1),
            LayoutMode::Horizontal { wrap: Some(k) } => (count.min(k.get()), count.div_ceil(k.get())),
            LayoutMode::Tiling { columns } => (count.min(columns.get()), count.div_ceil(columns.get())),
        }
    }

    /// Canvas size for `count` gapless cells, computed without visiting the
    /// placements.
    pub fn canvas_size(&self, count: usize) -> Result<Size, LayoutError> {
        let overflow = LayoutError::Overflow { count };
        let n = u32::try_from(count).map_err(|_| overflow.clone())?;
        let (cols, rows) = self.grid_dimensions(n);
        let cell = self.cell();

        let width = cols.checked_mul(cell.width).ok_or_else(|| overflow.clone())?;
        let height = rows.checked_mul(cell.height).ok_or(overflow)?;
        Ok(Size::new(width, height))
    }
}
