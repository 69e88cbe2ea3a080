//! Placement calculation: cell positions to canvas rectangles.

use imgcat_common::{LayoutError, Rect, Size};
use tracing::debug;

use super::{CellPosition, LayoutConfig, LayoutEngine, SpacingPolicy};
use crate::placement::{LayoutPlan, Placement};

impl LayoutEngine {
    /// Compute a placement for each of `count` images and the canvas that
    /// holds them.
    pub fn compute(&self, count: usize) -> Result<LayoutPlan, LayoutError> {
        let mut placements = Vec::with_capacity(count);
        let mut bounds = BoundsAccumulator::default();

        for index in 0..count {
            let cell = self.config.cell_position(index);
            let dest = placement_for(cell, &self.config, &self.spacing)
                .ok_or(LayoutError::Overflow { count })?;

            if let SpacingPolicy::GapMargin(spacing) = self.spacing {
                bounds
                    .include(&dest, spacing.margin)
                    .ok_or(LayoutError::Overflow { count })?;
            }

            debug!(index, col = cell.col, row = cell.row, %dest, "placed cell");
            placements.push(Placement {
                index,
                source: self.source,
                dest,
            });
        }

        let canvas = match self.spacing {
            SpacingPolicy::None => self.config.canvas_size(count)?,
            SpacingPolicy::GapMargin(_) => bounds.size(),
        };

        Ok(LayoutPlan { placements, canvas })
    }
}

/// Destination rectangle for `cell`, or `None` if it does not fit in `u32`
/// pixel coordinates.
pub fn placement_for(
    cell: CellPosition,
    config: &LayoutConfig,
    spacing: &SpacingPolicy,
) -> Option<Rect> {
    let Size { width, height } = config.cell();
    let (step_x, step_y, offset) = match spacing {
        SpacingPolicy::None => (width, height, 0),
        SpacingPolicy::GapMargin(s) => (
            width.checked_add(s.gap)?,
            height.checked_add(s.gap)?,
            s.margin,
        ),
    };

    let col = u32::try_from(cell.col).ok()?;
    let row = u32::try_from(cell.row).ok()?;
    let x0 = col.checked_mul(step_x)?.checked_add(offset)?;
    let y0 = row.checked_mul(step_y)?.checked_add(offset)?;

    Some(Rect::new(x0, y0, x0.checked_add(width)?, y0.checked_add(height)?))
}

/// Running maximum of every placement's far edge plus margin.
#[derive(Debug, Default)]
struct BoundsAccumulator {
    max_x: u32,
    max_y: u32,
}

impl BoundsAccumulator {
    fn include(&mut self, rect: &Rect, margin: u32) -> Option<()> {
        self.max_x = self.max_x.max(rect.x1.checked_add(margin)?);
        self.max_y = self.max_y.max(rect.y1.checked_add(margin)?);
        Some(())
    }

    fn size(&self) -> Size {
        Size::new(self.max_x, self.max_y)
    }
}
