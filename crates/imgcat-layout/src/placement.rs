use imgcat_common::{Point, Rect, Size};
use serde::Serialize;

/// Where one input image is read from and drawn to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Position of the image in the input list.
    pub index: usize,
    /// Top-left corner of the region copied out of the source image.
    pub source: Point,
    /// Destination on the canvas; always exactly one cell in size.
    pub dest: Rect,
}

/// Output of [`LayoutEngine::compute`](crate::LayoutEngine::compute).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutPlan {
    /// One entry per input image, in input order.
    pub placements: Vec<Placement>,
    pub canvas: Size,
}

impl LayoutPlan {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Whether every placement fits inside the canvas.
    pub fn fits_canvas(&self) -> bool {
        self.placements
            .iter()
            .all(|placement| self.canvas.contains(&placement.dest))
    }
}
