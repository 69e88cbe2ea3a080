//! Layout engine for imgcat: maps an ordered list of images onto cells of a
//! canvas and sizes the canvas to hold them.

pub mod layout;
pub mod placement;

pub use layout::{
    placement_for, CellPosition, LayoutConfig, LayoutEngine, LayoutKind, LayoutMode,
    SpacingConfig, SpacingPolicy,
};
pub use placement::{LayoutPlan, Placement};
