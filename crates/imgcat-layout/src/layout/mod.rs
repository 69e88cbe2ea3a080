mod calculation;
mod canvas;
mod position;
mod types;

pub use calculation::placement_for;
pub use position::CellPosition;
pub use types::*;
