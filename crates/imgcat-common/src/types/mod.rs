mod color;
mod composite;
mod core;

pub use self::core::*;
pub use color::*;
pub use composite::*;
