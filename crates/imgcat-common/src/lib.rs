pub mod errors;
pub mod types;

pub use errors::{ConfigError, ImgcatError, LayoutError, RenderError};
pub use types::{Color, CompositePolicy, Point, Rect, Size};

pub type Result<T> = std::result::Result<T, ImgcatError>;
