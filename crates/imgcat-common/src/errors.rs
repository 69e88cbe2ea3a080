use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    InvalidArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("cell width and height must be greater than 0 (got {width}x{height})")]
    ZeroCellDimension { width: u32, height: u32 },

    #[error("tiling column count must be 1 or greater")]
    ZeroColumns,

    #[error("layout of {count} images exceeds the maximum canvas size")]
    Overflow { count: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("failed to encode {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("failed to draw placement {index}: {reason}")]
    Draw { index: usize, reason: String },

    #[error("canvas {width}x{height} is too large to allocate")]
    CanvasTooLarge { width: u32, height: u32 },
}

#[derive(Debug, thiserror::Error)]
pub enum ImgcatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
