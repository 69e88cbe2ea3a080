//! Pixel side of imgcat: canvas allocation, per-placement compositing and
//! output encoding, built on the `image` crate.

pub mod canvas;
pub mod compositor;
pub mod encode;

pub use canvas::new_canvas;
pub use compositor::{blit, decode, Compositor};
pub use encode::{encode, write_output, OutputFormat};
