//! Text-to-image rendering.
//!
//! - [`lines`] - raw text to display lines
//! - [`layout`] - two-column placement of display lines
//! - [`surface`] - blending draw targets over an RGBA image
//! - [`canvas`] - the compositor that produces the final PNG

pub mod canvas;
pub mod layout;
pub mod lines;
pub mod spec;
pub mod surface;

pub use canvas::{Compositor, RenderedImage};
pub use layout::{Column, Placement, column_capacity, layout};
pub use lines::{DisplayLine, format_lines};
pub use spec::{CanvasSpec, Palette};
use thiserror::Error;

/// Errors that can occur while rendering a canvas.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The canvas geometry cannot be drawn. Never retried.
    #[error("Invalid canvas: {0}")]
    InvalidCanvas(String),
    /// PNG encoding failed.
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    /// Writing the encoded image failed.
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}
