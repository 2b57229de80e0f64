//! Canvas geometry and palette.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::RgbColor;

use super::RenderError;

/// Colors used by the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Gradient color at the top edge.
    pub gradient_top: Rgb888,
    /// Gradient color at the bottom edge.
    pub gradient_bottom: Rgb888,
    /// Fill color of the decorative circles.
    pub accent: Rgb888,
    /// Opacity of the decorative circles (0-255).
    pub accent_opacity: u8,
    /// Foreground text color.
    pub text: Rgb888,
    /// Text shadow color.
    pub shadow: Rgb888,
    /// Opacity of the text shadow (0-255).
    pub shadow_opacity: u8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            gradient_top: Rgb888::new(20, 30, 50),
            gradient_bottom: Rgb888::new(40, 60, 90),
            accent: Rgb888::new(120, 200, 255),
            accent_opacity: 100,
            text: Rgb888::WHITE,
            shadow: Rgb888::BLACK,
            shadow_opacity: 128,
        }
    }
}

/// Largest accepted width or height. The canvas is allocated up front.
pub const MAX_DIMENSION: u32 = 16_384;

/// Size, margins and text rhythm of the rendered canvas.
///
/// All coordinates are in pixels with the origin at the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    /// X of the title and of the first text column.
    pub margin_left: i32,
    /// Y of the title.
    pub title_top: i32,
    /// Y where both text columns start.
    pub body_top: i32,
    /// Vertical advance per line.
    pub line_pitch: u32,
    /// Offset of the second column from the horizontal center.
    pub column_gutter: i32,
    /// No text is placed below `height - bottom_margin`.
    pub bottom_margin: u32,
    /// Stop after this many lines even if space remains.
    pub max_lines: Option<usize>,
    pub palette: Palette,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            margin_left: 50,
            title_top: 50,
            body_top: 100,
            line_pitch: 18,
            column_gutter: 20,
            bottom_margin: 100,
            max_lines: None,
            palette: Palette::default(),
        }
    }
}

impl CanvasSpec {
    /// Lowest Y at which a line may still be placed.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn text_limit(&self) -> i32 { saturate(self.height as i64 - self.bottom_margin as i64) }

    /// X of the second text column.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn right_column_x(&self) -> i32 {
        saturate((self.width / 2) as i64 + self.column_gutter as i64)
    }

    /// Checks that the spec describes a drawable canvas.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidCanvas`] if a dimension or the line pitch is zero,
    /// a dimension exceeds [`MAX_DIMENSION`], the pitch is taller than the canvas,
    /// the bottom margin swallows the whole canvas, or the body starts below the
    /// text limit. Such a spec is a static misconfiguration and is never retried.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidCanvas(format!(
                "canvas must have a positive size, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(RenderError::InvalidCanvas(format!(
                "canvas {}x{} is too large, the maximum is {MAX_DIMENSION}x{MAX_DIMENSION}",
                self.width, self.height
            )));
        }
        if self.line_pitch == 0 {
            return Err(RenderError::InvalidCanvas("line pitch must be positive".to_string()));
        }
        if self.line_pitch > self.height {
            return Err(RenderError::InvalidCanvas(format!(
                "line pitch {} is larger than the canvas height {}",
                self.line_pitch, self.height
            )));
        }
        if self.bottom_margin >= self.height {
            return Err(RenderError::InvalidCanvas(format!(
                "bottom margin {} leaves no room on a canvas {} pixels high",
                self.bottom_margin, self.height
            )));
        }
        if self.body_top > self.text_limit() {
            return Err(RenderError::InvalidCanvas(format!(
                "body starts at y={} which is below the text limit y={}",
                self.body_top,
                self.text_limit()
            )));
        }
        Ok(())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
const fn saturate(value: i64) -> i32 {
    if value > i32::MAX as i64 {
        i32::MAX
    } else if value < i32::MIN as i64 {
        i32::MIN
    } else {
        value as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_is_valid() {
        let spec = CanvasSpec::default();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.text_limit(), 980);
        assert_eq!(spec.right_column_x(), 980);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let spec = CanvasSpec { width: 0, ..CanvasSpec::default() };
        assert!(matches!(spec.validate(), Err(RenderError::InvalidCanvas(_))));

        let spec = CanvasSpec { height: 0, ..CanvasSpec::default() };
        assert!(matches!(spec.validate(), Err(RenderError::InvalidCanvas(_))));
    }

    #[test]
    fn test_zero_pitch_is_rejected() {
        let spec = CanvasSpec { line_pitch: 0, ..CanvasSpec::default() };
        assert!(matches!(spec.validate(), Err(RenderError::InvalidCanvas(_))));
    }

    #[test]
    fn test_body_below_limit_is_rejected() {
        let spec = CanvasSpec {
            height: 200,
            bottom_margin: 150,
            ..CanvasSpec::default()
        };
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("below the text limit"));
    }

    #[test]
    fn test_margin_larger_than_canvas_is_rejected() {
        let spec = CanvasSpec {
            height: 100,
            bottom_margin: 100,
            ..CanvasSpec::default()
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_oversized_canvas_is_rejected() {
        let spec = CanvasSpec { width: MAX_DIMENSION + 1, ..CanvasSpec::default() };
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("too large"));

        let spec = CanvasSpec { width: MAX_DIMENSION, height: MAX_DIMENSION, ..CanvasSpec::default() };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_pitch_taller_than_canvas_is_rejected() {
        let spec = CanvasSpec {
            height: i32::MAX as u32,
            line_pitch: i32::MAX as u32,
            ..CanvasSpec::default()
        };
        assert!(spec.validate().is_err());

        let spec = CanvasSpec { line_pitch: 1081, ..CanvasSpec::default() };
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("line pitch 1081"));
    }

    #[test]
    fn test_geometry_saturates_on_extreme_values() {
        let spec = CanvasSpec {
            height: 10,
            bottom_margin: u32::MAX,
            column_gutter: i32::MAX,
            ..CanvasSpec::default()
        };
        assert!(spec.text_limit() < 0);
        assert_eq!(spec.right_column_x(), i32::MAX);
    }
}
