//! Canvas composition.
//!
//! Draws the gradient backdrop, the decorative accents, the title and the
//! laid-out body lines, then encodes the result as PNG.

use std::convert::Infallible;
use std::io::Cursor;
use std::path::Path;

use embedded_graphics::Drawable;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::mono_font::ascii::{FONT_9X15, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{Primitive, RgbColor};
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use super::RenderError;
use super::layout::layout;
use super::lines::DisplayLine;
use super::spec::CanvasSpec;
use super::surface::{BlendSurface, OPAQUE, ScaledSurface};
use crate::platform::fs::write_atomic;

/// Diameter of the decorative circles.
const ACCENT_DIAMETER: u32 = 400;

/// Offset of the top-right accent from the right edge, and of the bottom-left
/// accent from the bottom edge.
const ACCENT_INSET: i32 = 300;

/// How far the accents hang off the canvas.
const ACCENT_OVERHANG: i32 = 100;

/// Font for the title. Drawn at [`TITLE_SCALE`].
const TITLE_FONT: &MonoFont<'static> = &FONT_10X20;

const TITLE_SCALE: u32 = 2;

const TITLE_SHADOW_OFFSET: Point = Point::new(2, 2);

/// Font for the body lines.
const BODY_FONT: &MonoFont<'static> = &FONT_9X15;

const BODY_SHADOW_OFFSET: Point = Point::new(1, 1);

/// A PNG-encoded canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl RenderedImage {
    fn encode(canvas: RgbaImage) -> Result<Self, RenderError> {
        let (width, height) = canvas.dimensions();
        let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();

        let mut bytes = Vec::new();
        rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

        Ok(Self { bytes, width, height })
    }

    /// Encoded PNG bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    #[must_use]
    pub const fn width(&self) -> u32 { self.width }

    #[must_use]
    pub const fn height(&self) -> u32 { self.height }

    /// Writes the image to `path` through a temporary file in the same
    /// directory, so readers never observe a partially written file.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if the directory cannot be created or the
    /// file cannot be written or moved into place.
    pub fn write_atomic(&self, path: &Path) -> Result<(), RenderError> {
        write_atomic(path, &self.bytes)?;
        Ok(())
    }
}

/// Renders titled text onto a fixed-size canvas.
#[derive(Debug, Clone)]
pub struct Compositor {
    spec: CanvasSpec,
}

impl Compositor {
    /// Creates a compositor for a validated canvas.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidCanvas`] if the spec cannot be drawn.
    pub fn new(spec: CanvasSpec) -> Result<Self, RenderError> {
        spec.validate()?;
        Ok(Self { spec })
    }

    #[must_use]
    pub const fn spec(&self) -> &CanvasSpec { &self.spec }

    /// Composes and encodes the canvas.
    ///
    /// Identical inputs produce identical bytes; nothing here reads the clock.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Encode`] if PNG encoding fails.
    pub fn render(&self, title: &str, lines: &[DisplayLine]) -> Result<RenderedImage, RenderError> {
        RenderedImage::encode(self.compose(title, lines))
    }

    /// Draws the canvas without encoding it.
    #[must_use]
    pub fn compose(&self, title: &str, lines: &[DisplayLine]) -> RgbaImage {
        let mut canvas = self.gradient();
        self.draw_accents(&mut canvas);
        self.draw_title(&mut canvas, title);
        self.draw_body(&mut canvas, lines);
        canvas
    }

    /// Vertical gradient from the top color to the bottom color.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn gradient(&self) -> RgbaImage {
        let palette = &self.spec.palette;
        let (top, bottom) = (palette.gradient_top, palette.gradient_bottom);
        let span = f64::from(self.spec.height.saturating_sub(1).max(1));

        let lerp = |a: u8, b: u8, t: f64| -> u8 {
            (f64::from(b) - f64::from(a)).mul_add(t, f64::from(a)).round() as u8
        };

        RgbaImage::from_fn(self.spec.width, self.spec.height, |_, y| {
            let t = f64::from(y) / span;
            Rgba([
                lerp(top.r(), bottom.r(), t),
                lerp(top.g(), bottom.g(), t),
                lerp(top.b(), bottom.b(), t),
                OPAQUE,
            ])
        })
    }

    #[allow(clippy::cast_possible_wrap)]
    fn draw_accents(&self, canvas: &mut RgbaImage) {
        let palette = &self.spec.palette;
        let width = self.spec.width as i32;
        let height = self.spec.height as i32;
        let style = PrimitiveStyle::with_fill(palette.accent);

        let mut surface = BlendSurface::new(canvas, palette.accent_opacity);
        for top_left in [
            Point::new(width - ACCENT_INSET, -ACCENT_OVERHANG),
            Point::new(-ACCENT_OVERHANG, height - ACCENT_INSET),
        ] {
            let Ok(()) = Circle::new(top_left, ACCENT_DIAMETER).into_styled(style).draw(&mut surface);
        }
    }

    fn draw_title(&self, canvas: &mut RgbaImage, title: &str) {
        let palette = &self.spec.palette;
        let origin = Point::new(self.spec.margin_left, self.spec.title_top);

        let shadow_origin = origin + TITLE_SHADOW_OFFSET;
        let mut shadow_layer = BlendSurface::new(canvas, palette.shadow_opacity);
        let mut shadow = ScaledSurface::new(&mut shadow_layer, shadow_origin, TITLE_SCALE);
        draw_text(&mut shadow, title, shadow_origin, TITLE_FONT, palette.shadow);

        let mut text_layer = BlendSurface::opaque(canvas);
        let mut text = ScaledSurface::new(&mut text_layer, origin, TITLE_SCALE);
        draw_text(&mut text, title, origin, TITLE_FONT, palette.text);
    }

    fn draw_body(&self, canvas: &mut RgbaImage, lines: &[DisplayLine]) {
        let palette = &self.spec.palette;

        for placement in layout(lines, &self.spec) {
            let text = lines[placement.line].as_str();
            let at = Point::new(placement.x, placement.y);

            let mut shadow = BlendSurface::new(canvas, palette.shadow_opacity);
            draw_text(&mut shadow, text, at + BODY_SHADOW_OFFSET, BODY_FONT, palette.shadow);

            let mut surface = BlendSurface::opaque(canvas);
            draw_text(&mut surface, text, at, BODY_FONT, palette.text);
        }
    }
}

/// Draws a single line of text with its top edge at `at`.
fn draw_text<D>(target: &mut D, text: &str, at: Point, font: &MonoFont<'_>, color: Rgb888)
where D: DrawTarget<Color = Rgb888, Error = Infallible> {
    let style = MonoTextStyle::new(font, color);
    let Ok(_) = Text::with_baseline(text, at, style, Baseline::Top).draw(target);
}
