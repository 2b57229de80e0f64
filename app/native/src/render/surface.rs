//! Draw targets over an in-memory RGBA image.
//!
//! `embedded-graphics` draws opaque colors; [`BlendSurface`] blends every pixel
//! it receives over the existing image at a fixed opacity, which is how the
//! translucent accents and text shadows are produced. Pixels outside the image
//! are clipped.

use std::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::RgbColor;
use image::{Rgba, RgbaImage};

/// Fully opaque alpha.
pub const OPAQUE: u8 = u8::MAX;

/// Blends drawn pixels into an [`RgbaImage`] at a fixed opacity.
pub struct BlendSurface<'a> {
    image: &'a mut RgbaImage,
    opacity: u8,
}

impl<'a> BlendSurface<'a> {
    /// Wraps `image`, blending every drawn pixel at `opacity` (0-255).
    pub const fn new(image: &'a mut RgbaImage, opacity: u8) -> Self { Self { image, opacity } }

    /// Wraps `image` for opaque drawing.
    pub const fn opaque(image: &'a mut RgbaImage) -> Self { Self::new(image, OPAQUE) }

    #[allow(clippy::cast_sign_loss)]
    fn blend(&mut self, point: Point, color: Rgb888) {
        if point.x < 0 || point.y < 0 {
            return;
        }
        let Some(pixel) = self.image.get_pixel_mut_checked(point.x as u32, point.y as u32) else {
            return;
        };
        *pixel = blend_over(*pixel, color, self.opacity);
    }
}

impl OriginDimensions for BlendSurface<'_> {
    fn size(&self) -> Size { Size::new(self.image.width(), self.image.height()) }
}

impl DrawTarget for BlendSurface<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where I: IntoIterator<Item = Pixel<Self::Color>> {
        for Pixel(point, color) in pixels {
            self.blend(point, color);
        }
        Ok(())
    }
}

/// Magnifies everything drawn into it by an integer factor around `origin`.
///
/// Used to draw the title larger than the bitmap font's native size.
pub struct ScaledSurface<'a, D> {
    inner: &'a mut D,
    origin: Point,
    scale: u32,
}

impl<'a, D> ScaledSurface<'a, D> {
    /// Wraps `inner`. A point `p` drawn here covers a `scale`×`scale` block at
    /// `origin + (p - origin) * scale` in the inner target.
    pub fn new(inner: &'a mut D, origin: Point, scale: u32) -> Self {
        Self { inner, origin, scale: scale.max(1) }
    }
}

impl<D: OriginDimensions> OriginDimensions for ScaledSurface<'_, D> {
    fn size(&self) -> Size { self.inner.size() }
}

impl<D> DrawTarget for ScaledSurface<'_, D>
where D: DrawTarget + OriginDimensions
{
    type Color = D::Color;
    type Error = D::Error;

    #[allow(clippy::cast_possible_wrap)]
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where I: IntoIterator<Item = Pixel<Self::Color>> {
        let scale = self.scale as i32;
        let origin = self.origin;
        let expanded = pixels.into_iter().flat_map(move |Pixel(point, color)| {
            let base = origin + (point - origin) * scale;
            (0..scale).flat_map(move |dy| {
                (0..scale).map(move |dx| Pixel(base + Point::new(dx, dy), color))
            })
        });
        self.inner.draw_iter(expanded)
    }
}

/// Source-over blend of `color` at `opacity` onto `dst`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn blend_over(dst: Rgba<u8>, color: Rgb888, opacity: u8) -> Rgba<u8> {
    if opacity == OPAQUE {
        return Rgba([color.r(), color.g(), color.b(), OPAQUE]);
    }

    let alpha = u32::from(opacity);
    let mix = |src: u8, dst: u8| -> u8 {
        ((u32::from(src) * alpha + u32::from(dst) * (255 - alpha) + 127) / 255) as u8
    };
    let out_alpha = alpha + u32::from(dst[3]) * (255 - alpha) / 255;

    Rgba([
        mix(color.r(), dst[0]),
        mix(color.g(), dst[1]),
        mix(color.b(), dst[2]),
        out_alpha.min(255) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    use super::*;

    #[test]
    fn test_opaque_blend_replaces_pixel() {
        let out = blend_over(Rgba([10, 20, 30, 255]), Rgb888::new(200, 100, 50), OPAQUE);
        assert_eq!(out, Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn test_transparent_blend_keeps_pixel() {
        let out = blend_over(Rgba([10, 20, 30, 255]), Rgb888::WHITE, 0);
        assert_eq!(out, Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_half_blend_mixes_channels() {
        let out = blend_over(Rgba([0, 0, 0, 255]), Rgb888::WHITE, 128);
        assert_eq!(out[0], 128);
        assert_eq!(out[3], 255);
    }

    #[test]
    fn test_out_of_bounds_pixels_are_clipped() {
        let mut image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let mut surface = BlendSurface::opaque(&mut image);
        Rectangle::new(Point::new(-2, -2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::WHITE))
            .draw(&mut surface)
            .unwrap();

        assert_eq!(*image.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*image.get_pixel(1, 1), Rgba([255, 255, 255, 255]));
        assert_eq!(*image.get_pixel(2, 2), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_scaled_surface_magnifies_pixels() {
        let mut image = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        let mut surface = BlendSurface::opaque(&mut image);
        let mut scaled = ScaledSurface::new(&mut surface, Point::new(2, 2), 2);
        Pixel(Point::new(3, 2), Rgb888::WHITE).draw(&mut scaled).unwrap();

        // (3, 2) is one pixel right of the origin, so it lands at x = 4..6, y = 2..4.
        for (x, y) in [(4, 2), (5, 2), (4, 3), (5, 3)] {
            assert_eq!(*image.get_pixel(x, y), Rgba([255, 255, 255, 255]));
        }
        assert_eq!(*image.get_pixel(3, 2), Rgba([0, 0, 0, 255]));
        assert_eq!(*image.get_pixel(6, 2), Rgba([0, 0, 0, 255]));
    }
}
