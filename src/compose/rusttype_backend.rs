//! Production glyph rasterizer built on `rusttype`.
//!
//! Each [`GlyphPass`] is laid out with the font's own metrics, centered on
//! the pass anchor, and alpha-blended glyph by glyph onto the working image.
//! Shadow passes rasterize onto a transparent scratch layer first, get a
//! gaussian blur from `image::imageops`, and are composited under whatever
//! draws next — blur cannot be applied in-place without smearing the art.

use super::backend::{ComposeError, GlyphPass, TextBackend};
use super::fonts::FontLibrary;
use image::{Rgba, RgbaImage, imageops};
use rusttype::{Font, Scale, point};

pub struct RusttypeBackend {
    fonts: FontLibrary,
}

impl RusttypeBackend {
    pub fn new(fonts: FontLibrary) -> Self {
        Self { fonts }
    }
}

impl TextBackend for RusttypeBackend {
    fn draw(&mut self, img: &mut RgbaImage, pass: &GlyphPass) -> Result<(), ComposeError> {
        let font = self.fonts.get(&pass.font)?;
        match pass.blur {
            Some(sigma) => {
                let mut layer = RgbaImage::new(img.width(), img.height());
                draw_centered(&mut layer, &font, pass);
                let blurred = imageops::blur(&layer, sigma);
                imageops::overlay(img, &blurred, 0, 0);
            }
            None => draw_centered(img, &font, pass),
        }
        Ok(())
    }
}

/// Pixel width of a laid-out string.
fn text_width(font: &Font<'static>, scale: Scale, text: &str) -> f32 {
    let v_metrics = font.v_metrics(scale);
    let mut width: f32 = 0.0;
    for glyph in font.layout(text, scale, point(0.0, v_metrics.ascent)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            width = width.max(bb.max.x as f32);
        }
    }
    width
}

/// Rasterize one pass centered on its anchor.
fn draw_centered(img: &mut RgbaImage, font: &Font<'static>, pass: &GlyphPass) {
    let scale = Scale::uniform(pass.px);
    let v_metrics = font.v_metrics(scale);
    let width = text_width(font, scale, &pass.text);
    let height = v_metrics.ascent - v_metrics.descent;
    let left = pass.cx as f32 - width / 2.0;
    let baseline = pass.cy as f32 - height / 2.0 + v_metrics.ascent;

    for glyph in font.layout(&pass.text, scale, point(left, baseline)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let x = gx as i32 + bb.min.x;
                let y = gy as i32 + bb.min.y;
                if x < 0 || y < 0 {
                    return;
                }
                let (x, y) = (x as u32, y as u32);
                if x >= img.width() || y >= img.height() {
                    return;
                }
                blend(img.get_pixel_mut(x, y), pass.color, coverage);
            });
        }
    }
}

/// Source-over blend of `color` at glyph coverage onto `dst`.
fn blend(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
    let alpha = coverage * color.0[3] as f32 / 255.0;
    if alpha <= 0.0 {
        return;
    }
    let inv = 1.0 - alpha;
    for channel in 0..3 {
        dst.0[channel] =
            (color.0[channel] as f32 * alpha + dst.0[channel] as f32 * inv).round() as u8;
    }
    let dst_alpha = dst.0[3] as f32 / 255.0;
    dst.0[3] = ((alpha + dst_alpha * inv) * 255.0).round() as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_full_coverage_replaces_pixel() {
        let mut dst = Rgba([0, 0, 0, 255]);
        blend(&mut dst, Rgba([255, 255, 255, 255]), 1.0);
        assert_eq!(dst, Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn blend_half_coverage_mixes() {
        let mut dst = Rgba([0, 0, 0, 255]);
        blend(&mut dst, Rgba([255, 255, 255, 255]), 0.5);
        assert_eq!(dst.0[0], 128);
        assert_eq!(dst.0[3], 255);
    }

    #[test]
    fn blend_zero_coverage_is_a_no_op() {
        let mut dst = Rgba([10, 20, 30, 40]);
        blend(&mut dst, Rgba([255, 255, 255, 255]), 0.0);
        assert_eq!(dst, Rgba([10, 20, 30, 40]));
    }

    #[test]
    fn missing_font_surfaces_from_draw() {
        let fonts = FontLibrary::discover(std::path::Path::new("/no/fonts")).unwrap();
        let mut backend = RusttypeBackend::new(fonts);
        let mut img = RgbaImage::new(16, 16);
        let err = backend
            .draw(
                &mut img,
                &GlyphPass {
                    text: "X".into(),
                    font: "Arial".into(),
                    px: 12.0,
                    cx: 8,
                    cy: 8,
                    color: Rgba([255, 255, 255, 255]),
                    blur: None,
                },
            )
            .unwrap_err();
        assert!(matches!(err, ComposeError::FontNotFound(_)));
    }
}
