//! Pass planning: frame style → glyph pass sequence.
//!
//! A frame's saved style expands each text field into one to four
//! [`GlyphPass`]es, drawn in this order:
//!
//! 1. **Shadow** (if `shadow_*`): black, offset down-right, blurred.
//! 2. **Emboss dark** (if `emboss_*`): gray, +2px down-right.
//! 3. **Emboss light**: white, −2px up-left.
//! 4. **Main**: the style's own color, on the anchor.
//!
//! The planner is pure — no fonts, no pixels — which is what makes the
//! "exactly one pass per field when both effects are off" property directly
//! testable.

use super::backend::{ComposeError, GlyphPass};
use crate::catalog::Frame;
use image::Rgba;

/// Shadow pass offset in pixels (down and right).
const SHADOW_OFFSET: i32 = 5;
/// Gaussian sigma applied to the shadow pass.
const SHADOW_BLUR: f32 = 2.5;
/// Emboss tint offset in pixels.
const EMBOSS_OFFSET: i32 = 2;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Resolved style for one text field (name or number) of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStyle {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub font: String,
    pub size: u32,
    pub color: String,
    pub shadow: bool,
    pub emboss: bool,
}

impl FieldStyle {
    /// The name field of a frame, carrying the given display text.
    pub fn name_field(frame: &Frame, text: &str) -> Self {
        Self {
            text: text.to_string(),
            x: frame.x_text,
            y: frame.y_text,
            font: frame.font_text.clone(),
            size: frame.font_text_size,
            color: frame.color_text.clone(),
            shadow: frame.shadow_text,
            emboss: frame.emboss_text,
        }
    }

    /// The number field; the `№` marker glyph is prefixed when the frame
    /// asks for it.
    pub fn number_field(frame: &Frame, number: &str) -> Self {
        let text = if frame.number_marker {
            format!("№{number}")
        } else {
            number.to_string()
        };
        Self {
            text,
            x: frame.x_num,
            y: frame.y_num,
            font: frame.font_num.clone(),
            size: frame.font_num_size,
            color: frame.color_num.clone(),
            shadow: frame.shadow_num,
            emboss: frame.emboss_num,
        }
    }

    /// Expand this field into its ordered glyph passes.
    pub fn passes(&self) -> Result<Vec<GlyphPass>, ComposeError> {
        let color = parse_color(&self.color)?;
        let px = self.size as f32;
        let pass = |cx: i32, cy: i32, color: Rgba<u8>, blur: Option<f32>| GlyphPass {
            text: self.text.clone(),
            font: self.font.clone(),
            px,
            cx,
            cy,
            color,
            blur,
        };

        let mut passes = Vec::new();
        if self.shadow {
            passes.push(pass(
                self.x + SHADOW_OFFSET,
                self.y + SHADOW_OFFSET,
                BLACK,
                Some(SHADOW_BLUR),
            ));
        }
        if self.emboss {
            passes.push(pass(self.x + EMBOSS_OFFSET, self.y + EMBOSS_OFFSET, GRAY, None));
            passes.push(pass(self.x - EMBOSS_OFFSET, self.y - EMBOSS_OFFSET, WHITE, None));
        }
        passes.push(pass(self.x, self.y, color, None));
        Ok(passes)
    }
}

/// Parse a color name or `#RRGGBB` hex string.
pub fn parse_color(s: &str) -> Result<Rgba<u8>, ComposeError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "white" => return Ok(WHITE),
        "black" => return Ok(BLACK),
        "gray" | "grey" => return Ok(GRAY),
        "red" => return Ok(Rgba([255, 0, 0, 255])),
        "yellow" => return Ok(Rgba([255, 255, 0, 255])),
        _ => {}
    }
    let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if hex.len() == 6
        && let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        )
    {
        return Ok(Rgba([r, g, b, 255]));
    }
    Err(ComposeError::BadColor(s.to_string()))
}
