//! Text rendering backend trait and shared types.
//!
//! Compositing is planned as a sequence of [`GlyphPass`]es — shadow, emboss
//! tints, main color — and a [`TextBackend`] executes them pixel by pixel.
//! The production implementation is
//! [`RusttypeBackend`](super::rusttype_backend::RusttypeBackend); tests use a
//! mock that records passes without rasterizing, so pass-planning logic can
//! be verified without font files.

use crate::catalog::{CatalogError, Subtype};
use image::{Rgba, RgbaImage};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("{what} not found: {path}")]
    AssetMissing { what: &'static str, path: PathBuf },
    #[error("Frame for {subtype} at respect {respect} has no image assigned")]
    FrameImageUnset { subtype: Subtype, respect: u32 },
    #[error("Frame image {path} is {width}x{height}; frames must match the card canvas")]
    FrameSizeMismatch {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    #[error("Image error: {0}")]
    Image(String),
    #[error("No font file for family '{0}'")]
    FontNotFound(String),
    #[error("Font file unreadable: {0}")]
    FontUnreadable(PathBuf),
    #[error("Unknown color '{0}' (expected a name or #RRGGBB)")]
    BadColor(String),
    #[error("Card {0} is marked full but has no name")]
    MissingName(String),
}

/// One rasterization pass: a piece of text, centered on an anchor, in one
/// color, optionally blurred (for drop shadows).
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPass {
    pub text: String,
    /// Font family, resolved against the font library by the backend.
    pub font: String,
    /// Glyph size in pixels.
    pub px: f32,
    /// Center anchor; offsets for shadow/emboss are already applied here.
    pub cx: i32,
    pub cy: i32,
    pub color: Rgba<u8>,
    /// Gaussian blur sigma for shadow passes; `None` draws crisp glyphs.
    pub blur: Option<f32>,
}

/// Trait for glyph rasterization backends.
///
/// A backend draws one pass onto the working image. Pass order matters —
/// the planner emits shadow first, then emboss tints, then the main pass —
/// so implementations must not reorder or batch across calls.
pub trait TextBackend {
    fn draw(&mut self, img: &mut RgbaImage, pass: &GlyphPass) -> Result<(), ComposeError>;
}
