//! Card compositing — pure Rust, zero external tools.
//!
//! | Concern | Module / crate |
//! |---|---|
//! | **Pass planning** | [`style`] — frame style → ordered glyph passes |
//! | **Glyph raster** | [`rusttype_backend`] — `rusttype` layout + alpha blend |
//! | **Shadow blur** | `image::imageops::blur` on a scratch layer |
//! | **Frame overlay** | `image::imageops::overlay` |
//! | **Font lookup** | [`fonts`] — walkdir scan of the fonts directory |
//!
//! The [`TextBackend`] trait separates pass planning from rasterization so
//! the pass sequence (shadow → emboss → main) is unit-testable without font
//! files or pixel work.

pub mod backend;
pub mod fonts;
pub mod renderer;
pub mod rusttype_backend;
pub mod style;

pub use backend::{ComposeError, GlyphPass, TextBackend};
pub use fonts::FontLibrary;
pub use renderer::{FRAME_DIMENSIONS, RenderedCard, compose, render_batch, validate_frame_image};
pub use rusttype_backend::RusttypeBackend;
pub use style::{FieldStyle, parse_color};
