//! Card compositing and batch rendering.
//!
//! [`compose`] builds one finished card image: per-card art, the tier's
//! frame overlay, then the planned glyph passes for the name and number
//! fields. [`render_batch`] runs it over every completed card of a project,
//! strictly in sequence, writing PNGs into the project folder.
//!
//! ## Failure policy
//!
//! A missing art file, missing frame image, unknown font, or bad color
//! aborts the batch at the failing card. Nothing is retried and nothing is
//! rolled back — assets already written stay valid on disk.

use super::backend::{ComposeError, TextBackend};
use super::style::FieldStyle;
use crate::catalog::{Catalog, CatalogError, Frame};
use crate::naming;
use crate::store::ProjectContext;
use image::{ImageFormat, ImageReader, RgbaImage, imageops};
use std::path::{Path, PathBuf};

/// Compose one card: art + frame overlay + styled name and number text.
///
/// `name_text` is the display name drawn on the card (uppercased by the
/// batch caller); `number_text` is the bare card number — the `№` marker is
/// the frame's decision, applied during pass planning.
pub fn compose(
    backend: &mut dyn TextBackend,
    art_path: &Path,
    frame: &Frame,
    name_text: &str,
    number_text: &str,
) -> Result<RgbaImage, ComposeError> {
    let mut img = load_rgba(art_path, "card art")?;

    let overlay_path = frame
        .image
        .as_deref()
        .ok_or(ComposeError::FrameImageUnset {
            subtype: frame.subtype,
            respect: frame.respect,
        })?;
    let overlay = load_rgba(overlay_path, "frame image")?;
    imageops::overlay(&mut img, &overlay, 0, 0);

    for pass in FieldStyle::name_field(frame, name_text).passes()? {
        backend.draw(&mut img, &pass)?;
    }
    for pass in FieldStyle::number_field(frame, number_text).passes()? {
        backend.draw(&mut img, &pass)?;
    }

    Ok(img)
}

/// Canvas size of a card, in pixels. Frame overlays must match it exactly.
pub const FRAME_DIMENSIONS: (u32, u32) = (825, 1280);

/// Check that a frame overlay exists and matches the card canvas.
///
/// Run when an overlay is assigned to a frame, so a wrong-sized image is
/// rejected at edit time instead of producing a misaligned render later.
pub fn validate_frame_image(path: &Path) -> Result<(), ComposeError> {
    if !path.is_file() {
        return Err(ComposeError::AssetMissing {
            what: "frame image",
            path: path.to_path_buf(),
        });
    }
    let (width, height) = image::image_dimensions(path)
        .map_err(|e| ComposeError::Image(format!("Failed to read {}: {e}", path.display())))?;
    if (width, height) != FRAME_DIMENSIONS {
        return Err(ComposeError::FrameSizeMismatch {
            path: path.to_path_buf(),
            width,
            height,
        });
    }
    Ok(())
}

fn load_rgba(path: &Path, what: &'static str) -> Result<RgbaImage, ComposeError> {
    if !path.is_file() {
        return Err(ComposeError::AssetMissing {
            what,
            path: path.to_path_buf(),
        });
    }
    let img = ImageReader::open(path)?
        .decode()
        .map_err(|e| ComposeError::Image(format!("Failed to decode {}: {e}", path.display())))?;
    Ok(img.to_rgba8())
}

/// One written card asset.
#[derive(Debug, Clone)]
pub struct RenderedCard {
    pub number: String,
    pub name: String,
    pub path: PathBuf,
}

/// Render every completed card of the project to a PNG.
///
/// The catalog integrity check runs first so a batch with a missing frame
/// refuses to start instead of failing midway. Per-card asset errors still
/// abort at the failing card (integrity cannot see missing files on disk).
pub fn render_batch(
    backend: &mut dyn TextBackend,
    catalog: &Catalog,
    ctx: &ProjectContext,
) -> Result<Vec<RenderedCard>, ComposeError> {
    catalog.check_integrity()?;

    let mut rendered = Vec::new();
    for card in catalog.completed() {
        let frame = catalog
            .frame(card.subtype, card.respect)
            .ok_or(CatalogError::NoFrame {
                subtype: card.subtype,
                respect: card.respect,
            })?;
        let export_name = card
            .export_name()
            .ok_or_else(|| ComposeError::MissingName(card.number.clone()))?;
        let display_name = export_name.to_uppercase();

        let art_path = ctx.art_path(card.subtype, &card.number);
        let img = compose(backend, &art_path, frame, &display_name, &card.number)?;

        let file_name = naming::asset_file_name(&card.number, export_name, card.respect);
        let out_path = ctx.asset_path(&file_name);
        img.save_with_format(&out_path, ImageFormat::Png)
            .map_err(|e| {
                ComposeError::Image(format!("Failed to write {}: {e}", out_path.display()))
            })?;

        rendered.push(RenderedCard {
            number: card.number.clone(),
            name: display_name,
            path: out_path,
        });
    }

    Ok(rendered)
}
