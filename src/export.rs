//! Localized text export.
//!
//! Writes one UTF-8 text file per subtype into the project folder, containing
//! every completed card of that subtype in catalog order. The record shape
//! differs by variant:
//!
//! ```text
//! VC (alpha.txt, ...)        NC (ordinary.txt, ...)
//! 001                        001 Лисиця
//! Лисиця                     Руда і хитра
//! FOX
//! Руда і хитра
//! ```
//!
//! The third VC line is the export name — uppercase, underscored — the same
//! slug later used in rendered-asset file names. Subtypes with no completed
//! cards are skipped. Export is strictly sequential; the first failure aborts
//! the batch and leaves files already written on disk.

use crate::catalog::{Card, Catalog, Subtype, Variant};
use crate::naming;
use crate::store::ProjectContext;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Card {0} is marked full but has no name/description")]
    IncompleteCard(String),
}

/// One written export file.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub subtype: Subtype,
    pub path: PathBuf,
    pub cards: usize,
}

/// Export all completed cards as per-subtype text files.
pub fn export_texts(
    catalog: &Catalog,
    ctx: &ProjectContext,
) -> Result<Vec<ExportedFile>, ExportError> {
    let variant = catalog.project.variant;
    let mut written = Vec::new();

    for &subtype in variant.subtypes() {
        let cards: Vec<&Card> = catalog
            .completed()
            .filter(|c| c.subtype == subtype)
            .collect();
        if cards.is_empty() {
            continue;
        }

        let mut text = String::new();
        for card in &cards {
            text.push_str(&record(card, variant)?);
        }

        let path = ctx.export_path(subtype);
        fs::write(&path, &text)?;
        written.push(ExportedFile {
            subtype,
            path,
            cards: cards.len(),
        });
    }

    Ok(written)
}

fn record(card: &Card, variant: Variant) -> Result<String, ExportError> {
    let name = card
        .name
        .as_deref()
        .ok_or_else(|| ExportError::IncompleteCard(card.number.clone()))?;
    let description = card
        .description
        .as_deref()
        .ok_or_else(|| ExportError::IncompleteCard(card.number.clone()))?;

    Ok(match variant {
        Variant::Vc => {
            // export_name() falls back to name, so full cards always have one
            let export = card.export_name().unwrap_or(name);
            format!(
                "{}\n{}\n{}\n{}\n",
                card.number,
                name,
                naming::export_slug(export),
                description
            )
        }
        Variant::Nc => format!("{} {}\n{}\n", card.number, name, description),
    })
}
