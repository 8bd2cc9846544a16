//! Card catalog data model.
//!
//! A catalog is the complete state of one card set ("project"): the project
//! header, every card in its print run, and the frame styles shared by cards
//! of the same value tier. Catalogs are created once when a project's print
//! run is configured, then mutated one card (or one frame) at a time.
//!
//! ## Lifecycle
//!
//! ```text
//! Catalog::create          # bulk-creates blank cards + lazy frame rows
//! Catalog::fill_card       # completes the next open card of a tier
//! Catalog::frame_mut       # edits a frame style
//! Catalog::check_integrity # every full card resolves to a usable frame
//! ```
//!
//! Cards are never deleted in normal flow. A frame row exists for every
//! (subtype, respect) pair that has at least one card; many cards share one
//! frame. The catalog itself is storage-agnostic — persistence lives in
//! [`store`](crate::store).

use crate::naming;
use crate::rarity::{self, RarityError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Rarity error: {0}")]
    Rarity(#[from] RarityError),
    #[error("Subtype {subtype} does not belong to a {variant} project")]
    VariantMismatch { subtype: Subtype, variant: Variant },
    #[error("Respect {respect} is not a valid {subtype} value")]
    BadRespect { subtype: Subtype, respect: u32 },
    #[error("No open {subtype} card at respect {respect} — tier is complete")]
    NoOpenSlot { subtype: Subtype, respect: u32 },
    #[error("No frame for {subtype} at respect {respect}")]
    NoFrame { subtype: Subtype, respect: u32 },
    #[error("Card {number} ({subtype}, respect {respect}) has no frame image set")]
    FrameImageUnset {
        number: String,
        subtype: Subtype,
        respect: u32,
    },
    #[error("Project has no cards — configure at least one run")]
    EmptyRun,
}

/// The two supported game variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// NACAMA-style sets: ordinary + special runs.
    Nc,
    /// Vireset-style sets: alpha + omega + delta runs.
    Vc,
}

impl Variant {
    /// Sub-types belonging to this variant, in display order.
    pub fn subtypes(self) -> &'static [Subtype] {
        match self {
            Variant::Nc => &[Subtype::Ordinary, Subtype::Special],
            Variant::Vc => &[Subtype::Alpha, Subtype::Omega, Subtype::Delta],
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Nc => "NC",
            Variant::Vc => "VC",
        })
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nc" => Ok(Variant::Nc),
            "vc" => Ok(Variant::Vc),
            other => Err(format!("unknown variant '{other}' (expected nc or vc)")),
        }
    }
}

/// Card sub-category. Each belongs to exactly one [`Variant`] and doubles as
/// the art/export directory name under the project folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subtype {
    Ordinary,
    Special,
    Alpha,
    Omega,
    Delta,
}

impl Subtype {
    pub fn variant(self) -> Variant {
        match self {
            Subtype::Ordinary | Subtype::Special => Variant::Nc,
            Subtype::Alpha | Subtype::Omega | Subtype::Delta => Variant::Vc,
        }
    }

    /// Lowercase name, used for directories and export file names.
    pub fn name(self) -> &'static str {
        match self {
            Subtype::Ordinary => "ordinary",
            Subtype::Special => "special",
            Subtype::Alpha => "alpha",
            Subtype::Omega => "omega",
            Subtype::Delta => "delta",
        }
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Subtype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ordinary" => Ok(Subtype::Ordinary),
            "special" => Ok(Subtype::Special),
            "alpha" => Ok(Subtype::Alpha),
            "omega" => Ok(Subtype::Omega),
            "delta" => Ok(Subtype::Delta),
            other => Err(format!("unknown subtype '{other}'")),
        }
    }
}

/// Project header: one complete card set being produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub variant: Variant,
}

/// One card in a print run.
///
/// `number`, `subtype`, `rarity`, and `respect` are fixed at creation from the
/// card's ordinal position in its run. The text fields are filled in later,
/// one card at a time, which flips `full`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Zero-padded ordinal within the sub-type run ("001", "002", ...).
    pub number: String,
    pub subtype: Subtype,
    /// 1-based rarity tier from the cutoff table.
    pub rarity: u8,
    /// Point value: value tier × 1000.
    pub respect: u32,
    #[serde(default)]
    pub full: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Romanized name used in export files and asset file names.
    /// Falls back to `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_name: Option<String>,
}

impl Card {
    /// Name used for export files and output asset names: the stored
    /// `export_name` if set, otherwise the card name itself.
    pub fn export_name(&self) -> Option<&str> {
        self.export_name.as_deref().or(self.name.as_deref())
    }
}

/// Saved visual style for one (subtype, respect) tier.
///
/// Coordinates are pixel anchors on the full-resolution frame image; text is
/// drawn centered on them. One frame row is shared by every card of the tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub subtype: Subtype,
    pub respect: u32,
    /// Frame overlay image. `None` until the user assigns one; compositing
    /// a card whose frame has no image is a data-integrity error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
    pub x_text: i32,
    pub y_text: i32,
    pub x_num: i32,
    pub y_num: i32,
    pub font_text: String,
    pub font_num: String,
    pub font_text_size: u32,
    pub font_num_size: u32,
    #[serde(default)]
    pub shadow_text: bool,
    #[serde(default)]
    pub emboss_text: bool,
    #[serde(default)]
    pub shadow_num: bool,
    #[serde(default)]
    pub emboss_num: bool,
    /// Prefix the card number with the `№` marker glyph.
    pub number_marker: bool,
    pub color_text: String,
    pub color_num: String,
}

/// Stock style values applied to lazily-created frames.
///
/// Loaded from `cardforge.toml` (see [`config`](crate::config)); the values
/// here are the fallback when no config file exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameDefaults {
    pub font: String,
    pub text_size: u32,
    pub num_size: u32,
    pub color: String,
    pub number_marker: bool,
}

impl Default for FrameDefaults {
    fn default() -> Self {
        Self {
            font: "Arial".to_string(),
            text_size: 16,
            num_size: 16,
            color: "white".to_string(),
            number_marker: true,
        }
    }
}

impl Frame {
    fn stock(subtype: Subtype, respect: u32, defaults: &FrameDefaults) -> Self {
        Self {
            subtype,
            respect,
            image: None,
            x_text: 0,
            y_text: 0,
            x_num: 0,
            y_num: 0,
            font_text: defaults.font.clone(),
            font_num: defaults.font.clone(),
            font_text_size: defaults.text_size,
            font_num_size: defaults.num_size,
            shadow_text: false,
            emboss_text: false,
            shadow_num: false,
            emboss_num: false,
            number_marker: defaults.number_marker,
            color_text: defaults.color.clone(),
            color_num: defaults.color.clone(),
        }
    }
}

/// Complete state of one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub project: Project,
    pub cards: Vec<Card>,
    pub frames: Vec<Frame>,
}

impl Catalog {
    /// Bulk-create a catalog from per-subtype run sizes.
    ///
    /// For each configured run, every ordinal position is assigned its rarity
    /// and value tier by [`rarity::allocate`]; a frame row is created the
    /// first time a (subtype, respect) tier appears. Unknown run sizes and
    /// subtype/variant mismatches are rejected before any card is created.
    pub fn create(
        project: Project,
        runs: &[(Subtype, u32)],
        defaults: &FrameDefaults,
    ) -> Result<Self, CatalogError> {
        if runs.is_empty() {
            return Err(CatalogError::EmptyRun);
        }
        for &(subtype, _) in runs {
            if subtype.variant() != project.variant {
                return Err(CatalogError::VariantMismatch {
                    subtype,
                    variant: project.variant,
                });
            }
        }

        let mut catalog = Self {
            project,
            cards: Vec::new(),
            frames: Vec::new(),
        };

        for &(subtype, run_size) in runs {
            for index in 0..run_size {
                let tier = rarity::allocate(index, run_size, subtype)?;
                let respect = tier.respect();
                catalog.cards.push(Card {
                    number: naming::format_number(index),
                    subtype,
                    rarity: tier.rarity,
                    respect,
                    full: false,
                    name: None,
                    description: None,
                    export_name: None,
                });
                if catalog.frame(subtype, respect).is_none() {
                    catalog.frames.push(Frame::stock(subtype, respect, defaults));
                }
            }
        }

        Ok(catalog)
    }

    /// Frame row for a (subtype, respect) tier.
    pub fn frame(&self, subtype: Subtype, respect: u32) -> Option<&Frame> {
        self.frames
            .iter()
            .find(|f| f.subtype == subtype && f.respect == respect)
    }

    /// Mutable frame lookup; errors if the tier has no frame row.
    pub fn frame_mut(
        &mut self,
        subtype: Subtype,
        respect: u32,
    ) -> Result<&mut Frame, CatalogError> {
        self.frames
            .iter_mut()
            .find(|f| f.subtype == subtype && f.respect == respect)
            .ok_or(CatalogError::NoFrame { subtype, respect })
    }

    /// Complete the next open card of a tier.
    ///
    /// The tier is addressed by (subtype, respect) the way the original card
    /// form works: respect is reverse-mapped to a rarity tier, and the first
    /// not-yet-full card of that tier takes the given text fields.
    pub fn fill_card(
        &mut self,
        subtype: Subtype,
        respect: u32,
        name: String,
        description: String,
        export_name: Option<String>,
    ) -> Result<&Card, CatalogError> {
        let rarity = rarity::rarity_for_respect(subtype, respect)
            .ok_or(CatalogError::BadRespect { subtype, respect })?;
        let card = self
            .cards
            .iter_mut()
            .find(|c| !c.full && c.subtype == subtype && c.rarity == rarity)
            .ok_or(CatalogError::NoOpenSlot { subtype, respect })?;
        card.name = Some(name);
        card.description = Some(description);
        card.export_name = export_name;
        card.full = true;
        Ok(card)
    }

    /// Completed cards in catalog order.
    pub fn completed(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.full)
    }

    /// Check that every completed card resolves to a frame with an image.
    ///
    /// Compositing requires this; the check reports the first violating card
    /// so a batch can refuse to start rather than die midway.
    pub fn check_integrity(&self) -> Result<(), CatalogError> {
        for card in self.completed() {
            let frame =
                self.frame(card.subtype, card.respect)
                    .ok_or_else(|| CatalogError::NoFrame {
                        subtype: card.subtype,
                        respect: card.respect,
                    })?;
            if frame.image.is_none() {
                return Err(CatalogError::FrameImageUnset {
                    number: card.number.clone(),
                    subtype: card.subtype,
                    respect: card.respect,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{nc_catalog, vc_catalog};

    #[test]
    fn create_bulk_creates_cards_and_frames() {
        let catalog = vc_catalog();
        // 50 alpha + 50 omega cards
        assert_eq!(catalog.cards.len(), 100);
        // 5 tiers per subtype, distinct respect ranges → 10 frames
        assert_eq!(catalog.frames.len(), 10);
        assert!(catalog.cards.iter().all(|c| !c.full));
    }

    #[test]
    fn frames_are_shared_per_tier() {
        let catalog = nc_catalog();
        // ordinary run of 100 has 6 tiers
        let ordinary_frames = catalog
            .frames
            .iter()
            .filter(|f| f.subtype == Subtype::Ordinary)
            .count();
        assert_eq!(ordinary_frames, 6);
        // every ordinary card's respect has a frame row
        for card in catalog.cards.iter().filter(|c| c.subtype == Subtype::Ordinary) {
            assert!(catalog.frame(card.subtype, card.respect).is_some());
        }
    }

    #[test]
    fn create_rejects_variant_mismatch() {
        let project = Project {
            name: "mixed".into(),
            variant: Variant::Nc,
        };
        let err = Catalog::create(
            project,
            &[(Subtype::Alpha, 50)],
            &FrameDefaults::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::VariantMismatch { .. }));
    }

    #[test]
    fn create_rejects_unknown_run_size() {
        let project = Project {
            name: "odd".into(),
            variant: Variant::Vc,
        };
        let err = Catalog::create(
            project,
            &[(Subtype::Alpha, 42)],
            &FrameDefaults::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Rarity(_)));
    }

    #[test]
    fn fill_card_takes_first_open_slot() {
        let mut catalog = vc_catalog();
        let number = {
            let card = catalog
                .fill_card(
                    Subtype::Alpha,
                    1000,
                    "Fox".into(),
                    "A sly one".into(),
                    Some("Fox".into()),
                )
                .unwrap();
            assert!(card.full);
            assert_eq!(card.rarity, 1);
            card.number.clone()
        };
        // tier 1 of a 50-card alpha run starts at 001
        assert_eq!(number, "001");

        // next fill of the same tier takes the following slot
        let next = catalog
            .fill_card(Subtype::Alpha, 1000, "Hare".into(), "Fast".into(), None)
            .unwrap();
        assert_eq!(next.number, "002");
    }

    #[test]
    fn fill_card_reverse_maps_offset_respect() {
        let mut catalog = vc_catalog();
        // omega respect 4000 = value tier 4 = rarity 1 (offset +3)
        let card = catalog
            .fill_card(Subtype::Omega, 4000, "Owl".into(), "Wise".into(), None)
            .unwrap();
        assert_eq!(card.rarity, 1);
        assert_eq!(card.respect, 4000);
    }

    #[test]
    fn fill_card_rejects_bad_respect() {
        let mut catalog = vc_catalog();
        // alpha tops out at 5000
        let err = catalog
            .fill_card(Subtype::Alpha, 6000, "X".into(), "Y".into(), None)
            .unwrap_err();
        assert!(matches!(err, CatalogError::BadRespect { .. }));
    }

    #[test]
    fn fill_card_exhausts_tier() {
        let mut catalog = vc_catalog();
        // alpha run of 50: tier 5 holds indices 45..50 = 5 cards
        for i in 0..5 {
            catalog
                .fill_card(Subtype::Alpha, 5000, format!("M{i}"), "m".into(), None)
                .unwrap();
        }
        let err = catalog
            .fill_card(Subtype::Alpha, 5000, "Extra".into(), "m".into(), None)
            .unwrap_err();
        assert!(matches!(err, CatalogError::NoOpenSlot { .. }));
    }

    #[test]
    fn integrity_flags_missing_frame_image() {
        let mut catalog = vc_catalog();
        catalog
            .fill_card(Subtype::Alpha, 1000, "Fox".into(), "d".into(), None)
            .unwrap();
        let err = catalog.check_integrity().unwrap_err();
        assert!(matches!(err, CatalogError::FrameImageUnset { .. }));

        catalog
            .frame_mut(Subtype::Alpha, 1000)
            .unwrap()
            .image = Some("frames/alpha-1000.png".into());
        catalog.check_integrity().unwrap();
    }

    #[test]
    fn export_name_falls_back_to_name() {
        let mut catalog = vc_catalog();
        catalog
            .fill_card(Subtype::Alpha, 1000, "Fox".into(), "d".into(), None)
            .unwrap();
        let card = catalog.completed().next().unwrap();
        assert_eq!(card.export_name(), Some("Fox"));
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let catalog = nc_catalog();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cards.len(), catalog.cards.len());
        assert_eq!(back.frames.len(), catalog.frames.len());
        assert_eq!(back.project.name, catalog.project.name);
    }
}
