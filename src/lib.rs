//! # cardforge
//!
//! Catalog manager and asset compositor for trading-card print runs. A
//! project is one card set of one of two game variants (NC or VC); cardforge
//! bulk-creates its cards with rarity tiers assigned by position in the print
//! run, tracks which cards have been filled in, exports their text, and
//! composites name/number typography onto per-card art.
//!
//! # Architecture
//!
//! Everything flows through a per-project JSON catalog — human-readable
//! state you can inspect and diff:
//!
//! ```text
//! init     runs        →  catalog.json   (cards + frames bulk-created)
//! fill     card text   →  catalog.json   (one card completed at a time)
//! frame    style edits →  catalog.json   (per-tier visual templates)
//! export   catalog     →  <subtype>.txt  (localized text files)
//! render   catalog     →  *.png          (composited card assets)
//! ```
//!
//! The pure logic — tier allocation, number formatting, glyph-pass planning —
//! is separated from storage and pixels so it can be unit-tested without a
//! filesystem or font files.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`rarity`] | Cutoff tables mapping run position → rarity/value tier |
//! | [`naming`] | Card number formatting and output asset names |
//! | [`catalog`] | Data model: projects, cards, frames; fill/integrity logic |
//! | [`store`] | JSON catalog persistence and project directory layout |
//! | [`stats`] | Pull-based completion statistics |
//! | [`export`] | Per-subtype localized text files |
//! | [`compose`] | Frame compositing: pass planning + rusttype rasterization |
//! | [`config`] | `cardforge.toml` loading and stock defaults |
//! | [`output`] | CLI output formatting — pure `format_*` + `print_*` pairs |
//!
//! # Design Decisions
//!
//! ## Explicit Context Over Ambient State
//!
//! There is no "active project" singleton. Every operation takes a
//! [`store::ProjectContext`] built from CLI arguments, and repositories are
//! the [`store::CatalogStore`] trait injected at the call site — pure logic
//! never touches storage directly.
//!
//! ## Pure-Rust Compositing (No Photoshop, No ImageMagick)
//!
//! The [`compose`] module renders typography with `rusttype` and composites
//! with the `image` crate. No external binaries, no system font machinery:
//! fonts are plain `.ttf`/`.otf` files in a directory, resolved by name.
//!
//! ## Sequential Batches, First-Failure Abort
//!
//! Export and render walk cards strictly in order and stop at the first
//! failing item, leaving earlier output on disk. Card sets are small enough
//! that parallelism would buy nothing and cost determinism of the failure
//! report.

pub mod catalog;
pub mod compose;
pub mod config;
pub mod export;
pub mod naming;
pub mod output;
pub mod rarity;
pub mod stats;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;
