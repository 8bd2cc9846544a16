//! Shared test utilities for the cardforge test suite.
//!
//! Catalog fixtures use small, real run sizes so tier math in tests matches
//! the production cutoff tables, and disk fixtures live in a `TempDir` each
//! test owns.

use crate::catalog::{Catalog, Frame, FrameDefaults, Project, Subtype, Variant};
use crate::store::ProjectContext;
use image::{Rgba, RgbaImage};
use std::path::Path;
use tempfile::TempDir;

/// VC catalog: alpha and omega runs of 50, delta omitted.
pub fn vc_catalog() -> Catalog {
    Catalog::create(
        Project {
            name: "vc-fixture".into(),
            variant: Variant::Vc,
        },
        &[(Subtype::Alpha, 50), (Subtype::Omega, 50)],
        &FrameDefaults::default(),
    )
    .unwrap()
}

/// NC catalog: ordinary run of 100, special run of 50.
pub fn nc_catalog() -> Catalog {
    Catalog::create(
        Project {
            name: "nc-fixture".into(),
            variant: Variant::Nc,
        },
        &[(Subtype::Ordinary, 100), (Subtype::Special, 50)],
        &FrameDefaults::default(),
    )
    .unwrap()
}

/// A frame row with stock style values, as `Catalog::create` would make it.
pub fn stock_frame(subtype: Subtype, respect: u32) -> Frame {
    let catalog = Catalog::create(
        Project {
            name: "frame-fixture".into(),
            variant: subtype.variant(),
        },
        &[(subtype, if subtype.variant() == Variant::Nc { 100 } else { 50 })],
        &FrameDefaults::default(),
    )
    .unwrap();
    catalog
        .frame(subtype, respect)
        .unwrap_or_else(|| panic!("no stock frame for {subtype} at {respect}"))
        .clone()
}

/// Materialize a catalog on disk: temp dir, project layout, saved catalog.
pub fn setup_project(catalog: &Catalog) -> (TempDir, ProjectContext) {
    use crate::store::CatalogStore;
    let tmp = TempDir::new().unwrap();
    let ctx = ProjectContext::new(tmp.path(), &catalog.project.name);
    ctx.create_layout(catalog.project.variant).unwrap();
    ctx.store().save(catalog).unwrap();
    (tmp, ctx)
}

/// Write a small opaque PNG at the given path.
pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let img = RgbaImage::from_pixel(width, height, Rgba([40, 40, 60, 255]));
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}
