//! Catalog persistence and project layout.
//!
//! Catalogs are stored as pretty-printed JSON, one `catalog.json` per project
//! directory — human-inspectable state you can diff and fix by hand, the same
//! way the build manifests of a static pipeline work. The [`CatalogStore`]
//! trait keeps the callers (CLI commands, batch renderers) decoupled from the
//! file format; tests inject an in-memory store instead.
//!
//! ## Project layout
//!
//! ```text
//! <root>/
//! ├── cardforge.toml        # workspace config (optional)
//! ├── fonts/                # .ttf/.otf files, resolved by family name
//! └── <project>/
//!     ├── catalog.json      # cards + frames + project header
//!     ├── alpha/            # per-subtype card art: 001.png, 002.png, ...
//!     ├── omega/
//!     ├── delta/
//!     ├── alpha.txt         # text export output
//!     └── 001_FOX_1000.png  # rendered card assets
//! ```
//!
//! The current project is an explicit [`ProjectContext`] built from CLI
//! arguments — there is no ambient "active project" state.

use crate::catalog::{Catalog, Subtype, Variant};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No catalog at {0} — run `cardforge init` first")]
    NotFound(PathBuf),
    #[error("Project '{0}' already exists")]
    AlreadyExists(String),
}

/// Repository interface for catalog state.
pub trait CatalogStore {
    fn load(&self) -> Result<Catalog, StoreError>;
    fn save(&self, catalog: &Catalog) -> Result<(), StoreError>;
}

/// File-backed store: one `catalog.json` per project.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl CatalogStore for JsonStore {
    fn load(&self) -> Result<Catalog, StoreError> {
        if !self.exists() {
            return Err(StoreError::NotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(catalog)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Explicit handle on one project's directory.
///
/// Built from the CLI's `--root` and project name; every path the tool reads
/// or writes for a project derives from here.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub name: String,
    pub dir: PathBuf,
}

impl ProjectContext {
    pub fn new(root: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            dir: root.join(name),
        }
    }

    pub fn store(&self) -> JsonStore {
        JsonStore::new(self.dir.join("catalog.json"))
    }

    /// Card art for one card: `<project>/<subtype>/<number>.png`.
    pub fn art_path(&self, subtype: Subtype, number: &str) -> PathBuf {
        self.dir.join(subtype.name()).join(format!("{number}.png"))
    }

    /// Text export target for one subtype: `<project>/<subtype>.txt`.
    pub fn export_path(&self, subtype: Subtype) -> PathBuf {
        self.dir.join(format!("{}.txt", subtype.name()))
    }

    /// Rendered asset target in the project root.
    pub fn asset_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Create the project directory with one art folder per subtype.
    ///
    /// Refuses to re-init a project that already has a catalog.
    pub fn create_layout(&self, variant: Variant) -> Result<(), StoreError> {
        if self.store().exists() {
            return Err(StoreError::AlreadyExists(self.name.clone()));
        }
        for subtype in variant.subtypes() {
            fs::create_dir_all(self.dir.join(subtype.name()))?;
        }
        Ok(())
    }
}

/// Names of projects under the workspace root (directories with a catalog).
pub fn list_projects(root: &Path) -> Result<Vec<String>, StoreError> {
    let mut names = Vec::new();
    if !root.is_dir() {
        return Ok(names);
    }
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.path().join("catalog.json").is_file()
            && let Some(name) = entry.file_name().to_str()
        {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}
