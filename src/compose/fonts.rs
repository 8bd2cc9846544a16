//! Font discovery and loading.
//!
//! Frames reference fonts by family name ("Arial", "PT Serif"). The library
//! walks the workspace fonts directory once, indexing every `.ttf`/`.otf`
//! file by its lowercased stem, and loads fonts lazily on first use. Loaded
//! fonts are cached; `rusttype::Font` is cheap to clone (Arc-backed).

use super::backend::ComposeError;
use rusttype::Font;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

pub struct FontLibrary {
    index: BTreeMap<String, PathBuf>,
    loaded: HashMap<String, Font<'static>>,
}

impl FontLibrary {
    /// Walk `dir` and index every font file by lowercased file stem.
    ///
    /// A missing directory yields an empty library — font resolution then
    /// fails per family at draw time, not up front.
    pub fn discover(dir: &Path) -> Result<Self, ComposeError> {
        let mut index = BTreeMap::new();
        if dir.is_dir() {
            for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
                let path = entry.path();
                if !path.is_file() {
                    continue;
                }
                let is_font = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| FONT_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)));
                if !is_font {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    index.insert(stem.to_lowercase(), path.to_path_buf());
                }
            }
        }
        Ok(Self {
            index,
            loaded: HashMap::new(),
        })
    }

    /// Resolve a family name to a loaded font.
    pub fn get(&mut self, family: &str) -> Result<Font<'static>, ComposeError> {
        let key = family.to_lowercase();
        if let Some(font) = self.loaded.get(&key) {
            return Ok(font.clone());
        }
        let path = self
            .index
            .get(&key)
            .ok_or_else(|| ComposeError::FontNotFound(family.to_string()))?;
        let data = fs::read(path)?;
        let font = Font::try_from_vec(data)
            .ok_or_else(|| ComposeError::FontUnreadable(path.clone()))?;
        self.loaded.insert(key, font.clone());
        Ok(font)
    }

    /// Indexed family names, sorted.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(|k| k.as_str())
    }
}
