//! File Analysis Source - candidate analyses stored as files in a directory.
//!
//! # Layout
//!
//! ```text
//! {root}/
//! ├── q1-rebrand.json
//! ├── q2-pricing.yaml
//! └── notes.txt        (ignored)
//! ```
//!
//! The key of a document is its file stem. When the same stem exists with
//! several extensions, `.json` wins over `.yaml`, which wins over `.yml`.
//! Hidden files (stem starting with `.`) are neither listed nor loadable.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::decision_analysis::AnalysisCandidate;
use crate::ports::{AnalysisSource, SourceError};

/// Extensions in lookup order.
const EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

#[derive(Debug, Clone)]
pub struct FileAnalysisSource {
    root: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

impl FileAnalysisSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Reads a single candidate file, choosing the parser by extension.
    ///
    /// Files without a `.yaml`/`.yml` extension are parsed as JSON.
    pub fn load_file(path: &Path) -> Result<AnalysisCandidate, SourceError> {
        let key = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SourceError::not_found(key.clone()),
            _ => SourceError::io(format!("Failed to read {}: {}", key, e)),
        })?;
        let format = Format::from_path(path).unwrap_or(Format::Json);
        parse(&key, &text, format)
    }

    /// Path of the document stored under `key`, if any.
    fn find(&self, key: &str) -> Option<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", key, ext)))
            .find(|path| path.is_file())
    }
}

impl AnalysisSource for FileAnalysisSource {
    fn keys(&self) -> Result<Vec<String>, SourceError> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            SourceError::io(format!("Failed to list {}: {}", self.root.display(), e))
        })?;

        let mut keys = BTreeSet::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || Format::from_path(&path).is_none() {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) if is_loadable_key(stem) => {
                    keys.insert(stem.to_string());
                }
                _ => {}
            }
        }
        Ok(keys.into_iter().collect())
    }

    fn load(&self, key: &str) -> Result<AnalysisCandidate, SourceError> {
        if !is_loadable_key(key) {
            return Err(SourceError::not_found(key));
        }
        let path = self.find(key).ok_or_else(|| SourceError::not_found(key))?;
        let text = fs::read_to_string(&path)
            .map_err(|e| SourceError::io(format!("Failed to read {}: {}", path.display(), e)))?;

        let format = Format::from_path(&path).unwrap_or(Format::Json);
        let candidate = parse(key, &text, format)?;
        tracing::debug!(key, path = %path.display(), "loaded analysis file");
        Ok(candidate)
    }
}

/// Plain file stems only: no separators, no hidden files.
fn is_loadable_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['/', '\\']) && !key.starts_with('.')
}

fn parse(key: &str, text: &str, format: Format) -> Result<AnalysisCandidate, SourceError> {
    match format {
        Format::Json => serde_json::from_str(text).map_err(|e| SourceError::parse(key, e)),
        Format::Yaml => serde_yaml::from_str(text).map_err(|e| SourceError::parse(key, e)),
    }
}
