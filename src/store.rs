use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persistence seam for the active language selection.
///
/// The selection is a single key-value entry. The store is injected so
/// callers can keep it in a file, in memory, or wherever their host
/// environment persists state.
pub trait SelectionStore {
    /// Read the persisted language code, if any was saved.
    fn load(&self) -> Result<Option<String>>;

    /// Persist the language code, replacing any previous selection.
    fn save(&mut self, code: &str) -> Result<()>;
}

/// On-disk layout: one JSON object keyed by `lang`.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSelection {
    lang: String,
    updated_at: DateTime<Utc>,
}

/// File-backed store holding the selection as a small JSON document.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path).context(format!(
            "Failed to read selection file at {}",
            self.path.display()
        ))?;
        let stored: StoredSelection =
            serde_json::from_str(&contents).context("Selection file is not valid JSON")?;

        Ok(Some(stored.lang))
    }

    fn save(&mut self, code: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .context(format!("Failed to create directory {}", parent.display()))?;
            }
        }

        let stored = StoredSelection {
            lang: code.to_string(),
            updated_at: Utc::now(),
        };
        let json =
            serde_json::to_string_pretty(&stored).context("Failed to serialize selection")?;
        fs::write(&self.path, json).context(format!(
            "Failed to write selection file at {}",
            self.path.display()
        ))?;

        Ok(())
    }
}

/// In-memory store for tests and headless embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    selection: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }
}

impl SelectionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.selection.clone())
    }

    fn save(&mut self, code: &str) -> Result<()> {
        self.selection = Some(code.to_string());
        Ok(())
    }
}
