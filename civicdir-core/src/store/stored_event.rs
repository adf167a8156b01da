//! An event together with the file it lives in.

use std::path::{Path, PathBuf};

use crate::error::{CivicdirError, CivicdirResult};
use crate::event::Event;
use crate::utils::slugify;

/// A stored civic event (one JSON file)
#[derive(Debug, Clone)]
pub struct StoredEvent {
    pub event: Event,
    pub path: PathBuf,
}

impl StoredEvent {
    pub fn new(path: PathBuf, event: &Event) -> Self {
        StoredEvent {
            path,
            event: event.clone(),
        }
    }

    /// Read an event file. A file written without an `id` or `createdAt`
    /// gets the generated values saved back, so they stay stable across reads.
    pub fn from_file(path: PathBuf) -> CivicdirResult<Self> {
        let content = std::fs::read_to_string(&path)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        let missing_generated = value.get("id").is_none() || value.get("createdAt").is_none();

        let stored = StoredEvent {
            event: serde_json::from_value(value)?,
            path,
        };

        if missing_generated {
            stored.save()?;
            tracing::info!(
                id = %stored.event.id,
                path = %stored.path.display(),
                "saved generated fields to event file"
            );
        }

        Ok(stored)
    }

    pub fn save(&self) -> CivicdirResult<()> {
        let mut content = serde_json::to_string_pretty(&self.event)?;
        content.push('\n');
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Pick a file path in `dir` that no other file uses. `own` is the
    /// event's current file, which counts as free.
    pub fn unique_path_for(
        event: &Event,
        dir: &Path,
        own: Option<&Path>,
    ) -> CivicdirResult<PathBuf> {
        let base = Self::base_slug_for(event);
        let is_free = |path: &Path| own == Some(path) || !path.exists();

        let path = dir.join(format!("{}.json", base));
        if is_free(&path) {
            return Ok(path);
        }

        // Collision - try suffixes
        for n in 2..=100 {
            let path = dir.join(format!("{}-{}.json", base, n));
            if is_free(&path) {
                return Ok(path);
            }
        }

        Err(CivicdirError::Store(format!(
            "Too many file name collisions for '{}'",
            base
        )))
    }

    /// `YYYY-MM-DDTHHMM__title-slug`, using the UTC start time.
    fn base_slug_for(event: &Event) -> String {
        format!(
            "{}__{}",
            event.date.format("%Y-%m-%dT%H%M"),
            slugify(&event.title)
        )
    }
}
