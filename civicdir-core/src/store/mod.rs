//! Directory-backed event repository.
//!
//! Every event is one pretty-printed JSON file named after its start time and
//! title. The store owns all reading and writing; [`Event`] itself knows
//! nothing about files.

mod stored_event;

pub use stored_event::StoredEvent;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{CivicdirError, CivicdirResult};
use crate::event::Event;

#[derive(Debug, Clone)]
pub struct EventStore {
    dir: PathBuf,
}

impl EventStore {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        EventStore { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Load every event in the directory, ordered by start time.
    pub fn events(&self) -> CivicdirResult<Vec<StoredEvent>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut events: Vec<StoredEvent> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|e| e == "json"))
            .filter_map(|path| match StoredEvent::from_file(path.clone()) {
                Ok(stored) => Some(stored),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "skipping unreadable event file"
                    );
                    None
                }
            })
            .collect();

        events.sort_by(|a, b| {
            a.event
                .date
                .cmp(&b.event.date)
                .then_with(|| a.event.id.cmp(&b.event.id))
        });

        Ok(events)
    }

    pub fn find(&self, id: &str) -> CivicdirResult<Option<StoredEvent>> {
        Ok(self.events()?.into_iter().find(|e| e.event.id == id))
    }

    pub fn get(&self, id: &str) -> CivicdirResult<StoredEvent> {
        self.find(id)?
            .ok_or_else(|| CivicdirError::EventNotFound(id.to_string()))
    }

    pub fn create(&self, event: &Event) -> CivicdirResult<StoredEvent> {
        if self.find(&event.id)?.is_some() {
            return Err(CivicdirError::DuplicateEvent(event.id.clone()));
        }

        std::fs::create_dir_all(&self.dir)?;

        let path = StoredEvent::unique_path_for(event, &self.dir, None)?;
        let stored = StoredEvent::new(path, event);
        stored.save()?;

        tracing::debug!(id = %event.id, path = %stored.path.display(), "created event");
        Ok(stored)
    }

    /// Replace the stored copy of `event` (matched by id). The file is
    /// renamed when the title or start time changed. The old file is only
    /// removed once the new one is written.
    pub fn update(&self, event: &Event) -> CivicdirResult<StoredEvent> {
        let existing = self.get(&event.id)?;

        let path = StoredEvent::unique_path_for(event, &self.dir, Some(&existing.path))?;
        let stored = StoredEvent::new(path, event);
        stored.save()?;

        if stored.path != existing.path {
            std::fs::remove_file(&existing.path)?;
        }

        tracing::debug!(id = %event.id, path = %stored.path.display(), "updated event");
        Ok(stored)
    }

    /// Remove an event and return what was removed.
    pub fn delete(&self, id: &str) -> CivicdirResult<StoredEvent> {
        let existing = self.get(id)?;
        std::fs::remove_file(&existing.path)?;

        tracing::debug!(id, path = %existing.path.display(), "deleted event");
        Ok(existing)
    }

    /// Events starting after now, soonest first.
    pub fn upcoming(&self) -> CivicdirResult<Vec<Event>> {
        Ok(self.partition_at(Utc::now())?.0)
    }

    /// Events that already started, most recent first.
    pub fn past(&self) -> CivicdirResult<Vec<Event>> {
        Ok(self.partition_at(Utc::now())?.1)
    }

    /// Split into (upcoming, past) against a single instant.
    pub fn partition_at(&self, now: DateTime<Utc>) -> CivicdirResult<(Vec<Event>, Vec<Event>)> {
        let (upcoming, mut past): (Vec<Event>, Vec<Event>) = self
            .events()?
            .into_iter()
            .map(|stored| stored.event)
            .partition(|event| event.is_upcoming_at(now));

        past.reverse();
        Ok((upcoming, past))
    }
}
