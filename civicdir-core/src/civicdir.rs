//! Civicdir root: resolved configuration plus the things built from it.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};

use crate::config::CivicdirConfig;
use crate::error::{CivicdirError, CivicdirResult};
use crate::format::DateFormatter;
use crate::store::EventStore;

#[derive(Debug, Clone)]
pub struct Civicdir {
    config: CivicdirConfig,
}

impl Civicdir {
    /// Load ~/.config/civicdir/config.toml, creating it on first run.
    pub fn load() -> CivicdirResult<Self> {
        let config_path = CivicdirConfig::config_path()?;

        if !config_path.exists() {
            CivicdirConfig::create_default_config(&config_path)?;
            tracing::info!(path = %config_path.display(), "created default config");
        }

        Self::load_from(&config_path)
    }

    /// Load from a specific file, with `CIVICDIR_*` environment overrides.
    pub fn load_from(config_path: &Path) -> CivicdirResult<Self> {
        let config: CivicdirConfig = Config::builder()
            .add_source(File::from(config_path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("CIVICDIR"))
            .build()
            .map_err(|e| CivicdirError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CivicdirError::Config(e.to_string()))?;

        tracing::debug!(?config, "loaded config");
        Ok(Civicdir { config })
    }

    pub fn from_config(config: CivicdirConfig) -> Self {
        Civicdir { config }
    }

    pub fn config(&self) -> &CivicdirConfig {
        &self.config
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.event_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the event directory in display-friendly form,
    /// keeping `~` instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.event_dir.clone()
    }

    pub fn store(&self) -> EventStore {
        EventStore::open(self.data_path())
    }

    /// Date formatter honouring the configured locale and timezone.
    pub fn formatter(&self) -> CivicdirResult<DateFormatter> {
        DateFormatter::from_settings(
            self.config.locale.as_deref(),
            self.config.timezone.as_deref(),
        )
    }

    /// Configured (organizer_id, organizer_name), when both are set.
    pub fn default_organizer(&self) -> Option<(&str, &str)> {
        match (&self.config.organizer_id, &self.config.organizer_name) {
            (Some(id), Some(name)) => Some((id.as_str(), name.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        let events = tmp.path().join("events");
        std::fs::write(
            &path,
            format!(
                "event_dir = {:?}\nlocale = \"de_DE\"\ntimezone = \"Europe/Berlin\"\n\
                 organizer_id = \"org-9\"\norganizer_name = \"Bürgerverein\"\n",
                events.to_string_lossy()
            ),
        )
        .unwrap();

        let civicdir = Civicdir::load_from(&path).unwrap();

        assert_eq!(civicdir.data_path(), events);
        assert_eq!(civicdir.store().path(), events.as_path());
        assert_eq!(civicdir.default_organizer(), Some(("org-9", "Bürgerverein")));

        let formatter = civicdir.formatter().unwrap();
        assert_eq!(formatter.locale_name(), "de_DE");
        assert_eq!(formatter.timezone(), chrono_tz::Europe::Berlin);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let civicdir = Civicdir::load_from(&tmp.path().join("absent.toml")).unwrap();

        assert_eq!(civicdir.display_path(), PathBuf::from("~/civic-events"));
        assert!(civicdir.data_path().ends_with("civic-events"));
    }

    #[test]
    fn organizer_needs_both_fields() {
        let civicdir = Civicdir::from_config(CivicdirConfig {
            organizer_id: Some("org-1".into()),
            ..CivicdirConfig::default()
        });
        assert_eq!(civicdir.default_organizer(), None);
    }

    #[test]
    fn bad_timezone_surfaces_from_formatter() {
        let civicdir = Civicdir::from_config(CivicdirConfig {
            timezone: Some("Nowhere/Special".into()),
            ..CivicdirConfig::default()
        });
        assert!(matches!(
            civicdir.formatter().unwrap_err(),
            CivicdirError::UnknownTimezone(_)
        ));
    }
}
