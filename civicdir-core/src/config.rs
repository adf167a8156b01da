//! Global civicdir configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CivicdirError, CivicdirResult};

static DEFAULT_EVENT_DIR: &str = "~/civic-events";

fn default_event_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EVENT_DIR)
}

/// Configuration at ~/.config/civicdir/config.toml
///
/// Any key can also be set through a `CIVICDIR_`-prefixed environment
/// variable, e.g. `CIVICDIR_EVENT_DIR` or `CIVICDIR_TIMEZONE`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CivicdirConfig {
    #[serde(default = "default_event_dir")]
    pub event_dir: PathBuf,

    /// Formatting locale such as "en_US"; the environment decides when unset
    #[serde(default)]
    pub locale: Option<String>,

    /// IANA timezone such as "America/Chicago"; the OS decides when unset
    #[serde(default)]
    pub timezone: Option<String>,

    #[serde(default)]
    pub organizer_id: Option<String>,

    #[serde(default)]
    pub organizer_name: Option<String>,
}

impl Default for CivicdirConfig {
    fn default() -> Self {
        CivicdirConfig {
            event_dir: default_event_dir(),
            locale: None,
            timezone: None,
            organizer_id: None,
            organizer_name: None,
        }
    }
}

impl CivicdirConfig {
    pub fn config_path() -> CivicdirResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CivicdirError::Config("Could not determine config directory".into()))?
            .join("civicdir");

        Ok(config_dir.join("config.toml"))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CivicdirResult<()> {
        let contents = format!(
            "\
# civicdir configuration

# Where event files are stored:
# event_dir = \"{}\"

# Locale and timezone used to display event dates
# (defaults come from LC_ALL/LC_TIME/LANG and the system clock):
# locale = \"en_US\"
# timezone = \"America/Chicago\"

# Organizer filled in for new events:
# organizer_id = \"org-1\"
# organizer_name = \"Neighborhood Council\"
",
            DEFAULT_EVENT_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CivicdirError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CivicdirError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: CivicdirConfig = toml::from_str("").unwrap();
        assert_eq!(config, CivicdirConfig::default());
        assert_eq!(config.event_dir, PathBuf::from("~/civic-events"));
    }

    #[test]
    fn default_config_file_parses_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("civicdir").join("config.toml");

        CivicdirConfig::create_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# civicdir configuration"));
        let config: CivicdirConfig = toml::from_str(&content).unwrap();
        assert_eq!(config, CivicdirConfig::default());
    }
}
