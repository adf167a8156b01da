use anyhow::Result;
use civicdir_core::civicdir::Civicdir;
use civicdir_core::config::CivicdirConfig;
use owo_colors::OwoColorize;

pub fn run(civicdir: &Civicdir) -> Result<()> {
    let config_path = CivicdirConfig::config_path()?;
    let formatter = civicdir.formatter()?;
    let config = civicdir.config();

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Events:     {}", events_path(civicdir));

    println!();
    println!("{}", "Display".bold());
    println!(
        "  Locale:     {}{}",
        formatter.locale_name(),
        source_note(config.locale.is_some()).dimmed()
    );
    println!(
        "  Timezone:   {}{}",
        formatter.timezone(),
        source_note(config.timezone.is_some()).dimmed()
    );

    println!();
    println!("{}", "New events".bold());
    match civicdir.default_organizer() {
        Some((id, name)) => println!("  Organizer:  {} ({})", name, id.dimmed()),
        None => println!("  Organizer:  {}", "(not set)".dimmed()),
    }

    Ok(())
}

/// The event directory as configured, followed by the expanded path when `~` was used.
fn events_path(civicdir: &Civicdir) -> String {
    let shown = civicdir.display_path();
    let full = civicdir.data_path();

    if shown == full {
        full.display().to_string()
    } else {
        format!("{} ({})", shown.display(), full.display())
    }
}

fn source_note(configured: bool) -> &'static str {
    if configured { "" } else { " (system)" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn tilde_path_shows_expansion() {
        let civicdir = Civicdir::from_config(CivicdirConfig::default());
        let shown = events_path(&civicdir);

        assert!(shown.starts_with("~/civic-events ("));
        assert!(shown.ends_with("civic-events)"));
    }

    #[test]
    fn absolute_path_shown_once() {
        let civicdir = Civicdir::from_config(CivicdirConfig {
            event_dir: PathBuf::from("/srv/events"),
            ..CivicdirConfig::default()
        });

        assert_eq!(events_path(&civicdir), "/srv/events");
    }

    #[test]
    fn unset_settings_are_marked_system() {
        assert_eq!(source_note(false), " (system)");
        assert_eq!(source_note(true), "");
    }
}
