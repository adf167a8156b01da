use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use civicdir_core::civicdir::Civicdir;
use civicdir_core::event::{Event, EventCategory};
use clap::Args;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::utils::dates::parse_when;

#[derive(Args, Debug, Default)]
pub struct NewArgs {
    /// Event title
    pub title: Option<String>,

    /// Start date/time (e.g. "2025-03-20 18:30", "thu 7pm", RFC 3339)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Town Hall, Forum, Meeting, Rally, Debate or Conference
    #[arg(short = 'k', long)]
    pub category: Option<EventCategory>,

    #[arg(short, long)]
    pub location: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Defaults to organizer_id from config
    #[arg(long)]
    pub organizer_id: Option<String>,

    /// Defaults to organizer_name from config
    #[arg(long)]
    pub organizer_name: Option<String>,

    /// Attendance without RSVP
    #[arg(long)]
    pub no_rsvp: bool,

    #[arg(long)]
    pub image_url: Option<String>,

    /// Initial attendee count
    #[arg(long)]
    pub attendees: Option<u32>,
}

pub fn run(civicdir: &Civicdir, args: NewArgs) -> Result<()> {
    let interactive = args.title.is_none() || args.date.is_none();
    let formatter = civicdir.formatter()?;

    // --- Title ---
    let title = match args.title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Date ---
    let date = match args.date {
        Some(d) => parse_when(&d, formatter.timezone())?,
        None => prompt_date("  When?", formatter.timezone())?,
    };

    // --- Category ---
    let category = match args.category {
        Some(c) => c,
        None if interactive => prompt_category()?,
        None => anyhow::bail!("Missing --category (one of: {})", category_list()),
    };

    // --- Location / Description ---
    let location = match args.location {
        Some(l) => l,
        None if interactive => prompt_optional("  Where? (skip)")?,
        None => String::new(),
    };

    let description = match args.description {
        Some(d) => d,
        None if interactive => prompt_optional("  Description (skip)")?,
        None => String::new(),
    };

    // --- Organizer ---
    let (organizer_id, organizer_name) =
        resolve_organizer(civicdir, args.organizer_id, args.organizer_name, interactive)?;

    let event = Event::new(
        title,
        description,
        category,
        date,
        location,
        organizer_id,
        organizer_name,
    )
    .with_rsvp_required(!args.no_rsvp)
    .with_image_url(args.image_url.filter(|url| !url.is_empty()))
    .with_attendee_count(args.attendees.unwrap_or(0));

    let stored = civicdir.store().create(&event)?;
    tracing::info!(id = %event.id, path = %stored.path.display(), "event created");

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", event.title).green());
    println!(
        "  {}",
        format!("{} · {}", event.formatted_date_with(&formatter), event.id).dimmed()
    );

    Ok(())
}

/// Prompt for a date with retry on parse errors.
fn prompt_date(prompt: &str, tz: Tz) -> Result<DateTime<Utc>> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse_when(&input, tz) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn prompt_category() -> Result<EventCategory> {
    let items: Vec<&str> = EventCategory::ALL.iter().map(|c| c.label()).collect();
    let selection = Select::new()
        .with_prompt("  Category")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(EventCategory::ALL[selection])
}

fn prompt_optional(prompt: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?)
}

fn category_list() -> String {
    EventCategory::ALL
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flags win, then config, then a prompt when interactive.
fn resolve_organizer(
    civicdir: &Civicdir,
    id: Option<String>,
    name: Option<String>,
    interactive: bool,
) -> Result<(String, String)> {
    let configured = civicdir.default_organizer();

    let id = id.or_else(|| configured.map(|(id, _)| id.to_string()));
    let name = name.or_else(|| configured.map(|(_, name)| name.to_string()));

    match (id, name) {
        (Some(id), Some(name)) => Ok((id, name)),
        (id, name) if interactive => {
            let id = match id {
                Some(id) => id,
                None => Input::<String>::new()
                    .with_prompt("  Organizer id")
                    .interact_text()?,
            };
            let name = match name {
                Some(name) => name,
                None => Input::<String>::new()
                    .with_prompt("  Organizer name")
                    .interact_text()?,
            };
            Ok((id, name))
        }
        _ => anyhow::bail!(
            "No organizer given.\n\
            Use --organizer-id and --organizer-name, or set organizer_id and organizer_name in config.toml"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civicdir_core::config::CivicdirConfig;

    fn civicdir_in(dir: &std::path::Path, organizer: bool) -> Civicdir {
        Civicdir::from_config(CivicdirConfig {
            event_dir: dir.to_path_buf(),
            locale: Some("en_US".into()),
            timezone: Some("America/Chicago".into()),
            organizer_id: organizer.then(|| "org-1".to_string()),
            organizer_name: organizer.then(|| "Neighborhood Council".to_string()),
        })
    }

    fn args() -> NewArgs {
        NewArgs {
            title: Some("Zoning Forum".into()),
            date: Some("2025-05-01 19:00".into()),
            category: Some(EventCategory::Forum),
            location: Some("Community Center".into()),
            ..NewArgs::default()
        }
    }

    #[test]
    fn creates_event_with_config_organizer() {
        let tmp = tempfile::tempdir().unwrap();
        let civicdir = civicdir_in(tmp.path(), true);

        run(&civicdir, args()).unwrap();

        let events = civicdir.store().events().unwrap();
        assert_eq!(events.len(), 1);
        let event = &events[0].event;
        assert_eq!(event.title, "Zoning Forum");
        assert_eq!(event.organizer_name, "Neighborhood Council");
        assert_eq!(event.description, "");
        assert!(event.is_rsvp_required);
        assert_eq!(event.date.to_rfc3339(), "2025-05-02T00:00:00+00:00");
    }

    #[test]
    fn flags_override_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let civicdir = civicdir_in(tmp.path(), true);

        run(
            &civicdir,
            NewArgs {
                organizer_name: Some("Parks Board".into()),
                no_rsvp: true,
                attendees: Some(12),
                image_url: Some("https://example.org/zoning.png".into()),
                ..args()
            },
        )
        .unwrap();

        let event = civicdir.store().events().unwrap().remove(0).event;
        assert_eq!(event.organizer_id, "org-1");
        assert_eq!(event.organizer_name, "Parks Board");
        assert!(!event.is_rsvp_required);
        assert_eq!(event.attendee_count, 12);
        assert_eq!(event.image_url.as_deref(), Some("https://example.org/zoning.png"));
    }

    #[test]
    fn missing_organizer_fails_non_interactively() {
        let tmp = tempfile::tempdir().unwrap();
        let civicdir = civicdir_in(tmp.path(), false);

        let err = run(&civicdir, args()).unwrap_err();
        assert!(err.to_string().contains("No organizer"));
        assert!(civicdir.store().events().unwrap().is_empty());
    }

    #[test]
    fn missing_category_fails_non_interactively() {
        let tmp = tempfile::tempdir().unwrap();
        let civicdir = civicdir_in(tmp.path(), true);

        let err = run(
            &civicdir,
            NewArgs {
                category: None,
                ..args()
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("--category"));
    }
}
