use anyhow::Result;
use civicdir_core::civicdir::Civicdir;
use civicdir_core::event::{Event, EventCategory};
use clap::Args;
use owo_colors::OwoColorize;

use crate::render::render_field_diffs;
use crate::utils::dates::parse_when;

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    /// Id of the event to change
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(short = 'k', long)]
    pub category: Option<EventCategory>,

    /// New start date/time
    #[arg(short, long)]
    pub date: Option<String>,

    #[arg(short, long)]
    pub location: Option<String>,

    #[arg(long)]
    pub organizer_id: Option<String>,

    #[arg(long)]
    pub organizer_name: Option<String>,

    /// Set the attendee count
    #[arg(long)]
    pub attendees: Option<u32>,

    /// Whether attendance needs an RSVP (true/false)
    #[arg(long)]
    pub rsvp_required: Option<bool>,

    #[arg(long, conflicts_with = "clear_image")]
    pub image_url: Option<String>,

    /// Remove the event image
    #[arg(long)]
    pub clear_image: bool,
}

pub fn run(civicdir: &Civicdir, args: EditArgs) -> Result<()> {
    let formatter = civicdir.formatter()?;
    let store = civicdir.store();

    let old = store.get(&args.id)?.event;
    let new = apply(old.clone(), args, formatter.timezone())?;

    let diffs = render_field_diffs(&old, &new, &formatter);
    if diffs.is_empty() {
        println!("{}", "Nothing to change".dimmed());
        return Ok(());
    }

    store.update(&new)?;
    tracing::info!(id = %new.id, changed = diffs.len(), "event updated");

    println!("{}", format!("  Updated: {}", new.title).yellow());
    for line in diffs {
        println!("    {}", line);
    }

    Ok(())
}

/// Assign every given flag onto the event.
fn apply(mut event: Event, args: EditArgs, tz: chrono_tz::Tz) -> Result<Event> {
    if let Some(title) = args.title {
        event.title = title;
    }
    if let Some(description) = args.description {
        event.description = description;
    }
    if let Some(category) = args.category {
        event.category = category;
    }
    if let Some(date) = args.date {
        event.date = parse_when(&date, tz)?;
    }
    if let Some(location) = args.location {
        event.location = location;
    }
    if let Some(organizer_id) = args.organizer_id {
        event.organizer_id = organizer_id;
    }
    if let Some(organizer_name) = args.organizer_name {
        event.organizer_name = organizer_name;
    }
    if let Some(count) = args.attendees {
        event.attendee_count = count;
    }
    if let Some(required) = args.rsvp_required {
        event.is_rsvp_required = required;
    }
    if let Some(url) = args.image_url {
        event.image_url = Some(url).filter(|u| !u.is_empty());
    }
    if args.clear_image {
        event.image_url = None;
    }

    Ok(event)
}
