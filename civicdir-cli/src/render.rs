//! TUI rendering traits for civicdir types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to civicdir-core types using owo_colors.

use civicdir_core::event::{Event, EventCategory};
use civicdir_core::format::DateFormatter;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventCategory {
    fn render(&self) -> String {
        let tag = format!("[{}]", self.label());
        match self {
            EventCategory::TownHall => tag.blue().to_string(),
            EventCategory::Forum => tag.cyan().to_string(),
            EventCategory::Meeting => tag.green().to_string(),
            EventCategory::Rally => tag.red().to_string(),
            EventCategory::Debate => tag.magenta().to_string(),
            EventCategory::Conference => tag.yellow().to_string(),
        }
    }
}

/// Rendering that depends on the user's locale and timezone
pub trait EventRender {
    fn render_line(&self, formatter: &DateFormatter) -> String;
    fn render_details(&self, formatter: &DateFormatter) -> Vec<String>;
}

impl EventRender for Event {
    /// One line for listings: time, title, category, location.
    fn render_line(&self, formatter: &DateFormatter) -> String {
        format!(
            "{:>9} {} {} {}",
            self.formatted_time_with(formatter),
            self.title.bold(),
            self.category.render(),
            format!("@ {}", self.location).dimmed()
        )
    }

    fn render_details(&self, formatter: &DateFormatter) -> Vec<String> {
        let when = if self.is_upcoming() {
            "upcoming".green().to_string()
        } else {
            "past".dimmed().to_string()
        };

        let mut lines = vec![
            format!("{} {}", self.title.bold(), self.category.render()),
            format!("  {}  {} ({})", "When:".dimmed(), self.formatted_date_with(formatter), when),
            format!("  {} {}", "Where:".dimmed(), self.location),
            format!(
                "  {} {} ({})",
                "Organizer:".dimmed(),
                self.organizer_name,
                self.organizer_id.dimmed()
            ),
            format!("  {} {}", "Attendees:".dimmed(), self.attendee_count),
            format!(
                "  {} {}",
                "RSVP:".dimmed(),
                if self.is_rsvp_required { "required" } else { "not required" }
            ),
        ];

        if let Some(url) = &self.image_url {
            lines.push(format!("  {} {}", "Image:".dimmed(), url));
        }

        lines.push(format!("  {} {}", "Id:".dimmed(), self.id.dimmed()));
        lines.push(format!(
            "  {} {}",
            "Created:".dimmed(),
            formatter.medium_date_short_time(&self.created_at).dimmed()
        ));

        if !self.description.is_empty() {
            lines.push(String::new());
            lines.extend(self.description.lines().map(|l| format!("  {}", l)));
        }

        lines
    }
}

/// Render field-by-field differences between two versions of an event
pub fn render_field_diffs(old: &Event, new: &Event, formatter: &DateFormatter) -> Vec<String> {
    let mut lines = Vec::new();

    let mut push = |field: &str, old_value: String, new_value: String| {
        if old_value != new_value {
            lines.push(format!(
                "{}: {} → {}",
                field.dimmed(),
                old_value.red(),
                new_value.green()
            ));
        }
    };

    push("title", old.title.clone(), new.title.clone());
    push("description", old.description.clone(), new.description.clone());
    push("category", old.category.to_string(), new.category.to_string());
    push(
        "date",
        old.formatted_date_with(formatter),
        new.formatted_date_with(formatter),
    );
    push("location", old.location.clone(), new.location.clone());
    push("organizer_id", old.organizer_id.clone(), new.organizer_id.clone());
    push("organizer_name", old.organizer_name.clone(), new.organizer_name.clone());
    push(
        "attendee_count",
        old.attendee_count.to_string(),
        new.attendee_count.to_string(),
    );
    push(
        "rsvp_required",
        old.is_rsvp_required.to_string(),
        new.is_rsvp_required.to_string(),
    );
    push(
        "image_url",
        optional(&old.image_url),
        optional(&new.image_url),
    );

    lines
}

fn optional(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("(none)").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn rally() -> Event {
        Event::new(
            "Climate Rally",
            "March from the park to city hall",
            EventCategory::Rally,
            Utc.with_ymd_and_hms(2025, 4, 22, 16, 0, 0).unwrap(),
            "Riverside Park",
            "org-5",
            "Youth Climate Coalition",
        )
    }

    fn formatter() -> DateFormatter {
        DateFormatter::from_settings(Some("en_US"), Some("UTC")).unwrap()
    }

    #[test]
    fn line_includes_time_title_and_category() {
        let line = rally().render_line(&formatter());
        assert!(line.contains("4:00 PM"));
        assert!(line.contains("Climate Rally"));
        assert!(line.contains("[Rally]"));
        assert!(line.contains("Riverside Park"));
    }

    #[test]
    fn details_show_image_only_when_present() {
        let event = rally();
        let without = event.render_details(&formatter()).join("\n");
        assert!(!without.contains("Image:"));

        let with = event
            .with_image_url(Some("https://example.org/rally.jpg".into()))
            .render_details(&formatter())
            .join("\n");
        assert!(with.contains("https://example.org/rally.jpg"));
        assert!(with.contains("Apr 22, 2025, 4:00 PM"));
    }

    #[test]
    fn field_diffs_only_list_changes() {
        let old = rally();
        let mut new = old.clone();
        new.attendee_count = 250;
        new.image_url = Some("https://example.org/rally.jpg".into());

        let diffs = render_field_diffs(&old, &new, &formatter());

        assert_eq!(diffs.len(), 2);
        assert!(diffs[0].contains("attendee_count"));
        assert!(diffs[1].contains("(none)"));
    }

    #[test]
    fn no_diffs_for_identical_events() {
        let event = rally();
        assert!(render_field_diffs(&event, &event, &formatter()).is_empty());
    }
}
