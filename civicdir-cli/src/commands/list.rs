use anyhow::Result;
use chrono::{NaiveDate, Utc};
use civicdir_core::civicdir::Civicdir;
use civicdir_core::event::{Event, EventCategory};
use civicdir_core::format::DateFormatter;
use owo_colors::OwoColorize;

use crate::render::EventRender;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scope {
    All,
    Upcoming,
    Past,
}

pub fn run(civicdir: &Civicdir, scope: Scope, category: Option<EventCategory>) -> Result<()> {
    let formatter = civicdir.formatter()?;
    let store = civicdir.store();

    let events: Vec<Event> = match scope {
        Scope::All => store.events()?.into_iter().map(|s| s.event).collect(),
        Scope::Upcoming => store.upcoming()?,
        Scope::Past => store.past()?,
    };

    let events: Vec<Event> = events
        .into_iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .collect();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for line in render_grouped(&events, &formatter, today(&formatter)) {
        println!("{}", line);
    }

    Ok(())
}

fn today(formatter: &DateFormatter) -> NaiveDate {
    Utc::now().with_timezone(&formatter.timezone()).date_naive()
}

/// Events grouped under a heading per local day, in the given order.
fn render_grouped(events: &[Event], formatter: &DateFormatter, today: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_day: Option<NaiveDate> = None;

    for event in events {
        let day = event.date.with_timezone(&formatter.timezone()).date_naive();

        if current_day != Some(day) {
            if current_day.is_some() {
                lines.push(String::new());
            }
            lines.push(day_label(event, today, formatter).bold().to_string());
            current_day = Some(day);
        }

        lines.push(format!("  {}", event.render_line(formatter)));
    }

    lines
}

/// "Today", "Tomorrow", "Yesterday", or the medium date.
fn day_label(event: &Event, today: NaiveDate, formatter: &DateFormatter) -> String {
    let day = event.date.with_timezone(&formatter.timezone()).date_naive();

    match (day - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => formatter.medium_date(&event.date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};

    fn meeting(title: &str, date: DateTime<Utc>) -> Event {
        Event::new(
            title,
            "",
            EventCategory::Meeting,
            date,
            "Council Chambers",
            "org-2",
            "City Council",
        )
    }

    fn formatter() -> DateFormatter {
        DateFormatter::from_settings(Some("en_US"), Some("America/Los_Angeles")).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn groups_by_local_day() {
        // 02:00 UTC on the 11th is still the 10th in Los Angeles
        let events = vec![
            meeting("Budget Session", Utc.with_ymd_and_hms(2025, 6, 10, 17, 0, 0).unwrap()),
            meeting("Late Hearing", Utc.with_ymd_and_hms(2025, 6, 11, 2, 0, 0).unwrap()),
            meeting("Zoning Board", Utc.with_ymd_and_hms(2025, 6, 12, 16, 0, 0).unwrap()),
        ];

        let lines = render_grouped(&events, &formatter(), ymd(2025, 6, 10));

        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Today"));
        assert!(lines[1].contains("Budget Session"));
        assert!(lines[2].contains("Late Hearing"));
        assert_eq!(lines[3], "");
        assert!(lines[4].contains("Jun 12, 2025"));
        assert!(lines[5].contains("Zoning Board"));
    }

    #[test]
    fn relative_day_labels() {
        let f = formatter();
        let today = ymd(2025, 6, 10);
        let at = |d: u32| meeting("Any", Utc.with_ymd_and_hms(2025, 6, d, 19, 0, 0).unwrap());

        assert_eq!(day_label(&at(10), today, &f), "Today");
        assert_eq!(day_label(&at(11), today, &f), "Tomorrow");
        assert_eq!(day_label(&at(9), today, &f), "Yesterday");
        assert_eq!(day_label(&at(20), today, &f), "Jun 20, 2025");
    }
}
