//! The civic event record.
//!
//! An [`Event`] is a plain data record: every field is public and callers
//! mutate it by direct assignment. Persistence lives in [`crate::store`],
//! never on the record itself.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CivicdirError;
use crate::format::DateFormatter;

/// Kind of civic gathering. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    #[serde(rename = "Town Hall")]
    TownHall,
    Forum,
    Meeting,
    Rally,
    Debate,
    Conference,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::TownHall,
        EventCategory::Forum,
        EventCategory::Meeting,
        EventCategory::Rally,
        EventCategory::Debate,
        EventCategory::Conference,
    ];

    /// Human-readable label, also used as the serialized value.
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::TownHall => "Town Hall",
            EventCategory::Forum => "Forum",
            EventCategory::Meeting => "Meeting",
            EventCategory::Rally => "Rally",
            EventCategory::Debate => "Debate",
            EventCategory::Conference => "Conference",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EventCategory {
    type Err = CivicdirError;

    /// Accepts the label in any case, or its slug ("town-hall", "townhall").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = squash(s);

        EventCategory::ALL
            .into_iter()
            .find(|c| squash(c.label()) == wanted)
            .ok_or_else(|| CivicdirError::UnknownCategory(s.to_string()))
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn new_event_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_rsvp_required() -> bool {
    true
}

/// A civic event (town hall, forum, meeting, rally, debate or conference).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default = "new_event_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    /// Start of the event
    pub date: DateTime<Utc>,
    pub location: String,
    /// Reference to the organizer; not checked against anything
    pub organizer_id: String,
    /// Display copy of the organizer's name
    pub organizer_name: String,
    /// Free-standing counter, not derived from any attendee list
    #[serde(default)]
    pub attendee_count: u32,
    #[serde(rename = "isRSVPRequired", default = "default_rsvp_required")]
    pub is_rsvp_required: bool,
    #[serde(
        rename = "imageURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Create an event from its required fields.
    ///
    /// The id is a fresh UUID v4, the attendee count starts at zero, RSVP is
    /// required, there is no image, and `created_at` is the current time.
    /// Nothing is validated, so this never fails.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: EventCategory,
        date: DateTime<Utc>,
        location: impl Into<String>,
        organizer_id: impl Into<String>,
        organizer_name: impl Into<String>,
    ) -> Self {
        Event {
            id: new_event_id(),
            title: title.into(),
            description: description.into(),
            category,
            date,
            location: location.into(),
            organizer_id: organizer_id.into(),
            organizer_name: organizer_name.into(),
            attendee_count: 0,
            is_rsvp_required: true,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_attendee_count(mut self, count: u32) -> Self {
        self.attendee_count = count;
        self
    }

    pub fn with_rsvp_required(mut self, required: bool) -> Self {
        self.is_rsvp_required = required;
        self
    }

    pub fn with_image_url(mut self, url: Option<String>) -> Self {
        self.image_url = url;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Whether the event starts strictly after the current instant.
    /// Recomputed on every call, so the answer changes as time passes.
    pub fn is_upcoming(&self) -> bool {
        self.is_upcoming_at(Utc::now())
    }

    pub fn is_upcoming_at(&self, now: DateTime<Utc>) -> bool {
        self.date > now
    }

    pub fn is_past(&self) -> bool {
        !self.is_upcoming()
    }

    /// Medium date and short time in the process locale and timezone.
    pub fn formatted_date(&self) -> String {
        self.formatted_date_with(&DateFormatter::system())
    }

    /// Short time of day in the process locale and timezone.
    pub fn formatted_time(&self) -> String {
        self.formatted_time_with(&DateFormatter::system())
    }

    pub fn formatted_date_with(&self, formatter: &DateFormatter) -> String {
        formatter.medium_date_short_time(&self.date)
    }

    pub fn formatted_time_with(&self, formatter: &DateFormatter) -> String {
        formatter.short_time(&self.date)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
