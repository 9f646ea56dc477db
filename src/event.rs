use std::path::Path;

use anyhow::Result;
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::record::{read_records, Record};
use crate::text_utils::parse_iso_date_time;

pub const TBD: &str = "TBD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Completed,
}

/// Event entry of `events.json`
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: Option<String>,
    pub date: Option<String>,
    pub date_end: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    #[serde(default)]
    pub image_alt: String,
    pub status: Option<String>,
    #[serde(default)]
    pub registration_enabled: bool,
    pub external_url: Option<String>,
    pub recap_url: Option<String>,
    pub recording_url: Option<String>,
    pub slides_url: Option<String>,
    pub recap_label: Option<String>,
    pub slug: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Event {
    /// Status text trimmed and lower-cased, `upcoming` when empty or missing
    pub fn normalized_status(&self) -> String {
        let status = self.status.as_deref().unwrap_or("").trim().to_lowercase();
        if status.is_empty() {
            "upcoming".to_string()
        } else {
            status
        }
    }

    /// Only `completed` is meaningful, every other value counts as upcoming
    pub fn status(&self) -> EventStatus {
        if self.normalized_status() == "completed" {
            EventStatus::Completed
        } else {
            EventStatus::Upcoming
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status() == EventStatus::Completed
    }

    pub fn date_str(&self) -> &str {
        self.date.as_deref().unwrap_or(TBD)
    }

    pub fn is_tbd(&self) -> bool {
        self.date_str().eq_ignore_ascii_case(TBD)
    }

    /// TBD, missing and unparseable dates sort as the latest possible date
    pub fn sort_key(&self) -> NaiveDateTime {
        let date = self.date.as_deref().unwrap_or("");
        if date.is_empty() || self.is_tbd() {
            return NaiveDateTime::MAX;
        }
        parse_iso_date_time(date).unwrap_or(NaiveDateTime::MAX)
    }

    pub fn time(&self) -> &str {
        self.time.as_deref().unwrap_or(TBD)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    pub fn image(&self) -> &str {
        self.image.as_deref().unwrap_or("")
    }

    pub fn slug(&self) -> &str {
        self.slug.as_deref().unwrap_or("")
    }

    /// First non-empty of recap, recording and slides links
    pub fn recap_url(&self) -> Option<&str> {
        non_empty(&self.recap_url)
            .or_else(|| non_empty(&self.recording_url))
            .or_else(|| non_empty(&self.slides_url))
    }

    pub fn recap_label(&self) -> &str {
        non_empty(&self.recap_label).unwrap_or("View Recap")
    }

    pub fn external_url(&self) -> Option<&str> {
        non_empty(&self.external_url)
    }
}

pub fn sort_events(events: &mut [Record<Event>], newest_first: bool) {
    if newest_first {
        events.sort_by(|a, b| b.data.sort_key().cmp(&a.data.sort_key()));
    } else {
        events.sort_by_key(|e| e.data.sort_key());
    }
}

/// Upcoming events soonest first (TBD last), completed events most recent first
pub struct EventSplit {
    pub upcoming: Vec<Record<Event>>,
    pub completed: Vec<Record<Event>>,
}

impl EventSplit {
    pub fn from(events: &[Record<Event>]) -> Self {
        let (mut completed, mut upcoming): (Vec<_>, Vec<_>) = events.iter()
            .cloned()
            .partition(|e| e.data.is_completed());

        sort_events(&mut upcoming, false);
        sort_events(&mut completed, true);

        EventSplit { upcoming, completed }
    }

    /// The next upcoming event, it drives the page metadata
    pub fn featured(&self) -> Option<&Event> {
        self.upcoming.first().map(|e| &e.data)
    }
}

/// A missing `events` list means no events
pub fn load_events(path: &Path) -> Result<Vec<Record<Event>>> {
    let events = read_records::<Event>(path, "events")?;
    Ok(events.unwrap_or_default())
}
