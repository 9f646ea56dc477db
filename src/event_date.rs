use chrono::{Datelike, NaiveDate};

use crate::event::{Event, TBD};
use crate::text_utils::parse_calendar_date;

/// Display fields of an event's date badge
#[derive(Debug, Clone, PartialEq)]
pub struct EventDate {
    pub weekday: String,
    pub month: String,
    pub day: String,
    pub year: String,
    pub time: String,
    pub display: String,
}

impl EventDate {
    pub fn from_event(event: &Event) -> EventDate {
        let time = event.time().to_string();

        if event.is_tbd() {
            return Self::tbd(event, time);
        }

        let Some(start) = parse_calendar_date(event.date_str()) else {
            return Self::tbd(event, time);
        };

        let end = event.date_end.as_deref()
            .filter(|end| !end.is_empty() && *end != event.date_str())
            .and_then(parse_calendar_date);

        Self::from_dates(start, end, time)
    }

    fn from_dates(start: NaiveDate, end: Option<NaiveDate>, time: String) -> EventDate {
        let weekday = start.format("%A").to_string().to_uppercase();
        let month = start.format("%b").to_string().to_uppercase();
        let year = start.year().to_string();

        let (day, display) = match end {
            Some(end) => (
                format!("{}-{}", start.day(), end.day()),
                format!("{} {}-{}, {}", month, start.day(), end.day(), year),
            ),
            None => (
                format!("{:02}", start.day()),
                start.format("%B %d, %Y").to_string(),
            ),
        };

        EventDate {
            weekday,
            month,
            day,
            year,
            time,
            display,
        }
    }

    /// Every field reads TBD, except the year which may still come from the end date
    fn tbd(event: &Event, time: String) -> EventDate {
        let year: String = event.date_end.as_deref().unwrap_or("").chars().take(4).collect();
        let year = if year.is_empty() { TBD.to_string() } else { year };

        EventDate {
            weekday: TBD.to_string(),
            month: TBD.to_string(),
            day: TBD.to_string(),
            year,
            time,
            display: TBD.to_string(),
        }
    }
}
