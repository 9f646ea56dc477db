use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::event::{Event, EventStatus};
use crate::event_date::EventDate;
use crate::record::Record;
use crate::text_utils::escape_html;

// Values are escaped before rendering, hence the triple mustaches
const EVENT_CARD_TEMPLATE: &str = r#"
            <div class="event-card">
                <div class="event-date-badge">
                    <span class="weekday">{{{weekday}}}</span>
                    <span class="month">{{{month}}}</span>
                    <span class="day">{{{day}}}</span>
                    <span class="year">{{{year}}}</span>
                    <span class="time">{{{time}}}</span>
                </div>
                <div class="event-main">
                    <div class="event-main__header">
                        <h3>{{{title}}}</h3>
                        {{{status_tag}}}
                    </div>
                    <div class="event-location">
                        <i class="fas fa-map-marker-alt"></i>
                        <span>{{{location}}}</span>
                    </div>
                    <p>{{{description}}}</p>
                    <div class="event-actions">
                        {{{action}}}
                    </div>
                </div>
                <div class="event-logo">
                    <img src="{{{image}}}" alt="{{{image_alt}}}">
                </div>
            </div>
    "#;

#[derive(ramhorns::Content)]
struct EventCard {
    weekday: String,
    month: String,
    day: String,
    year: String,
    time: String,
    title: String,
    status_tag: String,
    location: String,
    description: String,
    action: String,
    image: String,
    image_alt: String,
}

impl EventCard {
    fn from(event: &Event) -> EventCard {
        let date = EventDate::from_event(event);
        EventCard {
            weekday: escape_html(&date.weekday),
            month: escape_html(&date.month),
            day: escape_html(&date.day),
            year: escape_html(&date.year),
            time: escape_html(&date.time),
            title: escape_html(event.title()),
            status_tag: status_tag(event),
            location: escape_html(event.location()),
            description: escape_html(&event.description),
            action: action_button(event),
            image: escape_html(event.image()),
            image_alt: escape_html(&event.image_alt),
        }
    }
}

pub fn status_tag(event: &Event) -> String {
    match event.status() {
        EventStatus::Completed => r#"<span class="event-status-tag event-status-tag--completed">Event Completed</span>"#.to_string(),
        EventStatus::Upcoming => String::new(),
    }
}

/// Call to action of a card.
/// Completed events link to their recap when there is one, upcoming events to registration or the organizer's page.
pub fn action_button(event: &Event) -> String {
    if event.is_completed() {
        return match event.recap_url() {
            Some(url) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="info-button recap-button">{}</a>"#,
                escape_html(url), escape_html(event.recap_label())),
            None => r#"<span class="event-status-note">Thanks for joining</span>"#.to_string(),
        };
    }

    if event.registration_enabled {
        return format!(r#"<a href="../register#{}" class="register-button">Register Now</a>"#, escape_html(event.slug()));
    }

    match event.external_url() {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="info-button">Learn More</a>"#,
            escape_html(url)),
        None => String::new(),
    }
}

pub struct EventCardRenderer {
    pub template: Template<'static>,
}

impl EventCardRenderer {
    pub fn new() -> io::Result<EventCardRenderer> {
        let template = match Template::new(EVENT_CARD_TEMPLATE) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing event card template: {}", e)));
            }
        };

        Ok(EventCardRenderer { template })
    }

    pub fn render(&self, event: &Event) -> String {
        self.template.render(&EventCard::from(event))
    }

    pub fn render_all(&self, events: &[Record<Event>]) -> String {
        events.iter()
            .map(|event| self.render(&event.data))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
