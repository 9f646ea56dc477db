use std::io;

use crate::event::{Event, EventSplit};
use crate::event_date::EventDate;
use crate::image_paths::{resolve_image_paths, EVENT_IMAGE};
use crate::record::{embed_records, Record};
use crate::template::{PageTemplate, Replacements};
use crate::view::event_card_renderer::EventCardRenderer;

const DEFAULT_PAGE_TITLE: &str = "Events - Primeasure Technology";
const DEFAULT_OG_TITLE: &str = "Industry Events & Exhibitions - Primeasure Technology";
const DEFAULT_DESCRIPTION: &str = "Join Primeasure at upcoming industry events to explore broadcast, \
test & measurement, and automation solutions tailored for India.";
const DEFAULT_EVENT_TITLE: &str = "Primeasure Event";
const DEFAULT_LOCATION: &str = "India";
const EMPTY_UPCOMING: &str = r#"<div class="events-empty-state">New events will be announced soon. Stay tuned!</div>"#;

/// Head metadata of the events page
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub page_title: String,
    pub description: String,
    pub og_title: String,
    pub og_image: String,
}

impl PageMeta {
    /// Built from the featured event, or from the latest completed one when nothing is scheduled
    pub fn from(split: &EventSplit, origin: &str) -> PageMeta {
        if let Some(featured) = split.featured() {
            let title = featured.title.as_deref().unwrap_or(DEFAULT_EVENT_TITLE);
            let location = featured.location.as_deref().unwrap_or(DEFAULT_LOCATION);
            let date = EventDate::from_event(featured);
            return PageMeta {
                page_title: format!("{} | Primeasure Events", title),
                description: format!("Next up: {} in {} on {}. Book a meeting for live demos.", title, location, date.display),
                og_title: format!("Primeasure at {}", featured.title.as_deref().unwrap_or("Upcoming Event")),
                og_image: resolve_image_paths(featured.image(), origin, &EVENT_IMAGE).absolute,
            };
        }

        if let Some(latest) = split.completed.first().map(|e| &e.data) {
            let title = latest.title.as_deref().unwrap_or(DEFAULT_EVENT_TITLE);
            let location = latest.location.as_deref().unwrap_or(DEFAULT_LOCATION);
            let date = EventDate::from_event(latest);
            return PageMeta {
                page_title: DEFAULT_PAGE_TITLE.to_string(),
                description: format!("Recently completed: {} in {} ({}). Contact us to access the recap.", title, location, date.display),
                og_title: DEFAULT_OG_TITLE.to_string(),
                og_image: resolve_image_paths(latest.image(), origin, &EVENT_IMAGE).absolute,
            };
        }

        PageMeta {
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            og_title: DEFAULT_OG_TITLE.to_string(),
            og_image: resolve_image_paths("", origin, &EVENT_IMAGE).absolute,
        }
    }
}

pub struct EventsPageRenderer {
    pub cards: EventCardRenderer,
    pub template: PageTemplate,
    pub origin: String,
}

impl EventsPageRenderer {
    pub fn new(template: PageTemplate, origin: &str) -> io::Result<EventsPageRenderer> {
        Ok(EventsPageRenderer {
            cards: EventCardRenderer::new()?,
            template,
            origin: origin.trim_end_matches('/').to_string(),
        })
    }

    pub fn upcoming_cards(&self, split: &EventSplit) -> String {
        let cards = self.cards.render_all(&split.upcoming);
        let cards = cards.trim();
        if cards.is_empty() {
            EMPTY_UPCOMING.to_string()
        } else {
            cards.to_string()
        }
    }

    /// Whole section markup, empty when no event is completed yet
    pub fn completed_section(&self, split: &EventSplit) -> String {
        if split.completed.is_empty() {
            return String::new();
        }

        let cards = self.cards.render_all(&split.completed);
        format!(r#"
<section class="events-section events-section--completed">
    <div class="container">
        <h2>Completed Events</h2>
        <div class="events-grid" id="events-completed">
{}
        </div>
    </div>
</section>
"#, cards)
    }

    /// `events` in file order, that is also the order of the embedded JSON
    pub fn render(&self, events: &[Record<Event>]) -> String {
        let split = EventSplit::from(events);
        let meta = PageMeta::from(&split, &self.origin);

        // Metadata goes in as authored, the template is expected to quote it
        let mut replacements = Replacements::new();
        replacements
            .add("UPCOMING_CARDS", self.upcoming_cards(&split))
            .add("COMPLETED_SECTION", self.completed_section(&split))
            .add("PAGE_TITLE", meta.page_title)
            .add("META_DESCRIPTION", meta.description)
            .add("OG_TITLE", meta.og_title)
            .add("OG_IMAGE", meta.og_image)
            .add("EVENTS_JSON", embed_records("events", events));

        self.template.render(&replacements)
    }
}
