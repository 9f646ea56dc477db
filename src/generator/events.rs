use std::path::PathBuf;

use anyhow::{Context, Result};
use spdlog::{debug, info};

use crate::config::Config;
use crate::event::load_events;
use crate::generator::write_page;
use crate::template::PageTemplate;
use crate::view::events_page_renderer::EventsPageRenderer;

pub const PAGE_FILE_NAME: &str = "index.html";

pub fn render_events_page(config: &Config) -> Result<String> {
    let paths = &config.paths;
    let events = load_events(&paths.events_data())?;
    debug!("Loaded {} events from {}", events.len(), paths.events_data().display());

    let template = PageTemplate::from_file(&paths.events_listing_template())?;
    let renderer = EventsPageRenderer::new(template, config.site.origin())?;
    Ok(renderer.render(&events))
}

pub fn generate_events(config: &Config) -> Result<PathBuf> {
    let html = render_events_page(config)?;
    let path = config.paths.events_output_dir().join(PAGE_FILE_NAME);

    write_page(&path, &html)
        .with_context(|| format!("Error generating events page {}", path.display()))?;
    info!("Rendered {}", config.paths.display(&path).display());

    Ok(path)
}
