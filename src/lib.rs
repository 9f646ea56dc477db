pub mod config;
pub mod logger;
pub mod generator;
pub mod post;
pub mod event;
pub mod event_date;
pub mod record;
pub mod template;
pub mod image_paths;
pub mod topics;
pub mod text_utils;
mod content;
mod view;
mod test_data;
