pub mod article_renderer;
pub mod blog_list_renderer;
pub mod event_card_renderer;
pub mod events_page_renderer;
