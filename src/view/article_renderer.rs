use serde_json::{json, Value};

use crate::image_paths::{resolve_image_paths, BLOG_HERO};
use crate::post::Post;
use crate::template::{PageTemplate, Replacements};
use crate::text_utils::{escape_html, format_display_date, indent_json};
use crate::topics::article_topic_chips;

pub struct ArticleRenderer {
    pub template: PageTemplate,
    pub origin: String,
}

impl ArticleRenderer {
    pub fn new(template: PageTemplate, origin: &str) -> ArticleRenderer {
        ArticleRenderer {
            template,
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn canonical_url(&self, post: &Post) -> String {
        format!("{}/blog/{}", self.origin, post.slug)
    }

    /// JSON-LD `BlogPosting` describing the article
    pub fn structured_data(&self, post: &Post, hero_absolute: &str) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "BlogPosting",
            "headline": post.title,
            "description": post.meta_description(),
            "image": hero_absolute,
            "author": {"@type": "Organization", "name": post.author()},
            "publisher": {
                "@type": "Organization",
                "name": "Primeasure",
                "logo": {"@type": "ImageObject", "url": format!("{}/images/logo.png", self.origin)}
            },
            "datePublished": post.publish_date,
            "dateModified": post.publish_date,
            "mainEntityOfPage": self.canonical_url(post)
        })
    }

    pub fn replacements(&self, post: &Post, body: &str) -> Replacements {
        let hero = resolve_image_paths(&post.hero_image, &self.origin, &BLOG_HERO);
        let structured_data = self.structured_data(post, &hero.absolute);
        let structured_data = serde_json::to_string_pretty(&structured_data).unwrap_or_default();

        let mut replacements = Replacements::new();
        replacements
            .add("TITLE", escape_html(&post.title))
            .add("META_DESCRIPTION", escape_html(post.meta_description()))
            .add("CANONICAL_URL", escape_html(&self.canonical_url(post)))
            .add("HERO_IMAGE_RELATIVE", escape_html(&hero.relative))
            .add("HERO_IMAGE_ABSOLUTE", escape_html(&hero.absolute))
            .add("HERO_IMAGE_ALT", escape_html(post.hero_alt()))
            .add("AUTHOR", escape_html(post.author()))
            .add("PUBLISH_DATE", escape_html(&post.publish_date))
            .add("MODIFIED_DATE", escape_html(&post.publish_date))
            .add("DISPLAY_DATE", escape_html(&format_display_date(&post.publish_date)))
            .add("READING_TIME_LABEL", escape_html(&format!("{} min read", post.reading_time())))
            .add("TOPIC_CHIPS", article_topic_chips(&post.topics))
            .add("BODY", body)
            .add("STRUCTURED_DATA", indent_json(&structured_data, 4));
        replacements
    }

    /// `body` is trusted markup and goes in unescaped
    pub fn render(&self, post: &Post, body: &str) -> String {
        self.template.render(&self.replacements(post, body))
    }
}
