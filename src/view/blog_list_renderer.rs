use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::post::Post;
use crate::record::{embed_records, Record};
use crate::template::{PageTemplate, Replacements};
use crate::text_utils::{escape_html, format_display_date};
use crate::topics::card_topic_chips;

// Values are escaped before rendering, hence the triple mustaches
const BLOG_CARD_TEMPLATE: &str = r#"
        <article class="blog-card">
            <a href="{{{slug}}}" class="blog-card__image-link">
                <img src="{{{hero_image}}}" alt="{{{hero_alt}}}">
            </a>
            <div class="blog-card__content">
                <div class="blog-card__meta">
                    <span class="blog-card__date">{{{date}}}</span>
                    <span class="blog-card__reading-time">{{{reading_time}}} min read</span>
                </div>
                <h3 class="blog-card__title"><a href="{{{slug}}}">{{{title}}}</a></h3>
                <p class="blog-card__excerpt">{{{excerpt}}}</p>
                <div class="blog-card__topics">
                    {{{topics}}}
                </div>
                <a href="{{{slug}}}" class="blog-card__cta">Read Article <i class="fas fa-arrow-right"></i></a>
            </div>
        </article>
    "#;

#[derive(ramhorns::Content)]
struct BlogCard {
    slug: String,
    hero_image: String,
    hero_alt: String,
    date: String,
    reading_time: String,
    title: String,
    excerpt: String,
    topics: String,
}

impl BlogCard {
    fn from(post: &Post) -> BlogCard {
        BlogCard {
            slug: escape_html(&post.slug),
            hero_image: escape_html(&post.hero_image),
            hero_alt: escape_html(post.hero_alt()),
            date: escape_html(&format_display_date(&post.publish_date)),
            reading_time: escape_html(&post.reading_time()),
            title: escape_html(&post.title),
            excerpt: escape_html(&post.excerpt),
            topics: card_topic_chips(&post.topics),
        }
    }
}

pub struct BlogListRenderer {
    pub card_template: Template<'static>,
    pub template: PageTemplate,
}

impl BlogListRenderer {
    pub fn new(template: PageTemplate) -> io::Result<BlogListRenderer> {
        let card_template = match Template::new(BLOG_CARD_TEMPLATE) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing blog card template: {}", e)));
            }
        };

        Ok(BlogListRenderer {
            card_template,
            template,
        })
    }

    pub fn render_card(&self, post: &Post) -> String {
        self.card_template.render(&BlogCard::from(post))
    }

    pub fn render_cards(&self, posts: &[Record<Post>]) -> String {
        posts.iter()
            .map(|post| self.render_card(&post.data))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Listing page with one card per post and the posts as JSON for the client-side filters
    pub fn render(&self, posts: &[Record<Post>]) -> String {
        let mut replacements = Replacements::new();
        replacements
            .add("BLOG_CARDS", self.render_cards(posts))
            .add("BLOG_JSON", embed_records("posts", posts));

        self.template.render(&replacements)
    }
}

#[cfg(test)]
mod tests {
    use crate::post::sort_posts;
    use crate::record::parse_records;
    use crate::test_data::BLOG_DATA;

    use super::*;

    fn sorted_posts() -> Vec<Record<Post>> {
        let mut posts = parse_records::<Post>(BLOG_DATA, "posts").unwrap().unwrap();
        sort_posts(&mut posts);
        posts
    }

    #[test]
    fn render_card() {
        let renderer = BlogListRenderer::new(PageTemplate::new("")).unwrap();
        let posts = sorted_posts();
        let card = renderer.render_card(&posts[2].data);
        assert!(card.contains(r#"<a href="oscilloscope-basics" class="blog-card__image-link">"#));
        assert!(card.contains(r#"<img src="../images/blog/scope.jpg" alt="Oscilloscope on a bench">"#));
        assert!(card.contains(r#"<span class="blog-card__date">2 November 2023</span>"#));
        assert!(card.contains(r#"<span class="blog-card__reading-time">6 min read</span>"#));
        assert!(card.contains(r#"<p class="blog-card__excerpt">Bandwidth, sample rate &amp; probes.</p>"#));
        assert!(card.contains(r#"<span class="topic-chip" data-topic="test-measurement">Test &amp; Measurement</span>"#));
    }

    #[test]
    fn render_card_escapes_title() {
        let renderer = BlogListRenderer::new(PageTemplate::new("")).unwrap();
        let posts = sorted_posts();
        let card = renderer.render_card(&posts[0].data);
        assert!(card.contains(r#"<a href="hbm-memory-testing">Testing HBM &lt;Memory&gt;</a>"#));
        assert!(!card.contains("<Memory>"));
    }

    #[test]
    fn render_listing() {
        let renderer = BlogListRenderer::new(PageTemplate::new("<main>{{BLOG_CARDS}}</main>\n<script>\n{{BLOG_JSON}}\n</script>")).unwrap();
        let posts = sorted_posts();
        let page = renderer.render(&posts);

        let hbm = page.find(r#"href="hbm-memory-testing""#).unwrap();
        let broadcast = page.find(r#"href="broadcast-ip-migration""#).unwrap();
        let scope = page.find(r#"href="oscilloscope-basics""#).unwrap();
        assert!(hbm < broadcast && broadcast < scope);

        assert_eq!(page.matches(r#"<article class="blog-card">"#).count(), 3);
        assert!(page.contains("<script>\n    {\n      \"posts\": [\n        {\n          \"slug\": \"hbm-memory-testing\","));
        assert!(!page.contains("{{"));
    }
}
