use std::fs;
use std::io;
use std::path::Path;

use sitegen::config::{Config, Paths};
use sitegen::generator::blog::generate_blog;
use sitegen::generator::events::generate_events;

const ARTICLE_TEMPLATE: &str = include_str!("../res/site/templates/blog/template.html");
const BLOG_LISTING_TEMPLATE: &str = include_str!("../res/site/templates/blog/index.template.html");
const EVENTS_TEMPLATE: &str = include_str!("../res/site/templates/events/index.template.html");
const SAMPLE_EVENTS: &str = include_str!("../res/site/data/events.json");

const BLOG_DATA: &str = r#"{
  "posts": [
    {
      "slug": "first-steps",
      "title": "First Steps",
      "publishDate": "2023-06-01",
      "excerpt": "Where it all started.",
      "heroImage": "",
      "readingTime": 3,
      "topics": []
    },
    {
      "slug": "signal-integrity",
      "title": "Signal Integrity & You",
      "publishDate": "2024-03-05",
      "author": "Anita Rao",
      "excerpt": "Eye diagrams explained.",
      "metaDescription": "Eye diagrams, jitter and what they tell you",
      "heroImage": "../images/blog/eye.png",
      "heroAlt": "Eye diagram",
      "readingTime": 7,
      "topics": ["test-measurement", "cool-stuff"]
    }
  ]
}"#;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn config_for(root: &Path) -> Config {
    Config {
        paths: Paths {
            root: root.to_path_buf(),
            ..Paths::default()
        },
        ..Config::default()
    }
}

fn blog_site(root: &Path) {
    write(root, "data/blog.json", BLOG_DATA);
    write(root, "templates/blog/template.html", ARTICLE_TEMPLATE);
    write(root, "templates/blog/index.template.html", BLOG_LISTING_TEMPLATE);
    write(root, "blog/first-steps/content.html", "\n<p>Hello</p>\n");
    write(root, "blog/signal-integrity/content.html", "<h2>Eyes</h2>\n<p>Open wide.</p>\n");
}

fn events_site(root: &Path, events_json: &str) {
    write(root, "data/events.json", events_json);
    write(root, "templates/events/index.template.html", EVENTS_TEMPLATE);
}

#[test]
fn test_generate_blog() {
    let dir = tempfile::tempdir().unwrap();
    blog_site(dir.path());

    let written = generate_blog(&config_for(dir.path())).unwrap();
    assert_eq!(written, vec![
        dir.path().join("blog/signal-integrity/index.html"),
        dir.path().join("blog/first-steps/index.html"),
        dir.path().join("blog/index.html"),
    ]);

    let article = fs::read_to_string(dir.path().join("blog/signal-integrity/index.html")).unwrap();
    assert!(article.contains("<title>Signal Integrity &amp; You | Primeasure Blog</title>"));
    assert!(article.contains(r#"<meta name="description" content="Eye diagrams, jitter and what they tell you">"#));
    assert!(article.contains(r#"<link rel="canonical" href="https://primeasure.com/blog/signal-integrity">"#));
    assert!(article.contains(r#"<meta property="og:image" content="https://primeasure.com/images/blog/eye.png">"#));
    assert!(article.contains(r#"<img class="article-hero" src="../../images/blog/eye.png" alt="Eye diagram">"#));
    assert!(article.contains(r#"<time datetime="2024-03-05">5 March 2024</time>"#));
    assert!(article.contains("<span>7 min read</span>"));
    assert!(article.contains(r#"<span class="article-topic-chip">Test &amp; Measurement</span><span class="article-topic-chip">Cool Stuff</span>"#));
    assert!(article.contains("<h2>Eyes</h2>\n<p>Open wide.</p>\n        </div>"));
    assert!(article.contains(r#"      "@type": "BlogPosting","#));
    assert!(article.contains(r#"      "headline": "Signal Integrity & You","#));

    let first = fs::read_to_string(dir.path().join("blog/first-steps/index.html")).unwrap();
    assert!(first.contains(r#"<meta name="author" content="Primeasure Team">"#));
    assert!(first.contains(r#"src="../../images/blog/hero.png" alt="First Steps""#));
    assert!(first.contains(r#"<span class="article-topic-chip">Primeasure Insights</span>"#));

    let listing = fs::read_to_string(dir.path().join("blog/index.html")).unwrap();
    let newest = listing.find(r#"<a href="signal-integrity">"#).unwrap();
    let oldest = listing.find(r#"<a href="first-steps">"#).unwrap();
    assert!(newest < oldest);
    assert!(listing.contains(r#"      "posts": ["#));
    assert!(!listing.contains("{{"));
}

#[test]
fn test_generate_blog_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    blog_site(dir.path());
    let config = config_for(dir.path());

    let written = generate_blog(&config).unwrap();
    let first_run: Vec<Vec<u8>> = written.iter().map(|p| fs::read(p).unwrap()).collect();

    let written = generate_blog(&config).unwrap();
    let second_run: Vec<Vec<u8>> = written.iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first_run, second_run);
}

#[test]
fn test_missing_content_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    blog_site(dir.path());
    fs::remove_file(dir.path().join("blog/first-steps/content.html")).unwrap();

    let err = generate_blog(&config_for(dir.path())).unwrap_err();
    let io_err = err.downcast_ref::<io::Error>().unwrap();
    assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    assert!(io_err.to_string().contains("first-steps"));

    // The newer post renders first, yet nothing reached the disk
    assert!(!dir.path().join("blog/signal-integrity/index.html").exists());
    assert!(!dir.path().join("blog/index.html").exists());
}

#[test]
fn test_missing_template_fails() {
    let dir = tempfile::tempdir().unwrap();
    blog_site(dir.path());
    fs::remove_file(dir.path().join("templates/blog/index.template.html")).unwrap();

    assert!(generate_blog(&config_for(dir.path())).is_err());
    assert!(!dir.path().join("blog/first-steps/index.html").exists());
}

#[test]
fn test_generate_events() {
    let dir = tempfile::tempdir().unwrap();
    events_site(dir.path(), SAMPLE_EVENTS);

    let path = generate_events(&config_for(dir.path())).unwrap();
    assert_eq!(path, dir.path().join("events/index.html"));

    let page = fs::read_to_string(&path).unwrap();
    assert!(page.contains("<title>Broadcast India 2025 | Primeasure Events</title>"));
    assert!(page.contains(r#"<meta name="description" content="Next up: Broadcast India 2025 in Mumbai on OCT 8-10, 2025. Book a meeting for live demos.">"#));
    assert!(page.contains(r#"<meta property="og:title" content="Primeasure at Broadcast India 2025">"#));
    assert!(page.contains(r#"<meta property="og:image" content="https://primeasure.com/images/events/bi2025.png">"#));
    assert!(page.contains(r#"<a href="../register#broadcast-india-2025" class="register-button">Register Now</a>"#));
    assert!(page.contains(r#"<section class="events-section events-section--completed">"#));
    assert!(page.contains(r#"<span class="event-status-tag event-status-tag--completed">Event Completed</span>"#));
    assert!(page.contains(r#"<a href="https://www.youtube.com/watch?v=example" target="_blank" rel="noopener noreferrer" class="info-button recap-button">View Recap</a>"#));
    assert!(page.contains(r#"      "events": ["#));
    assert!(!page.contains("{{"));
}

#[test]
fn test_generate_events_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    events_site(dir.path(), SAMPLE_EVENTS);
    let config = config_for(dir.path());

    let first = fs::read(generate_events(&config).unwrap()).unwrap();
    let second = fs::read(generate_events(&config).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_events_without_list() {
    let dir = tempfile::tempdir().unwrap();
    events_site(dir.path(), "{}");

    let path = generate_events(&config_for(dir.path())).unwrap();
    let page = fs::read_to_string(path).unwrap();
    assert!(page.contains(r#"<div class="events-empty-state">New events will be announced soon. Stay tuned!</div>"#));
    assert!(page.contains("<title>Events - Primeasure Technology</title>"));
    assert!(!page.contains("events-section--completed"));
    assert!(page.contains("      \"events\": []"));
}

#[test]
fn test_malformed_events_file() {
    let dir = tempfile::tempdir().unwrap();
    events_site(dir.path(), "{\"events\": [");

    let err = generate_events(&config_for(dir.path())).unwrap_err();
    let io_err = err.downcast_ref::<io::Error>().unwrap();
    assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    assert!(!dir.path().join("events/index.html").exists());
}
