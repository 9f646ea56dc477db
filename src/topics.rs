use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::text_utils::escape_html;

pub const FALLBACK_TOPIC_CHIP: &str = "Primeasure Insights";

lazy_static! {
    static ref TOPIC_LABELS: HashMap<&'static str, &'static str> = HashMap::from([
        ("test-measurement", "Test & Measurement"),
        ("memory", "Memory"),
        ("broadcast", "Broadcast"),
        ("automotive", "Automotive"),
    ]);
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Human label of a topic tag: known tags map to a fixed label,
/// anything else is title-cased word by word.
pub fn topic_label(topic: &str) -> String {
    let normalized = topic.to_lowercase();
    if let Some(label) = TOPIC_LABELS.get(normalized.as_str()) {
        return label.to_string();
    }

    let words: Vec<String> = normalized.replace('-', " ")
        .split_whitespace()
        .map(capitalize)
        .collect();

    if words.is_empty() {
        "Insights".to_string()
    } else {
        words.join(" ")
    }
}

/// Chips shown on an article page
pub fn article_topic_chips(topics: &[String]) -> String {
    if topics.is_empty() {
        return format!(r#"<span class="article-topic-chip">{}</span>"#, escape_html(FALLBACK_TOPIC_CHIP));
    }

    topics.iter()
        .map(|topic| format!(r#"<span class="article-topic-chip">{}</span>"#, escape_html(&topic_label(topic))))
        .collect()
}

/// Chips shown on a listing card, they carry the raw tag for client-side filtering
pub fn card_topic_chips(topics: &[String]) -> String {
    topics.iter()
        .map(|topic| format!(r#"<span class="topic-chip" data-topic="{}">{}</span>"#,
                             escape_html(topic), escape_html(&topic_label(topic))))
        .collect()
}
