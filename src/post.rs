use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::record::{read_records, Record};

pub const DEFAULT_AUTHOR: &str = "Primeasure Team";

/// Blog post entry of `blog.json`
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub publish_date: String,
    pub author: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    pub meta_description: Option<String>,
    #[serde(default)]
    pub hero_image: String,
    pub hero_alt: Option<String>,
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Post {
    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or(DEFAULT_AUTHOR)
    }

    /// An empty meta description falls back to the excerpt as well
    pub fn meta_description(&self) -> &str {
        match self.meta_description.as_deref() {
            Some(desc) if !desc.is_empty() => desc,
            _ => &self.excerpt,
        }
    }

    pub fn hero_alt(&self) -> &str {
        self.hero_alt.as_deref().unwrap_or(&self.title)
    }

    pub fn reading_time(&self) -> String {
        self.reading_time.map(|t| t.to_string()).unwrap_or_default()
    }
}

/// Newest first. Posts sharing a date keep their order in the file.
pub fn sort_posts(posts: &mut [Record<Post>]) {
    posts.sort_by(|a, b| b.data.publish_date.cmp(&a.data.publish_date));
}

pub fn load_posts(path: &Path) -> Result<Vec<Record<Post>>> {
    let mut posts = read_records::<Post>(path, "posts")?
        .with_context(|| format!("{} has no \"posts\" list", path.display()))?;

    sort_posts(&mut posts);
    Ok(posts)
}
