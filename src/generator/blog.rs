use std::path::PathBuf;

use anyhow::{Context, Result};
use spdlog::{debug, info};

use crate::config::Config;
use crate::content::content_file::ContentFile;
use crate::generator::write_page;
use crate::post::{load_posts, Post};
use crate::record::Record;
use crate::template::PageTemplate;
use crate::view::article_renderer::ArticleRenderer;
use crate::view::blog_list_renderer::BlogListRenderer;

pub const PAGE_FILE_NAME: &str = "index.html";

pub struct RenderedPage {
    pub path: PathBuf,
    pub html: String,
}

/// Renders every article page in memory.
/// Fails on the first missing content file, so nothing is written for a broken data set.
pub fn render_articles(config: &Config, posts: &[Record<Post>]) -> Result<Vec<RenderedPage>> {
    let paths = &config.paths;
    let template = PageTemplate::from_file(&paths.article_template())?;
    let renderer = ArticleRenderer::new(template, config.site.origin());
    let blog_dir = paths.blog_output_dir();

    let mut pages = Vec::with_capacity(posts.len());
    for post in posts {
        let content = ContentFile::for_slug(&blog_dir, &post.data.slug)?;
        debug!("Rendering article {} from {}", content.slug, content.file_path.display());
        pages.push(RenderedPage {
            path: blog_dir.join(&post.data.slug).join(PAGE_FILE_NAME),
            html: renderer.render(&post.data, content.body()),
        });
    }

    Ok(pages)
}

pub fn render_listing(config: &Config, posts: &[Record<Post>]) -> Result<RenderedPage> {
    let paths = &config.paths;
    let template = PageTemplate::from_file(&paths.blog_listing_template())?;
    let renderer = BlogListRenderer::new(template)?;

    Ok(RenderedPage {
        path: paths.blog_output_dir().join(PAGE_FILE_NAME),
        html: renderer.render(posts),
    })
}

/// Article pages first, then the listing. Returns the written files.
pub fn generate_blog(config: &Config) -> Result<Vec<PathBuf>> {
    let posts = load_posts(&config.paths.blog_data())?;
    debug!("Loaded {} posts from {}", posts.len(), config.paths.blog_data().display());

    let mut pages = render_articles(config, &posts)?;
    pages.push(render_listing(config, &posts)?);

    let mut written = Vec::with_capacity(pages.len());
    for page in pages {
        write_page(&page.path, &page.html)
            .with_context(|| format!("Error generating blog page {}", page.path.display()))?;
        info!("Rendered {}", config.paths.display(&page.path).display());
        written.push(page.path);
    }

    Ok(written)
}
