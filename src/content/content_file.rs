use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONTENT_FILE_NAME: &str = "content.html";

/// Hand-written article body living next to the generated page: `<blog_dir>/<slug>/content.html`
pub struct ContentFile {
    pub slug: String,
    pub file_path: PathBuf,
    pub raw_content: String,
}

impl ContentFile {
    pub fn path_for(blog_dir: &Path, slug: &str) -> PathBuf {
        blog_dir.join(slug).join(CONTENT_FILE_NAME)
    }

    pub fn for_slug(blog_dir: &Path, slug: &str) -> io::Result<ContentFile> {
        let file_path = Self::path_for(blog_dir, slug);
        if !file_path.is_file() {
            return Err(io::Error::new(ErrorKind::NotFound, format!("Missing content for {}: {}", slug, file_path.display())));
        }

        let raw_content = fs::read_to_string(&file_path)?;

        Ok(ContentFile {
            slug: slug.to_string(),
            file_path,
            raw_content,
        })
    }

    /// Article body as inserted in the page, surrounding blank space removed
    pub fn body(&self) -> &str {
        self.raw_content.trim()
    }
}
