use std::path::Path;
use std::{fs, io};

pub mod blog;
pub mod events;

/// Writes a generated page, replacing any previous version
pub fn write_page(path: &Path, html: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::write(path, html) {
        Ok(()) => Ok(()),
        Err(e) => Err(io::Error::new(e.kind(), format!("Error writing {}: {}", path.display(), e))),
    }
}
