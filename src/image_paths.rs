/// How the page-relative form of an image path is built
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RelativeForm {
    /// Cleaned site path appended to a prefix matching the page's directory depth
    Rebase(&'static str),
    /// Author's path kept untouched, the prefix only applies to the default image
    Verbatim(&'static str),
}

/// Per-pipeline fallback image and relative form
#[derive(Clone, Copy, Debug)]
pub struct ImageDefaults {
    pub default_image: &'static str,
    pub relative: RelativeForm,
}

/// Blog articles live two levels below the site root: `blog/<slug>/index.html`
pub const BLOG_HERO: ImageDefaults = ImageDefaults {
    default_image: "images/blog/hero.png",
    relative: RelativeForm::Rebase("../../"),
};

/// The events listing lives at `events/index.html`
pub const EVENT_IMAGE: ImageDefaults = ImageDefaults {
    default_image: "images/events/bi2025.png",
    relative: RelativeForm::Verbatim("../"),
};

#[derive(Clone, Debug, PartialEq)]
pub struct ImagePaths {
    pub relative: String,
    pub absolute: String,
}

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Removes leading `../` segments, then any leading `.` or `/` characters
fn site_path(path: &str) -> &str {
    let mut trimmed = path;
    while let Some(rest) = trimmed.strip_prefix("../") {
        trimmed = rest;
    }
    trimmed.trim_start_matches(['.', '/'])
}

/// Resolves an image reference into a page-relative and a site-absolute URL.
/// `origin` must not end with `/`.
pub fn resolve_image_paths(path: &str, origin: &str, defaults: &ImageDefaults) -> ImagePaths {
    if path.is_empty() {
        let prefix = match defaults.relative {
            RelativeForm::Rebase(prefix) | RelativeForm::Verbatim(prefix) => prefix,
        };
        return ImagePaths {
            relative: format!("{}{}", prefix, defaults.default_image),
            absolute: format!("{}/{}", origin, defaults.default_image),
        };
    }

    if is_absolute_url(path) {
        return ImagePaths {
            relative: path.to_string(),
            absolute: path.to_string(),
        };
    }

    let cleaned = site_path(path);
    let relative = match defaults.relative {
        RelativeForm::Rebase(prefix) => format!("{}{}", prefix, cleaned),
        RelativeForm::Verbatim(_) => path.to_string(),
    };

    ImagePaths {
        relative,
        absolute: format!("{}/{}", origin, cleaned),
    }
}
