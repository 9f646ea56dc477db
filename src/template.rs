use std::path::Path;
use std::{fs, io};

use spdlog::warn;

/// Ordered placeholder values. Each entry is substituted with a global literal replace, in insertion order.
#[derive(Default, Debug)]
pub struct Replacements {
    entries: Vec<(&'static str, String)>,
}

impl Replacements {
    pub fn new() -> Self {
        Replacements { entries: vec![] }
    }

    pub fn add(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        self.entries.push((name, value.into()));
        self
    }
}

fn token(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}

/// A page template holding `{{NAME}}` tokens
pub struct PageTemplate {
    source: String,
}

impl PageTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        PageTemplate {
            source: source.into(),
        }
    }

    pub fn from_file(path: &Path) -> io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(source) => Ok(Self::new(source)),
            Err(e) => Err(io::Error::new(e.kind(), format!("Error reading template {}: {}", path.display(), e))),
        }
    }

    /// Substitutes every entry. Tokens without a value are left verbatim.
    ///
    /// Values are not protected from later entries: a value carrying another entry's token
    /// gets that token replaced too. Such values are reported with a warning.
    pub fn render(&self, replacements: &Replacements) -> String {
        Self::warn_on_nested_tokens(replacements);

        let mut html = self.source.clone();
        for (name, value) in replacements.entries.iter() {
            html = html.replace(&token(name), value);
        }
        html
    }

    fn warn_on_nested_tokens(replacements: &Replacements) {
        for (pos, (name, value)) in replacements.entries.iter().enumerate() {
            let later = &replacements.entries[pos + 1..];
            for (other, _) in later {
                let other_token = token(other);
                if value.contains(&other_token) {
                    warn!("Value of {} contains the placeholder {} and will be substituted again", name, other_token);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_occurrence() {
        let template = PageTemplate::new("<title>{{TITLE}}</title><h1>{{TITLE}}</h1>");
        let mut replacements = Replacements::new();
        replacements.add("TITLE", "Hello");
        assert_eq!(template.render(&replacements), "<title>Hello</title><h1>Hello</h1>");
    }

    #[test]
    fn test_unmatched_placeholder_left_verbatim() {
        let template = PageTemplate::new("{{TITLE}} {{UNKNOWN}} {{ TITLE }}");
        let mut replacements = Replacements::new();
        replacements.add("TITLE", "x").add("NOT_IN_TEMPLATE", "y");
        assert_eq!(template.render(&replacements), "x {{UNKNOWN}} {{ TITLE }}");
    }

    #[test]
    fn test_no_escaping() {
        let template = PageTemplate::new("<body>{{BODY}}</body>");
        let mut replacements = Replacements::new();
        replacements.add("BODY", "<p>a & b</p>");
        assert_eq!(template.render(&replacements), "<body><p>a & b</p></body>");
    }

    #[test]
    fn test_later_entries_reprocess_earlier_values() {
        let template = PageTemplate::new("{{BODY}}|{{TITLE}}");
        let mut replacements = Replacements::new();
        replacements.add("BODY", "see {{TITLE}}").add("TITLE", "T");
        assert_eq!(template.render(&replacements), "see T|T");

        // An earlier entry is never reprocessed by the value of a later one
        let mut replacements = Replacements::new();
        replacements.add("TITLE", "T").add("BODY", "see {{TITLE}}");
        assert_eq!(template.render(&replacements), "see {{TITLE}}|T");
    }

    #[test]
    fn test_missing_template_file() {
        let err = PageTemplate::from_file(Path::new("/definitely/not/here.html")).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
