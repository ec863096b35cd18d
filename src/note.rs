//! Note name construction.
//!
//! This module contains the top of the naming pipeline: a `NoteRequest`
//! collects the raw inputs for one note, and `file_name` runs the
//! slugification, keyword normalization and identifier formatting needed
//! to assemble the final directory name.

use chrono::{DateTime, Local};

use crate::{
    identifier::format_identifier,
    keywords::normalize_keywords,
    slug::slugify,
    Config,
};

/// Assembles a note name from its already-normalized parts.
///
/// The grammar is fixed: the identifier, then `--` plus the title slug when
/// one is present, then `__` plus the keyword field when one is present.
/// Inputs are trusted to be slugified already.
pub fn assemble_name(identifier: &str, title_slug: &str, keyword_field: &str) -> String {
    let mut name = identifier.to_string();
    if !title_slug.is_empty() {
        name.push_str("--");
        name.push_str(title_slug);
    }
    if !keyword_field.is_empty() {
        name.push_str("__");
        name.push_str(keyword_field);
    }
    name
}

/// The raw inputs for one note, assembled by the caller.
#[derive(Debug, Clone)]
pub struct NoteRequest {
    /// Raw note title, possibly empty
    pub title: String,
    /// Raw keywords, in the order the caller supplied them
    pub keywords: Vec<String>,
    /// Creation timestamp for the identifier
    pub timestamp: DateTime<Local>,
}

impl NoteRequest {
    /// Creates an empty request for the given timestamp.
    pub fn new(timestamp: DateTime<Local>) -> Self {
        NoteRequest {
            title: String::new(),
            keywords: Vec::new(),
            timestamp,
        }
    }

    /// Sets the raw title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the raw keywords.
    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Runs the naming pipeline and returns the directory name.
    pub fn file_name(&self, config: &Config) -> String {
        let identifier = format_identifier(&self.timestamp);
        let title_slug = slugify(&self.title, true, &config.extra_punctuation);
        let keyword_field = normalize_keywords(
            &self.keywords,
            config.allow_multiword_keywords,
            config.sort_keywords,
            &config.extra_punctuation,
        );
        assemble_name(&identifier, &title_slug, &keyword_field)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn request() -> NoteRequest {
        NoteRequest::new(Local.with_ymd_and_hms(2022, 6, 16, 14, 30, 0).unwrap())
    }

    #[test]
    fn assembles_title_and_keywords() {
        let name = request()
            .title("My Cool Idea!")
            .keywords(vec!["3D Models".into(), "wip".into()])
            .file_name(&Config::default());
        assert_eq!(name, "20220616T143000--my-cool-idea__3d-models_wip");
    }

    #[test]
    fn bare_identifier_when_title_and_keywords_are_empty() {
        assert_eq!(request().file_name(&Config::default()), "20220616T143000");
    }

    #[test]
    fn keywords_without_title_skip_the_title_separator() {
        let name = request()
            .keywords(vec!["rust".into()])
            .file_name(&Config::default());
        assert_eq!(name, "20220616T143000__rust");
    }

    #[test]
    fn title_without_keywords_skips_the_keyword_separator() {
        let name = request().title("Hello").file_name(&Config::default());
        assert_eq!(name, "20220616T143000--hello");
    }

    #[test]
    fn single_word_keyword_config_removes_keyword_hyphens() {
        let config = Config {
            allow_multiword_keywords: false,
            ..Config::default()
        };
        let name = request()
            .keywords(vec!["3D Models".into()])
            .file_name(&config);
        assert_eq!(name, "20220616T143000__3dmodels");
    }

    #[test]
    fn assemble_name_is_pure_concatenation() {
        assert_eq!(assemble_name("id", "", ""), "id");
        assert_eq!(assemble_name("id", "t", ""), "id--t");
        assert_eq!(assemble_name("id", "", "k"), "id__k");
        assert_eq!(assemble_name("id", "t", "a_b"), "id--t__a_b");
    }
}
