//! Keyword normalization and inference.
//!
//! Keywords are slugified individually, deduplicated, optionally sorted,
//! and joined with `_` into the keyword field of a note name. The reverse
//! direction is also supported: the keyword field of an existing name can
//! be split back into its keywords, which lets the store suggest keywords
//! already in use.

use crate::slug::slugify;

/// Normalizes raw keywords into the underscore-joined keyword field.
///
/// Duplicates are removed (first occurrence wins), each keyword is
/// slugified, keywords that slugify to nothing are dropped, and the
/// remainder is sorted lexicographically when `sort` is true (input order
/// is kept otherwise) and joined with `_`.
///
/// Returns an empty string when no keywords survive.
pub fn normalize_keywords(
    raw_keywords: &[String],
    allow_multi_word: bool,
    sort: bool,
    extra_punctuation: &str,
) -> String {
    let mut seen: Vec<&String> = Vec::with_capacity(raw_keywords.len());
    for keyword in raw_keywords {
        if !seen.contains(&keyword) {
            seen.push(keyword);
        }
    }

    let mut slugs: Vec<String> = seen
        .into_iter()
        .map(|k| slugify(k, allow_multi_word, extra_punctuation))
        .filter(|s| !s.is_empty())
        .collect();

    if sort {
        slugs.sort();
    }

    slugs.join("_")
}

/// Extracts the keywords encoded in an existing note name.
///
/// The keyword field is everything after the `__` marker: underscore
/// separated runs of alphanumerics and hyphens. Names without a marker, or
/// with nothing valid after it, yield no keywords.
pub fn keywords_from_file_name(name: &str) -> Vec<String> {
    let Some(idx) = name.find("__") else {
        return Vec::new();
    };

    name[idx + 2..]
        .split('_')
        .filter(|field| {
            !field.is_empty() && field.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
        .map(str::to_string)
        .collect()
}
