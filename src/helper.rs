//! Small parsing helpers shared by the CLI layer.

// Helper method for parsing comma-separated keyword lists
pub fn parse_keywords(keywords: Option<String>) -> Vec<String> {
    keywords
        .map(|k| {
            k.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
