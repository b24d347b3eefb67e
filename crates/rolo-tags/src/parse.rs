//! Tag input parsing.

/// Parse a single tag name, normalizing whitespace.
///
/// - Trims whitespace
/// - Rejects empty names
/// - Rejects names containing commas (the comma is the list separator)
///
/// # Examples
/// ```
/// use rolo_tags::parse_tag;
/// assert_eq!(parse_tag("  work  "), Some("work".to_string()));
/// assert_eq!(parse_tag("a,b"), None);
/// assert_eq!(parse_tag(""), None);
/// ```
pub fn parse_tag(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.contains(',') {
        return None;
    }
    Some(trimmed.to_string())
}

/// Split a comma-joined tag string into non-empty trimmed names.
///
/// Empty segments (from leading, trailing, or doubled commas) are dropped.
///
/// # Examples
/// ```
/// use rolo_tags::split_tag_list;
/// assert_eq!(split_tag_list("work,family"), vec!["work", "family"]);
/// assert_eq!(split_tag_list("a, ,b,"), vec!["a", "b"]);
/// assert!(split_tag_list("").is_empty());
/// ```
pub fn split_tag_list(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Join tag names into the wire form (`"a,b,c"`).
pub fn join_tag_list<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Format a comma-joined tag string for display (`"a, b, c"`).
pub fn display_tag_list(tags: &str) -> String {
    split_tag_list(tags).join(", ")
}
