//! Codec for review tags.
//!
//! On the wire `tags` is a list of strings (older clients send a single
//! scalar string); at rest it is one comma-joined column. Tag labels must
//! not contain commas.

use serde::Deserialize;

/// Wire form of the `tags` field: a list or a single scalar string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagsField {
    List(Vec<String>),
    Single(String),
}

impl TagsField {
    /// Normalize to the comma-joined storage form.
    pub fn join(&self) -> String {
        match self {
            TagsField::List(tags) => tags.join(","),
            TagsField::Single(tag) => tag.clone(),
        }
    }
}

/// Encode a tag list into the comma-joined storage form.
pub fn join_tags(tags: &[&str]) -> String {
    tags.join(",")
}

/// Decode a comma-joined tag column back into a list.
///
/// Entries are trimmed; empty and whitespace-only entries are dropped.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
