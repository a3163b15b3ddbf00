//! Display and input helpers shared by the CLI and the TUI.

use serde::{Deserialize, Serialize};

/// Returns the first `max_chars` characters followed by `...`.
///
/// The ellipsis is always appended, matching how post cards render
/// previews.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Ordered tag list that ignores blanks and duplicates on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a trimmed tag. Returns false if it was blank or already present.
    pub fn add(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.0.iter().any(|t| t == tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> FromIterator<&'a str> for TagList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tags = Self::new();
        for tag in iter {
            tags.add(tag);
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_by_chars() {
        assert_eq!(preview("héllo world", 5), "héllo...");
    }

    #[test]
    fn test_preview_short_text_still_gets_ellipsis() {
        assert_eq!(preview("hi", 150), "hi...");
    }

    #[test]
    fn test_tag_list_trims_and_dedupes() {
        let mut tags = TagList::new();
        assert!(tags.add("  rust "));
        assert!(!tags.add("rust"));
        assert!(!tags.add("   "));
        assert!(tags.add("tui"));
        assert_eq!(tags.as_slice(), ["rust", "tui"]);
    }

    #[test]
    fn test_tag_list_remove_and_pop() {
        let mut tags: TagList = ["a", "b", "c"].into_iter().collect();
        assert!(tags.remove("b"));
        assert!(!tags.remove("z"));
        assert_eq!(tags.pop().as_deref(), Some("c"));
        assert_eq!(tags.into_vec(), vec!["a"]);
    }
}
