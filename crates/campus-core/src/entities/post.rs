//! Post entity - a feed entry, optionally scoped to a group

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Maximum number of tags derived from post content.
pub const MAX_POST_TAGS: usize = 5;

/// Post visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Friends,
}

impl Visibility {
    /// String form used in persisted records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Friends => "friends",
        }
    }

    /// Parse the persisted string form; unknown values fall back to `Public`.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "friends" => Self::Friends,
            _ => Self::Public,
        }
    }
}

/// Post entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: RecordId,
    pub author_id: RecordId,
    pub content: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub likes: i64,
    pub visibility: Visibility,
    pub group_id: Option<RecordId>,
    pub repost_of: Option<RecordId>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post; tags are derived from the content.
    pub fn new(id: RecordId, author_id: RecordId, content: String) -> Self {
        let tags = Self::extract_tags(&content);
        Self {
            id,
            author_id,
            content,
            images: Vec::new(),
            tags,
            likes: 0,
            visibility: Visibility::Public,
            group_id: None,
            repost_of: None,
            created_at: Utc::now(),
        }
    }

    /// Collect `#tag` tokens from content, capped at [`MAX_POST_TAGS`].
    ///
    /// A tag runs from `#` to the next whitespace or `#`. Duplicate tokens
    /// are kept, matching how tags are counted downstream.
    #[must_use]
    pub fn extract_tags(content: &str) -> Vec<String> {
        let mut tags = Vec::new();
        let mut rest = content;
        while let Some(start) = rest.find('#') {
            let after = &rest[start + 1..];
            let end = after
                .find(|c: char| c.is_whitespace() || c == '#')
                .unwrap_or(after.len());
            if end > 0 {
                tags.push(format!("#{}", &after[..end]));
                if tags.len() == MAX_POST_TAGS {
                    break;
                }
            }
            rest = &after[end..];
        }
        tags
    }

    /// Replace the content and re-derive tags from it.
    pub fn set_content(&mut self, content: String) {
        self.tags = Self::extract_tags(&content);
        self.content = content;
    }

    /// Apply a like delta; the count never drops below zero.
    pub fn apply_like(&mut self, delta: i64) {
        self.likes = (self.likes + delta).max(0);
    }

    /// Check whether this post was published into a group.
    #[inline]
    pub fn in_group(&self) -> bool {
        self.group_id.is_some()
    }

    /// Check whether this post is a repost of another post.
    #[inline]
    pub fn is_repost(&self) -> bool {
        self.repost_of.is_some()
    }

    /// Check whether the given user authored this post.
    #[inline]
    pub fn is_author(&self, user_id: &RecordId) -> bool {
        &self.author_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tags() {
        let tags = Post::extract_tags("studying for finals #exams #library tonight");
        assert_eq!(tags, vec!["#exams", "#library"]);
    }

    #[test]
    fn test_extract_tags_adjacent_hashes() {
        let tags = Post::extract_tags("#one#two #three");
        assert_eq!(tags, vec!["#one", "#two", "#three"]);
    }

    #[test]
    fn test_extract_tags_cap() {
        let tags = Post::extract_tags("#a #b #c #d #e #f #g");
        assert_eq!(tags.len(), MAX_POST_TAGS);
        assert_eq!(tags.last().map(String::as_str), Some("#e"));
    }

    #[test]
    fn test_extract_tags_ignores_bare_hash() {
        assert!(Post::extract_tags("no tags here # or here").is_empty());
    }

    #[test]
    fn test_set_content_rederives_tags() {
        let mut post = Post::new(
            RecordId::new("p_1"),
            RecordId::new("u_1"),
            "#old content".to_string(),
        );
        assert_eq!(post.tags, vec!["#old"]);

        post.set_content("now about #running".to_string());
        assert_eq!(post.tags, vec!["#running"]);
    }

    #[test]
    fn test_apply_like_never_negative() {
        let mut post = Post::new(RecordId::new("p_1"), RecordId::new("u_1"), String::new());
        post.apply_like(1);
        post.apply_like(1);
        assert_eq!(post.likes, 2);

        post.apply_like(-5);
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn test_visibility_parsing() {
        assert_eq!(Visibility::from_str_lossy("friends"), Visibility::Friends);
        assert_eq!(Visibility::from_str_lossy("public"), Visibility::Public);
        assert_eq!(Visibility::from_str_lossy("???"), Visibility::Public);
    }
}
