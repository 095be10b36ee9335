use serde::{Deserialize, Serialize};

/// Represents a single video in the catalog with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Video title (not guaranteed unique)
    pub title: String,

    /// Tags, in catalog order (may be empty)
    pub tags: Vec<String>,
}

impl Video {
    /// Create a new video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Display form used by every listing command: `Title (id) [tag1 tag2]`
    pub fn display_line(&self) -> String {
        format!("{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}
