//! Discussion wire type for the forum listing.

use serde::{Deserialize, Serialize};

/// A forum discussion as stored by the backend.
///
/// `authorId` is camelCase on the wire; the listing endpoint filters on it
/// to exclude the current user's own discussions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Discussion {
    /// Server-assigned identifier; `None` until the discussion has been created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "authorId")]
    pub author_id: String,
    pub title: String,
    pub content: String,
}

impl Discussion {
    pub fn new(author_id: &str, title: &str, content: &str) -> Self {
        Discussion {
            id: None,
            author_id: author_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}
