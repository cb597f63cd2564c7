//! Post model and the paginated list envelope.
//!
//! Only `authorId` and `createdAt` matter for ordering. Everything
//! else on a post is kept verbatim so it can be handed back to the UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FeedError, FeedResult};

/// The fields ranking needs from a post.
pub trait FeedItem {
    fn author_id(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub content: PostContent,
    /// Remaining payload, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeedItem for Post {
    fn author_id(&self) -> &str {
        &self.author_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Post body in its single internal shape.
///
/// The backend sends either a bare string or `{ text, media }`; both
/// (and a missing or null body) normalize here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawContent")]
pub struct PostContent {
    pub text: String,
    pub media: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawContent {
    Missing,
    Text(String),
    Rich {
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        media: Option<Vec<Value>>,
    },
}

impl From<RawContent> for PostContent {
    fn from(raw: RawContent) -> Self {
        match raw {
            RawContent::Missing => PostContent::default(),
            RawContent::Text(text) => PostContent {
                text,
                media: Vec::new(),
            },
            RawContent::Rich { text, media } => PostContent {
                text: text.unwrap_or_default(),
                media: media.unwrap_or_default(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: u32,
    pub total: u32,
}

impl Pagination {
    pub fn has_more(&self) -> bool {
        self.current < self.total
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedData {
    pub posts: Vec<Post>,
    pub pagination: Pagination,
}

/// Response body of the paginated post list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<FeedData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FeedPage {
    pub fn from_json(json: &str) -> FeedResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unwrap the payload of a successful response.
    pub fn into_data(self) -> FeedResult<FeedData> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(FeedError::Unsuccessful("response has no data".to_string())),
            (false, _) => Err(FeedError::Unsuccessful(
                self.message.unwrap_or_else(|| "no message".to_string()),
            )),
        }
    }
}
