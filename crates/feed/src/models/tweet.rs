use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedTweet {
    pub username: String,
    pub tweet: Option<String>,
    #[serde(rename = "dateTime")]
    pub date_time: Option<String>,
}

/// A tweet with its engagement counts. Text and timestamp columns are
/// nullable and render as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetSummary {
    pub tweet: Option<String>,
    pub likes: i64,
    pub replies: i64,
    #[serde(rename = "dateTime")]
    pub date_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyView {
    pub name: Option<String>,
    pub reply: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LikesResponse {
    pub likes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RepliesResponse {
    pub replies: Vec<ReplyView>,
}

/// A missing `tweet` field is stored as NULL.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateTweetRequest {
    #[serde(default)]
    pub tweet: Option<String>,
}
