use serde::{Deserialize, Serialize};

use super::common::ContentStatus;

/// An AI-news item: an article-shaped record that also names its source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AiNews {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: String,
    pub source_url: String,
    pub source_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub category_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: ContentStatus,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub is_top: bool,
    pub is_recommend: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<String>,
    pub create_time: String,
    pub update_time: String,
}

/// Filters and pagination for `GET /ai-news`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AiNewsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recommend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl AiNewsQuery {
    pub fn page(current: u64, size: u64) -> Self {
        Self {
            current: Some(current),
            size: Some(size),
            ..Self::default()
        }
    }
}

/// Payload for creating or updating an AI-news item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AiNewsSaveDto {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub source_url: String,
    pub source_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub category_id: u64,
    pub tags: Vec<String>,
    pub status: ContentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recommend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<String>,
}
