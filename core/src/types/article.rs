use serde::{Deserialize, Serialize};

use super::common::ContentStatus;

/// A published (or draft) article as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub category_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    /// Tag names in display order.
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

/// Filters and pagination for `GET /articles`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleQuery {
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
    pub is_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recommend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl ArticleQuery {
    /// Query for a single page with no filters.
    pub fn page(current: u64, size: u64) -> Self {
        Self {
            current: Some(current),
            size: Some(size),
            ..Self::default()
        }
    }
}

/// Payload for creating or updating an article. Server-owned fields (id,
/// counters, timestamps) are absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSaveDto {
    pub title: String,
    pub content: String,
    pub summary: String,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_parses_server_json() {
        let article: Article = serde_json::from_str(
            r#"{
                "id": 7, "title": "Rust", "content": "body", "summary": "s",
                "categoryId": 2, "categoryName": "Tech", "tags": ["rust", "llm"],
                "status": "PUBLISHED", "viewCount": 10, "likeCount": 2, "commentCount": 0,
                "isTop": false, "isRecommend": true, "publishTime": "2024-05-01T10:00:00",
                "createTime": "2024-05-01T09:00:00", "updateTime": "2024-05-01T10:00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(article.id, 7);
        assert_eq!(article.tags, vec!["rust", "llm"]);
        assert_eq!(article.status, ContentStatus::Published);
        assert_eq!(article.cover_image, None);
        assert!(article.is_recommend);
    }

    #[test]
    fn save_dto_omits_absent_optionals() {
        let dto = ArticleSaveDto {
            title: "T".to_string(),
            content: "C".to_string(),
            category_id: 3,
            tags: vec!["a".to_string()],
            ..ArticleSaveDto::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["categoryId"], 3);
        assert_eq!(json["status"], "DRAFT");
        assert!(json.get("coverImage").is_none());
        assert!(json.get("isTop").is_none());
        assert!(json.get("id").is_none());
    }
}
