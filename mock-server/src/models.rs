//! Wire types as the server sees them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryType {
    #[default]
    Article,
    AiNews,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TagType {
    Article,
    AiNews,
    #[default]
    Common,
}

/// An article or AI-news item. AI-news rows carry the two source fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub category_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
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

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInput {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: String,
    pub source_url: Option<String>,
    pub source_name: Option<String>,
    pub cover_image: Option<String>,
    pub category_id: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: ContentStatus,
    pub is_top: Option<bool>,
    pub is_recommend: Option<bool>,
    pub publish_time: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    pub sort_order: i32,
    pub status: EntityStatus,
    pub create_time: String,
    pub update_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Category>>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub parent_id: Option<u64>,
    pub sort_order: Option<i32>,
    pub status: Option<EntityStatus>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub tag_type: TagType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub usage_count: u64,
    pub sort_order: i32,
    pub status: EntityStatus,
    pub create_time: String,
    pub update_time: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub tag_type: TagType,
    pub color: Option<String>,
    pub sort_order: Option<i32>,
    pub status: Option<EntityStatus>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub size: u64,
    pub current: u64,
    pub pages: u64,
}

impl<T: Clone> Page<T> {
    /// Slice `items` into page `current` (1-based) of `size` rows.
    pub fn of(items: &[T], current: Option<u64>, size: Option<u64>) -> Self {
        let current = current.unwrap_or(1).max(1);
        let size = size.unwrap_or(10).max(1);
        let total = items.len() as u64;
        let pages = total.div_ceil(size);
        let start = (current - 1).saturating_mul(size).min(total) as usize;
        let end = start.saturating_add(size.min(total) as usize).min(items.len());
        Self {
            records: items[start..end].to_vec(),
            total,
            size,
            current,
            pages,
        }
    }
}

#[derive(Deserialize)]
pub struct StatusBody {
    pub status: EntityStatus,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortBody {
    pub sort_order: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveBody {
    pub parent_id: Option<u64>,
}

#[derive(Deserialize)]
pub struct ColorBody {
    pub color: String,
}

#[derive(Deserialize)]
pub struct GetOrCreateBody {
    pub name: String,
    #[serde(rename = "type", default)]
    pub tag_type: TagType,
}

#[derive(Deserialize)]
pub struct BatchGetOrCreateBody {
    pub names: Vec<String>,
    #[serde(rename = "type", default)]
    pub tag_type: TagType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_slices_and_counts() {
        let items: Vec<u32> = (1..=25).collect();
        let page = Page::of(&items, Some(3), Some(10));
        assert_eq!(page.records, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total, 25);
        assert_eq!(page.pages, 3);

        let beyond = Page::of(&items, Some(9), Some(10));
        assert!(beyond.records.is_empty());
        assert_eq!(beyond.current, 9);
    }

    #[test]
    fn huge_page_numbers_yield_empty_pages() {
        let items: Vec<u32> = (1..=5).collect();
        let page = Page::of(&items, Some(3), Some(u64::MAX));
        assert!(page.records.is_empty());
        assert_eq!(page.pages, 1);

        let page = Page::of(&items, Some(u64::MAX), Some(u64::MAX));
        assert!(page.records.is_empty());

        let page = Page::of(&items, Some(1), Some(u64::MAX));
        assert_eq!(page.records.len(), 5);
    }

    #[test]
    fn page_defaults() {
        let items: Vec<u32> = (1..=3).collect();
        let page = Page::of(&items, None, None);
        assert_eq!(page.current, 1);
        assert_eq!(page.size, 10);
        assert_eq!(page.pages, 1);
    }

    #[test]
    fn content_input_defaults_status_to_draft() {
        let input: ContentInput =
            serde_json::from_str(r#"{"title":"T","content":"C","categoryId":1}"#).unwrap();
        assert_eq!(input.status, ContentStatus::Draft);
        assert!(input.tags.is_empty());
    }

    #[test]
    fn content_input_rejects_missing_title() {
        let result: Result<ContentInput, _> =
            serde_json::from_str(r#"{"content":"C","categoryId":1}"#);
        assert!(result.is_err());
    }
}
