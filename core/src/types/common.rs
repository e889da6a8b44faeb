use serde::{Deserialize, Serialize};

/// Envelope wrapped around every response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageResponse<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub size: u64,
    pub current: u64,
    pub pages: u64,
}

/// Publication state of an article or AI-news item.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// Enabled/disabled flag shared by categories and tags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    #[default]
    Active,
    Inactive,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "DRAFT",
            ContentStatus::Published => "PUBLISHED",
            ContentStatus::Archived => "ARCHIVED",
        }
    }
}

impl EntityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Active => "ACTIVE",
            EntityStatus::Inactive => "INACTIVE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_wire_names() {
        assert_eq!(serde_json::to_value(ContentStatus::Published).unwrap(), "PUBLISHED");
        assert_eq!(serde_json::to_value(EntityStatus::Inactive).unwrap(), "INACTIVE");
        let status: ContentStatus = serde_json::from_str(r#""ARCHIVED""#).unwrap();
        assert_eq!(status, ContentStatus::Archived);
        assert_eq!(status.as_str(), "ARCHIVED");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: Result<ContentStatus, _> = serde_json::from_str(r#""DELETED""#);
        assert!(result.is_err());
    }

    #[test]
    fn page_envelope_parses() {
        let page: PageResponse<u64> = serde_json::from_str(
            r#"{"records":[1,2],"total":12,"size":2,"current":1,"pages":6}"#,
        )
        .unwrap();
        assert_eq!(page.records, vec![1, 2]);
        assert_eq!(page.pages, 6);
    }
}
