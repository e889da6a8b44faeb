//! Domain DTOs for the content API.
//!
//! # Design
//! These types mirror the server's JSON schema (camelCase fields, enum
//! values in SCREAMING_SNAKE_CASE) but are defined independently of the
//! mock-server crate. Integration tests catch schema drift between the two.
//! Entities are plain value snapshots; every fetch yields a fresh copy.

pub mod ai_news;
pub mod article;
pub mod category;
pub mod common;
pub mod tag;

pub use ai_news::{AiNews, AiNewsQuery, AiNewsSaveDto};
pub use article::{Article, ArticleQuery, ArticleSaveDto};
pub use category::{Category, CategorySaveDto, CategoryType};
pub use common::{ApiResponse, ContentStatus, EntityStatus, PageResponse};
pub use tag::{Tag, TagCloudItem, TagQuery, TagSaveDto, TagStats, TagType};
