//! In-memory state shared by every handler.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Category, ContentItem, Tag};

pub type Db = Arc<RwLock<Store>>;

/// Which content table a handler operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Article,
    AiNews,
}

impl ContentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::AiNews => "ai-news",
        }
    }
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    pub articles: BTreeMap<u64, ContentItem>,
    pub ai_news: BTreeMap<u64, ContentItem>,
    pub categories: BTreeMap<u64, Category>,
    pub tags: BTreeMap<u64, Tag>,
}

impl Store {
    pub fn shared() -> Db {
        Arc::new(RwLock::new(Store::default()))
    }

    /// Ids are unique across all tables.
    pub fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn content(&self, kind: ContentKind) -> &BTreeMap<u64, ContentItem> {
        match kind {
            ContentKind::Article => &self.articles,
            ContentKind::AiNews => &self.ai_news,
        }
    }

    pub fn content_mut(&mut self, kind: ContentKind) -> &mut BTreeMap<u64, ContentItem> {
        match kind {
            ContentKind::Article => &mut self.articles,
            ContentKind::AiNews => &mut self.ai_news,
        }
    }

    fn all_content(&self) -> impl Iterator<Item = &ContentItem> {
        self.articles.values().chain(self.ai_news.values())
    }

    /// Items of either kind filed under `category_id`.
    pub fn category_usage(&self, category_id: u64) -> u64 {
        self.all_content().filter(|item| item.category_id == category_id).count() as u64
    }

    /// Items of either kind tagged with `name`.
    pub fn tag_usage(&self, name: &str) -> u64 {
        self.all_content()
            .filter(|item| item.tags.iter().any(|t| t == name))
            .count() as u64
    }

    /// Recompute every tag's `usage_count` from stored content.
    pub fn refresh_tag_usage(&mut self) {
        let counts: Vec<(u64, u64)> = self
            .tags
            .values()
            .map(|tag| (tag.id, self.tag_usage(&tag.name)))
            .collect();
        for (id, count) in counts {
            if let Some(tag) = self.tags.get_mut(&id) {
                tag.usage_count = count;
            }
        }
    }

    pub fn category_name(&self, id: u64) -> Option<String> {
        self.categories.get(&id).map(|c| c.name.clone())
    }

    /// True if `candidate` is `id` itself or lies below it.
    pub fn is_in_subtree(&self, id: u64, candidate: u64) -> bool {
        let mut cursor = Some(candidate);
        while let Some(current) = cursor {
            if current == id {
                return true;
            }
            cursor = self.categories.get(&current).and_then(|c| c.parent_id);
        }
        false
    }
}

pub fn now() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}
