//! Articles and AI-news items share one set of handlers, parameterised by
//! `ContentKind` in the router state.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, put},
    Json, Router,
};
use serde::Deserialize;

use super::LimitParam;
use crate::envelope::{ok, Failure, Reply, NOT_FOUND};
use crate::models::{ContentInput, ContentItem, ContentStatus, Page};
use crate::store::{now, ContentKind, Db, Store};

#[derive(Clone)]
pub struct ContentState {
    pub db: Db,
    pub kind: ContentKind,
}

/// Every filter any list/search/source endpoint accepts.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFilter {
    pub current: Option<u64>,
    pub size: Option<u64>,
    pub keyword: Option<String>,
    pub title: Option<String>,
    pub category_id: Option<u64>,
    pub status: Option<ContentStatus>,
    pub source_name: Option<String>,
    pub is_top: Option<bool>,
    pub is_recommend: Option<bool>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl ContentFilter {
    fn matches(&self, item: &ContentItem) -> bool {
        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            let hit = [&item.title, &item.summary, &item.content]
                .iter()
                .any(|field| field.to_lowercase().contains(&keyword));
            if !hit {
                return false;
            }
        }
        if let Some(title) = &self.title {
            if !item.title.contains(title.as_str()) {
                return false;
            }
        }
        if let Some(source) = &self.source_name {
            if item.source_name.as_deref() != Some(source.as_str()) {
                return false;
            }
        }
        if let Some(start) = &self.start_time {
            if item.create_time.as_str() < start.as_str() {
                return false;
            }
        }
        if let Some(end) = &self.end_time {
            if item.create_time.as_str() > end.as_str() {
                return false;
            }
        }
        self.category_id.map_or(true, |id| item.category_id == id)
            && self.status.map_or(true, |status| item.status == status)
            && self.is_top.map_or(true, |flag| item.is_top == flag)
            && self.is_recommend.map_or(true, |flag| item.is_recommend == flag)
    }
}

pub fn routes(prefix: &str, kind: ContentKind, db: Db) -> Router {
    let mut router = Router::new()
        .route(prefix, get(list).post(create))
        .route(&format!("{prefix}/batch"), delete(batch_delete))
        .route(&format!("{prefix}/recommended"), get(recommended))
        .route(&format!("{prefix}/popular"), get(popular))
        .route(&format!("{prefix}/latest"), get(latest))
        .route(&format!("{prefix}/search"), get(list))
        .route(&format!("{prefix}/{{id}}"), get(get_one).put(update).delete(remove))
        .route(&format!("{prefix}/{{id}}/{{action}}"), put(apply_action));
    if kind == ContentKind::AiNews {
        router = router.route(&format!("{prefix}/source"), get(by_source));
    }
    router.with_state(ContentState { db, kind })
}

/// Newest first.
fn filtered(store: &Store, kind: ContentKind, filter: &ContentFilter) -> Vec<ContentItem> {
    store
        .content(kind)
        .values()
        .rev()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

fn published(store: &Store, kind: ContentKind) -> Vec<ContentItem> {
    store
        .content(kind)
        .values()
        .rev()
        .filter(|item| item.status == ContentStatus::Published)
        .cloned()
        .collect()
}

async fn list(
    State(state): State<ContentState>,
    Query(filter): Query<ContentFilter>,
) -> Reply<Page<ContentItem>> {
    let store = state.db.read().await;
    let items = filtered(&store, state.kind, &filter);
    ok(Page::of(&items, filter.current, filter.size))
}

async fn by_source(
    State(state): State<ContentState>,
    Query(filter): Query<ContentFilter>,
) -> Reply<Page<ContentItem>> {
    if filter.source_name.is_none() {
        return Err(Failure::bad_request("sourceName is required"));
    }
    list(State(state), Query(filter)).await
}

async fn get_one(State(state): State<ContentState>, Path(id): Path<u64>) -> Reply<ContentItem> {
    let store = state.db.read().await;
    let item = store
        .content(state.kind)
        .get(&id)
        .cloned()
        .ok_or_else(|| Failure::not_found(state.kind.label(), id))?;
    ok(item)
}

/// Assemble a row from `input`, keeping server-owned fields of `existing`.
fn build_item(
    store: &Store,
    kind: ContentKind,
    id: u64,
    input: ContentInput,
    existing: Option<&ContentItem>,
) -> Result<ContentItem, Failure> {
    let (source_url, source_name) = match kind {
        ContentKind::Article => (None, None),
        ContentKind::AiNews => match (input.source_url, input.source_name) {
            (Some(url), Some(name)) => (Some(url), Some(name)),
            _ => return Err(Failure::bad_request("sourceUrl and sourceName are required")),
        },
    };
    if input.title.trim().is_empty() {
        return Err(Failure::bad_request("title must not be blank"));
    }

    let timestamp = now();
    let publish_time = match (input.status, input.publish_time) {
        (_, Some(time)) => Some(time),
        (ContentStatus::Published, None) => existing
            .and_then(|e| e.publish_time.clone())
            .or_else(|| Some(timestamp.clone())),
        _ => existing.and_then(|e| e.publish_time.clone()),
    };

    Ok(ContentItem {
        id,
        title: input.title,
        content: input.content,
        summary: input.summary,
        source_url,
        source_name,
        cover_image: input.cover_image,
        category_id: input.category_id,
        category_name: store.category_name(input.category_id),
        tags: input.tags,
        status: input.status,
        view_count: existing.map_or(0, |e| e.view_count),
        like_count: existing.map_or(0, |e| e.like_count),
        comment_count: existing.map_or(0, |e| e.comment_count),
        is_top: input.is_top.or(existing.map(|e| e.is_top)).unwrap_or(false),
        is_recommend: input
            .is_recommend
            .or(existing.map(|e| e.is_recommend))
            .unwrap_or(false),
        publish_time,
        create_time: existing.map_or_else(|| timestamp.clone(), |e| e.create_time.clone()),
        update_time: timestamp,
    })
}

async fn create(State(state): State<ContentState>, Json(input): Json<ContentInput>) -> Reply<ContentItem> {
    let mut store = state.db.write().await;
    let id = store.allocate_id();
    let item = build_item(&store, state.kind, id, input, None)?;
    store.content_mut(state.kind).insert(id, item.clone());
    store.refresh_tag_usage();
    tracing::info!(kind = state.kind.label(), id, "created");
    ok(item)
}

async fn update(
    State(state): State<ContentState>,
    Path(id): Path<u64>,
    Json(input): Json<ContentInput>,
) -> Reply<ContentItem> {
    let mut store = state.db.write().await;
    let existing = store
        .content(state.kind)
        .get(&id)
        .cloned()
        .ok_or_else(|| Failure::not_found(state.kind.label(), id))?;
    let item = build_item(&store, state.kind, id, input, Some(&existing))?;
    store.content_mut(state.kind).insert(id, item.clone());
    store.refresh_tag_usage();
    ok(item)
}

async fn remove(State(state): State<ContentState>, Path(id): Path<u64>) -> Reply<()> {
    let mut store = state.db.write().await;
    store
        .content_mut(state.kind)
        .remove(&id)
        .ok_or_else(|| Failure::not_found(state.kind.label(), id))?;
    store.refresh_tag_usage();
    tracing::info!(kind = state.kind.label(), id, "deleted");
    ok(())
}

async fn batch_delete(State(state): State<ContentState>, Json(ids): Json<Vec<u64>>) -> Reply<()> {
    let mut store = state.db.write().await;
    let table = store.content_mut(state.kind);
    for id in &ids {
        table.remove(id);
    }
    store.refresh_tag_usage();
    tracing::info!(kind = state.kind.label(), count = ids.len(), "batch deleted");
    ok(())
}

async fn apply_action(
    State(state): State<ContentState>,
    Path((id, action)): Path<(u64, String)>,
) -> Reply<()> {
    let mut store = state.db.write().await;
    let item = store
        .content_mut(state.kind)
        .get_mut(&id)
        .ok_or_else(|| Failure::not_found(state.kind.label(), id))?;
    match action.as_str() {
        "publish" => {
            item.status = ContentStatus::Published;
            item.publish_time.get_or_insert_with(now);
        }
        "unpublish" => item.status = ContentStatus::Draft,
        "top" => item.is_top = true,
        "untop" => item.is_top = false,
        "recommend" => item.is_recommend = true,
        "unrecommend" => item.is_recommend = false,
        "view" => item.view_count += 1,
        "like" => item.like_count += 1,
        "unlike" => item.like_count = item.like_count.saturating_sub(1),
        other => {
            return Err(Failure {
                code: NOT_FOUND,
                message: format!("unknown action `{other}`"),
            })
        }
    }
    item.update_time = now();
    ok(())
}

async fn recommended(State(state): State<ContentState>, Query(limit): Query<LimitParam>) -> Reply<Vec<ContentItem>> {
    let store = state.db.read().await;
    let items = published(&store, state.kind)
        .into_iter()
        .filter(|item| item.is_recommend)
        .take(limit.or(10))
        .collect();
    ok(items)
}

async fn popular(State(state): State<ContentState>, Query(limit): Query<LimitParam>) -> Reply<Vec<ContentItem>> {
    let store = state.db.read().await;
    let mut items = published(&store, state.kind);
    items.sort_by(|a, b| {
        b.view_count
            .cmp(&a.view_count)
            .then(b.like_count.cmp(&a.like_count))
    });
    items.truncate(limit.or(10));
    ok(items)
}

async fn latest(State(state): State<ContentState>, Query(limit): Query<LimitParam>) -> Reply<Vec<ContentItem>> {
    let store = state.db.read().await;
    let mut items = published(&store, state.kind);
    items.sort_by(|a, b| b.publish_time.cmp(&a.publish_time).then(b.id.cmp(&a.id)));
    items.truncate(limit.or(10));
    ok(items)
}
