use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{ExistsParams, LimitParam};
use crate::envelope::{ok, Failure, Reply};
use crate::models::{
    BatchGetOrCreateBody, ColorBody, EntityStatus, GetOrCreateBody, Page, SortBody, StatusBody, Tag, TagInput,
    TagType,
};
use crate::store::{now, Db, Store};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagFilter {
    pub current: Option<u64>,
    pub size: Option<u64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub tag_type: Option<TagType>,
    pub status: Option<EntityStatus>,
}

#[derive(Debug, Deserialize)]
pub struct TypeParam {
    #[serde(rename = "type")]
    pub tag_type: TagType,
}

#[derive(Debug, Deserialize)]
pub struct KeywordParam {
    pub keyword: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagStats {
    pub total_tags: u64,
    pub active_tags: u64,
    pub total_usage: u64,
    pub average_usage: f64,
}

#[derive(Debug, Serialize)]
pub struct CloudItem {
    pub name: String,
    pub value: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

pub fn routes(db: Db) -> Router {
    Router::new()
        .route("/tags", get(list).post(create))
        .route("/tags/enabled", get(enabled))
        .route("/tags/type", get(by_type))
        .route("/tags/search", get(search))
        .route("/tags/exists", get(exists))
        .route("/tags/popular", get(popular))
        .route("/tags/stats", get(stats))
        .route("/tags/cloud", get(cloud))
        .route("/tags/get-or-create", post(get_or_create))
        .route("/tags/batch-get-or-create", post(batch_get_or_create))
        .route("/tags/batch", delete(batch_delete))
        .route("/tags/{id}", get(get_one).put(update).delete(remove))
        .route("/tags/{id}/count", get(count))
        .route("/tags/{id}/status", put(set_status))
        .route("/tags/{id}/sort", put(set_sort))
        .route("/tags/{id}/color", put(set_color))
        .with_state(db)
}

fn sorted<'a>(tags: impl Iterator<Item = &'a Tag>) -> Vec<Tag> {
    let mut list: Vec<Tag> = tags.cloned().collect();
    list.sort_by_key(|t| (t.sort_order, t.id));
    list
}

/// Highest usage first, ties by id.
fn by_usage(store: &Store) -> Vec<Tag> {
    let mut list: Vec<Tag> = store
        .tags
        .values()
        .filter(|t| t.status == EntityStatus::Active)
        .cloned()
        .collect();
    list.sort_by(|a, b| b.usage_count.cmp(&a.usage_count).then(a.id.cmp(&b.id)));
    list
}

fn find_by_name<'a>(store: &'a Store, name: &str) -> Option<&'a Tag> {
    store.tags.values().find(|t| t.name == name)
}

fn insert_tag(store: &mut Store, input: TagInput) -> Tag {
    let id = store.allocate_id();
    let timestamp = now();
    let tag = Tag {
        id,
        usage_count: store.tag_usage(&input.name),
        name: input.name,
        description: input.description,
        tag_type: input.tag_type,
        color: input.color,
        sort_order: input.sort_order.unwrap_or(0),
        status: input.status.unwrap_or_default(),
        create_time: timestamp.clone(),
        update_time: timestamp,
    };
    store.tags.insert(id, tag.clone());
    tracing::info!(id, name = %tag.name, "tag created");
    tag
}

/// Existing tag named `name`, or a freshly inserted one.
fn get_or_insert(store: &mut Store, name: &str, tag_type: TagType) -> Result<Tag, Failure> {
    if name.trim().is_empty() {
        return Err(Failure::bad_request("tag name must not be blank"));
    }
    if let Some(existing) = find_by_name(store, name) {
        return Ok(existing.clone());
    }
    Ok(insert_tag(
        store,
        TagInput {
            name: name.to_string(),
            description: None,
            tag_type,
            color: None,
            sort_order: None,
            status: None,
        },
    ))
}

async fn list(State(db): State<Db>, Query(filter): Query<TagFilter>) -> Reply<Page<Tag>> {
    let store = db.read().await;
    let tags = sorted(store.tags.values().filter(|t| {
        filter.name.as_ref().map_or(true, |n| t.name.contains(n.as_str()))
            && filter.tag_type.map_or(true, |ty| t.tag_type == ty)
            && filter.status.map_or(true, |s| t.status == s)
    }));
    ok(Page::of(&tags, filter.current, filter.size))
}

async fn get_one(State(db): State<Db>, Path(id): Path<u64>) -> Reply<Tag> {
    let store = db.read().await;
    let tag = store
        .tags
        .get(&id)
        .cloned()
        .ok_or_else(|| Failure::not_found("tag", id))?;
    ok(tag)
}

async fn enabled(State(db): State<Db>) -> Reply<Vec<Tag>> {
    let store = db.read().await;
    ok(sorted(store.tags.values().filter(|t| t.status == EntityStatus::Active)))
}

async fn by_type(State(db): State<Db>, Query(param): Query<TypeParam>) -> Reply<Vec<Tag>> {
    let store = db.read().await;
    ok(sorted(store.tags.values().filter(|t| t.tag_type == param.tag_type)))
}

async fn search(State(db): State<Db>, Query(param): Query<KeywordParam>) -> Reply<Vec<Tag>> {
    let store = db.read().await;
    let keyword = param.keyword.to_lowercase();
    ok(sorted(
        store
            .tags
            .values()
            .filter(|t| t.name.to_lowercase().contains(&keyword)),
    ))
}

async fn exists(State(db): State<Db>, Query(params): Query<ExistsParams>) -> Reply<bool> {
    let store = db.read().await;
    let taken = store
        .tags
        .values()
        .any(|t| t.name == params.name && Some(t.id) != params.exclude_id);
    ok(taken)
}

async fn count(State(db): State<Db>, Path(id): Path<u64>) -> Reply<u64> {
    let store = db.read().await;
    let tag = store.tags.get(&id).ok_or_else(|| Failure::not_found("tag", id))?;
    ok(store.tag_usage(&tag.name))
}

async fn popular(State(db): State<Db>, Query(limit): Query<LimitParam>) -> Reply<Vec<Tag>> {
    let store = db.read().await;
    let mut tags = by_usage(&store);
    tags.truncate(limit.or(20));
    ok(tags)
}

async fn stats(State(db): State<Db>) -> Reply<TagStats> {
    let store = db.read().await;
    let total_tags = store.tags.len() as u64;
    let active_tags = store
        .tags
        .values()
        .filter(|t| t.status == EntityStatus::Active)
        .count() as u64;
    let total_usage: u64 = store.tags.values().map(|t| t.usage_count).sum();
    let average_usage = if total_tags == 0 {
        0.0
    } else {
        total_usage as f64 / total_tags as f64
    };
    ok(TagStats {
        total_tags,
        active_tags,
        total_usage,
        average_usage,
    })
}

async fn cloud(State(db): State<Db>, Query(limit): Query<LimitParam>) -> Reply<Vec<CloudItem>> {
    let store = db.read().await;
    let items = by_usage(&store)
        .into_iter()
        .take(limit.or(50))
        .map(|t| CloudItem {
            name: t.name,
            value: t.usage_count,
            color: t.color,
        })
        .collect();
    ok(items)
}

async fn create(State(db): State<Db>, Json(input): Json<TagInput>) -> Reply<Tag> {
    let mut store = db.write().await;
    if input.name.trim().is_empty() {
        return Err(Failure::bad_request("tag name must not be blank"));
    }
    if find_by_name(&store, &input.name).is_some() {
        return Err(Failure::bad_request(format!("tag `{}` already exists", input.name)));
    }
    ok(insert_tag(&mut store, input))
}

async fn get_or_create(State(db): State<Db>, Json(body): Json<GetOrCreateBody>) -> Reply<Tag> {
    let mut store = db.write().await;
    ok(get_or_insert(&mut store, &body.name, body.tag_type)?)
}

async fn batch_get_or_create(State(db): State<Db>, Json(body): Json<BatchGetOrCreateBody>) -> Reply<Vec<Tag>> {
    let mut store = db.write().await;
    let mut tags = Vec::with_capacity(body.names.len());
    for name in &body.names {
        tags.push(get_or_insert(&mut store, name, body.tag_type)?);
    }
    ok(tags)
}

async fn update(State(db): State<Db>, Path(id): Path<u64>, Json(input): Json<TagInput>) -> Reply<Tag> {
    let mut guard = db.write().await;
    let store = &mut *guard;
    if store.tags.values().any(|t| t.name == input.name && t.id != id) {
        return Err(Failure::bad_request(format!("tag `{}` already exists", input.name)));
    }
    let usage = store.tag_usage(&input.name);
    let tag = store.tags.get_mut(&id).ok_or_else(|| Failure::not_found("tag", id))?;
    tag.name = input.name;
    tag.description = input.description;
    tag.tag_type = input.tag_type;
    tag.color = input.color;
    if let Some(sort_order) = input.sort_order {
        tag.sort_order = sort_order;
    }
    if let Some(status) = input.status {
        tag.status = status;
    }
    tag.usage_count = usage;
    tag.update_time = now();
    ok(tag.clone())
}

fn with_tag<F>(store: &mut Store, id: u64, apply: F) -> Result<(), Failure>
where
    F: FnOnce(&mut Tag),
{
    let tag = store.tags.get_mut(&id).ok_or_else(|| Failure::not_found("tag", id))?;
    apply(tag);
    tag.update_time = now();
    Ok(())
}

async fn set_status(State(db): State<Db>, Path(id): Path<u64>, Json(body): Json<StatusBody>) -> Reply<()> {
    let mut store = db.write().await;
    with_tag(&mut store, id, |t| t.status = body.status)?;
    ok(())
}

async fn set_sort(State(db): State<Db>, Path(id): Path<u64>, Json(body): Json<SortBody>) -> Reply<()> {
    let mut store = db.write().await;
    with_tag(&mut store, id, |t| t.sort_order = body.sort_order)?;
    ok(())
}

async fn set_color(State(db): State<Db>, Path(id): Path<u64>, Json(body): Json<ColorBody>) -> Reply<()> {
    let mut store = db.write().await;
    with_tag(&mut store, id, |t| t.color = Some(body.color))?;
    ok(())
}

async fn remove(State(db): State<Db>, Path(id): Path<u64>) -> Reply<()> {
    let mut store = db.write().await;
    store.tags.remove(&id).ok_or_else(|| Failure::not_found("tag", id))?;
    ok(())
}

async fn batch_delete(State(db): State<Db>, Json(ids): Json<Vec<u64>>) -> Reply<()> {
    let mut store = db.write().await;
    for id in &ids {
        store.tags.remove(id);
    }
    tracing::info!(count = ids.len(), "tags batch deleted");
    ok(())
}
