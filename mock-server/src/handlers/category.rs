use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, put},
    Json, Router,
};
use serde::Deserialize;

use super::ExistsParams;
use crate::envelope::{ok, Failure, Reply};
use crate::models::{Category, CategoryInput, CategoryType, EntityStatus, MoveBody, SortBody, StatusBody};
use crate::store::{now, Db, Store};

#[derive(Debug, Deserialize)]
pub struct TypeParam {
    #[serde(rename = "type")]
    pub category_type: Option<CategoryType>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentParam {
    pub parent_id: u64,
}

pub fn routes(db: Db) -> Router {
    Router::new()
        .route("/categories", get(list_all).post(create))
        .route("/categories/type", get(by_type))
        .route("/categories/enabled", get(enabled))
        .route("/categories/children", get(children))
        .route("/categories/tree", get(tree))
        .route("/categories/exists", get(exists))
        .route("/categories/batch", delete(batch_delete))
        .route("/categories/{id}", get(get_one).put(update).delete(remove))
        .route("/categories/{id}/count", get(count))
        .route("/categories/{id}/status", put(set_status))
        .route("/categories/{id}/sort", put(set_sort))
        .route("/categories/{id}/move", put(move_to))
        .with_state(db)
}

/// Sorted by `sort_order`, then id.
fn sorted<'a>(categories: impl Iterator<Item = &'a Category>) -> Vec<Category> {
    let mut list: Vec<Category> = categories.cloned().collect();
    list.sort_by_key(|c| (c.sort_order, c.id));
    list
}

fn subtree(store: &Store, parent: u64) -> Vec<Category> {
    sorted(store.categories.values().filter(|c| c.parent_id == Some(parent)))
        .into_iter()
        .map(|mut node| {
            node.children = Some(subtree(store, node.id));
            node
        })
        .collect()
}

async fn list_all(State(db): State<Db>) -> Reply<Vec<Category>> {
    let store = db.read().await;
    ok(sorted(store.categories.values()))
}

async fn get_one(State(db): State<Db>, Path(id): Path<u64>) -> Reply<Category> {
    let store = db.read().await;
    let category = store
        .categories
        .get(&id)
        .cloned()
        .ok_or_else(|| Failure::not_found("category", id))?;
    ok(category)
}

async fn by_type(State(db): State<Db>, Query(param): Query<TypeParam>) -> Reply<Vec<Category>> {
    let store = db.read().await;
    let wanted = param.category_type;
    ok(sorted(
        store
            .categories
            .values()
            .filter(|c| wanted.map_or(true, |t| c.category_type == t)),
    ))
}

async fn enabled(State(db): State<Db>) -> Reply<Vec<Category>> {
    let store = db.read().await;
    ok(sorted(
        store.categories.values().filter(|c| c.status == EntityStatus::Active),
    ))
}

async fn children(State(db): State<Db>, Query(param): Query<ParentParam>) -> Reply<Vec<Category>> {
    let store = db.read().await;
    ok(sorted(
        store
            .categories
            .values()
            .filter(|c| c.parent_id == Some(param.parent_id)),
    ))
}

async fn tree(State(db): State<Db>, Query(param): Query<TypeParam>) -> Reply<Vec<Category>> {
    let store = db.read().await;
    let wanted = param.category_type;
    let roots = sorted(store.categories.values().filter(|c| {
        c.parent_id.map_or(true, |p| !store.categories.contains_key(&p))
            && wanted.map_or(true, |t| c.category_type == t)
    }));
    let nodes = roots
        .into_iter()
        .map(|mut node| {
            node.children = Some(subtree(&store, node.id));
            node
        })
        .collect();
    ok(nodes)
}

async fn exists(State(db): State<Db>, Query(params): Query<ExistsParams>) -> Reply<bool> {
    let store = db.read().await;
    let taken = store
        .categories
        .values()
        .any(|c| c.name == params.name && Some(c.id) != params.exclude_id);
    ok(taken)
}

async fn count(State(db): State<Db>, Path(id): Path<u64>) -> Reply<u64> {
    let store = db.read().await;
    if !store.categories.contains_key(&id) {
        return Err(Failure::not_found("category", id));
    }
    ok(store.category_usage(id))
}

fn validate(store: &Store, input: &CategoryInput, id: Option<u64>) -> Result<(), Failure> {
    if input.name.trim().is_empty() {
        return Err(Failure::bad_request("category name must not be blank"));
    }
    if store
        .categories
        .values()
        .any(|c| c.name == input.name && Some(c.id) != id)
    {
        return Err(Failure::bad_request(format!("category `{}` already exists", input.name)));
    }
    if let Some(parent) = input.parent_id {
        if !store.categories.contains_key(&parent) {
            return Err(Failure::not_found("parent category", parent));
        }
        if let Some(id) = id {
            if store.is_in_subtree(id, parent) {
                return Err(Failure::bad_request("a category cannot be placed under itself"));
            }
        }
    }
    Ok(())
}

async fn create(State(db): State<Db>, Json(input): Json<CategoryInput>) -> Reply<Category> {
    let mut store = db.write().await;
    validate(&store, &input, None)?;
    let id = store.allocate_id();
    let timestamp = now();
    let category = Category {
        id,
        name: input.name,
        description: input.description,
        category_type: input.category_type,
        parent_id: input.parent_id,
        sort_order: input.sort_order.unwrap_or(0),
        status: input.status.unwrap_or_default(),
        create_time: timestamp.clone(),
        update_time: timestamp,
        children: None,
    };
    store.categories.insert(id, category.clone());
    tracing::info!(id, name = %category.name, "category created");
    ok(category)
}

async fn update(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<CategoryInput>,
) -> Reply<Category> {
    let mut guard = db.write().await;
    let store = &mut *guard;
    validate(store, &input, Some(id))?;
    let category = store
        .categories
        .get_mut(&id)
        .ok_or_else(|| Failure::not_found("category", id))?;
    category.name = input.name;
    category.description = input.description;
    category.category_type = input.category_type;
    category.parent_id = input.parent_id;
    if let Some(sort_order) = input.sort_order {
        category.sort_order = sort_order;
    }
    if let Some(status) = input.status {
        category.status = status;
    }
    category.update_time = now();
    let category = category.clone();

    let name = category.name.clone();
    for item in store.articles.values_mut().chain(store.ai_news.values_mut()) {
        if item.category_id == id {
            item.category_name = Some(name.clone());
        }
    }
    ok(category)
}

fn with_category<F>(store: &mut Store, id: u64, apply: F) -> Result<(), Failure>
where
    F: FnOnce(&mut Category),
{
    let category = store
        .categories
        .get_mut(&id)
        .ok_or_else(|| Failure::not_found("category", id))?;
    apply(category);
    category.update_time = now();
    Ok(())
}

async fn set_status(State(db): State<Db>, Path(id): Path<u64>, Json(body): Json<StatusBody>) -> Reply<()> {
    let mut store = db.write().await;
    with_category(&mut store, id, |c| c.status = body.status)?;
    ok(())
}

async fn set_sort(State(db): State<Db>, Path(id): Path<u64>, Json(body): Json<SortBody>) -> Reply<()> {
    let mut store = db.write().await;
    with_category(&mut store, id, |c| c.sort_order = body.sort_order)?;
    ok(())
}

async fn move_to(State(db): State<Db>, Path(id): Path<u64>, Json(body): Json<MoveBody>) -> Reply<()> {
    let mut store = db.write().await;
    if !store.categories.contains_key(&id) {
        return Err(Failure::not_found("category", id));
    }
    if let Some(parent) = body.parent_id {
        if !store.categories.contains_key(&parent) {
            return Err(Failure::not_found("parent category", parent));
        }
        if store.is_in_subtree(id, parent) {
            return Err(Failure::bad_request("a category cannot be moved under itself"));
        }
    }
    with_category(&mut store, id, |c| c.parent_id = body.parent_id)?;
    ok(())
}

fn remove_many(store: &mut Store, ids: &[u64]) -> Result<(), Failure> {
    let blocked = store
        .categories
        .values()
        .find(|c| c.parent_id.is_some_and(|p| ids.contains(&p)) && !ids.contains(&c.id));
    if let Some(child) = blocked {
        return Err(Failure::bad_request(format!(
            "category {} still has child `{}`",
            child.parent_id.unwrap_or_default(),
            child.name
        )));
    }
    for id in ids {
        store.categories.remove(id);
    }
    Ok(())
}

async fn remove(State(db): State<Db>, Path(id): Path<u64>) -> Reply<()> {
    let mut store = db.write().await;
    if !store.categories.contains_key(&id) {
        return Err(Failure::not_found("category", id));
    }
    remove_many(&mut store, &[id])?;
    ok(())
}

async fn batch_delete(State(db): State<Db>, Json(ids): Json<Vec<u64>>) -> Reply<()> {
    let mut store = db.write().await;
    remove_many(&mut store, &ids)?;
    ok(())
}
