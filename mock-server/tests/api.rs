use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, Category, ContentItem, Envelope, Page, Tag};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder().method(method).uri(uri).body(String::new()).unwrap()
}

/// Send one request and decode the envelope. Every route answers HTTP 200.
async fn call<T: serde::de::DeserializeOwned>(app: &Router, request: Request<String>) -> Envelope<T> {
    let resp = app.clone().oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

async fn seed_category(app: &Router, name: &str, parent: Option<u64>) -> Category {
    let body = match parent {
        Some(p) => format!(r#"{{"name":"{name}","type":"ARTICLE","parentId":{p}}}"#),
        None => format!(r#"{{"name":"{name}","type":"ARTICLE"}}"#),
    };
    let env: Envelope<Category> = call(app, json_request("POST", "/categories", &body)).await;
    assert_eq!(env.code, 200, "{}", env.message);
    env.data
}

async fn seed_article(app: &Router, title: &str, category_id: u64, tags: &[&str]) -> ContentItem {
    let body = serde_json::json!({
        "title": title,
        "content": "body",
        "categoryId": category_id,
        "tags": tags,
    });
    let env: Envelope<ContentItem> = call(app, json_request("POST", "/articles", &body.to_string())).await;
    assert_eq!(env.code, 200, "{}", env.message);
    env.data
}

// --- articles ---

#[tokio::test]
async fn list_articles_empty_page() {
    let app = app();
    let env: Envelope<Page<ContentItem>> = call(&app, empty_request("GET", "/articles")).await;
    assert_eq!(env.code, 200);
    assert!(env.data.records.is_empty());
    assert_eq!(env.data.current, 1);
    assert_eq!(env.data.size, 10);
}

#[tokio::test]
async fn oversized_paging_returns_an_empty_page() {
    let app = app();
    let category = seed_category(&app, "Rust", None).await;
    seed_article(&app, "Only", category.id, &[]).await;

    let uri = format!("/articles?current=3&size={}", u64::MAX);
    let env: Envelope<Page<ContentItem>> = call(&app, empty_request("GET", &uri)).await;
    assert_eq!(env.code, 200);
    assert_eq!(env.data.total, 1);
    assert!(env.data.records.is_empty());
}

#[tokio::test]
async fn create_then_get_article() {
    let app = app();
    let category = seed_category(&app, "Rust", None).await;
    let article = seed_article(&app, "Ownership", category.id, &[]).await;
    assert_eq!(article.category_name.as_deref(), Some("Rust"));
    assert_eq!(article.view_count, 0);

    let env: Envelope<ContentItem> =
        call(&app, empty_request("GET", &format!("/articles/{}", article.id))).await;
    assert_eq!(env.data.title, "Ownership");
}

#[tokio::test]
async fn missing_article_is_envelope_404() {
    let app = app();
    let env: Envelope<Value> = call(&app, empty_request("GET", "/articles/999")).await;
    assert_eq!(env.code, 404);
    assert!(env.data.is_null());
}

#[tokio::test]
async fn toggles_update_flags_and_counters() {
    let app = app();
    let category = seed_category(&app, "Rust", None).await;
    let article = seed_article(&app, "Traits", category.id, &[]).await;
    let id = article.id;

    for action in ["publish", "top", "recommend", "view", "view", "like"] {
        let env: Envelope<Value> = call(&app, empty_request("PUT", &format!("/articles/{id}/{action}"))).await;
        assert_eq!(env.code, 200, "{action}");
    }

    let env: Envelope<ContentItem> = call(&app, empty_request("GET", &format!("/articles/{id}"))).await;
    let item = env.data;
    assert_eq!(item.status, mock_server::models::ContentStatus::Published);
    assert!(item.is_top);
    assert!(item.is_recommend);
    assert_eq!(item.view_count, 2);
    assert_eq!(item.like_count, 1);
    assert!(item.publish_time.is_some());

    let env: Envelope<Value> = call(&app, empty_request("PUT", &format!("/articles/{id}/bogus"))).await;
    assert_eq!(env.code, 404);
}

#[tokio::test]
async fn batch_delete_removes_listed_ids() {
    let app = app();
    let category = seed_category(&app, "Rust", None).await;
    let a = seed_article(&app, "A", category.id, &[]).await;
    let b = seed_article(&app, "B", category.id, &[]).await;
    let c = seed_article(&app, "C", category.id, &[]).await;

    let body = format!("[{},{}]", a.id, c.id);
    let env: Envelope<Value> = call(&app, json_request("DELETE", "/articles/batch", &body)).await;
    assert_eq!(env.code, 200);

    let env: Envelope<Page<ContentItem>> = call(&app, empty_request("GET", "/articles")).await;
    let ids: Vec<u64> = env.data.records.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![b.id]);
}

#[tokio::test]
async fn search_filters_by_keyword() {
    let app = app();
    let category = seed_category(&app, "Rust", None).await;
    seed_article(&app, "Async Rust", category.id, &[]).await;
    seed_article(&app, "Borrowing", category.id, &[]).await;

    let env: Envelope<Page<ContentItem>> =
        call(&app, empty_request("GET", "/articles/search?keyword=async&current=1&size=5")).await;
    assert_eq!(env.data.total, 1);
    assert_eq!(env.data.records[0].title, "Async Rust");
}

// --- ai news ---

#[tokio::test]
async fn ai_news_requires_source() {
    let app = app();
    let category = seed_category(&app, "Models", None).await;
    let body = format!(r#"{{"title":"T","content":"C","categoryId":{}}}"#, category.id);
    let env: Envelope<Value> = call(&app, json_request("POST", "/ai-news", &body)).await;
    assert_eq!(env.code, 400);

    let body = format!(
        r#"{{"title":"T","content":"C","categoryId":{},"sourceUrl":"https://example.com","sourceName":"Lab"}}"#,
        category.id
    );
    let env: Envelope<ContentItem> = call(&app, json_request("POST", "/ai-news", &body)).await;
    assert_eq!(env.code, 200);

    let env: Envelope<Page<ContentItem>> = call(&app, empty_request("GET", "/ai-news/source?sourceName=Lab")).await;
    assert_eq!(env.data.total, 1);
}

// --- categories ---

#[tokio::test]
async fn category_cannot_move_under_its_descendant() {
    let app = app();
    let root = seed_category(&app, "Root", None).await;
    let child = seed_category(&app, "Child", Some(root.id)).await;

    let body = format!(r#"{{"parentId":{}}}"#, child.id);
    let env: Envelope<Value> = call(&app, json_request("PUT", &format!("/categories/{}/move", root.id), &body)).await;
    assert_eq!(env.code, 400);

    let env: Envelope<Value> =
        call(&app, json_request("PUT", &format!("/categories/{}/move", child.id), r#"{"parentId":null}"#)).await;
    assert_eq!(env.code, 200);
    let env: Envelope<Category> = call(&app, empty_request("GET", &format!("/categories/{}", child.id))).await;
    assert_eq!(env.data.parent_id, None);
}

#[tokio::test]
async fn category_tree_nests_children() {
    let app = app();
    let root = seed_category(&app, "Root", None).await;
    seed_category(&app, "Leaf", Some(root.id)).await;

    let env: Envelope<Vec<Category>> = call(&app, empty_request("GET", "/categories/tree")).await;
    assert_eq!(env.data.len(), 1);
    let children = env.data[0].children.as_ref().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name, "Leaf");
}

#[tokio::test]
async fn category_with_children_cannot_be_deleted() {
    let app = app();
    let root = seed_category(&app, "Root", None).await;
    seed_category(&app, "Leaf", Some(root.id)).await;

    let env: Envelope<Value> = call(&app, empty_request("DELETE", &format!("/categories/{}", root.id))).await;
    assert_eq!(env.code, 400);
}

#[tokio::test]
async fn category_exists_honours_exclude_id() {
    let app = app();
    let root = seed_category(&app, "Root", None).await;

    let env: Envelope<bool> = call(&app, empty_request("GET", "/categories/exists?name=Root")).await;
    assert!(env.data);
    let env: Envelope<bool> =
        call(&app, empty_request("GET", &format!("/categories/exists?name=Root&excludeId={}", root.id))).await;
    assert!(!env.data);
}

// --- tags ---

#[tokio::test]
async fn get_or_create_is_idempotent() {
    let app = app();
    let first: Envelope<Tag> = call(&app, json_request("POST", "/tags/get-or-create", r#"{"name":"LLM"}"#)).await;
    let second: Envelope<Tag> =
        call(&app, json_request("POST", "/tags/get-or-create", r#"{"name":"LLM","type":"AI_NEWS"}"#)).await;
    assert_eq!(first.data.id, second.data.id);
    assert_eq!(second.data.tag_type, mock_server::models::TagType::Common);

    let env: Envelope<Vec<Tag>> = call(
        &app,
        json_request("POST", "/tags/batch-get-or-create", r#"{"names":["LLM","RAG"]}"#),
    )
    .await;
    let names: Vec<&str> = env.data.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["LLM", "RAG"]);
    assert_eq!(env.data[0].id, first.data.id);
}

#[tokio::test]
async fn duplicate_tag_name_is_rejected() {
    let app = app();
    let env: Envelope<Tag> = call(&app, json_request("POST", "/tags", r#"{"name":"Rust"}"#)).await;
    assert_eq!(env.code, 200);
    let env: Envelope<Value> = call(&app, json_request("POST", "/tags", r#"{"name":"Rust"}"#)).await;
    assert_eq!(env.code, 400);
}

#[tokio::test]
async fn tag_usage_follows_content() {
    let app = app();
    let category = seed_category(&app, "Rust", None).await;
    let tag: Envelope<Tag> = call(&app, json_request("POST", "/tags", r#"{"name":"async"}"#)).await;
    let tag_id = tag.data.id;
    let article = seed_article(&app, "Tokio", category.id, &["async"]).await;
    seed_article(&app, "Futures", category.id, &["async"]).await;

    let env: Envelope<u64> = call(&app, empty_request("GET", &format!("/tags/{tag_id}/count"))).await;
    assert_eq!(env.data, 2);

    let env: Envelope<Vec<Tag>> = call(&app, empty_request("GET", "/tags/popular?limit=1")).await;
    assert_eq!(env.data[0].usage_count, 2);

    call::<Value>(&app, empty_request("DELETE", &format!("/articles/{}", article.id))).await;
    let env: Envelope<Value> = call(&app, empty_request("GET", "/tags/stats")).await;
    assert_eq!(env.data["totalTags"], 1);
    assert_eq!(env.data["totalUsage"], 1);

    let env: Envelope<Value> = call(&app, empty_request("GET", "/tags/cloud")).await;
    assert_eq!(env.data[0]["name"], "async");
    assert_eq!(env.data[0]["value"], 1);
}

#[tokio::test]
async fn tag_facets_update_in_place() {
    let app = app();
    let tag: Envelope<Tag> = call(&app, json_request("POST", "/tags", r#"{"name":"ml"}"#)).await;
    let id = tag.data.id;

    call::<Value>(&app, json_request("PUT", &format!("/tags/{id}/color"), r##"{"color":"#ff0000"}"##)).await;
    call::<Value>(&app, json_request("PUT", &format!("/tags/{id}/status"), r#"{"status":"INACTIVE"}"#)).await;
    call::<Value>(&app, json_request("PUT", &format!("/tags/{id}/sort"), r#"{"sortOrder":7}"#)).await;

    let env: Envelope<Tag> = call(&app, empty_request("GET", &format!("/tags/{id}"))).await;
    assert_eq!(env.data.color.as_deref(), Some("#ff0000"));
    assert_eq!(env.data.sort_order, 7);

    let env: Envelope<Vec<Tag>> = call(&app, empty_request("GET", "/tags/enabled")).await;
    assert!(env.data.is_empty());

    let env: Envelope<Vec<Tag>> = call(&app, empty_request("GET", "/tags/search?keyword=ML")).await;
    assert_eq!(env.data.len(), 1);
}
