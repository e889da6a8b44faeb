//! Stateless request builder for the content API.
//!
//! # Design
//! `ContentClient` holds only the base URL and the envelope success code and
//! carries no mutable state between calls. Every operation (defined per
//! resource under `api/`) maps its typed arguments to an `HttpRequest` and
//! wraps it in an `ApiCall<T>` naming the response type. The caller executes
//! the round-trip, either by hand or through a `Transport`.

use serde::Serialize;

use crate::call::ApiCall;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::query::to_query_pairs;

/// Synchronous, stateless client for the content API.
#[derive(Debug, Clone)]
pub struct ContentClient {
    base_url: String,
    success_code: i64,
}

/// Body-less state changes on articles and AI-news items.
///
/// Each variant is a distinct server endpoint; the pairs are not derived
/// from each other, so `Unpublish` is not "publish with false".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentAction {
    Publish,
    Unpublish,
    Top,
    Untop,
    Recommend,
    Unrecommend,
    View,
    Like,
    Unlike,
}

impl ContentAction {
    pub const ALL: [ContentAction; 9] = [
        ContentAction::Publish,
        ContentAction::Unpublish,
        ContentAction::Top,
        ContentAction::Untop,
        ContentAction::Recommend,
        ContentAction::Unrecommend,
        ContentAction::View,
        ContentAction::Like,
        ContentAction::Unlike,
    ];

    /// Trailing path segment, e.g. `/articles/{id}/publish`.
    pub fn segment(&self) -> &'static str {
        match self {
            ContentAction::Publish => "publish",
            ContentAction::Unpublish => "unpublish",
            ContentAction::Top => "top",
            ContentAction::Untop => "untop",
            ContentAction::Recommend => "recommend",
            ContentAction::Unrecommend => "unrecommend",
            ContentAction::View => "view",
            ContentAction::Like => "like",
            ContentAction::Unlike => "unlike",
        }
    }
}

impl ContentClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            success_code: crate::config::DEFAULT_SUCCESS_CODE,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            success_code: config.success_code,
            ..Self::new(&config.base_url)
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    fn call<T>(&self, request: HttpRequest) -> ApiCall<T> {
        ApiCall::new(request, self.success_code)
    }

    /// Body-less call with no query string.
    pub(crate) fn bare<T>(&self, method: HttpMethod, path: &str) -> ApiCall<T> {
        self.call(self.request(method, path))
    }

    /// GET with pre-built query pairs.
    pub(crate) fn get_pairs<T>(&self, path: &str, query: Vec<(String, String)>) -> ApiCall<T> {
        let mut request = self.request(HttpMethod::Get, path);
        request.query = query;
        self.call(request)
    }

    /// GET whose query string is the fields of `query`.
    pub(crate) fn get_query<T, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<ApiCall<T>, ApiError> {
        Ok(self.get_pairs(path, to_query_pairs(query)?))
    }

    /// Call carrying `body` as JSON.
    pub(crate) fn json<T, B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<ApiCall<T>, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut request = self.request(method, path);
        request.headers = vec![("content-type".to_string(), "application/json".to_string())];
        request.body = Some(body);
        Ok(self.call(request))
    }

    pub(crate) fn content_action(&self, resource: &str, id: u64, action: ContentAction) -> ApiCall<()> {
        self.bare(HttpMethod::Put, &format!("{resource}/{id}/{}", action.segment()))
    }

    /// GET `{resource}/{kind}?limit=N`.
    pub(crate) fn bounded_list<T>(&self, resource: &str, kind: &str, limit: u32) -> ApiCall<T> {
        self.get_pairs(
            &format!("{resource}/{kind}"),
            vec![("limit".to_string(), limit.to_string())],
        )
    }

    /// GET `{resource}/exists?name=..[&excludeId=..]`.
    pub(crate) fn name_exists(&self, resource: &str, name: &str, exclude_id: Option<u64>) -> ApiCall<bool> {
        let mut query = vec![("name".to_string(), name.to_string())];
        if let Some(id) = exclude_id {
            query.push(("excludeId".to_string(), id.to_string()));
        }
        self.get_pairs(&format!("{resource}/exists"), query)
    }

    /// DELETE `{resource}/batch` with the ids, in order, as the body.
    pub(crate) fn batch_delete(&self, resource: &str, ids: &[u64]) -> Result<ApiCall<()>, ApiError> {
        self.json(HttpMethod::Delete, &format!("{resource}/batch"), ids)
    }
}
