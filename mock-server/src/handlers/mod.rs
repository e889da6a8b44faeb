//! HTTP handlers, one submodule per resource.
//!
//! Handlers are plain async functions over axum extractors that return a
//! `Reply<T>`; failures become envelopes with a non-200 `code`.

pub mod category;
pub mod content;
pub mod tag;

use serde::Deserialize;

/// `?limit=N` for bounded reads.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParam {
    pub limit: Option<usize>,
}

impl LimitParam {
    pub fn or(&self, default: usize) -> usize {
        self.limit.unwrap_or(default)
    }
}

/// `?name=..&excludeId=..` for uniqueness checks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistsParams {
    pub name: String,
    pub exclude_id: Option<u64>,
}
