//! Typed client core for the ArkOne content API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! article, AI-news, category and tag resources without touching the network
//! (host-does-IO pattern). A `Transport` executes the round-trip when the
//! caller wants one; `UreqTransport` is provided behind the `ureq` feature.
//! The `routes` module holds the client-side navigation table.
//!
//! # Design
//! - `ContentClient` is stateless: base URL plus envelope success code.
//! - Every operation returns an `ApiCall<T>`, so the build half and the
//!   typed parse half stay paired.
//! - All responses share the `{code, message, data}` envelope; failures are
//!   surfaced, never retried or swallowed.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod call;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod routes;
pub mod transport;
pub mod types;

pub use call::ApiCall;
pub use client::{ContentAction, ContentClient};
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use routes::{Loading, Route, RouteEntry, ROUTES};
pub use transport::Transport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::*;
