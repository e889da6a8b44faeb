//! Typed request descriptors.
//!
//! # Design
//! An `ApiCall<T>` pairs an `HttpRequest` with the type its envelope `data`
//! decodes to. The build half is done by `ContentClient`; the parse half
//! lives here so every operation shares one envelope decoder. `send` is a
//! convenience that runs the request through a `Transport` and parses the
//! result. Transport errors pass through untouched.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::ApiResponse;

/// A request whose successful response decodes to `T`.
pub struct ApiCall<T> {
    request: HttpRequest,
    success_code: i64,
    _response: PhantomData<fn() -> T>,
}

/// Envelope as it arrives; `data` stays untyped until the code is checked
/// and may be absent for void endpoints.
type RawEnvelope = ApiResponse<Option<Value>>;

impl<T> ApiCall<T> {
    pub(crate) fn new(request: HttpRequest, success_code: i64) -> Self {
        Self {
            request,
            success_code,
            _response: PhantomData,
        }
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn into_request(self) -> HttpRequest {
        self.request
    }
}

impl<T: DeserializeOwned> ApiCall<T> {
    /// Decode a response produced by executing `self.request()`.
    pub fn parse(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response)?;
        let envelope: RawEnvelope = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        if envelope.code != self.success_code {
            debug!(
                method = %self.request.method,
                path = %self.request.path,
                code = envelope.code,
                message = %envelope.message,
                "envelope reported failure"
            );
            return Err(ApiError::Api {
                code: envelope.code,
                message: envelope.message,
            });
        }
        serde_json::from_value(envelope.data.unwrap_or(Value::Null))
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Execute through `transport` and decode.
    pub fn send<R: Transport + ?Sized>(&self, transport: &R) -> Result<T, ApiError> {
        debug!(method = %self.request.method, url = %self.request.url(), "sending request");
        let response = transport.execute(&self.request)?;
        self.parse(response)
    }
}

impl<T> Clone for ApiCall<T> {
    fn clone(&self) -> Self {
        Self::new(self.request.clone(), self.success_code)
    }
}

impl<T> fmt::Debug for ApiCall<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCall")
            .field("request", &self.request)
            .field("success_code", &self.success_code)
            .field("response", &std::any::type_name::<T>())
            .finish()
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
