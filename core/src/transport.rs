//! The seam between request descriptors and actual network I/O.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one `HttpRequest` and hands back the raw response.
///
/// Implementations report only transport-level failures as `Err`; any HTTP
/// status, including 4xx/5xx, should come back as an `HttpResponse` so the
/// client can classify it.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, ApiError>,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self(request)
    }
}

#[cfg(feature = "ureq")]
pub use blocking::UreqTransport;

#[cfg(feature = "ureq")]
mod blocking {
    use ureq::{Agent, RequestBuilder};

    use super::Transport;
    use crate::config::ClientConfig;
    use crate::error::ApiError;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Blocking transport backed by a `ureq` agent.
    ///
    /// Status-as-error is disabled so 4xx/5xx responses are returned as data.
    #[derive(Debug, Clone)]
    pub struct UreqTransport {
        agent: Agent,
    }

    impl UreqTransport {
        pub fn new(config: &ClientConfig) -> Self {
            let agent = Agent::config_builder()
                .http_status_as_error(false)
                .timeout_global(Some(config.timeout))
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl Transport for UreqTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            let url = request.url();
            let headers = request.headers.as_slice();
            let body = request.body.as_deref();

            let result = match (request.method, body) {
                (HttpMethod::Get, _) => with_headers(self.agent.get(&url), headers).call(),
                (HttpMethod::Delete, None) => with_headers(self.agent.delete(&url), headers).call(),
                (HttpMethod::Delete, Some(body)) => {
                    with_headers(self.agent.delete(&url).force_send_body(), headers).send(body.as_bytes())
                }
                (HttpMethod::Post, Some(body)) => {
                    with_headers(self.agent.post(&url), headers).send(body.as_bytes())
                }
                (HttpMethod::Post, None) => with_headers(self.agent.post(&url), headers).send_empty(),
                (HttpMethod::Put, Some(body)) => {
                    with_headers(self.agent.put(&url), headers).send(body.as_bytes())
                }
                (HttpMethod::Put, None) => with_headers(self.agent.put(&url), headers).send_empty(),
            };
            let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    (name.as_str().to_string(), value.to_str().unwrap_or_default().to_string())
                })
                .collect();
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            Ok(HttpResponse { status, headers, body })
        }
    }

    fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }
}
