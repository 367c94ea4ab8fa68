pub mod addresses;
pub mod billing;
pub mod parcels;
pub mod pickups;
pub mod shipments;
pub mod transport;
pub mod users;

use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::context::RequestContext;
use crate::error::{ApiError, EasyPostError, Result};
use crate::pagination::{next_page_options, Paginated};

use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};

/// Typed "no body" for calls through [`EasyPostClient::execute`].
pub(crate) const NO_BODY: Option<&()> = None;

/// HTTP client wrapper for the EasyPost REST API.
///
/// Holds only immutable configuration and a shared transport, so clones are
/// cheap and concurrent calls never interfere.
#[derive(Clone)]
pub struct EasyPostClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    auth_header: String,
    user_agent: String,
    timeout: Option<Duration>,
}

impl EasyPostClient {
    /// Build a client that talks HTTP through reqwest.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Build a client over an arbitrary transport.
    ///
    /// # Errors
    ///
    /// Returns `EasyPostError::Config` if `config.base_url` is not a valid URL.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let mut base = config.base_url;
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| EasyPostError::Config(format!("invalid base URL {base:?}: {e}")))?;

        Ok(Self {
            transport,
            base_url,
            auth_header: format!("Basic {}", STANDARD.encode(format!("{}:", config.api_key))),
            user_agent: config.user_agent,
            timeout: config.timeout,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send one request and decode the response into `T`.
    ///
    /// Every other call in this crate ends here. `path` is relative to the
    /// base URL. A `None` body sends no bytes and no `content-type`.
    ///
    /// # Errors
    ///
    /// - `Cancelled` if the context fires first
    /// - `Remote` on any non-2xx status
    /// - `Decode` if a 2xx body does not fit `T`
    /// - `Transport` / `Encode` for local failures
    pub async fn execute<B, T>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(path, query)?;

        let mut headers = vec![
            ("authorization".to_string(), self.auth_header.clone()),
            ("user-agent".to_string(), self.user_agent.clone()),
            ("accept".to_string(), "application/json".to_string()),
        ];
        let body = match body {
            Some(b) => {
                headers.push(("content-type".to_string(), "application/json".to_string()));
                Some(serde_json::to_vec(b).map_err(EasyPostError::Encode)?)
            }
            None => None,
        };

        let request = TransportRequest {
            method: method.clone(),
            url,
            headers,
            body,
        };

        let started = Instant::now();
        let timeout = ctx.timeout().or(self.timeout);
        let response = match ctx.run(timeout, self.transport.send(request)).await {
            Ok(r) => r,
            Err(e) => {
                debug!(%method, path, error = %e, "request failed");
                return Err(e);
            }
        };
        debug!(
            %method,
            path,
            status = response.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request complete"
        );

        decode_response(response)
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        self.execute(ctx, Method::GET, path, query, NO_BODY).await
    }

    /// POST a JSON body.
    pub async fn post<B, T>(&self, ctx: &RequestContext, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(ctx, Method::POST, path, &[], Some(body)).await
    }

    /// PUT a JSON body.
    pub async fn put<B, T>(&self, ctx: &RequestContext, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(ctx, Method::PUT, path, &[], Some(body)).await
    }

    /// PATCH a JSON body.
    pub async fn patch<B, T>(&self, ctx: &RequestContext, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(ctx, Method::PATCH, path, &[], Some(body)).await
    }

    /// DELETE a resource.
    pub async fn delete<T: DeserializeOwned>(&self, ctx: &RequestContext, path: &str) -> Result<T> {
        self.execute(ctx, Method::DELETE, path, &[], NO_BODY).await
    }

    /// Fetch the page after `page` from the list endpoint at `path`.
    ///
    /// See [`next_page_options`] for the cursor rules.
    pub async fn next_page<P>(
        &self,
        ctx: &RequestContext,
        path: &str,
        page: &P,
        page_size: Option<u32>,
    ) -> Result<P>
    where
        P: Paginated + DeserializeOwned,
    {
        let options = next_page_options(page, page_size)?;
        self.get(ctx, path, &options.to_query()).await
    }

    /// Resolve `path` below the base URL.
    ///
    /// `path` must be relative and already percent-encoded (see [`id_path`]).
    /// Anything that could leave the base (scheme, authority, dot segments)
    /// or smuggle in a query or fragment is rejected, so credentials only
    /// ever go to the configured host.
    fn url_for(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let invalid = |why: &str| EasyPostError::InvalidRequest(format!("invalid path {path:?}: {why}"));

        if path.starts_with("//") {
            return Err(invalid("authority not allowed"));
        }
        let relative = path.trim_start_matches('/');
        if Url::parse(relative).is_ok() {
            return Err(invalid("absolute URL not allowed"));
        }
        if relative.contains(['?', '#', '\\']) {
            return Err(invalid("query, fragment and backslash not allowed"));
        }
        if relative.split('/').any(is_dot_segment) {
            return Err(invalid("dot segments not allowed"));
        }

        let mut url = self.base_url.join(relative).map_err(|e| invalid(&e.to_string()))?;
        if url.origin() != self.base_url.origin() || !url.path().starts_with(self.base_url.path()) {
            return Err(invalid("resolves outside the API base"));
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

/// `{collection}/{id}` or `{collection}/{id}/{action}`, with `id`
/// percent-encoded as exactly one path segment.
///
/// # Errors
///
/// `InvalidRequest` if `id` is empty or a dot segment.
pub(crate) fn id_path(collection: &str, id: &str, action: Option<&str>) -> Result<String> {
    if id.is_empty() || is_dot_segment(id) {
        return Err(EasyPostError::InvalidRequest(format!("invalid resource ID {id:?}")));
    }
    let mut scratch = Url::parse("http://localhost/")
        .map_err(|e| EasyPostError::InvalidRequest(e.to_string()))?;
    scratch
        .path_segments_mut()
        .map_err(|()| EasyPostError::InvalidRequest("cannot encode path segment".into()))?
        .clear()
        .push(id);
    let encoded = scratch.path().trim_start_matches('/');

    Ok(match action {
        Some(action) => format!("{collection}/{encoded}/{action}"),
        None => format!("{collection}/{encoded}"),
    })
}

// WHATWG URL parsing treats `%2e` as `.`.
fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
    )
}

impl std::fmt::Debug for EasyPostClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EasyPostClient")
            .field("transport", &self.transport)
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Map a raw response onto `T` or a classified error.
///
/// An empty 2xx body decodes as JSON `null`.
fn decode_response<T: DeserializeOwned>(response: TransportResponse) -> Result<T> {
    if !(200..300).contains(&response.status) {
        let err = ApiError::from_response(response.status, &response.body);
        warn!(status = err.status, code = ?err.code, "request rejected");
        return Err(err.into());
    }

    let text = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(text).map_err(|source| EasyPostError::Decode {
        body: response.body.clone(),
        source,
    })
}
