//! HTTP capability the client sends its requests through.
//!
//! [`HttpClient`] is the seam: the client only needs a way to execute a GET
//! with a fixed header set and to swap the outbound proxy. [`ReqwestTransport`]
//! is the default implementation and keeps one cookie jar for its whole
//! lifetime, so the cookies seeded by the warm-up request are replayed on
//! every later call.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::header::HeaderMap;
use reqwest::{Method, Proxy, StatusCode};
use tracing::debug;
use url::Url;

/// Boxed error returned by transports.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A request handed to the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers,
        }
    }
}

/// Status and raw body of a response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Transport used by [`Client`](crate::Client).
///
/// Implementations own the cookie store and any fingerprint profile.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends the request and reads the whole body.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;

    /// Routes all further requests through `proxy_url`. An empty string
    /// removes the proxy.
    fn set_proxy(&self, proxy_url: &str) -> Result<(), BoxError>;

    /// The proxy currently in use, or an empty string.
    fn proxy(&self) -> String;
}

struct Inner {
    client: reqwest::Client,
    proxy: String,
}

/// [`HttpClient`] backed by `reqwest`.
pub struct ReqwestTransport {
    jar: Arc<Jar>,
    timeout: Duration,
    inner: RwLock<Inner>,
}

impl ReqwestTransport {
    /// Builds a transport with the given request timeout and optional proxy.
    pub fn new(timeout: Duration, proxy: Option<&str>) -> Result<Self, BoxError> {
        let jar = Arc::new(Jar::default());
        let proxy = proxy.unwrap_or_default();
        let client = build_client(&jar, timeout, proxy)?;

        Ok(Self {
            jar,
            timeout,
            inner: RwLock::new(Inner {
                client,
                proxy: proxy.to_string(),
            }),
        })
    }
}

fn build_client(jar: &Arc<Jar>, timeout: Duration, proxy: &str) -> Result<reqwest::Client, BoxError> {
    let mut builder = reqwest::Client::builder()
        .cookie_provider(Arc::clone(jar))
        .timeout(timeout);

    if !proxy.is_empty() {
        let proxy_url = Url::parse(proxy)?;
        builder = builder.proxy(Proxy::all(proxy_url)?);
    }

    Ok(builder.build()?)
}

#[async_trait]
impl HttpClient for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        // reqwest::Client is a handle; clone it so the lock is not held across awaits.
        let client = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .client
            .clone();

        let response = client
            .request(request.method, &request.url)
            .headers(request.headers)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }

    fn set_proxy(&self, proxy_url: &str) -> Result<(), BoxError> {
        let client = build_client(&self.jar, self.timeout, proxy_url)?;
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.client = client;
        inner.proxy = proxy_url.to_string();
        debug!(proxy = proxy_url, "transport proxy updated");
        Ok(())
    }

    fn proxy(&self) -> String {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .proxy
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_roundtrip() {
        let transport = ReqwestTransport::new(Duration::from_secs(5), None).unwrap();
        assert_eq!(transport.proxy(), "");

        transport.set_proxy("http://127.0.0.1:8888").unwrap();
        assert_eq!(transport.proxy(), "http://127.0.0.1:8888");

        transport.set_proxy("").unwrap();
        assert_eq!(transport.proxy(), "");
    }

    #[test]
    fn test_invalid_proxy_keeps_previous() {
        let transport =
            ReqwestTransport::new(Duration::from_secs(5), Some("http://127.0.0.1:8888")).unwrap();
        assert!(transport.set_proxy("not a url").is_err());
        assert_eq!(transport.proxy(), "http://127.0.0.1:8888");
    }
}
