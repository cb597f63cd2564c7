//! Health check probe logic.
//!
//! A probe answers one question for one URL: did a plain GET come back
//! with a 2xx status? Every other outcome collapses into a non-healthy
//! [`ProbeResult`]; nothing here returns an error.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use http::Uri;
use tracing::debug;

use lfg_core::config::DEFAULT_PROBE_TIMEOUT;

/// Boxed future returned by [`Probe`] implementations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Result of a single health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    /// The health endpoint returned 2xx.
    Healthy,
    /// The health endpoint answered with a non-2xx status.
    Unhealthy,
    /// The probe could not be executed (bad URL, connection error, timeout).
    Failed,
}

impl ProbeResult {
    pub fn is_healthy(self) -> bool {
        self == ProbeResult::Healthy
    }
}

/// A reachability check against a URL.
pub trait Probe: Send + Sync {
    fn probe<'a>(&'a self, url: &'a str) -> BoxFuture<'a, ProbeResult>;
}

impl<P: Probe + ?Sized> Probe for Arc<P> {
    fn probe<'a>(&'a self, url: &'a str) -> BoxFuture<'a, ProbeResult> {
        (**self).probe(url)
    }
}

/// Probe that issues a plain HTTP/1.1 GET.
#[derive(Debug, Clone, Copy)]
pub struct HttpProbe {
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT)
    }
}

impl Probe for HttpProbe {
    fn probe<'a>(&'a self, url: &'a str) -> BoxFuture<'a, ProbeResult> {
        Box::pin(http_probe(url, self.timeout))
    }
}

/// Perform an HTTP health probe against `url`.
///
/// Sends `GET` with `Content-Type: application/json`, no body and no
/// credentials. Returns `Healthy` if the response is 2xx, `Unhealthy` for
/// any other status, or `Failed` if the URL is unusable or the connection
/// fails or times out. The response body is never read.
pub async fn http_probe(url: &str, timeout: Duration) -> ProbeResult {
    let uri: Uri = match url.parse() {
        Ok(uri) => uri,
        Err(e) => {
            debug!(error = %e, %url, "health probe url invalid");
            return ProbeResult::Failed;
        }
    };

    if uri.scheme_str() != Some("http") {
        debug!(%url, "health probe only supports http:// urls");
        return ProbeResult::Failed;
    }
    let Some(authority) = uri.authority().cloned() else {
        debug!(%url, "health probe url has no host");
        return ProbeResult::Failed;
    };
    let address = format!("{}:{}", authority.host(), authority.port_u16().unwrap_or(80));
    // Userinfo in the authority must not reach the wire.
    let host = match authority.port_u16() {
        Some(port) => format!("{}:{port}", authority.host()),
        None => authority.host().to_string(),
    };
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());

    let result = tokio::time::timeout(timeout, async {
        let stream = match tokio::net::TcpStream::connect(&address).await {
            Ok(s) => s,
            Err(e) => {
                debug!(error = %e, %url, "health probe connection failed");
                return ProbeResult::Failed;
            }
        };

        let io = hyper_util::rt::TokioIo::new(stream);
        let (mut sender, conn) = match hyper::client::conn::http1::handshake(io).await {
            Ok(pair) => pair,
            Err(e) => {
                debug!(error = %e, %url, "health probe handshake failed");
                return ProbeResult::Failed;
            }
        };

        // Drive the connection in the background.
        tokio::spawn(async move {
            let _ = conn.await;
        });

        let req = match http::Request::builder()
            .method(http::Method::GET)
            .uri(path.as_str())
            .header(http::header::HOST, host.as_str())
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::USER_AGENT, "lfg-health/0.1")
            .body(http_body_util::Empty::<bytes::Bytes>::new())
        {
            Ok(req) => req,
            Err(e) => {
                debug!(error = %e, %url, "health probe request invalid");
                return ProbeResult::Failed;
            }
        };

        match sender.send_request(req).await {
            Ok(resp) => {
                if resp.status().is_success() {
                    ProbeResult::Healthy
                } else {
                    debug!(status = %resp.status(), %url, "health probe non-2xx");
                    ProbeResult::Unhealthy
                }
            }
            Err(e) => {
                debug!(error = %e, %url, "health probe request failed");
                ProbeResult::Failed
            }
        }
    })
    .await;

    match result {
        Ok(probe) => probe,
        Err(_) => {
            debug!(%url, "health probe timed out");
            ProbeResult::Failed
        }
    }
}
