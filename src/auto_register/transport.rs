//! Backend HTTP transport capability
//!
//! One operation: POST a JSON string body and report the status code plus
//! response body. The controller only ever looks at those two fields, so a
//! scripted fake covers it completely under test.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// Status code and body of a backend response
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// POST capability consumed by the registration controller
pub trait BackendTransport {
    /// POST `body` as `application/json` to `url`
    fn post_json(
        &self,
        url: &str,
        body: String,
    ) -> impl std::future::Future<Output = crate::Result<HttpReply>>;
}

/// Production transport over `reqwest::Client`
///
/// Bounded request timeout so a stalled backend cannot block the drive loop
/// indefinitely. Redirects are disabled: a redirect would silently turn the
/// POST into a GET.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration, root_ca: Option<reqwest::Certificate>) -> Self {
        let mut builder = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .redirect(reqwest::redirect::Policy::none());

        if let Some(cert) = root_ca {
            builder = builder.add_root_certificate(cert);
        }

        let http = builder.build().expect("Failed to build HTTP client");

        Self { http }
    }
}

impl BackendTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> crate::Result<HttpReply> {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(HttpReply { status, body })
    }
}
