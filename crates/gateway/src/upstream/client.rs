// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP client for the configured upstream services.

use std::fmt;

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use bytes::Bytes;
use reqwest::Client;

use crate::config::GatewayConfig;
use crate::credential::SessionCredential;
use crate::upstream::{Upstream, UpstreamRequest};

/// Forwards requests to the configured upstreams. Pure forwarding: one
/// network call per [`forward`](UpstreamClient::forward), no retries here.
pub struct UpstreamClient {
    user_service: String,
    ai_service: String,
    resume_storage: String,
    client: Client,
}

/// Result of forwarding one request to an upstream.
#[derive(Debug)]
pub enum ForwardOutcome {
    /// 2xx from upstream; raw response to relay.
    Success(UpstreamResponse),
    /// 401/403: upstream rejected the credential. Recoverable by renewal;
    /// carries the upstream error for when renewal is unavailable or spent.
    AuthFailure(UpstreamError),
    /// Any other failure. Never recovered by renewal.
    Error(UpstreamError),
}

/// Raw upstream response. Only body-type headers and cookie instructions
/// survive; upstream-internal headers are not relayed to the browser.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub content_disposition: Option<HeaderValue>,
    pub set_cookies: Vec<HeaderValue>,
    pub body: Bytes,
}

/// Upstream failure: an HTTP error status, or a transport error (no status).
#[derive(Debug, Clone)]
pub struct UpstreamError {
    pub status: Option<StatusCode>,
    pub message: String,
    pub body: Bytes,
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "upstream returned {status}: {}", self.message),
            None => write!(f, "upstream unreachable: {}", self.message),
        }
    }
}

impl UpstreamClient {
    pub fn new(config: &GatewayConfig) -> Self {
        let client = Client::builder()
            .timeout(config.upstream_timeout())
            // Upstream redirects are relayed to the browser, not followed.
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_default();
        Self {
            user_service: config.user_service_url.trim_end_matches('/').to_owned(),
            ai_service: config.ai_service_url.trim_end_matches('/').to_owned(),
            resume_storage: config.resume_service_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    fn url(&self, upstream: Upstream, path: &str) -> String {
        let base = match upstream {
            Upstream::UserService => &self.user_service,
            Upstream::AiService => &self.ai_service,
            Upstream::ResumeStorage => &self.resume_storage,
        };
        format!("{base}{path}")
    }

    /// Forward one request to its upstream and classify the result.
    ///
    /// 401/403 become [`ForwardOutcome::AuthFailure`]; other non-2xx
    /// statuses and transport failures (timeouts included) become
    /// [`ForwardOutcome::Error`]. Successful bodies are relayed untouched.
    pub async fn forward(
        &self,
        request: &UpstreamRequest,
        credential: &SessionCredential,
    ) -> ForwardOutcome {
        let url = self.url(request.upstream, &request.path);

        let mut req = self.client.request(request.method.clone(), &url);
        if let Some(cookie) = credential.as_deref() {
            req = req.header(COOKIE, cookie);
        }
        if let Some(ref content_type) = request.content_type {
            req = req.header(CONTENT_TYPE, content_type.clone());
        }
        if let Some(ref body) = request.body {
            req = req.body(body.clone());
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(
                    upstream = request.upstream.as_str(),
                    url = %url,
                    err = %e,
                    "upstream request failed"
                );
                return ForwardOutcome::Error(UpstreamError {
                    status: None,
                    message: e.to_string(),
                    body: Bytes::new(),
                });
            }
        };

        let status = resp.status();
        let content_type = resp.headers().get(CONTENT_TYPE).cloned();
        let content_disposition = resp.headers().get(CONTENT_DISPOSITION).cloned();
        let set_cookies: Vec<HeaderValue> =
            resp.headers().get_all(SET_COOKIE).iter().cloned().collect();

        let body = match resp.bytes().await {
            Ok(body) => body,
            Err(e) => {
                return ForwardOutcome::Error(UpstreamError {
                    status: Some(status),
                    message: format!("failed to read upstream body: {e}"),
                    body: Bytes::new(),
                })
            }
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return ForwardOutcome::AuthFailure(UpstreamError {
                status: Some(status),
                message: message_from_body(status, &body),
                body,
            });
        }

        if !status.is_success() {
            return ForwardOutcome::Error(UpstreamError {
                status: Some(status),
                message: message_from_body(status, &body),
                body,
            });
        }

        ForwardOutcome::Success(UpstreamResponse {
            status,
            content_type,
            content_disposition,
            set_cookies,
            body,
        })
    }
}

/// Short error message from the upstream body, falling back to the status
/// line when the body is empty, binary, or unreasonably long.
fn message_from_body(status: StatusCode, body: &Bytes) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() || text.len() > 512 {
        status.canonical_reason().unwrap_or("upstream error").to_owned()
    } else {
        text.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GatewayConfig {
        GatewayConfig {
            host: "127.0.0.1".into(),
            port: 0,
            user_service_url: "http://localhost:80/user_service/api/v001/".into(),
            ai_service_url: "http://localhost:80/ai_service/api/v001".into(),
            resume_service_url: "http://localhost:80/resume_storage/api/v001".into(),
            upstream_timeout_ms: 1000,
            session_cookie: "session".into(),
            login_path: "/auth".into(),
        }
    }

    #[test]
    fn url_joins_base_and_path() {
        // Building a reqwest Client needs a rustls crypto provider installed,
        // exactly as `run()` does in production before constructing state.
        let _ = rustls::crypto::ring::default_provider().install_default();
        let client = UpstreamClient::new(&test_config());

        // Trailing slash on the configured base is normalized away.
        assert_eq!(
            client.url(Upstream::UserService, "/auth/refresh"),
            "http://localhost:80/user_service/api/v001/auth/refresh"
        );
        assert_eq!(
            client.url(Upstream::ResumeStorage, "/users/resume/42"),
            "http://localhost:80/resume_storage/api/v001/users/resume/42"
        );
    }

    #[test]
    fn message_prefers_short_text_bodies() {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        assert_eq!(message_from_body(status, &Bytes::from_static(b"boom")), "boom");
        assert_eq!(message_from_body(status, &Bytes::new()), "Internal Server Error");

        let long = Bytes::from(vec![b'x'; 1024]);
        assert_eq!(message_from_body(status, &long), "Internal Server Error");
    }
}
