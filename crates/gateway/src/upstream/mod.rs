// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named upstream services and request descriptors.

pub mod client;

use axum::http::{HeaderValue, Method};
use bytes::Bytes;

/// The upstream services the gateway fronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    UserService,
    AiService,
    ResumeStorage,
}

impl Upstream {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserService => "user_service",
            Self::AiService => "ai_service",
            Self::ResumeStorage => "resume_storage",
        }
    }
}

/// One upstream HTTP call: target service, method, path under its base,
/// and an optional body forwarded byte-for-byte (JSON is never
/// re-serialized; PDF and multipart payloads pass through unmodified).
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub upstream: Upstream,
    pub method: Method,
    pub path: String,
    pub content_type: Option<HeaderValue>,
    pub body: Option<Bytes>,
}

impl UpstreamRequest {
    pub fn new(method: Method, upstream: Upstream, path: impl Into<String>) -> Self {
        Self { upstream, method, path: path.into(), content_type: None, body: None }
    }

    pub fn get(upstream: Upstream, path: impl Into<String>) -> Self {
        Self::new(Method::GET, upstream, path)
    }

    pub fn with_body(mut self, content_type: Option<HeaderValue>, body: Bytes) -> Self {
        self.content_type = content_type;
        self.body = Some(body);
        self
    }
}
