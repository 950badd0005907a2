// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resume document routes, forwarded to the storage service.
//!
//! Fetch responses are generated PDFs; their bytes are relayed exactly as
//! the storage service produced them.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use axum::Extension;
use bytes::Bytes;

use crate::credential::SessionCredential;
use crate::proxy::{self, respond, Renewal};
use crate::state::GatewayState;
use crate::transport::content_type;
use crate::upstream::{Upstream, UpstreamRequest};

/// `GET /api/resume/list`
pub async fn list(
    State(s): State<Arc<GatewayState>>,
    Extension(credential): Extension<SessionCredential>,
) -> Response {
    let request = UpstreamRequest::get(Upstream::ResumeStorage, "/users/resume/list");
    let result = proxy::invoke(&s, request, &credential, Renewal::Enabled).await;
    respond::apply(&s, result)
}

/// `POST /api/resume/pdf/create`
pub async fn create(
    State(s): State<Arc<GatewayState>>,
    Extension(credential): Extension<SessionCredential>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = UpstreamRequest::new(Method::POST, Upstream::ResumeStorage, "/users/resume")
        .with_body(content_type(&headers), body);
    let result = proxy::invoke(&s, request, &credential, Renewal::Enabled).await;
    respond::apply(&s, result)
}

/// `GET /api/resume/pdf/{id}` — binary passthrough.
pub async fn fetch_pdf(
    State(s): State<Arc<GatewayState>>,
    Extension(credential): Extension<SessionCredential>,
    Path(id): Path<String>,
) -> Response {
    let request = UpstreamRequest::get(Upstream::ResumeStorage, format!("/users/resume/{id}"));
    let result = proxy::invoke(&s, request, &credential, Renewal::Enabled).await;
    respond::apply(&s, result)
}

/// `DELETE /api/resume/{id}`
pub async fn remove(
    State(s): State<Arc<GatewayState>>,
    Extension(credential): Extension<SessionCredential>,
    Path(id): Path<String>,
) -> Response {
    let request = UpstreamRequest::new(
        Method::DELETE,
        Upstream::ResumeStorage,
        format!("/users/resume/{id}"),
    );
    let result = proxy::invoke(&s, request, &credential, Renewal::Enabled).await;
    respond::apply(&s, result)
}
