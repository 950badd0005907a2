// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Profile routes, forwarded to the user service.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use axum::Extension;
use bytes::Bytes;

use crate::credential::SessionCredential;
use crate::proxy::{self, respond, Renewal};
use crate::state::GatewayState;
use crate::transport::content_type;
use crate::upstream::{Upstream, UpstreamRequest};

const PROFILE_PATH: &str = "/users/info";

/// `GET /api/user`
pub async fn profile_get(
    State(s): State<Arc<GatewayState>>,
    Extension(credential): Extension<SessionCredential>,
) -> Response {
    let request = UpstreamRequest::get(Upstream::UserService, PROFILE_PATH);
    let result = proxy::invoke(&s, request, &credential, Renewal::Enabled).await;
    respond::apply(&s, result)
}

/// `PUT /api/user`
pub async fn profile_update(
    State(s): State<Arc<GatewayState>>,
    Extension(credential): Extension<SessionCredential>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = UpstreamRequest::new(Method::PUT, Upstream::UserService, PROFILE_PATH)
        .with_body(content_type(&headers), body);
    let result = proxy::invoke(&s, request, &credential, Renewal::Enabled).await;
    respond::apply(&s, result)
}

/// `DELETE /api/user` — the body (if any) is forwarded; the upstream
/// expects account-deletion confirmation fields there.
pub async fn profile_delete(
    State(s): State<Arc<GatewayState>>,
    Extension(credential): Extension<SessionCredential>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = UpstreamRequest::new(Method::DELETE, Upstream::UserService, PROFILE_PATH)
        .with_body(content_type(&headers), body);
    let result = proxy::invoke(&s, request, &credential, Renewal::Enabled).await;
    respond::apply(&s, result)
}
