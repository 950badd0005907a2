// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session lifecycle routes: registration, login, auth check, refresh,
//! logout.
//!
//! Registration and login are anonymous: the upstream mints the session
//! and its `Set-Cookie` instructions pass through verbatim. The refresh
//! route forwards with renewal disabled, since a refresh call must never
//! recurse into another renewal.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use axum::Extension;
use bytes::Bytes;

use crate::credential::refresh::REFRESH_PATH;
use crate::credential::SessionCredential;
use crate::proxy::{self, respond, Renewal};
use crate::state::GatewayState;
use crate::transport::content_type;
use crate::upstream::{Upstream, UpstreamRequest};

/// `POST /api/user/auth/register`
pub async fn register(
    State(s): State<Arc<GatewayState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = UpstreamRequest::new(Method::POST, Upstream::UserService, "/auth/register")
        .with_body(content_type(&headers), body);
    let result =
        proxy::invoke(&s, request, &SessionCredential::anonymous(), Renewal::Disabled).await;
    respond::apply(&s, result)
}

/// `POST /api/user/auth/login`
pub async fn login(State(s): State<Arc<GatewayState>>, headers: HeaderMap, body: Bytes) -> Response {
    let request = UpstreamRequest::new(Method::POST, Upstream::UserService, "/auth/login")
        .with_body(content_type(&headers), body);
    let result =
        proxy::invoke(&s, request, &SessionCredential::anonymous(), Renewal::Disabled).await;
    respond::apply(&s, result)
}

/// `GET /api/user/auth/check` — authenticated no-op; renews like any other
/// protected call, so an expired-but-renewable session still checks out.
pub async fn check(
    State(s): State<Arc<GatewayState>>,
    Extension(credential): Extension<SessionCredential>,
) -> Response {
    let request = UpstreamRequest::get(Upstream::UserService, "/auth/check");
    let result = proxy::invoke(&s, request, &credential, Renewal::Enabled).await;
    respond::apply(&s, result)
}

/// `GET /api/user/auth/refresh` — browser-initiated renewal, forwarded
/// as-is. Renewal is disabled here by construction.
pub async fn refresh(
    State(s): State<Arc<GatewayState>>,
    Extension(credential): Extension<SessionCredential>,
) -> Response {
    let request = UpstreamRequest::get(Upstream::UserService, REFRESH_PATH);
    let result = proxy::invoke(&s, request, &credential, Renewal::Disabled).await;
    respond::apply(&s, result)
}

/// `DELETE /api/user/auth/logout` — the upstream clears its cookies; they
/// pass through verbatim. No renewal: logging out an expired session is
/// already a logout.
pub async fn logout(
    State(s): State<Arc<GatewayState>>,
    Extension(credential): Extension<SessionCredential>,
) -> Response {
    let request = UpstreamRequest::new(Method::DELETE, Upstream::UserService, "/auth/logout");
    let result = proxy::invoke(&s, request, &credential, Renewal::Disabled).await;
    respond::apply(&s, result)
}
