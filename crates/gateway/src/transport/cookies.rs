// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inbound cookie capture.

use axum::extract::Request;
use axum::http::header::COOKIE;
use axum::middleware::Next;
use axum::response::Response;

use crate::credential::SessionCredential;

/// Capture the raw `Cookie` header as the request's session credential.
///
/// Runs before every handler. The value is never parsed; the credential is
/// opaque and forwarded to upstreams byte-for-byte.
pub async fn capture_cookies(mut req: Request, next: Next) -> Response {
    let credential = SessionCredential::from_cookie_header(
        req.headers().get(COOKIE).and_then(|v| v.to_str().ok()),
    );
    req.extensions_mut().insert(credential);
    next.run(req).await
}
