// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering proxy results to browser responses.

use axum::body::Body;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE, LOCATION, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::credential::expire_cookie;
use crate::error::{ErrorResponse, GatewayError};
use crate::proxy::ProxyResult;
use crate::state::GatewayState;

/// Render the final [`ProxyResult`] as the outbound response.
///
/// Cookie instructions are attached before the body is handed to the
/// transport: renewal cookies first (in the order the refresh endpoint
/// produced them), then any cookies the relayed response itself set.
pub fn apply(state: &GatewayState, result: ProxyResult) -> Response {
    match result {
        ProxyResult::Completed { response, renewed_cookies } => {
            let mut out = Response::new(Body::from(response.body));
            *out.status_mut() = response.status;

            let headers = out.headers_mut();
            for cookie in renewed_cookies {
                headers.append(SET_COOKIE, cookie);
            }
            for cookie in response.set_cookies {
                headers.append(SET_COOKIE, cookie);
            }
            if let Some(content_type) = response.content_type {
                headers.insert(CONTENT_TYPE, content_type);
            }
            if let Some(content_disposition) = response.content_disposition {
                headers.insert(CONTENT_DISPOSITION, content_disposition);
            }
            out
        }

        ProxyResult::Escalated => {
            let Ok(location) = HeaderValue::from_str(&state.config.login_path) else {
                return GatewayError::Internal
                    .to_http_response("login path is not a valid header value")
                    .into_response();
            };

            // No body: the browser must not act on anything but the redirect.
            let mut out = Response::new(Body::empty());
            *out.status_mut() = StatusCode::MOVED_PERMANENTLY;
            out.headers_mut().append(SET_COOKIE, expire_cookie(&state.config.session_cookie));
            out.headers_mut().insert(LOCATION, location);
            out
        }

        ProxyResult::Failed { error, renewed_cookies } => {
            // Mirror the upstream's status when it produced one; transport
            // failures (no status) render as a bad gateway.
            let status = error.status.unwrap_or(StatusCode::BAD_GATEWAY);
            let body =
                ErrorResponse { error: GatewayError::UpstreamError.to_error_body(error.message) };
            let mut out = (status, Json(body)).into_response();
            for cookie in renewed_cookies {
                out.headers_mut().append(SET_COOKIE, cookie);
            }
            out
        }
    }
}
