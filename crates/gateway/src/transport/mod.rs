// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP transport for the gateway: router, CORS, cookie capture.

pub mod cookies;
pub mod http_auth;
pub mod http_qa;
pub mod http_resume;
pub mod http_user;

use std::sync::Arc;

use axum::http::header::{CONTENT_TYPE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, Method};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::GatewayError;
use crate::state::GatewayState;

/// Build the axum `Router` with all gateway routes.
pub fn build_router(state: Arc<GatewayState>) -> Router {
    // Browser-credentialed CORS: mirror the origin (a wildcard is rejected
    // when cookies are involved) and expose Set-Cookie for renewal.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .expose_headers([SET_COOKIE]);

    Router::new()
        // Liveness (no upstream call)
        .route("/api/v1/health", get(health))
        // Session lifecycle
        .route("/api/user/auth/register", post(http_auth::register))
        .route("/api/user/auth/login", post(http_auth::login))
        .route("/api/user/auth/check", get(http_auth::check))
        .route("/api/user/auth/refresh", get(http_auth::refresh))
        .route("/api/user/auth/logout", delete(http_auth::logout))
        // Profile
        .route(
            "/api/user",
            get(http_user::profile_get)
                .put(http_user::profile_update)
                .delete(http_user::profile_delete),
        )
        // Questionnaire
        .route("/api/qa/basic", get(http_qa::basic_questions))
        .route("/api/qa/labels", post(http_qa::generate_labels))
        // Resume documents
        .route("/api/resume/list", get(http_resume::list))
        .route("/api/resume/pdf/create", post(http_resume::create))
        .route("/api/resume/pdf/{id}", get(http_resume::fetch_pdf))
        .route("/api/resume/{id}", delete(http_resume::remove))
        .fallback(|| async { GatewayError::NotFound.to_http_response("no such route") })
        // Middleware (outermost last: CORS answers preflights before
        // cookie capture runs).
        .layer(middleware::from_fn(cookies::capture_cookies))
        .layer(cors)
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
}

/// `GET /api/v1/health`
async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "running".to_owned() })
}

/// Inbound `Content-Type`, forwarded alongside the raw body.
pub(crate) fn content_type(headers: &HeaderMap) -> Option<HeaderValue> {
    headers.get(CONTENT_TYPE).cloned()
}
