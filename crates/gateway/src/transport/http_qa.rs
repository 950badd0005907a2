// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Questionnaire routes, forwarded to the AI service.

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

/// `GET /api/qa/basic` — the base question set for the resume wizard.
pub async fn basic_questions(
    State(s): State<Arc<GatewayState>>,
    Extension(credential): Extension<SessionCredential>,
) -> Response {
    let request = UpstreamRequest::get(Upstream::AiService, "/resume/basic/question");
    let result = proxy::invoke(&s, request, &credential, Renewal::Enabled).await;
    respond::apply(&s, result)
}

/// `POST /api/qa/labels` — generate labels from collected answers.
pub async fn generate_labels(
    State(s): State<Arc<GatewayState>>,
    Extension(credential): Extension<SessionCredential>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = UpstreamRequest::new(Method::POST, Upstream::AiService, "/resume/label/generate")
        .with_body(content_type(&headers), body);
    let result = proxy::invoke(&s, request, &credential, Renewal::Enabled).await;
    respond::apply(&s, result)
}
