// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-request proxy orchestration: forward, renew at most once, retry at
//! most once.

pub mod respond;

use axum::http::HeaderValue;

use crate::credential::{RenewalOutcome, RenewedSession, SessionCredential};
use crate::state::GatewayState;
use crate::upstream::client::{ForwardOutcome, UpstreamError, UpstreamResponse};
use crate::upstream::UpstreamRequest;

/// Whether an invocation may renew the session on auth failure.
///
/// Disabled for anonymous routes (registration, login) and for calls that
/// reach the refresh endpoint itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renewal {
    Enabled,
    Disabled,
}

/// Final outcome of one proxy invocation.
///
/// `renewed_cookies` are the instructions collected during renewal; they are
/// relayed on the outbound response whether the retry succeeded or not, so
/// the browser always learns about a rotated credential.
#[derive(Debug)]
pub enum ProxyResult {
    /// Upstream answered; relay its response.
    Completed { response: UpstreamResponse, renewed_cookies: Vec<HeaderValue> },
    /// Renewal failed: clear the session cookie and redirect to login.
    Escalated,
    /// Upstream failed in a way renewal cannot (or may not) recover.
    Failed { error: UpstreamError, renewed_cookies: Vec<HeaderValue> },
}

/// Invocation steps. The machine only moves forward; renewal and retry
/// each happen at most once, which bounds an invocation to three upstream
/// calls (forward, refresh, retry).
enum Step {
    Forwarding,
    Renewing,
    Retrying(RenewedSession),
}

/// Drive one inbound request to its final [`ProxyResult`].
pub async fn invoke(
    state: &GatewayState,
    request: UpstreamRequest,
    credential: &SessionCredential,
    renewal: Renewal,
) -> ProxyResult {
    let mut step = Step::Forwarding;

    loop {
        match step {
            Step::Forwarding => match state.client.forward(&request, credential).await {
                ForwardOutcome::Success(response) => {
                    return ProxyResult::Completed { response, renewed_cookies: Vec::new() }
                }
                ForwardOutcome::Error(error) => {
                    return ProxyResult::Failed { error, renewed_cookies: Vec::new() }
                }
                ForwardOutcome::AuthFailure(error) => {
                    if renewal == Renewal::Disabled || credential.is_anonymous() {
                        // Nothing to renew; surface the upstream's own error.
                        return ProxyResult::Failed { error, renewed_cookies: Vec::new() };
                    }
                    tracing::debug!(
                        upstream = request.upstream.as_str(),
                        path = %request.path,
                        "credential rejected, renewing session"
                    );
                    step = Step::Renewing;
                }
            },

            Step::Renewing => match state.renewer.renew(&state.client, credential).await {
                RenewalOutcome::Renewed(renewed) => step = Step::Retrying(renewed),
                RenewalOutcome::Failed => {
                    tracing::info!(
                        upstream = request.upstream.as_str(),
                        path = %request.path,
                        "session renewal failed, forcing logout"
                    );
                    return ProxyResult::Escalated;
                }
            },

            Step::Retrying(renewed) => {
                // Exactly one retry. A second auth failure is surfaced as a
                // plain upstream error, never renewed again.
                return match state.client.forward(&request, &renewed.credential).await {
                    ForwardOutcome::Success(response) => ProxyResult::Completed {
                        response,
                        renewed_cookies: renewed.set_cookies,
                    },
                    ForwardOutcome::AuthFailure(error) => {
                        tracing::warn!(
                            upstream = request.upstream.as_str(),
                            path = %request.path,
                            "renewed credential rejected on retry"
                        );
                        ProxyResult::Failed { error, renewed_cookies: renewed.set_cookies }
                    }
                    ForwardOutcome::Error(error) => {
                        ProxyResult::Failed { error, renewed_cookies: renewed.set_cookies }
                    }
                };
            }
        }
    }
}
