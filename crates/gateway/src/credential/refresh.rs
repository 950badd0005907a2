// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session renewal against the user service refresh endpoint.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

use crate::credential::{
    cookie_header_from_set_cookies, RenewalOutcome, RenewedSession, SessionCredential,
};
use crate::upstream::client::{ForwardOutcome, UpstreamClient};
use crate::upstream::{Upstream, UpstreamRequest};

/// Refresh endpoint on the user service. The refresh call itself is exempt
/// from renewal: an auth failure here is a failed outcome, not a recursion.
pub const REFRESH_PATH: &str = "/auth/refresh";

/// Renews session credentials, coalescing concurrent attempts.
///
/// The user service rotates single-use refresh tokens: two overlapping
/// refresh calls carrying the same cookie would invalidate each other and
/// spuriously log one caller out. Invocations that observe the same expired
/// credential therefore share a single in-flight renewal.
#[derive(Default)]
pub struct SessionRenewer {
    in_flight: Mutex<HashMap<String, Arc<OnceCell<RenewalOutcome>>>>,
}

impl SessionRenewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renew `credential`, sharing one upstream call across all concurrent
    /// invocations that present the same credential.
    pub async fn renew(
        &self,
        client: &UpstreamClient,
        credential: &SessionCredential,
    ) -> RenewalOutcome {
        let Some(key) = credential.as_deref() else {
            // Anonymous requests have nothing to renew.
            return RenewalOutcome::Failed;
        };
        let key = key.to_owned();

        let cell = {
            let mut in_flight = self.in_flight.lock().await;
            Arc::clone(in_flight.entry(key.clone()).or_insert_with(|| Arc::new(OnceCell::new())))
        };

        let outcome = cell.get_or_init(|| do_renew(client, credential)).await.clone();

        // Drop the marker once resolved so a later expiry of the renewed
        // credential starts a fresh attempt.
        self.in_flight.lock().await.remove(&key);

        outcome
    }
}

async fn do_renew(client: &UpstreamClient, credential: &SessionCredential) -> RenewalOutcome {
    let request = UpstreamRequest::get(Upstream::UserService, REFRESH_PATH);

    match client.forward(&request, credential).await {
        ForwardOutcome::Success(response) => {
            let renewed = cookie_header_from_set_cookies(&response.set_cookies);
            if renewed.is_anonymous() {
                // A refresh that sets no cookies cannot authenticate a retry.
                tracing::warn!("refresh endpoint returned no set-cookie instructions");
                return RenewalOutcome::Failed;
            }
            tracing::debug!(
                cookies = response.set_cookies.len(),
                "session renewed, relaying rotated cookies"
            );
            RenewalOutcome::Renewed(RenewedSession {
                credential: renewed,
                set_cookies: response.set_cookies,
            })
        }
        ForwardOutcome::AuthFailure(e) => {
            tracing::debug!(err = %e, "refresh endpoint rejected the credential");
            RenewalOutcome::Failed
        }
        ForwardOutcome::Error(e) => {
            // An unreachable refresh endpoint leaves the session untrusted
            // either way; treated the same as a rejection.
            tracing::warn!(err = %e, "refresh endpoint unreachable");
            RenewalOutcome::Failed
        }
    }
}
