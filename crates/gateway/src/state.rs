// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::config::GatewayConfig;
use crate::credential::refresh::SessionRenewer;
use crate::upstream::client::UpstreamClient;

/// Shared gateway state.
///
/// Everything here is read-only for the lifetime of the process except the
/// renewer's single-flight table, which guards its own interior mutability.
/// Invocations share nothing else.
pub struct GatewayState {
    pub config: GatewayConfig,
    pub client: UpstreamClient,
    pub renewer: SessionRenewer,
}

impl GatewayState {
    pub fn new(config: GatewayConfig) -> Self {
        let client = UpstreamClient::new(&config);
        Self { config, client, renewer: SessionRenewer::new() }
    }
}
