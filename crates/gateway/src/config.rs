// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

/// Configuration for the cvgate gateway.
///
/// Upstream base URLs default to the original docker deployment, where all
/// three services sit behind one reverse proxy on port 80.
#[derive(Debug, Clone, clap::Parser)]
pub struct GatewayConfig {
    /// Host to bind on.
    #[arg(long, default_value = "127.0.0.1", env = "CVGATE_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 3000, env = "CVGATE_PORT")]
    pub port: u16,

    /// Base URL of the user/auth service.
    #[arg(
        long,
        default_value = "http://localhost:80/user_service/api/v001",
        env = "CVGATE_USER_SERVICE_URL"
    )]
    pub user_service_url: String,

    /// Base URL of the AI question/label service.
    #[arg(
        long,
        default_value = "http://localhost:80/ai_service/api/v001",
        env = "CVGATE_AI_SERVICE_URL"
    )]
    pub ai_service_url: String,

    /// Base URL of the resume storage service.
    #[arg(
        long,
        default_value = "http://localhost:80/resume_storage/api/v001",
        env = "CVGATE_RESUME_SERVICE_URL"
    )]
    pub resume_service_url: String,

    /// Upstream request timeout in milliseconds.
    #[arg(long, default_value_t = 10_000, env = "CVGATE_UPSTREAM_TIMEOUT_MS")]
    pub upstream_timeout_ms: u64,

    /// Name of the session cookie cleared on forced logout.
    #[arg(long, default_value = "session", env = "CVGATE_SESSION_COOKIE")]
    pub session_cookie: String,

    /// Path the browser is redirected to when the session cannot be renewed.
    #[arg(long, default_value = "/auth", env = "CVGATE_LOGIN_PATH")]
    pub login_path: String,
}

impl GatewayConfig {
    pub fn upstream_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.upstream_timeout_ms)
    }
}
