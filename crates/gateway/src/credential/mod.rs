// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session credential types.
//!
//! The credential is the browser's raw `Cookie` header, treated as an opaque
//! byte string end-to-end: the gateway forwards it verbatim, relays the
//! upstream's `Set-Cookie` instructions verbatim, and never parses cookie
//! attributes. The only cookie syntax assembled here is the `name=value`
//! join in [`cookie_header_from_set_cookies`] and the expiry instruction in
//! [`expire_cookie`].

pub mod refresh;

use axum::http::HeaderValue;

/// Opaque session credential: the inbound `Cookie` header, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCredential(Option<String>);

impl SessionCredential {
    /// Capture the raw `Cookie` header. Empty values count as anonymous.
    pub fn from_cookie_header(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self(Some(v.to_owned())),
            _ => Self(None),
        }
    }

    /// A credential-less (anonymous) request, e.g. registration.
    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.0.is_none()
    }
}

/// Outcome of a session renewal attempt. Produced at most once per
/// invocation; `Clone` so coalesced waiters can share it.
#[derive(Debug, Clone)]
pub enum RenewalOutcome {
    /// The refresh endpoint accepted the credential and rotated it.
    Renewed(RenewedSession),
    /// The refresh endpoint rejected the credential or was unreachable.
    Failed,
}

/// A successfully renewed session.
#[derive(Debug, Clone)]
pub struct RenewedSession {
    /// Replacement `Cookie` header for the retried upstream call.
    pub credential: SessionCredential,
    /// `Set-Cookie` instructions to relay to the browser, in upstream order.
    pub set_cookies: Vec<HeaderValue>,
}

/// Build the retry's `Cookie` header from `Set-Cookie` instructions.
///
/// Takes the `name=value` pair of each instruction (everything before the
/// first `;`); attributes like `Path` or `HttpOnly` never belong in a
/// `Cookie` header.
pub fn cookie_header_from_set_cookies(set_cookies: &[HeaderValue]) -> SessionCredential {
    let pairs: Vec<&str> = set_cookies
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or(v).trim())
        .filter(|pair| !pair.is_empty())
        .collect();

    if pairs.is_empty() {
        SessionCredential::anonymous()
    } else {
        SessionCredential(Some(pairs.join("; ")))
    }
}

/// `Set-Cookie` value that immediately expires the session cookie.
pub fn expire_cookie(name: &str) -> HeaderValue {
    let value = format!("{name}=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT");
    HeaderValue::from_str(&value).unwrap_or_else(|_| {
        HeaderValue::from_static("session=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_header_strips_attributes_and_preserves_order() {
        let set_cookies = vec![
            HeaderValue::from_static("Authorization=Bearer abc; Path=/; HttpOnly; Max-Age=900"),
            HeaderValue::from_static("Refresh-Token=xyz; Path=/; HttpOnly"),
        ];
        let credential = cookie_header_from_set_cookies(&set_cookies);
        assert_eq!(credential.as_deref(), Some("Authorization=Bearer abc; Refresh-Token=xyz"));
    }

    #[test]
    fn cookie_header_from_nothing_is_anonymous() {
        assert!(cookie_header_from_set_cookies(&[]).is_anonymous());
    }

    #[test]
    fn empty_inbound_cookie_is_anonymous() {
        assert!(SessionCredential::from_cookie_header(None).is_anonymous());
        assert!(SessionCredential::from_cookie_header(Some("")).is_anonymous());
        assert!(SessionCredential::from_cookie_header(Some("   ")).is_anonymous());
        assert!(!SessionCredential::from_cookie_header(Some("sid=1")).is_anonymous());
    }

    #[test]
    fn expire_cookie_targets_the_configured_name() {
        let value = expire_cookie("session");
        let text = value.to_str().unwrap_or_default();
        assert!(text.starts_with("session=;"));
        assert!(text.contains("Expires=Thu, 01 Jan 1970"));
    }
}
