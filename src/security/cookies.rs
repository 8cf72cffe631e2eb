// ABOUTME: Session cookie utilities for login and logout
// ABOUTME: Builds httpOnly SameSite cookies and extracts cookie values from request headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Training Notebook Contributors

//! Session cookie helpers
//!
//! The session token travels in one cookie, [`SESSION_COOKIE`]. Cookies are
//! always `HttpOnly`; the `Secure` flag is derived from the deployment base
//! URL and fails secure when that is unknown.

use std::env;
use std::fmt::Write;

use axum::http::{header, HeaderMap, HeaderValue};

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "auth_token";

/// `SameSite` cookie policy
#[derive(Debug, Clone, Copy)]
pub enum SameSitePolicy {
    /// Cookie only sent in first-party context
    Strict,
    /// Cookie sent on top-level navigation
    Lax,
}

/// Session cookie attributes
pub struct SessionCookie {
    value: String,
    max_age_secs: i64,
    secure: bool,
    same_site: SameSitePolicy,
}

impl SessionCookie {
    /// Build a session cookie for the given token
    ///
    /// The `Secure` flag is derived from `TRAINING_BASE_URL`: `https://`
    /// deployments set it, `http://` (local development) does not, and an
    /// unset variable defaults to secure.
    #[must_use]
    pub fn new(token: &str, max_age_secs: i64) -> Self {
        Self {
            value: token.to_owned(),
            max_age_secs,
            secure: infer_secure_flag(),
            same_site: SameSitePolicy::Lax,
        }
    }

    /// Render the `Set-Cookie` header value
    #[must_use]
    pub fn build(&self) -> String {
        let mut cookie = format!("{SESSION_COOKIE}={}", self.value);
        let _ = write!(cookie, "; Max-Age={}", self.max_age_secs);
        cookie.push_str("; Path=/; HttpOnly");
        if self.secure {
            cookie.push_str("; Secure");
        }
        match self.same_site {
            SameSitePolicy::Strict => cookie.push_str("; SameSite=Strict"),
            SameSitePolicy::Lax => cookie.push_str("; SameSite=Lax"),
        }
        cookie
    }
}

/// Attach a session cookie for the given token to the response headers
pub fn set_session_cookie(headers: &mut HeaderMap, token: &str, max_age_secs: i64) {
    let cookie = SessionCookie::new(token, max_age_secs);
    if let Ok(header_value) = HeaderValue::from_str(&cookie.build()) {
        headers.insert(header::SET_COOKIE, header_value);
    }
}

/// Attach a cookie that expires the session immediately
pub fn clear_session_cookie(headers: &mut HeaderMap) {
    let cookie = SessionCookie {
        value: String::new(),
        max_age_secs: 0,
        secure: infer_secure_flag(),
        same_site: SameSitePolicy::Lax,
    };
    if let Ok(header_value) = HeaderValue::from_str(&cookie.build()) {
        headers.insert(header::SET_COOKIE, header_value);
    }
}

fn infer_secure_flag() -> bool {
    env::var("TRAINING_BASE_URL").map_or(true, |url| url.starts_with("https://"))
}

/// Extract a cookie value from request headers
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            let name = parts.next()?.trim();
            let value = parts.next()?.trim();
            (name == cookie_name).then(|| value.to_owned())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_has_required_attributes() {
        let rendered = SessionCookie::new("tok123", 3600).build();
        assert!(rendered.starts_with("auth_token=tok123"));
        assert!(rendered.contains("Max-Age=3600"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("SameSite=Lax"));
    }

    #[test]
    fn cookie_value_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("other=1; auth_token=abc; theme=dark"),
        );
        assert_eq!(
            get_cookie_value(&headers, SESSION_COOKIE).as_deref(),
            Some("abc")
        );
        assert_eq!(get_cookie_value(&headers, "missing"), None);
    }
}
