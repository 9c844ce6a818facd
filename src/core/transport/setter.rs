//! Outbound `Set-Cookie` emission.

use crate::core::cookie::Cookie;
use http::header::SET_COOKIE;
use http::{HeaderMap, HeaderValue};
use tracing::warn;

/// Destination for rendered cookies.
///
/// When a cookie has `overwrite` set, implementations drop every queued
/// header for the same name before appending it.
pub trait CookieSink {
    fn push(&mut self, cookie: &Cookie);
}

fn same_name(header: &str, name: &str) -> bool {
    header
        .strip_prefix(name)
        .is_some_and(|rest| rest.starts_with('='))
}

/// Ordered list of `Set-Cookie` header values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetCookieList {
    headers: Vec<String>,
}

impl SetCookieList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn into_headers(self) -> Vec<String> {
        self.headers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl CookieSink for SetCookieList {
    fn push(&mut self, cookie: &Cookie) {
        if cookie.options().overwrite {
            self.headers.retain(|h| !same_name(h, cookie.name()));
        }
        self.headers.push(cookie.to_header());
    }
}

impl CookieSink for HeaderMap {
    fn push(&mut self, cookie: &Cookie) {
        let header = cookie.to_header();
        let value = match HeaderValue::from_str(&header) {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    cookie = %cookie.name(),
                    error = %e,
                    "Skipping unencodable Set-Cookie header"
                );
                return;
            }
        };

        if cookie.options().overwrite {
            let kept: Vec<HeaderValue> = self
                .get_all(SET_COOKIE)
                .iter()
                .filter(|v| !v.to_str().is_ok_and(|h| same_name(h, cookie.name())))
                .cloned()
                .collect();
            self.remove(SET_COOKIE);
            for v in kept {
                self.append(SET_COOKIE, v);
            }
        }

        self.append(SET_COOKIE, value);
    }
}
