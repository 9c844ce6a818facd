//! Inbound cookie lookup.
//!
//! Extracts a single `name=value` pair from a request `Cookie` header. The
//! compiled per-name patterns live in a process-wide lock-free cache.

use http::HeaderMap;
use http::header::COOKIE;
use papaya::HashMap;
use regex::Regex;
use std::sync::OnceLock;

static PATTERNS: OnceLock<PatternCache> = OnceLock::new();

/// Source of raw cookie values for a request.
pub trait CookieSource {
    /// Returns the raw value of cookie `name`, or `None` when absent.
    fn get(&self, name: &str) -> Option<String>;
}

impl<F> CookieSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Compiled lookup patterns keyed by cookie name.
///
/// Safe to share between request handlers; entries are never evicted.
#[derive(Default)]
pub struct PatternCache {
    patterns: HashMap<String, Regex>,
}

impl PatternCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cache shared by every `CookieHeader` in the process.
    pub fn global() -> &'static Self {
        PATTERNS.get_or_init(Self::new)
    }

    /// Returns the pattern matching `name=value` for `name`, compiling it on
    /// first use.
    #[must_use]
    pub fn pattern(&self, name: &str) -> Option<Regex> {
        let patterns = self.patterns.pin();
        if let Some(re) = patterns.get(name) {
            return Some(re.clone());
        }

        let re = Regex::new(&format!(r"(?:^|;) *{}=([^;]*)", regex::escape(name))).ok()?;
        Some(patterns.get_or_insert(name.to_string(), re).clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds the first value for `name` in `header`, stripping one layer of
    /// surrounding double quotes.
    #[must_use]
    pub fn find(&self, header: &str, name: &str) -> Option<String> {
        let re = self.pattern(name)?;
        let value = re.captures(header)?.get(1)?.as_str();
        Some(unquote(value).to_string())
    }
}

fn unquote(value: &str) -> &str {
    value.strip_prefix('"').map_or(value, |rest| {
        let mut chars = rest.chars();
        chars.next_back();
        chars.as_str()
    })
}

/// Lookup over a raw `Cookie` header value.
///
/// A missing header behaves exactly like a header without the cookie.
#[derive(Debug, Clone, Copy)]
pub struct CookieHeader<'a> {
    header: Option<&'a str>,
}

impl<'a> CookieHeader<'a> {
    #[must_use]
    pub const fn new(header: Option<&'a str>) -> Self {
        Self { header }
    }
}

impl CookieSource for CookieHeader<'_> {
    fn get(&self, name: &str) -> Option<String> {
        PatternCache::global().find(self.header?, name)
    }
}

impl CookieSource for HeaderMap {
    fn get(&self, name: &str) -> Option<String> {
        let joined = self
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ");

        if joined.is_empty() {
            return None;
        }
        PatternCache::global().find(&joined, name)
    }
}
