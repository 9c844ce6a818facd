//! Validated cookie entity.

use super::header;
use super::options::CookieOptions;
use crate::config::{CookieError, Result};
use time::OffsetDateTime;

/// Matches `field-content` from RFC 7230 section 3.2: HTAB, visible ASCII,
/// SP and obs-text (`%x80-FF`).
fn is_field_content(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| matches!(c, '\t' | '\u{20}'..='\u{7e}' | '\u{80}'..='\u{ff}'))
}

/// Unset or empty attributes are skipped; anything else must be field-content.
fn is_valid_attribute(attr: Option<&str>) -> bool {
    attr.is_none_or(|a| a.is_empty() || is_field_content(a))
}

/// One cookie ready to be rendered into a `Set-Cookie` header.
///
/// A cookie without a value is an instruction to expire it: construction
/// pins `expires` to the Unix epoch and drops any `max_age`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    name: String,
    value: Option<String>,
    options: CookieOptions,
}

impl Cookie {
    /// Validates and builds a cookie.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::Validation` naming the first field that does
    /// not match the header grammar.
    pub fn new(name: &str, value: Option<&str>, mut options: CookieOptions) -> Result<Self> {
        if !is_field_content(name) || name.contains([';', '=']) {
            return Err(CookieError::invalid("name"));
        }

        let value = value.filter(|v| !v.is_empty());
        if value.is_some_and(|v| !is_field_content(v) || v.contains(';')) {
            return Err(CookieError::invalid("value"));
        }

        if !is_valid_attribute(options.path.as_deref()) {
            return Err(CookieError::invalid("path"));
        }

        if !is_valid_attribute(options.domain.as_deref()) {
            return Err(CookieError::invalid("domain"));
        }

        if value.is_none() {
            options.expires = Some(OffsetDateTime::UNIX_EPOCH);
            options.max_age = None;
        }

        Ok(Self {
            name: name.to_string(),
            value: value.map(str::to_string),
            options,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cookie value; empty for an expiring cookie.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    #[must_use]
    pub const fn options(&self) -> &CookieOptions {
        &self.options
    }

    /// Whether this cookie clears a previously set one.
    #[must_use]
    pub const fn is_expiry(&self) -> bool {
        self.value.is_none()
    }

    /// `name=value`, the string covered by the signature cookie.
    #[must_use]
    pub fn to_name_value(&self) -> String {
        format!("{}={}", self.name, self.value())
    }

    /// Full `Set-Cookie` header value, with `max_age` measured from now.
    #[must_use]
    pub fn to_header(&self) -> String {
        header::render(self, OffsetDateTime::now_utc())
    }

    /// Full `Set-Cookie` header value, with `max_age` measured from `now`.
    #[must_use]
    pub fn to_header_at(&self, now: OffsetDateTime) -> String {
        header::render(self, now)
    }
}
