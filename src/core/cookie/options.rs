//! Cookie attribute set.
//!
//! Defines `CookieOptions` together with the `SameSite` and `Priority`
//! attribute values accepted on every write.

use crate::config::{CookieError, Result};
use std::str::FromStr;
use std::time::Duration;
use time::OffsetDateTime;

/// `SameSite` cookie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    /// No `samesite` clause is emitted.
    #[default]
    Disabled,
    Strict,
    Lax,
    None,
}

impl SameSite {
    /// Attribute text, or `None` when disabled.
    #[must_use]
    pub const fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Disabled => None,
            Self::Strict => Some("strict"),
            Self::Lax => Some("lax"),
            Self::None => Some("none"),
        }
    }
}

impl From<bool> for SameSite {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Strict
        } else {
            Self::Disabled
        }
    }
}

impl FromStr for SameSite {
    type Err = CookieError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lax" => Ok(Self::Lax),
            "none" => Ok(Self::None),
            _ => Err(CookieError::invalid("sameSite")),
        }
    }
}

/// `Priority` cookie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = CookieError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(CookieError::invalid("priority")),
        }
    }
}

/// Attributes applied to a cookie when it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CookieOptions {
    /// Lifetime relative to render time. Takes precedence over `expires`.
    pub max_age: Option<Duration>,
    /// Absolute expiry (session cookie when unset).
    pub expires: Option<OffsetDateTime>,
    /// Cookie path (`/` by default).
    pub path: Option<String>,
    /// Cookie domain (no default).
    pub domain: Option<String>,
    /// Only sent over HTTPS.
    pub secure: bool,
    /// Hidden from client scripts (true by default).
    pub http_only: bool,
    pub same_site: SameSite,
    pub priority: Option<Priority>,
    /// CHIPS partitioned cookie.
    pub partitioned: bool,
    /// Replace previously queued cookies with the same name.
    pub overwrite: bool,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            max_age: None,
            expires: None,
            path: Some("/".to_string()),
            domain: None,
            secure: false,
            http_only: true,
            same_site: SameSite::Disabled,
            priority: None,
            partitioned: false,
            overwrite: false,
        }
    }
}

impl CookieOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    #[must_use]
    pub fn expires(mut self, expires: OffsetDateTime) -> Self {
        self.expires = Some(expires);
        self
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    #[must_use]
    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    #[must_use]
    pub fn same_site(mut self, same_site: impl Into<SameSite>) -> Self {
        self.same_site = same_site.into();
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn partitioned(mut self, partitioned: bool) -> Self {
        self.partitioned = partitioned;
        self
    }

    #[must_use]
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}
