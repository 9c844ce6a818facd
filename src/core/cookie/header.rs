//! `Set-Cookie` header rendering.
//!
//! Attribute clauses are emitted in a fixed order and only when set:
//! `path`, `expires`, `domain`, `priority`, `samesite`, `secure`,
//! `httponly`, `partitioned`.

use super::Cookie;
use std::fmt::Write as _;
use std::time::Duration;
use time::{OffsetDateTime, PrimitiveDateTime};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const HTTP_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Latest instant an `expires` clause can carry.
const LATEST: OffsetDateTime = PrimitiveDateTime::MAX.assume_utc();

/// `now + age`, or `None` past the last representable date.
pub(crate) fn checked_expiry(now: OffsetDateTime, age: Duration) -> Option<OffsetDateTime> {
    time::Duration::try_from(age)
        .ok()
        .and_then(|age| now.checked_add(age))
}

/// Formats `at` as an IMF-fixdate in UTC, e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.
#[must_use]
pub fn http_date(at: OffsetDateTime) -> String {
    at.to_offset(time::UtcOffset::UTC)
        .format(HTTP_DATE)
        .unwrap_or_default()
}

/// Renders the header value for `cookie`, resolving `max_age` against `now`.
///
/// A `max_age` reaching past year 9999 saturates at the last representable
/// date.
#[must_use]
pub fn render(cookie: &Cookie, now: OffsetDateTime) -> String {
    let opts = cookie.options();
    let mut header = cookie.to_name_value();

    let expires = opts
        .max_age
        .filter(|age| !age.is_zero())
        .map(|age| checked_expiry(now, age).unwrap_or(LATEST))
        .or(opts.expires);

    if let Some(path) = opts.path.as_deref().filter(|p| !p.is_empty()) {
        let _ = write!(header, "; path={path}");
    }
    if let Some(expires) = expires {
        let _ = write!(header, "; expires={}", http_date(expires));
    }
    if let Some(domain) = opts.domain.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(header, "; domain={domain}");
    }
    if let Some(priority) = opts.priority {
        let _ = write!(header, "; priority={}", priority.as_str());
    }
    if let Some(same_site) = opts.same_site.as_str() {
        let _ = write!(header, "; samesite={same_site}");
    }
    if opts.secure {
        header.push_str("; secure");
    }
    if opts.http_only {
        header.push_str("; httponly");
    }
    if opts.partitioned {
        header.push_str("; partitioned");
    }

    header
}
