//! Request and response adapters.
//!
//! Reads raw cookie values from inbound `Cookie` headers and queues
//! rendered `Set-Cookie` headers on outbound responses.

mod getter;
mod setter;

pub use getter::{CookieHeader, CookieSource, PatternCache};
pub use setter::{CookieSink, SetCookieList};
