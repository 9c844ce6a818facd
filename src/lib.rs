//! Library definitions.
//!
//! Exports the key ring, cookie entity, signed codec and transport adapters.

pub mod config;
pub mod core;
pub mod security;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use crate::config::{Config, CookieError, Result};
pub use crate::core::codec::{Decoded, SIGNATURE_SUFFIX, SignedCookies, SignedPair, Verification};
pub use crate::core::cookie::{Cookie, CookieOptions, Priority, SameSite};
pub use crate::core::transport::{
    CookieHeader, CookieSink, CookieSource, PatternCache, SetCookieList,
};
pub use crate::security::crypto::{KeyRing, SigningAlgorithm};
