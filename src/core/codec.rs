//! Signed cookie codec.
//!
//! Writes an application value as a base64-JSON cookie plus a `name.sig`
//! companion holding the key ring signature over `name=value`, and reads
//! it back only when that signature verifies.

use crate::config::{CookieError, Result};
use crate::core::cookie::{Cookie, CookieOptions};
use crate::core::transport::{CookieSink, CookieSource};
use crate::security::crypto::KeyRing;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Suffix of the signature cookie name.
pub const SIGNATURE_SUFFIX: &str = ".sig";

/// Name of the signature cookie paired with `name`.
#[must_use]
pub fn signature_name(name: &str) -> String {
    format!("{name}{SIGNATURE_SUFFIX}")
}

/// Value cookie and its signature cookie.
#[derive(Debug, Clone)]
pub struct SignedPair {
    pub value: Cookie,
    pub signature: Cookie,
}

impl SignedPair {
    /// `[value header, signature header]`.
    #[must_use]
    pub fn headers(&self) -> [String; 2] {
        [self.value.to_header(), self.signature.to_header()]
    }

    /// Queues both cookies, value first.
    pub fn write_to<S: CookieSink + ?Sized>(&self, sink: &mut S) {
        sink.push(&self.value);
        sink.push(&self.signature);
    }
}

/// Result of checking a request's value cookie against its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    MissingSignature,
    MissingValue,
    /// The signature matches no key in the ring.
    Mismatch,
    /// Signed by the key at `index`; 0 is the current key.
    Matched { index: usize, raw: String },
}

impl Verification {
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Matched { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Decoded value and the index of the key that signed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    pub value: T,
    pub index: usize,
}

impl<T> Decoded<T> {
    /// Whether the cookie was signed by an older key and should be reissued.
    #[must_use]
    pub const fn needs_resign(&self) -> bool {
        self.index > 0
    }
}

/// Encodes and verifies signed cookies with a shared key ring.
#[derive(Debug, Clone)]
pub struct SignedCookies {
    keys: KeyRing,
}

impl SignedCookies {
    #[must_use]
    pub const fn new(keys: KeyRing) -> Self {
        Self { keys }
    }

    #[must_use]
    pub const fn keys(&self) -> &KeyRing {
        &self.keys
    }

    /// Serializes `value` and builds the value and signature cookies.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::Validation` for an invalid name or options and
    /// `CookieError::Serialize` if `value` cannot be serialized.
    pub fn encode<T>(&self, name: &str, value: &T, options: &CookieOptions) -> Result<SignedPair>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_vec(value)?;
        let payload = STANDARD.encode(json);

        let value = Cookie::new(name, Some(&payload), options.clone())?;
        let signature = self.keys.sign(&value.to_name_value());
        let signature = Cookie::new(
            &signature_name(value.name()),
            Some(&signature),
            options.clone(),
        )?;

        Ok(SignedPair { value, signature })
    }

    /// Looks up `key` and `key.sig` in `source` and checks the signature.
    pub fn verify<S: CookieSource + ?Sized>(&self, source: &S, key: &str) -> Verification {
        let Some(signature) = source.get(&signature_name(key)).filter(|s| !s.is_empty()) else {
            return Verification::MissingSignature;
        };

        let Some(raw) = source.get(key).filter(|v| !v.is_empty()) else {
            return Verification::MissingValue;
        };

        match self.keys.index(&format!("{key}={raw}"), &signature) {
            Some(index) => {
                if index > 0 {
                    debug!(
                        cookie = %key,
                        key_index = index,
                        "Cookie signed with rotated key"
                    );
                }
                Verification::Matched { index, raw }
            }
            None => {
                debug!(cookie = %key, "Cookie signature mismatch");
                Verification::Mismatch
            }
        }
    }

    /// Verifies and decodes cookie `key`.
    ///
    /// Returns `Ok(None)` when either cookie is missing or the signature
    /// matches no key.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::Corrupt` if the signature matched but the
    /// payload is not base64-encoded JSON of type `T`.
    pub fn decode<T, S>(&self, source: &S, key: &str) -> Result<Option<Decoded<T>>>
    where
        T: DeserializeOwned,
        S: CookieSource + ?Sized,
    {
        let Verification::Matched { index, raw } = self.verify(source, key) else {
            return Ok(None);
        };

        let value = decode_payload(&raw).inspect_err(|e| {
            warn!(
                cookie = %key,
                key_index = index,
                error = %e,
                "Signed cookie payload is corrupt"
            );
        })?;

        Ok(Some(Decoded { value, index }))
    }

    /// Like [`decode`](Self::decode), without the key index.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::Corrupt` on an undecodable signed payload.
    pub fn get<T, S>(&self, source: &S, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        S: CookieSource + ?Sized,
    {
        Ok(self.decode(source, key)?.map(|d| d.value))
    }

    /// Builds headers clearing both cookies at path `/`.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::Validation` for an invalid name or domain.
    pub fn expire(&self, key: &str, options: &CookieOptions) -> Result<SignedPair> {
        let options = CookieOptions {
            path: Some("/".to_string()),
            ..options.clone()
        };

        Ok(SignedPair {
            value: Cookie::new(key, None, options.clone())?,
            signature: Cookie::new(&signature_name(key), None, options)?,
        })
    }

    /// Signs `raw` again with the current key, producing a fresh `key.sig`.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::Validation` for an invalid name or options.
    pub fn resign(&self, key: &str, raw: &str, options: &CookieOptions) -> Result<Cookie> {
        let signature = self.keys.sign(&format!("{key}={raw}"));
        Cookie::new(&signature_name(key), Some(&signature), options.clone())
    }

    /// Builds a header clearing only `key.sig` at path `/`.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::Validation` for an invalid name.
    pub fn expire_signature(&self, key: &str) -> Result<Cookie> {
        Cookie::new(&signature_name(key), None, CookieOptions::default())
    }
}

fn decode_payload<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let json = STANDARD
        .decode(raw)
        .map_err(|e| CookieError::Corrupt(format!("invalid base64: {e}")))?;

    serde_json::from_slice(&json).map_err(|e| CookieError::Corrupt(format!("invalid JSON: {e}")))
}
