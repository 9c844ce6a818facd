//! Cookie signing keys.
//!
//! Implements HMAC signing against an ordered set of secrets so that keys
//! can be rotated without invalidating cookies signed by the previous key.

use crate::config::{CookieError, Result};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// HMAC digest used for cookie signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningAlgorithm {
    /// HMAC-SHA1, 27-character signatures.
    #[default]
    Sha1,
    /// HMAC-SHA256, 43-character signatures.
    Sha256,
}

impl FromStr for SigningAlgorithm {
    type Err = CookieError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            other => Err(CookieError::Config(format!(
                "unsupported signing algorithm: {other}"
            ))),
        }
    }
}

/// Ordered list of signing secrets, newest first.
///
/// Index 0 signs every new cookie; the remaining keys are only used to
/// verify cookies issued before the last rotation.
#[derive(Clone)]
pub struct KeyRing {
    keys: Arc<[Vec<u8>]>,
    algorithm: SigningAlgorithm,
}

impl KeyRing {
    /// Creates a key ring using the default algorithm.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::Config` if `keys` is empty.
    pub fn new<I, K>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        Self::with_algorithm(keys, SigningAlgorithm::default())
    }

    /// Creates a key ring signing with `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::Config` if `keys` is empty.
    pub fn with_algorithm<I, K>(keys: I, algorithm: SigningAlgorithm) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let keys: Vec<Vec<u8>> = keys.into_iter().map(|k| k.as_ref().to_vec()).collect();
        if keys.is_empty() {
            return Err(CookieError::Config(
                "provide keys for signing cookies".to_string(),
            ));
        }

        Ok(Self {
            keys: keys.into(),
            algorithm,
        })
    }

    /// Signs `data` with the current key.
    #[must_use]
    pub fn sign(&self, data: &str) -> String {
        URL_SAFE_NO_PAD.encode(self.digest(&self.keys[0], data.as_bytes()))
    }

    /// Returns the index of the first key whose signature over `data`
    /// equals `signature`.
    ///
    /// Every key is checked with a constant-time comparison.
    #[must_use]
    pub fn index(&self, data: &str, signature: &str) -> Option<usize> {
        let Ok(expected) = URL_SAFE_NO_PAD.decode(signature) else {
            return None;
        };

        self.keys
            .iter()
            .position(|key| self.verify_with(key, data.as_bytes(), &expected))
    }

    /// Checks `signature` against every key in the ring.
    #[must_use]
    pub fn verify(&self, data: &str, signature: &str) -> bool {
        self.index(data, signature).is_some()
    }

    /// Number of keys in the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false`; an empty ring cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub const fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    fn digest(&self, key: &[u8], data: &[u8]) -> Vec<u8> {
        match self.algorithm {
            SigningAlgorithm::Sha1 => tag::<HmacSha1>(key, data),
            SigningAlgorithm::Sha256 => tag::<HmacSha256>(key, data),
        }
    }

    fn verify_with(&self, key: &[u8], data: &[u8], expected: &[u8]) -> bool {
        match self.algorithm {
            SigningAlgorithm::Sha1 => verifies::<HmacSha1>(key, data, expected),
            SigningAlgorithm::Sha256 => verifies::<HmacSha256>(key, data, expected),
        }
    }
}

/// MAC over `data` under `key`, ready to finalize or verify.
fn keyed<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> M {
    let mut mac = <M as KeyInit>::new_from_slice(key).expect("HMAC accepts any key size");
    mac.update(data);
    mac
}

fn tag<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> Vec<u8> {
    keyed::<M>(key, data).finalize().into_bytes().to_vec()
}

/// Constant-time check of `expected` against the MAC.
fn verifies<M: Mac + KeyInit>(key: &[u8], data: &[u8], expected: &[u8]) -> bool {
    keyed::<M>(key, data).verify_slice(expected).is_ok()
}

impl fmt::Debug for KeyRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRing")
            .field("keys", &self.keys.len())
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
