//! Cryptographic utilities.
//!
//! Provides the rotating key ring used to sign and verify cookies.

pub mod keyring;
pub use keyring::{KeyRing, SigningAlgorithm};
