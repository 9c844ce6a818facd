//! Security primitives.
//!
//! Provides cookie signing keys and verification.

pub mod crypto;
