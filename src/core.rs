//! Core cookie components.
//!
//! Contains the cookie entity, the signed codec and the request/response
//! adapters.

pub mod codec;
pub mod cookie;
pub mod transport;
