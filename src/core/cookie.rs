//! Cookie entity and header rendering.
//!
//! A `Cookie` is validated on construction and rendered into a literal
//! `Set-Cookie` header value by the `header` module.

mod entity;
pub mod header;
mod options;

pub use entity::Cookie;
pub use options::{CookieOptions, Priority, SameSite};
