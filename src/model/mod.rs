//! Pure data structures for the upstream order API.
//!
//! These types mirror the wire shape returned by the proxy backend. They are
//! deserialized once per fetch and handed straight to the [`render`](crate::render)
//! module; nothing here is cached between fetches.

pub mod order;

pub use order::*;
