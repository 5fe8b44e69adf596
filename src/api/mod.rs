//! # Proxy API Access
//!
//! - [`client`] - [`ApiClient`], the JSON request/response wrapper
//! - [`transport`] - [`HttpTransport`] trait and the `reqwest` implementation
//! - [`error`] - [`ApiError`] and the fallback message

pub mod client;
pub mod error;
pub mod transport;

pub use client::*;
pub use error::*;
pub use transport::*;
