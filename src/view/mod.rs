//! # View Layer
//!
//! The page and everything that touches it.
//!
//! ## Structure
//!
//! - [`page`] - [`Page`] model, presentation helpers and [`ViewState`]
//! - [`actor`] - [`PageActor`], the single owner of the page
//! - [`client`] - [`ViewClient`], the handle the rest of the crate uses
//! - [`error`] - [`ViewError`] for channel failures
//!
//! ## Usage
//!
//! ```rust
//! use order_viewer::view::{PageActor, ViewState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, view) = PageActor::new(8);
//!     tokio::spawn(actor.run());
//!
//!     view.show_error("Please enter a valid Order ID.").await?;
//!     let page = view.snapshot().await?;
//!     assert_eq!(page.state(), ViewState::Error("Please enter a valid Order ID.".into()));
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod page;

pub use actor::*;
pub use client::*;
pub use error::*;
pub use page::*;
