#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Order Viewer
//!
//! > **Look up an order by id and show what was bought and how it was paid.**
//!
//! This crate fetches a single order from a payment provider's order API (through a
//! proxy backend) and renders a summary: the order id, when it was placed, its line
//! items and its tenders.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One owner for the page
//!
//! The widget state (input value, loader, error box, result container) lives in a
//! [`Page`](view::Page) owned by a single [`PageActor`](view::PageActor) task. Everything
//! else talks to it through a cloneable [`ViewClient`](view::ViewClient), so updates are
//! applied one at a time, in the order they were sent.
//!
//! ### Injected seams
//!
//! The orchestrator never reaches for globals. It is handed an
//! [`ApiClient`](api::ApiClient) generic over an [`HttpTransport`](api::HttpTransport)
//! and a `ViewClient`, which means tests can swap in
//! [`MockTransport`](mock::MockTransport) or a scripted page.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Serde types for the API response: [`Order`](model::Order), line items, tenders, money.
//!
//! ### 2. The Network ([`api`])
//! - **Role**: `{base_url}/api{path}` JSON requests, uniform [`ApiError`](api::ApiError) on failure.
//!
//! ### 3. The Page ([`view`])
//! - **Role**: Loading / Error / Result panels and their transitions.
//!
//! ### 4. The Markup ([`render`])
//! - **Role**: Escaped HTML (and plain text) summaries of an order.
//!
//! ### 5. The Cycle ([`fetcher`], [`events`])
//! - **Role**: Validate input, drive the loader, fetch, render or report; map clicks and Enter to fetches.
//!
//! ### 6. The Wiring ([`lifecycle`], [`config`])
//! - **Key items**: [`ViewerSystem`](lifecycle::ViewerSystem), [`ViewerConfig`](config::ViewerConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Interactive: type an order id per line
//! RUST_LOG=info cargo run
//!
//! # One-shot against a local proxy
//! ORDER_VIEWER_BASE_URL=http://localhost:3000 cargo run -- O1
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod api;
pub mod config;
pub mod events;
pub mod fetcher;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod render;
pub mod view;
