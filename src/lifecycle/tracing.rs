//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Logs go to stderr so they never mix with the order summaries the
//! binary prints on stdout.
//!
//! ## What Gets Traced
//!
//! - **Page actor**: startup, shutdown and every state change (debug)
//! - **API client**: each request URL (debug) and failed statuses (warn)
//! - **Fetch cycles**: a span per cycle, fetched orders (info) and failures (error)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Fetch outcomes only
//! RUST_LOG=info cargo run -- O1
//!
//! # Include page transitions and request URLs
//! RUST_LOG=debug cargo run
//!
//! # Just the HTTP layer
//! RUST_LOG=order_viewer::api=debug cargo run
//! ```
//!
//! **With `RUST_LOG=debug`** a successful cycle looks like:
//!
//! ```text
//! DEBUG fetch_order_details:retrieve_order:fetch: Sending request url=https://.../api/v2/orders/O1
//! DEBUG ShowLoader state=Loading("Fetching order details...")
//! INFO fetch_order_details: Order fetched order_id=O1 items=1 tenders=1
//! DEBUG DisplayOrder bytes=412
//! DEBUG HideLoader state=Result
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
