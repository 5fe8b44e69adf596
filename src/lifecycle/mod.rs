//! # Viewer Lifecycle
//!
//! Starting, wiring and stopping the viewer.
//!
//! - [`ViewerSystem`] - spawns the page actor and builds the orchestrator around it
//! - [`setup_tracing`] - initializes logging
//!
//! ## Wiring
//!
//! ```text
//! UiEvent ──▶ EventDispatcher ──spawn──▶ OrderFetcher ──▶ ApiClient<T> ──▶ HttpTransport
//!                                            │
//!                                            └──▶ ViewClient ──mpsc──▶ PageActor (owns Page)
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the page actor's channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the actor logs its final state and exits

pub mod tracing;
pub mod viewer_system;

pub use self::tracing::*;
pub use viewer_system::*;
