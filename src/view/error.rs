//! Error types for the page actor.

use thiserror::Error;

/// Errors that can occur while talking to the page actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ViewError {
    /// The actor's request channel is closed.
    #[error("Page actor closed")]
    ActorClosed,

    /// The actor dropped the response channel without answering.
    #[error("Page actor dropped response channel")]
    ActorDropped,
}
