//! # Page Actor
//!
//! The page is owned by a single task. Every read or mutation arrives as a
//! [`ViewRequest`] and is applied in order, so the page behaves like a UI thread:
//! one request runs to completion before the next starts.

use crate::view::{Page, ViewClient};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// Type alias for the one-shot channel the actor answers on.
pub type Response<T> = oneshot::Sender<T>;

/// Requests understood by the [`PageActor`].
#[derive(Debug)]
pub enum ViewRequest {
    ReadInput {
        respond_to: Response<String>,
    },
    SetInput {
        value: String,
        respond_to: Response<()>,
    },
    ShowLoader {
        message: String,
        respond_to: Response<()>,
    },
    HideLoader {
        respond_to: Response<()>,
    },
    ShowError {
        message: String,
        respond_to: Response<()>,
    },
    DisplayOrder {
        html: String,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<Page>,
    },
}

/// Owner of the [`Page`].
pub struct PageActor {
    receiver: mpsc::Receiver<ViewRequest>,
    page: Page,
}

impl PageActor {
    pub fn new(buffer_size: usize) -> (Self, ViewClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            page: Page::new(),
        };
        (actor, ViewClient::new(sender))
    }

    /// Runs the event loop until every [`ViewClient`] is dropped.
    pub async fn run(mut self) {
        info!("Page actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ViewRequest::ReadInput { respond_to } => {
                    let _ = respond_to.send(self.page.input.clone());
                }
                ViewRequest::SetInput { value, respond_to } => {
                    debug!(%value, "SetInput");
                    self.page.input = value;
                    let _ = respond_to.send(());
                }
                ViewRequest::ShowLoader {
                    message,
                    respond_to,
                } => {
                    self.page.show_loader(&message);
                    debug!(state = ?self.page.state(), "ShowLoader");
                    let _ = respond_to.send(());
                }
                ViewRequest::HideLoader { respond_to } => {
                    self.page.hide_loader();
                    debug!(state = ?self.page.state(), "HideLoader");
                    let _ = respond_to.send(());
                }
                ViewRequest::ShowError {
                    message,
                    respond_to,
                } => {
                    self.page.show_error(&message);
                    debug!(state = ?self.page.state(), "ShowError");
                    let _ = respond_to.send(());
                }
                ViewRequest::DisplayOrder { html, respond_to } => {
                    debug!(bytes = html.len(), "DisplayOrder");
                    self.page.display_order(html);
                    let _ = respond_to.send(());
                }
                ViewRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.page.clone());
                }
            }
        }

        info!(state = ?self.page.state(), "Page actor shutdown");
    }
}
