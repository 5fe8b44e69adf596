//! # View Client
//!
//! Cheap, cloneable handle to the [`PageActor`](crate::view::PageActor). Each call
//! sends one [`ViewRequest`] and waits for the actor's acknowledgement.

use crate::view::{Page, Response, ViewError, ViewRequest};
use tokio::sync::{mpsc, oneshot};

#[derive(Clone)]
pub struct ViewClient {
    sender: mpsc::Sender<ViewRequest>,
}

impl ViewClient {
    pub fn new(sender: mpsc::Sender<ViewRequest>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        make: impl FnOnce(Response<R>) -> ViewRequest,
    ) -> Result<R, ViewError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| ViewError::ActorClosed)?;
        response.await.map_err(|_| ViewError::ActorDropped)
    }

    /// Current value of the order-id input.
    pub async fn read_input(&self) -> Result<String, ViewError> {
        self.request(|respond_to| ViewRequest::ReadInput { respond_to })
            .await
    }

    pub async fn set_input(&self, value: impl Into<String>) -> Result<(), ViewError> {
        let value = value.into();
        self.request(|respond_to| ViewRequest::SetInput { value, respond_to })
            .await
    }

    pub async fn show_loader(&self, message: impl Into<String>) -> Result<(), ViewError> {
        let message = message.into();
        self.request(|respond_to| ViewRequest::ShowLoader {
            message,
            respond_to,
        })
        .await
    }

    pub async fn hide_loader(&self) -> Result<(), ViewError> {
        self.request(|respond_to| ViewRequest::HideLoader { respond_to })
            .await
    }

    pub async fn show_error(&self, message: impl Into<String>) -> Result<(), ViewError> {
        let message = message.into();
        self.request(|respond_to| ViewRequest::ShowError {
            message,
            respond_to,
        })
        .await
    }

    /// Replaces the result container's markup and makes it visible.
    pub async fn display_order(&self, html: String) -> Result<(), ViewError> {
        self.request(|respond_to| ViewRequest::DisplayOrder { html, respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<Page, ViewError> {
        self.request(|respond_to| ViewRequest::Snapshot { respond_to })
            .await
    }
}
