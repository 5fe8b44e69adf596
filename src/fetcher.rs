//! # Order Fetch Orchestrator
//!
//! [`OrderFetcher`] runs one fetch cycle: read the input, validate it, show the
//! loader, call the API, then render the order or show an error. The loader is
//! always hidden at the end, whatever happened in between.
//!
//! ```text
//!  read input ──empty──▶ show_error("Please enter a valid Order ID.")
//!      │
//!      ▼
//!  show_loader ──▶ retrieve_order ──Ok(order)──▶ display_order
//!                       │    └──Ok(no order)──▶ show_error("No order found with that ID.")
//!                       └──Err(e)──▶ show_error("Failed to fetch order details: {e}")
//!  hide_loader
//! ```

use crate::api::{ApiClient, ApiError, HttpTransport};
use crate::model::Order;
use crate::render::Renderer;
use crate::view::{ViewClient, ViewError};
use thiserror::Error;
use tracing::{error, info, instrument};

/// Why a fetch cycle ended without an order on screen.
///
/// The display text is exactly what the error box shows (before its `Error: ` prefix).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// The order id was empty after trimming. No request was made.
    #[error("Please enter a valid Order ID.")]
    Validation,

    /// The backend answered without an `order` field.
    #[error("No order found with that ID.")]
    NotFound,

    /// The request failed.
    #[error("Failed to fetch order details: {0}")]
    Api(#[from] ApiError),

    /// The page actor went away mid-cycle.
    #[error("Failed to update the page: {0}")]
    View(#[from] ViewError),
}

/// Runs fetch cycles against an API client and a page.
pub struct OrderFetcher<T: HttpTransport> {
    api: ApiClient<T>,
    view: ViewClient,
    renderer: Renderer,
    loading_message: String,
}

impl<T: HttpTransport> Clone for OrderFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            view: self.view.clone(),
            renderer: self.renderer,
            loading_message: self.loading_message.clone(),
        }
    }
}

impl<T: HttpTransport> OrderFetcher<T> {
    pub fn new(
        api: ApiClient<T>,
        view: ViewClient,
        renderer: Renderer,
        loading_message: impl Into<String>,
    ) -> Self {
        Self {
            api,
            view,
            renderer,
            loading_message: loading_message.into(),
        }
    }

    pub fn view(&self) -> &ViewClient {
        &self.view
    }

    /// Runs one complete fetch cycle for whatever is in the input.
    #[instrument(skip(self))]
    pub async fn fetch_order_details(&self) -> Result<Order, FetchError> {
        let raw = self.view.read_input().await?;
        let order_id = raw.trim();
        if order_id.is_empty() {
            let err = FetchError::Validation;
            self.view.show_error(err.to_string()).await?;
            return Err(err);
        }

        self.view.show_loader(self.loading_message.as_str()).await?;
        let outcome = self.load_and_display(order_id).await;
        // Cleanup runs even when the cycle failed.
        let hidden = self.view.hide_loader().await;

        let order = outcome?;
        hidden?;
        Ok(order)
    }

    async fn load_and_display(&self, order_id: &str) -> Result<Order, FetchError> {
        let result = match self.api.retrieve_order(order_id).await {
            Ok(response) => response.order.ok_or(FetchError::NotFound),
            Err(e) => {
                error!(error = %e, order_id, "Failed to fetch order details");
                Err(FetchError::Api(e))
            }
        };

        match result {
            Ok(order) => {
                info!(
                    order_id = %order.id,
                    items = order.line_items.len(),
                    tenders = order.tenders.len(),
                    "Order fetched"
                );
                self.view
                    .display_order(self.renderer.render_html(&order))
                    .await?;
                Ok(order)
            }
            Err(err) => {
                self.view.show_error(err.to_string()).await?;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpResponse;
    use crate::mock::{
        create_mock_view, expect_hide_loader, expect_read_input, expect_show_error,
        expect_show_loader, MockTransport,
    };

    #[tokio::test]
    async fn test_blank_input_never_shows_loader() {
        let (view, mut receiver) = create_mock_view(8);
        let transport = MockTransport::new();
        let fetcher = OrderFetcher::new(
            ApiClient::new(transport.clone(), "http://proxy.test"),
            view,
            Renderer::utc(),
            "Fetching order details...",
        );

        let task = tokio::spawn(async move { fetcher.fetch_order_details().await });

        let responder = expect_read_input(&mut receiver)
            .await
            .expect("Expected ReadInput");
        responder.send("   ".to_string()).unwrap();

        let (message, responder) = expect_show_error(&mut receiver)
            .await
            .expect("Expected ShowError");
        assert_eq!(message, "Please enter a valid Order ID.");
        responder.send(()).unwrap();

        assert_eq!(task.await.unwrap(), Err(FetchError::Validation));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_request_sequence_on_api_failure() {
        let (view, mut receiver) = create_mock_view(8);
        let mut transport = MockTransport::new();
        transport
            .expect_get("http://proxy.test/api/v2/orders/O9")
            .return_response(HttpResponse::new(500, r#"{"error":"Upstream unavailable"}"#));

        let fetcher = OrderFetcher::new(
            ApiClient::new(transport.clone(), "http://proxy.test"),
            view,
            Renderer::utc(),
            "Fetching order details...",
        );
        let task = tokio::spawn(async move { fetcher.fetch_order_details().await });

        expect_read_input(&mut receiver)
            .await
            .expect("Expected ReadInput")
            .send(" O9 ".to_string())
            .unwrap();

        let (label, responder) = expect_show_loader(&mut receiver)
            .await
            .expect("Expected ShowLoader");
        assert_eq!(label, "Fetching order details...");
        responder.send(()).unwrap();

        let (message, responder) = expect_show_error(&mut receiver)
            .await
            .expect("Expected ShowError");
        assert_eq!(message, "Failed to fetch order details: Upstream unavailable");
        responder.send(()).unwrap();

        expect_hide_loader(&mut receiver)
            .await
            .expect("Expected HideLoader")
            .send(())
            .unwrap();

        let result = task.await.unwrap();
        assert!(matches!(
            result,
            Err(FetchError::Api(ApiError::Status { status: 500, .. }))
        ));
        transport.verify();
    }
}
