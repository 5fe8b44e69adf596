//! # Event Wiring
//!
//! Maps user events onto the orchestrator. Typing updates the input; clicking the
//! fetch button, or pressing Enter in the input, starts a fetch cycle in its own
//! task. Overlapping cycles are not coordinated: whichever finishes last owns
//! the page.

use crate::api::HttpTransport;
use crate::fetcher::{FetchError, OrderFetcher};
use crate::model::Order;
use crate::view::ViewError;
use tokio::task::JoinHandle;
use tracing::debug;

/// Key that submits the input.
pub const SUBMIT_KEY: &str = "Enter";

/// User interactions with the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The input's value changed.
    Input(String),
    /// The fetch button was clicked.
    Click,
    /// A key was pressed while the input had focus.
    KeyPress(String),
}

/// Handle to a fetch cycle started by an event.
pub type FetchHandle = JoinHandle<Result<Order, FetchError>>;

/// Routes [`UiEvent`]s to an [`OrderFetcher`].
pub struct EventDispatcher<T: HttpTransport + 'static> {
    fetcher: OrderFetcher<T>,
}

impl<T: HttpTransport + 'static> Clone for EventDispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
        }
    }
}

impl<T: HttpTransport + 'static> EventDispatcher<T> {
    pub fn new(fetcher: OrderFetcher<T>) -> Self {
        Self { fetcher }
    }

    /// Handles one event. Returns the spawned cycle when the event triggered a fetch.
    pub async fn dispatch(&self, event: UiEvent) -> Result<Option<FetchHandle>, ViewError> {
        match event {
            UiEvent::Input(value) => {
                self.fetcher.view().set_input(value).await?;
                Ok(None)
            }
            UiEvent::Click => Ok(Some(self.click())),
            UiEvent::KeyPress(key) if key == SUBMIT_KEY => Ok(Some(self.click())),
            UiEvent::KeyPress(key) => {
                debug!(%key, "Ignoring key press");
                Ok(None)
            }
        }
    }

    fn click(&self) -> FetchHandle {
        let fetcher = self.fetcher.clone();
        tokio::spawn(async move { fetcher.fetch_order_details().await })
    }
}
