//! # Page Model
//!
//! In-memory stand-in for the widget's markup: the order-id input, the loader
//! with its status paragraph, the error box and the result container. The
//! presentation helpers on [`Page`] are the only code that flips visibility.

/// Loader label used when [`Page::show_loader`] is given an empty message.
pub const DEFAULT_LOADER_MESSAGE: &str = "Processing...";

/// Prefix the error box puts in front of every message.
pub const ERROR_PREFIX: &str = "Error: ";

/// A toggleable element with text or markup content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub visible: bool,
    pub content: String,
}

/// Which of the mutually exclusive panels is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Nothing fetched yet.
    Idle,
    /// Loader visible with its label.
    Loading(String),
    /// Error box visible with the message (without the `Error: ` prefix).
    Error(String),
    /// Result container visible.
    Result,
}

/// Snapshot-able state of the widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Current value of the order-id text input.
    pub input: String,
    pub loader: Element,
    pub error_box: Element,
    pub result: Element,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loading: loader shown with `message`, error and result hidden.
    pub fn show_loader(&mut self, message: &str) {
        self.loader.content = if message.is_empty() {
            DEFAULT_LOADER_MESSAGE.to_string()
        } else {
            message.to_string()
        };
        self.loader.visible = true;
        self.error_box.visible = false;
        self.result.visible = false;
    }

    /// Hides the loader. Calling it twice is harmless.
    pub fn hide_loader(&mut self) {
        self.loader.visible = false;
    }

    /// Error: error box shown, loader and result hidden.
    pub fn show_error(&mut self, message: &str) {
        self.error_box.content = format!("{}{}", ERROR_PREFIX, message);
        self.error_box.visible = true;
        self.hide_loader();
        self.result.visible = false;
    }

    /// Result: replaces the result markup and shows it.
    pub fn display_order(&mut self, html: String) {
        self.result.content = html;
        self.result.visible = true;
        self.error_box.visible = false;
    }

    pub fn state(&self) -> ViewState {
        if self.loader.visible {
            ViewState::Loading(self.loader.content.clone())
        } else if self.error_box.visible {
            let message = self
                .error_box
                .content
                .strip_prefix(ERROR_PREFIX)
                .unwrap_or(&self.error_box.content);
            ViewState::Error(message.to_string())
        } else if self.result.visible {
            ViewState::Result
        } else {
            ViewState::Idle
        }
    }
}
