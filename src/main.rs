//! # Order Viewer (terminal front-end)
//!
//! Each line read from stdin is typed into the order-id input and submitted with
//! Enter. Found orders are printed as a plain-text summary on stdout; the error
//! box goes to stderr.
//!
//! Passing an order id as the first argument fetches that one order and exits.

use order_viewer::config::ViewerConfig;
use order_viewer::events::{UiEvent, SUBMIT_KEY};
use order_viewer::lifecycle::{setup_tracing, ViewerSystem};
use std::error::Error;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = ViewerConfig::from_env()?;
    info!(base_url = %config.base_url, "Starting order viewer");

    let system = ViewerSystem::new(&config);

    if let Some(order_id) = std::env::args().nth(1) {
        submit(&system, order_id).await?;
    } else {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        prompt()?;
        while let Some(line) = lines.next_line().await? {
            submit(&system, line).await?;
            prompt()?;
        }
    }

    system.shutdown().await?;
    Ok(())
}

/// Types `value` into the input, presses Enter and prints what the page shows.
async fn submit(system: &ViewerSystem, value: String) -> Result<(), Box<dyn Error>> {
    system.events.dispatch(UiEvent::Input(value)).await?;

    let Some(cycle) = system
        .events
        .dispatch(UiEvent::KeyPress(SUBMIT_KEY.to_string()))
        .await?
    else {
        return Ok(());
    };

    match cycle.await? {
        Ok(order) => print!("{}", system.renderer().render_text(&order)),
        Err(_) => {
            let page = system.view.snapshot().await?;
            eprintln!("{}", page.error_box.content);
        }
    }
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "Order ID> ")?;
    stdout.flush()
}
