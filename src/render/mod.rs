//! # Order Renderer
//!
//! Turns an [`Order`] into the summary shown in the result container. Markup is
//! built with `maud`, so every value taken from the response is escaped.
//! Sections for missing or empty collections are left out entirely.

use crate::model::{Order, Tender};
use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use maud::{html, Markup};
use std::fmt::Write;

/// Shown in place of the order date when `created_at` cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Time zone dates are shown in.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Zone {
    /// The machine's zone, including its daylight-saving rules.
    Local,
    Fixed(FixedOffset),
}

/// Renders orders for a viewer in a given time zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    zone: Zone,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::local()
    }
}

impl Renderer {
    /// Uses the machine's time zone. The offset is resolved per date, so
    /// timestamps on either side of a daylight-saving change both come out right.
    pub fn local() -> Self {
        Self { zone: Zone::Local }
    }

    pub fn utc() -> Self {
        Self::with_offset(Utc.fix())
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            zone: Zone::Fixed(offset),
        }
    }

    /// Converts an ISO-8601 timestamp to the viewer's local date and time.
    pub fn format_date(&self, created_at: &str) -> String {
        let Ok(date) = DateTime::parse_from_rfc3339(created_at) else {
            return INVALID_DATE.to_string();
        };
        match self.zone {
            Zone::Local => date.with_timezone(&Local).format(DATE_FORMAT).to_string(),
            Zone::Fixed(offset) => date.with_timezone(&offset).format(DATE_FORMAT).to_string(),
        }
    }

    pub fn render(&self, order: &Order) -> Markup {
        html! {
            h2 class="text-2xl font-bold mb-4" { "Order Summary" }
            p class="mb-2" {
                strong class="text-gray-700" { "Order ID:" }
                " " (order.id)
            }
            p class="mb-2" {
                strong class="text-gray-700" { "Order Date:" }
                " " (self.format_date(&order.created_at))
            }
            @if !order.line_items.is_empty() {
                h3 class="text-xl font-semibold mt-4 mb-2" { "Line Items:" }
                ul class="list-disc list-inside space-y-2" {
                    @for item in &order.line_items {
                        li { (item.name) " (" (item.quantity.to_string()) " units)" }
                    }
                }
            }
            @if !order.tenders.is_empty() {
                h3 class="text-xl font-semibold mt-4 mb-2" { "Payments:" }
                ul class="list-disc list-inside space-y-2" {
                    @for tender in &order.tenders {
                        li { (tender_line(tender)) }
                    }
                }
            }
        }
    }

    pub fn render_html(&self, order: &Order) -> String {
        self.render(order).into_string()
    }

    /// Plain-text version of [`render`](Self::render) for terminal output.
    pub fn render_text(&self, order: &Order) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Order Summary");
        let _ = writeln!(out, "Order ID: {}", order.id);
        let _ = writeln!(out, "Order Date: {}", self.format_date(&order.created_at));
        if !order.line_items.is_empty() {
            let _ = writeln!(out, "Line Items:");
            for item in &order.line_items {
                let _ = writeln!(out, "  - {} ({} units)", item.name, item.quantity);
            }
        }
        if !order.tenders.is_empty() {
            let _ = writeln!(out, "Payments:");
            for tender in &order.tenders {
                let _ = writeln!(out, "  - {}", tender_line(tender));
            }
        }
        out
    }
}

// "CARD: 10.50 USD"; a tender without an amount shows only its type.
fn tender_line(tender: &Tender) -> String {
    match &tender.amount_money {
        Some(money) => format!("{}: {} {}", tender.kind, money.major_units(), money.currency),
        None => tender.kind.clone(),
    }
}
