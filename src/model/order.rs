use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Represents an order returned by the upstream payment API.
///
/// # Wire Shape
/// The proxy forwards the upstream response untouched, so this struct follows its
/// field names. Unknown fields are ignored and every field has a default, so a
/// partially filled order still renders: absent collections are empty and absent
/// scalars render blank (or as zero for amounts).
///
/// See [`OrderResponse`] for the envelope the order arrives in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: String,
    /// ISO-8601 timestamp as sent by the upstream API.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub tenders: Vec<Tender>,
}

/// A purchased unit within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: Quantity,
}

/// Quantity of a line item.
///
/// The upstream API transmits quantities as decimal strings (`"3"`, `"1.5"`),
/// while some proxies re-encode them as JSON numbers. Both are accepted and
/// displayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(serde_json::Number),
    Text(String),
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Number(n) => write!(f, "{}", n),
            Quantity::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Text(String::new())
    }
}

impl From<u32> for Quantity {
    fn from(n: u32) -> Self {
        Quantity::Number(n.into())
    }
}

/// A payment instrument applied to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tender {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub amount_money: Option<Money>,
}

/// An amount of money in the smallest currency unit (cents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub currency: String,
}

impl Money {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Formats the amount as major units with exactly two decimals (`1050` -> `"10.50"`).
    pub fn major_units(&self) -> String {
        let sign = if self.amount < 0 { "-" } else { "" };
        let cents = self.amount.unsigned_abs();
        format!("{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}

/// Success envelope for `GET /v2/orders/{id}`.
///
/// A 200 response without an `order` key is a valid envelope; the orchestrator
/// turns it into a "not found" error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub order: Option<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_deserializes_with_missing_collections() {
        let order: Order = serde_json::from_value(json!({
            "id": "O1",
            "created_at": "2024-01-01T00:00:00Z",
            "location_id": "L1"
        }))
        .unwrap();

        assert_eq!(order.id, "O1");
        assert!(order.line_items.is_empty());
        assert!(order.tenders.is_empty());
    }

    #[test]
    fn test_quantity_accepts_number_and_string() {
        let items: Vec<LineItem> = serde_json::from_value(json!([
            {"name": "Widget", "quantity": 3},
            {"name": "Gadget", "quantity": "1.5"}
        ]))
        .unwrap();

        assert_eq!(items[0].quantity.to_string(), "3");
        assert_eq!(items[1].quantity.to_string(), "1.5");
    }

    #[test]
    fn test_missing_scalars_fall_back_to_defaults() {
        let order: Order = serde_json::from_value(json!({
            "line_items": [{"name": "Loose"}, {}],
            "tenders": [{"amount_money": {}}]
        }))
        .unwrap();

        assert_eq!(order.id, "");
        assert_eq!(order.line_items[0].quantity.to_string(), "");
        assert_eq!(order.line_items[1].name, "");
        assert_eq!(order.tenders[0].kind, "");
        assert_eq!(order.tenders[0].amount_money, Some(Money::new(0, "")));
    }

    #[test]
    fn test_tender_type_field_is_renamed() {
        let tender: Tender = serde_json::from_value(json!({
            "type": "CARD",
            "amount_money": {"amount": 1050, "currency": "USD"}
        }))
        .unwrap();

        assert_eq!(tender.kind, "CARD");
        assert_eq!(tender.amount_money, Some(Money::new(1050, "USD")));
    }

    #[test]
    fn test_major_units_formatting() {
        assert_eq!(Money::new(1050, "USD").major_units(), "10.50");
        assert_eq!(Money::new(5, "USD").major_units(), "0.05");
        assert_eq!(Money::new(0, "USD").major_units(), "0.00");
        assert_eq!(Money::new(-1999, "USD").major_units(), "-19.99");
    }

    #[test]
    fn test_empty_envelope_has_no_order() {
        let response: OrderResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.order.is_none());
    }
}
