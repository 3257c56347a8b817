/// Represents a placed customer order and its line items.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// Orders are immutable once written: the order actor accepts no updates.
use crate::model::{Customer, CustomerId, Price, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Mints a fresh UUID v4 identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A line item owned by an [`Order`].
///
/// `price` is a copy of the product's price at the moment the order was
/// placed, not a live reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: Uuid,
    pub product_id: ProductId,
    pub price: Price,
    pub quantity: u32,
}

/// A line item that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderLine {
    pub product_id: ProductId,
    pub price: Price,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> Price {
        self.lines
            .iter()
            .map(|line| line.price * Price::from(line.quantity))
            .sum()
    }
}

/// Payload for writing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: Customer,
    pub products: Vec<NewOrderLine>,
}

/// One requested product in a [`CreateOrderRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProductRequest {
    pub id: ProductId,
    pub quantity: u32,
}

/// Input to the order-creation workflow.
///
/// Decodes from `{"customer_id": "...", "products": [{"id": "...", "quantity": 3}]}`.
/// Missing or `null` fields decode as empty so the workflow can reject them itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_id: CustomerId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<OrderProductRequest>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_with_null_fields_decodes_as_empty() {
        let request: CreateOrderRequest =
            serde_json::from_str(r#"{"customer_id": null, "products": null}"#).unwrap();

        assert_eq!(request.customer_id, CustomerId::default());
        assert!(request.products.is_empty());
    }

    #[test]
    fn test_request_with_absent_fields_decodes_as_empty() {
        let request: CreateOrderRequest = serde_json::from_str("{}").unwrap();

        assert!(request.customer_id.as_str().is_empty());
        assert!(request.products.is_empty());
    }

    #[test]
    fn test_request_decodes_products() {
        let request: CreateOrderRequest = serde_json::from_str(
            r#"{"customer_id": "C1", "products": [{"id": "P1", "quantity": 3}]}"#,
        )
        .unwrap();

        assert_eq!(request.customer_id, CustomerId::from("C1"));
        assert_eq!(
            request.products,
            vec![OrderProductRequest {
                id: ProductId::from("P1"),
                quantity: 3,
            }]
        );
    }
}
