//! Entity trait implementation for the Order domain type.
//!
//! Each [`NewOrderLine`](crate::model::NewOrderLine) gets its own UUID when the
//! order is built; the order and all of its lines share one timestamp.

use super::error::OrderError;
use crate::model::{Order, OrderCreate, OrderId, OrderLine};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        let now = Utc::now();
        let lines = params
            .products
            .into_iter()
            .map(|line| OrderLine {
                id: Uuid::new_v4(),
                product_id: line.product_id,
                price: line.price,
                quantity: line.quantity,
            })
            .collect();
        Ok(Self {
            id,
            customer: params.customer,
            lines,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rejects orders without lines before they are stored.
    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        if self.lines.is_empty() {
            return Err(OrderError::EmptyLines);
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, NewOrderLine};
    use rust_decimal_macros::dec;

    fn create(lines: Vec<NewOrderLine>) -> OrderCreate {
        OrderCreate {
            customer: Customer::new("C1".into(), "Alice", "alice@example.com"),
            products: lines,
        }
    }

    #[tokio::test]
    async fn test_build_assigns_line_ids() {
        let params = create(vec![
            NewOrderLine {
                product_id: "P1".into(),
                price: dec!(10.00),
                quantity: 3,
            },
            NewOrderLine {
                product_id: "P2".into(),
                price: dec!(2.50),
                quantity: 2,
            },
        ]);

        let mut order = Order::from_create_params("O1".into(), params).unwrap();
        order.on_create(&()).await.unwrap();

        assert_eq!(order.lines.len(), 2);
        assert_ne!(order.lines[0].id, order.lines[1].id);
        assert_eq!(order.total(), dec!(35.00));
        assert_eq!(order.created_at, order.updated_at);
    }

    #[tokio::test]
    async fn test_on_create_rejects_empty_order() {
        let mut order = Order::from_create_params("O1".into(), create(vec![])).unwrap();
        let err = order.on_create(&()).await.unwrap_err();
        assert_eq!(err, OrderError::EmptyLines);
    }
}
