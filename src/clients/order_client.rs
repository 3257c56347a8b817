//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
use crate::model::{Order, OrderCreate};
use crate::order_actor::OrderError;
use crate::repositories::OrdersRepository;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl OrdersRepository for OrderClient {
    /// Creates the order, then reads it back so the caller gets the stored
    /// ids and timestamps.
    #[instrument(skip_all, fields(lines = order.products.len()))]
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(order).await.map_err(Self::map_error)?;
        self.get(id.clone())
            .await?
            .ok_or_else(|| OrderError::Missing(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, NewOrderLine, OrderId};
    use actor_framework::mock::{create_mock_client, expect_create, expect_get};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn order_create() -> OrderCreate {
        OrderCreate {
            customer: Customer::new("C1".into(), "Alice", "alice@example.com"),
            products: vec![NewOrderLine {
                product_id: "P1".into(),
                price: dec!(10.00),
                quantity: 3,
            }],
        }
    }

    #[tokio::test]
    async fn test_create_reads_order_back() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.create(order_create()).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.products.len(), 1);
        responder.send(Ok(OrderId::from("O1"))).unwrap();

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, OrderId::from("O1"));
        let now = Utc::now();
        let stored = Order {
            id: id.clone(),
            customer: params.customer,
            lines: vec![],
            created_at: now,
            updated_at: now,
        };
        responder.send(Ok(Some(stored))).unwrap();

        let order = task.await.unwrap().unwrap();
        assert_eq!(order.id, OrderId::from("O1"));
    }

    #[tokio::test]
    async fn test_create_missing_after_write() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.create(order_create()).await });

        let (_params, responder) = expect_create(&mut receiver).await.unwrap();
        responder.send(Ok(OrderId::from("O1"))).unwrap();
        let (_id, responder) = expect_get(&mut receiver).await.unwrap();
        responder.send(Ok(None)).unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(OrderError::Missing("O1".to_string()))
        );
    }

    #[tokio::test]
    async fn test_create_rejected_by_actor() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.create(order_create()).await });

        let (_params, responder) = expect_create(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::entity(OrderError::EmptyLines)))
            .unwrap();

        assert_eq!(task.await.unwrap(), Err(OrderError::EmptyLines));
    }
}
