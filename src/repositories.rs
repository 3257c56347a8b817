//! # Repositories
//!
//! The persistence seams of the order workflow. The
//! [`CreateOrderService`](crate::services::CreateOrderService) only sees these
//! traits; the actor clients in [`clients`](crate::clients) implement them.

use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerId, Order, OrderCreate, Product, ProductId};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use async_trait::async_trait;

#[async_trait]
pub trait CustomersRepository: Send + Sync {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError>;
}

/// Product lookup and inventory updates.
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Returns the products that exist among `ids`, in no particular order.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError>;

    /// Persists the `quantity` of every product in `products`.
    async fn update_quantity(&self, products: &[Product]) -> Result<(), ProductError>;
}

#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Writes a new order and returns it as stored.
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError>;
}
