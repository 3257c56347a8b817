//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! Lookups and stock writes go out as one batch message each.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductError};
use crate::repositories::ProductsRepository;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        self.inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl ProductsRepository for ProductClient {
    #[instrument(skip(self))]
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .get_many(ids.to_vec())
            .await
            .map_err(Self::map_error)
    }

    /// Writes only the stock level; other fields of `products` are ignored.
    #[instrument(skip_all, fields(count = products.len()))]
    async fn update_quantity(&self, products: &[Product]) -> Result<(), ProductError> {
        let updates = products
            .iter()
            .map(|p| (p.id.clone(), ProductUpdate::quantity(p.quantity)))
            .collect();
        debug!("Sending request");
        self.inner
            .update_many(updates)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }
}
