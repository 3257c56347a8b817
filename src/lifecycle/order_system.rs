use super::config::SystemConfig;
use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::services::CreateOrderService;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    TaskFailed(#[from] JoinError),
}

/// The runtime orchestrator for the order placement system.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Wiring**: Handing the actor clients to the [`CreateOrderService`]
///
/// # Architecture
///
/// - **Customer Actor**: customer records
/// - **Product Actor**: catalog and stock on hand
/// - **Order Actor**: placed orders and their lines
///
/// None of the actors depend on each other; the service is what ties them
/// together.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
/// let service = system.create_order_service();
///
/// let order = service.execute(request).await?;
///
/// drop(service);
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts every actor with the default [`SystemConfig`].
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        let capacity = config.channel_capacity;
        let (customer_actor, customer_client) = crate::customer_actor::new(capacity);
        let (product_actor, product_client) = crate::product_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);

        // No actor needs another, so every context is ()
        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(order_actor.run(())),
        ];
        info!(channel_capacity = capacity, "Order system started");

        Self {
            customer_client,
            product_client,
            order_client,
            handles,
        }
    }

    /// Builds an order workflow backed by this system's actors.
    pub fn create_order_service(
        &self,
    ) -> CreateOrderService<CustomerClient, ProductClient, OrderClient> {
        CreateOrderService::new(
            self.customer_client.clone(),
            self.product_client.clone(),
            self.order_client.clone(),
        )
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes each actor's channel; the actors then exit
    /// their loops and this waits for their tasks. Services built with
    /// [`create_order_service`](Self::create_order_service) hold client clones
    /// and must be dropped first, or this never returns.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.customer_client);
        drop(self.product_client);
        drop(self.order_client);

        for handle in self.handles {
            handle.await.inspect_err(|e| error!(error = %e, "Actor task failed"))?;
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
