//! # Generic Actor Server
//!
//! [`ResourceActor`] owns the store for one entity type and answers
//! [`ResourceRequest`]s one at a time from its own Tokio task.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half: it owns the `store` and the receiving end of the
/// channel. Messages are processed sequentially, so the store needs no lock.
/// Two different messages from two different callers never interleave, but a
/// caller that reads with one message and writes with another gets no
/// isolation between the two.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// #[derive(Clone, Debug)] struct Product { id: u32, stock: u32 }
/// #[derive(Debug)] struct ProductCreate { stock: u32 }
/// #[derive(Debug)] struct ProductUpdate { stock: u32 }
/// #[derive(Debug)] enum ProductAction { CheckStock }
/// #[derive(Debug, thiserror::Error)] #[error("product error")] struct ProductError;
///
/// #[async_trait]
/// impl ActorEntity for Product {
///     type Id = u32;
///     type Create = ProductCreate;
///     type Update = ProductUpdate;
///     type Action = ProductAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = ProductError;
///
///     fn from_create_params(id: u32, params: ProductCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, stock: params.stock })
///     }
///     async fn on_update(&mut self, update: ProductUpdate, _: &()) -> Result<(), Self::Error> {
///         self.stock = update.stock;
///         Ok(())
///     }
///     async fn handle_action(&mut self, action: ProductAction, _: &()) -> Result<u32, Self::Error> {
///         match action { ProductAction::CheckStock => Ok(self.stock) }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let counter = AtomicU32::new(1);
///     let (actor, client) =
///         ResourceActor::<Product>::new(10, move || counter.fetch_add(1, Ordering::SeqCst));
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(ProductCreate { stock: 5 }).await.unwrap();
///     client.update_many(vec![(id, ProductUpdate { stock: 2 })]).await.unwrap();
///     let stock = client.perform_action(id, ProductAction::CheckStock).await.unwrap();
///     assert_eq!(stock, 2);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the MPSC channel. When it is full, client
    ///   calls wait for space.
    /// * `next_id` - Called once per `Create` to mint the new entity's id.
    pub fn new(
        buffer_size: usize,
        next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: Box::new(next_id),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Product" rather than "order_placement::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg, &context, entity_type).await;
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn handle(&mut self, msg: ResourceRequest<T>, context: &T::Context, entity_type: &str) {
        match msg {
            ResourceRequest::Create { params, respond_to } => {
                debug!(entity_type, ?params, "Create");
                let result = self.create(params, context).await;
                match &result {
                    Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                    Err(e) => warn!(entity_type, error = %e, "Create failed"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Get { id, respond_to } => {
                let item = self.store.get(&id).cloned();
                debug!(entity_type, %id, found = item.is_some(), "Get");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::GetMany { ids, respond_to } => {
                let items: Vec<T> = ids
                    .iter()
                    .filter_map(|id| self.store.get(id).cloned())
                    .collect();
                debug!(entity_type, requested = ids.len(), found = items.len(), "GetMany");
                let _ = respond_to.send(Ok(items));
            }
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            } => {
                debug!(entity_type, %id, ?update, "Update");
                let result = self.update(id.clone(), update, context).await;
                match &result {
                    Ok(_) => info!(entity_type, %id, "Updated"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::UpdateMany {
                updates,
                respond_to,
            } => {
                debug!(entity_type, count = updates.len(), "UpdateMany");
                let result = self.update_many(updates, context).await;
                match &result {
                    Ok(items) => info!(entity_type, count = items.len(), "Updated batch"),
                    Err(e) => warn!(entity_type, error = %e, "Batch update failed"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Delete { id, respond_to } => {
                debug!(entity_type, %id, "Delete");
                let result = self.delete(&id, context).await;
                match &result {
                    Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            } => {
                debug!(entity_type, %id, ?action, "Action");
                let result = match self.store.get_mut(&id) {
                    Some(item) => item
                        .handle_action(action, context)
                        .await
                        .map_err(FrameworkError::entity),
                    None => Err(FrameworkError::NotFound(id.to_string())),
                };
                match &result {
                    Ok(_) => info!(entity_type, %id, "Action ok"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                }
                let _ = respond_to.send(result);
            }
        }
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let id = (self.next_id)();
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::entity)?;
        item.on_create(context).await.map_err(FrameworkError::entity)?;
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let item = self
            .store
            .get_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_update(update, context)
            .await
            .map_err(FrameworkError::entity)?;
        Ok(item.clone())
    }

    async fn update_many(
        &mut self,
        updates: Vec<(T::Id, T::Update)>,
        context: &T::Context,
    ) -> Result<Vec<T>, FrameworkError> {
        // Updates are applied to copies and committed only if all of them succeed.
        let mut staged: Vec<(T::Id, T)> = Vec::with_capacity(updates.len());
        for (id, update) in updates {
            let mut item = match staged.iter().rev().find(|(staged_id, _)| *staged_id == id) {
                Some((_, item)) => item.clone(),
                None => self
                    .store
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?,
            };
            item.on_update(update, context)
                .await
                .map_err(FrameworkError::entity)?;
            staged.push((id, item));
        }
        for (id, item) in &staged {
            self.store.insert(id.clone(), item.clone());
        }
        Ok(staged.into_iter().map(|(_, item)| item).collect())
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete(context).await.map_err(FrameworkError::entity)?;
        self.store.remove(id);
        Ok(())
    }
}
