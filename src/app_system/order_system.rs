use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info, instrument};
use crate::actor_framework::{Entity, ResourceActor, ResourceClient};
use crate::clients::{BasketClient, CategoryClient, MemberClient, OrderClient, ProductClient};
use crate::config::SystemConfig;
use crate::domain::{Basket, Category, Member, Order, Product};

/// Id generator producing `prefix_1`, `prefix_2`, ...
fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst))
}

fn spawn_actor<T: Entity<Id = String>>(
    capacity: usize,
    handles: &mut Vec<tokio::task::JoinHandle<()>>,
) -> ResourceClient<T> {
    let (actor, client) = ResourceActor::<T>::new(capacity, sequential_ids(T::KIND));
    handles.push(tokio::spawn(actor.run()));
    client
}

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct OrderSystem {
    pub category_client: CategoryClient,
    pub product_client: ProductClient,
    pub basket_client: BasketClient,
    pub member_client: MemberClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts every actor. Must be called inside a tokio runtime.
    #[instrument(name = "order_system", skip(config))]
    pub fn new(config: &SystemConfig) -> Self {
        let capacity = config.channel_capacity;
        let mut handles = Vec::new();

        info!("Starting order system");

        // Leaf actors first
        let category_client = CategoryClient::new(spawn_actor::<Category>(capacity, &mut handles));
        let basket_client = BasketClient::new(spawn_actor::<Basket>(capacity, &mut handles));
        let product_client = ProductClient::new(spawn_actor::<Product>(capacity, &mut handles), category_client.clone());
        let member_client = MemberClient::new(spawn_actor::<Member>(capacity, &mut handles), basket_client.clone());

        // Orchestrating client last, with its dependencies injected
        let order_client = OrderClient::new(
            spawn_actor::<Order>(capacity, &mut handles),
            member_client.clone(),
            basket_client.clone(),
            product_client.clone(),
        );

        info!("Order system started successfully");

        Self {
            category_client,
            product_client,
            basket_client,
            member_client,
            order_client,
            handles,
        }
    }

    /// Drops every client, which closes the actor mailboxes, then waits for the actors.
    ///
    /// Clones handed out elsewhere keep their actors alive; drop them first.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order system");

        // Dependents first
        drop(self.order_client);
        drop(self.member_client);
        drop(self.product_client);
        drop(self.basket_client);
        drop(self.category_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Order system shutdown complete");
        Ok(())
    }
}
