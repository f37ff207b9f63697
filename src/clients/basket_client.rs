use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::basket_actor::{BasketAction, BasketActionResult, BasketError};
use crate::domain::{Basket, BasketCreate, LineItem};

/// Client for the basket store.
#[derive(Clone)]
pub struct BasketClient {
    inner: ResourceClient<Basket>,
}

impl_basic_client!(BasketClient, Basket, BasketError, basket, baskets);

fn unexpected(result: BasketActionResult) -> BasketError {
    BasketError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}

impl BasketClient {
    #[instrument(skip(self))]
    pub async fn create_basket(&self, member_id: String) -> Result<String, BasketError> {
        debug!("Sending request");
        Ok(self.inner.create(BasketCreate { member_id }).await?)
    }

    /// Adds to the product's line and returns the line's new quantity.
    #[instrument(skip(self))]
    pub async fn add_item(&self, basket_id: String, product_id: String, quantity: u64) -> Result<u64, BasketError> {
        debug!("Sending request");
        match self.inner.perform_action(basket_id, BasketAction::Add { product_id, quantity }).await? {
            BasketActionResult::Add(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, basket_id: String, product_id: String) -> Result<Option<LineItem>, BasketError> {
        debug!("Sending request");
        match self.inner.perform_action(basket_id, BasketAction::Remove { product_id }).await? {
            BasketActionResult::Remove(line) => Ok(line),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, basket_id: String) -> Result<(), BasketError> {
        debug!("Sending request");
        match self.inner.perform_action(basket_id, BasketAction::Clear).await? {
            BasketActionResult::Clear(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Takes every line out of the basket for checkout.
    #[instrument(skip(self))]
    pub async fn checkout(&self, basket_id: String) -> Result<Vec<LineItem>, BasketError> {
        debug!("Sending request");
        match self.inner.perform_action(basket_id, BasketAction::Checkout).await? {
            BasketActionResult::Checkout(lines) => Ok(lines),
            other => Err(unexpected(other)),
        }
    }

    /// Puts lines back after a checkout was rejected.
    #[instrument(skip(self))]
    pub async fn restore(&self, basket_id: String, lines: Vec<LineItem>) -> Result<(), BasketError> {
        debug!("Sending request");
        match self.inner.perform_action(basket_id, BasketAction::Restore(lines)).await? {
            BasketActionResult::Restore(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }
}
