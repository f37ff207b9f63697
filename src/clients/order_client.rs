use tracing::{error, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::clients::{BasketClient, MemberClient, ProductClient};
use crate::domain::{LineItem, Member, Order, OrderCreate, OrderLine};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::product_actor::{ProductError, StockError, StockReceipt};

/// Client for interacting with the Order actor.
///
/// This client handles the checkout orchestration: it validates the member,
/// takes the basket, decrements stock for every line as one unit and records
/// the order with the prices captured by that decrement.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    member_client: MemberClient,
    basket_client: BasketClient,
    product_client: ProductClient,
}

impl_client_methods!(OrderClient, Order, OrderError, order, orders);

impl From<ProductError> for OrderError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Rejected {
                product_id,
                source: StockError::InsufficientStock { requested, available },
            } => OrderError::OrderPlacementFailed { product_id, requested, available },
            ProductError::Rejected { product_id, source } => {
                OrderError::ValidationError(format!("Line for {}: {}", product_id, source))
            }
            ProductError::NotFound(id) => OrderError::InvalidProduct(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<StockReceipt> for OrderLine {
    fn from(receipt: StockReceipt) -> Self {
        Self {
            product_id: receipt.product_id,
            product_name: receipt.product_name,
            quantity: receipt.quantity,
            unit_price: receipt.unit_price,
        }
    }
}

fn unexpected(result: OrderActionResult) -> OrderError {
    OrderError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}

/// Folds repeated products into one line, so each product is checked once
/// against its stored level.
fn merge_lines(lines: &[LineItem]) -> Result<Vec<LineItem>, OrderError> {
    let mut merged: Vec<LineItem> = Vec::with_capacity(lines.len());
    for line in lines {
        match merged.iter_mut().find(|existing| existing.product_id == line.product_id) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(line.quantity)
                    .ok_or_else(|| OrderError::ValidationError(format!("Quantity overflow for {}", line.product_id)))?;
            }
            None => merged.push(line.clone()),
        }
    }
    Ok(merged)
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        member_client: MemberClient,
        basket_client: BasketClient,
        product_client: ProductClient,
    ) -> Self {
        Self {
            inner,
            member_client,
            basket_client,
            product_client,
        }
    }

    /// Checks out the member's basket.
    ///
    /// On any failure the basket lines are put back and no stock is taken.
    /// Submitting an already checked-out basket again fails with `EmptyBasket`.
    #[instrument(skip(self))]
    pub async fn place_order(&self, member_id: String) -> Result<Order, OrderError> {
        info!("Processing place_order request (Client Side)");

        // Step 1: Validate member
        let member = self.validate_member(&member_id).await?;
        let basket_id = member
            .basket_id
            .clone()
            .ok_or_else(|| OrderError::InvalidMember(format!("Member {} has no basket", member_id)))?;

        // Step 2: Take the basket lines
        let lines = self
            .basket_client
            .checkout(basket_id.clone())
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        if lines.is_empty() {
            warn!(basket_id = %basket_id, "Checkout of empty basket");
            return Err(OrderError::EmptyBasket(basket_id));
        }

        // Step 3: Take stock and record the order
        match self.commit_lines(&member, &lines).await {
            Ok(order) => Ok(order),
            Err(e) => {
                if let Err(restore_err) = self.basket_client.restore(basket_id.clone(), lines).await {
                    error!(basket_id = %basket_id, error = %restore_err, "Basket restore failed");
                }
                Err(e)
            }
        }
    }

    /// Places an order for explicit lines without touching the member's basket.
    #[instrument(skip(self, lines), fields(line_count = lines.len()))]
    pub async fn place_order_lines(&self, member_id: String, lines: Vec<LineItem>) -> Result<Order, OrderError> {
        info!("Processing place_order_lines request (Client Side)");
        if lines.is_empty() {
            return Err(OrderError::ValidationError("No order lines".to_string()));
        }
        let member = self.validate_member(&member_id).await?;
        self.commit_lines(&member, &lines).await
    }

    /// Cancels an order and returns its quantities to stock.
    ///
    /// When the stock cannot be returned the order is reopened, so the
    /// cancellation can be retried.
    ///
    /// # Errors
    /// `AlreadyCancelled` on a second cancellation; stock is untouched then.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: String) -> Result<Order, OrderError> {
        info!("Processing cancel_order request (Client Side)");
        let order = match self.inner.perform_action(order_id, OrderAction::Cancel).await? {
            OrderActionResult::Cancel(order) => order,
            other => return Err(unexpected(other)),
        };

        let lines: Vec<LineItem> = order
            .lines
            .iter()
            .map(|line| LineItem::new(line.product_id.clone(), line.quantity))
            .collect();
        if let Err(e) = self.product_client.increase_all(&lines).await {
            error!(order_id = %order.id, error = %e, "Restock after cancellation failed, reopening order");
            if let Err(reopen_err) = self.inner.perform_action(order.id.clone(), OrderAction::Reopen).await {
                error!(order_id = %order.id, error = %reopen_err, "Reopen failed");
            }
            return Err(OrderError::from(e));
        }

        info!(order_id = %order.id, "Order cancelled");
        Ok(order)
    }

    /// All orders placed by a member.
    #[instrument(skip(self))]
    pub async fn orders_of(&self, member_id: String) -> Result<Vec<Order>, OrderError> {
        Ok(self.inner.find(move |order: &Order| order.member_id == member_id).await?)
    }

    async fn validate_member(&self, member_id: &str) -> Result<Member, OrderError> {
        match self.member_client.get_member(member_id.to_string()).await {
            Ok(Some(member)) => {
                info!(user_id = %member.user_id, "Member validation successful");
                Ok(member)
            }
            Ok(None) => {
                error!("Member not found");
                Err(OrderError::InvalidMember(member_id.to_string()))
            }
            Err(e) => {
                error!(error = %e, "Member validation failed");
                Err(OrderError::InvalidMember(format!("Member validation failed: {}", e)))
            }
        }
    }

    async fn commit_lines(&self, member: &Member, lines: &[LineItem]) -> Result<Order, OrderError> {
        if let Some(line) = lines.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::ValidationError(format!("Zero quantity for {}", line.product_id)));
        }
        let lines = merge_lines(lines)?;

        let receipts = self.product_client.decrease_all(&lines).await.map_err(|e| {
            warn!(error = %e, "Stock reservation failed");
            OrderError::from(e)
        })?;
        info!("Stock reserved successfully");

        let params = OrderCreate {
            member_id: member.id.clone(),
            lines: receipts.into_iter().map(OrderLine::from).collect(),
        };
        let order_id = match self.inner.create(params).await {
            Ok(order_id) => order_id,
            Err(e) => {
                error!(error = %e, "Order record failed, returning stock");
                if let Err(restock_err) = self.product_client.increase_all(&lines).await {
                    error!(error = %restock_err, "Compensating restock failed");
                }
                return Err(OrderError::from(e));
            }
        };

        let order = self.inner.get(order_id.clone()).await?.ok_or(OrderError::NotFound(order_id))?;
        info!(order_id = %order.id, total = order.total, "Order created successfully");
        Ok(order)
    }
}
