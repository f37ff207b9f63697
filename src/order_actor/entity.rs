use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderStatus};
use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;

impl Entity for Order {
    const KIND: &'static str = "order";

    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Error = OrderError;

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// The order is initialized with status `Ordered` and the total is computed
    /// from the frozen unit prices of its lines.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, OrderError> {
        if params.lines.is_empty() {
            return Err(OrderError::ValidationError("Order needs at least one line".to_string()));
        }
        let total = params
            .lines
            .iter()
            .try_fold(0u64, |total, line| line.subtotal().and_then(|subtotal| total.checked_add(subtotal)))
            .ok_or_else(|| OrderError::ValidationError("Order total overflows".to_string()))?;
        Ok(Self {
            id,
            member_id: params.member_id,
            lines: params.lines,
            total,
            status: OrderStatus::Ordered,
        })
    }

    /// Orders are not edited after placement.
    fn on_update(&mut self, _patch: ()) -> Result<(), OrderError> {
        Ok(())
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Cancel => {
                if self.status == OrderStatus::Cancelled {
                    return Err(OrderError::AlreadyCancelled(self.id.clone()));
                }
                self.status = OrderStatus::Cancelled;
                Ok(OrderActionResult::Cancel(self.clone()))
            }
            OrderAction::Reopen => {
                if self.status != OrderStatus::Cancelled {
                    return Err(OrderError::ValidationError(format!("Order {} is not cancelled", self.id)));
                }
                self.status = OrderStatus::Ordered;
                Ok(OrderActionResult::Reopen(self.clone()))
            }
        }
    }
}
