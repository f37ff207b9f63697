use crate::actor_framework::Entity;
use crate::domain::{Basket, BasketCreate, LineItem};
use super::actions::{BasketAction, BasketActionResult};
use super::error::BasketError;

impl Basket {
    /// Adds `quantity` of a product and returns the line's new quantity.
    pub fn add(&mut self, product_id: impl Into<String>, quantity: u64) -> Result<u64, BasketError> {
        if quantity == 0 {
            return Err(BasketError::InvalidQuantity(quantity));
        }
        let product_id = product_id.into();
        match self.lines.iter_mut().find(|line| line.product_id == product_id) {
            Some(line) => {
                line.quantity = line.quantity.checked_add(quantity).ok_or(BasketError::Overflow {
                    current: line.quantity,
                    added: quantity,
                })?;
                Ok(line.quantity)
            }
            None => {
                self.lines.push(LineItem { product_id, quantity });
                Ok(quantity)
            }
        }
    }

    pub fn remove(&mut self, product_id: &str) -> Option<LineItem> {
        let index = self.lines.iter().position(|line| line.product_id == product_id)?;
        Some(self.lines.remove(index))
    }

    /// Empties the basket, returning what it held.
    pub fn clear(&mut self) -> Vec<LineItem> {
        std::mem::take(&mut self.lines)
    }

    pub fn quantity_of(&self, product_id: &str) -> u64 {
        self.lines
            .iter()
            .find(|line| line.product_id == product_id)
            .map_or(0, |line| line.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Entity for Basket {
    const KIND: &'static str = "basket";

    type Id = String;
    type CreateParams = BasketCreate;
    type Patch = ();
    type Action = BasketAction;
    type ActionResult = BasketActionResult;
    type Error = BasketError;

    fn from_create_params(id: String, params: BasketCreate) -> Result<Self, BasketError> {
        Ok(Self {
            id,
            member_id: params.member_id,
            lines: Vec::new(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), BasketError> {
        Ok(())
    }

    /// One basket per member.
    fn conflicts_with(&self, other: &Self) -> bool {
        self.member_id == other.member_id
    }

    fn handle_action(&mut self, action: BasketAction) -> Result<BasketActionResult, BasketError> {
        match action {
            BasketAction::Add { product_id, quantity } => Ok(BasketActionResult::Add(self.add(product_id, quantity)?)),
            BasketAction::Remove { product_id } => Ok(BasketActionResult::Remove(self.remove(&product_id))),
            BasketAction::Clear => {
                self.clear();
                Ok(BasketActionResult::Clear(()))
            }
            BasketAction::Checkout => Ok(BasketActionResult::Checkout(self.clear())),
            BasketAction::Restore(lines) => {
                for line in lines {
                    self.add(line.product_id, line.quantity)?;
                }
                Ok(BasketActionResult::Restore(()))
            }
        }
    }
}
