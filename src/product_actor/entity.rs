use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductPatch};
use super::actions::{ProductAction, ProductActionResult, StockReceipt};
use super::error::{ProductError, StockError};

impl Product {
    /// Adds `quantity` to stock and returns the new level.
    pub fn add_stock(&mut self, quantity: u64) -> Result<u64, StockError> {
        if quantity == 0 {
            return Err(StockError::InvalidQuantity(quantity));
        }
        self.stock_quantity = self
            .stock_quantity
            .checked_add(quantity)
            .ok_or(StockError::Overflow { current: self.stock_quantity, added: quantity })?;
        Ok(self.stock_quantity)
    }

    /// Takes `quantity` from stock and returns what is left.
    ///
    /// Stock is untouched when the request cannot be met in full.
    pub fn remove_stock(&mut self, quantity: u64) -> Result<u64, StockError> {
        if quantity == 0 {
            return Err(StockError::InvalidQuantity(quantity));
        }
        let remaining = self.stock_quantity.checked_sub(quantity).ok_or(StockError::InsufficientStock {
            requested: quantity,
            available: self.stock_quantity,
        })?;
        self.stock_quantity = remaining;
        Ok(remaining)
    }
}

impl Entity for Product {
    const KIND: &'static str = "product";

    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = ProductError;

    /// Creates a new Product from creation parameters.
    ///
    /// The category reference is checked by the client before the request reaches the actor.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, ProductError> {
        if params.name.trim().is_empty() {
            return Err(ProductError::ValidationError("Product name required".to_string()));
        }
        Ok(Self {
            id,
            name: params.name,
            ingredient: params.ingredient,
            image: params.image,
            price: params.price,
            stock_quantity: params.stock_quantity,
            category_id: params.category_id,
        })
    }

    /// Updates catalog fields. Stock is not patchable.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), ProductError> {
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(ProductError::ValidationError("Product name required".to_string()));
            }
            self.name = name;
        }
        if let Some(ingredient) = patch.ingredient {
            self.ingredient = ingredient;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        Ok(())
    }

    /// Two products may not share a name inside the same category.
    fn conflicts_with(&self, other: &Self) -> bool {
        self.name == other.name && self.category_id == other.category_id
    }

    /// Handles the stock ledger actions.
    ///
    /// # Errors
    /// Returns a [`StockError`] when the change would break the stock invariant.
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock_quantity)),
            ProductAction::AddStock(quantity) => Ok(ProductActionResult::AddStock(self.add_stock(quantity)?)),
            ProductAction::RemoveStock(quantity) => {
                let remaining = self.remove_stock(quantity)?;
                Ok(ProductActionResult::RemoveStock(StockReceipt {
                    product_id: self.id.clone(),
                    product_name: self.name.clone(),
                    unit_price: self.price,
                    quantity,
                    remaining,
                }))
            }
        }
    }
}
