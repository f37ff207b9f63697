use crate::domain::LineItem;

/// Custom actions for Basket entities.
#[derive(Debug, Clone)]
pub enum BasketAction {
    /// Appends a line or merges into the existing line for the product.
    Add { product_id: String, quantity: u64 },
    /// Drops the product's line.
    Remove { product_id: String },
    /// Empties the basket.
    Clear,
    /// Empties the basket and hands its lines to the caller in one step,
    /// so the same lines can never be checked out twice.
    Checkout,
    /// Merges lines back after a rejected checkout.
    Restore(Vec<LineItem>),
}

/// Results from BasketActions - variants match 1:1 with BasketAction
#[derive(Debug, Clone, PartialEq)]
pub enum BasketActionResult {
    /// Quantity now on the product's line
    Add(u64),
    /// The removed line, if there was one
    Remove(Option<LineItem>),
    Clear(()),
    /// Lines taken out of the basket
    Checkout(Vec<LineItem>),
    Restore(()),
}
