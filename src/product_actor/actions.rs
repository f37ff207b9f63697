/// Custom actions for Product entities.
///
/// These are the stock ledger operations. Each one is applied by the product
/// actor as a single step, so the check and the write can never interleave
/// with another request for the same product.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Adds to the stock level.
    ///
    /// # Errors
    /// Fails on a zero quantity.
    AddStock(u64),
    /// Takes from the stock level.
    ///
    /// # Errors
    /// Fails on a zero quantity or when more than the available stock is requested.
    RemoveStock(u64),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Current stock level
    CheckStock(u64),
    /// Stock level after the increase
    AddStock(u64),
    /// What was taken, priced as the product stood at that moment
    RemoveStock(StockReceipt),
}

/// Outcome of a successful `RemoveStock`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockReceipt {
    pub product_id: String,
    pub product_name: String,
    pub unit_price: u64,
    pub quantity: u64,
    pub remaining: u64,
}
