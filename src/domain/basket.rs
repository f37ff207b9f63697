/// A product and how many of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product_id: String,
    pub quantity: u64,
}

impl LineItem {
    pub fn new(product_id: impl Into<String>, quantity: u64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// A member's pending selection. Holds at most one line per product.
#[derive(Debug, Clone, PartialEq)]
pub struct Basket {
    pub id: String,
    pub member_id: String,
    pub lines: Vec<LineItem>,
}

/// Parameters for opening a basket.
#[derive(Debug, Clone)]
pub struct BasketCreate {
    pub member_id: String,
}
