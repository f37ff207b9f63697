use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Ordered,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Ordered => write!(f, "ordered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// One ordered product with the name and unit price it had when the order was placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u64,
    pub unit_price: u64,
}

impl OrderLine {
    pub fn subtotal(&self) -> Option<u64> {
        self.unit_price.checked_mul(self.quantity)
    }
}

/// Represents a placed order. Only `status` changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub member_id: String,
    pub lines: Vec<OrderLine>,
    pub total: u64,
    pub status: OrderStatus,
}

/// Payload for recording a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub member_id: String,
    pub lines: Vec<OrderLine>,
}
