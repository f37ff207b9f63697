use crate::domain::Order;

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves an `Ordered` order to `Cancelled`.
    Cancel,
    /// Puts a `Cancelled` order back to `Ordered` when its stock could not be returned.
    Reopen,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The order as it stands after cancellation
    Cancel(Order),
    Reopen(Order),
}
