//! Basket contents prior to checkout. No stock checks happen here.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
