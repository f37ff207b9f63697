//! Typed handles over the resource actors.
//!
//! Each client turns framework failures into its domain error and traces
//! every call.

#[macro_use]
mod macros;

pub mod basket_client;
pub mod category_client;
pub mod member_client;
pub mod order_client;
pub mod product_client;

pub use basket_client::*;
pub use category_client::*;
pub use member_client::*;
pub use order_client::*;
pub use product_client::*;
