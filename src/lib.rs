//! # cakebake
//!
//! Back end of a bakery shop: categories, products, members, baskets and orders.
//!
//! Every aggregate lives in its own [`actor_framework::ResourceActor`], a tokio task
//! that owns its records and handles one request at a time. Callers use the cloneable
//! clients in [`clients`]:
//!
//! - [`clients::ProductClient`] keeps the stock ledger. Stock never goes negative and a
//!   multi-product decrease is applied as one unit.
//! - [`clients::BasketClient`] holds what a member picked before checkout.
//! - [`clients::OrderClient`] checks out a basket: all lines are served or none are,
//!   and each line keeps the price it had when the stock was taken.
//! - [`clients::MemberClient`] handles join, login and credential recovery.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use cakebake::app_system::OrderSystem;
//! use cakebake::config::SystemConfig;
//! use cakebake::domain::{MemberJoin, ProductCreate};
//!
//! let system = OrderSystem::new(&SystemConfig::default());
//! let cake = system.product_client.create_product(ProductCreate::new("Castella", 12_000, 10)).await?;
//! let member = system
//!     .member_client
//!     .join(MemberJoin::new("alice", "pw", "Alice", "010-1234-5678", "alice@example.com"))
//!     .await?;
//! let basket_id = member.basket_id.clone().unwrap_or_default();
//! system.basket_client.add_item(basket_id, cake, 2).await?;
//! let _order = system.order_client.place_order(member.id).await?;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod basket_actor;
pub mod category_actor;
pub mod clients;
pub mod config;
pub mod domain;
pub mod member_actor;
pub mod order_actor;
pub mod product_actor;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;
