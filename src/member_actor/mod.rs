//! Member accounts: join, login and credential recovery.

pub mod entity;
pub mod error;

pub use error::*;
