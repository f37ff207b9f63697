//! Category records for the catalog.

pub mod entity;
pub mod error;

pub use error::*;
