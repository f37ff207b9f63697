pub mod basket;
pub mod category;
pub mod member;
pub mod order;
pub mod product;

pub use basket::*;
pub use category::*;
pub use member::*;
pub use order::*;
pub use product::*;
