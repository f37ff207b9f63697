/// Represents a baked good on sale.
///
/// `price` is in the smallest currency unit. `stock_quantity` is only changed
/// through the stock actions of the product actor.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub ingredient: String,
    pub image: String,
    pub price: u64,
    pub stock_quantity: u64,
    /// Resolved with an explicit category lookup, never on access.
    pub category_id: Option<String>,
}

/// Parameters for registering a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub ingredient: String,
    pub image: String,
    pub price: u64,
    pub stock_quantity: u64,
    pub category_id: Option<String>,
}

/// Catalog fields an administrator may change after registration.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub ingredient: Option<String>,
    pub image: Option<String>,
    pub price: Option<u64>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: u64, stock_quantity: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ingredient: String::new(),
            image: String::new(),
            price,
            stock_quantity,
            category_id: None,
        }
    }
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: u64, stock_quantity: u64) -> Self {
        Self {
            name: name.into(),
            ingredient: String::new(),
            image: String::new(),
            price,
            stock_quantity,
            category_id: None,
        }
    }

    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredient = ingredient.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }
}
