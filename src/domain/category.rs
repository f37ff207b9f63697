/// A shelf of the shop (cakes, breads, cookies, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Parameters for creating a new category.
#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub name: String,
}

impl CategoryCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
