use crate::actor_framework::Entity;
use crate::domain::{Category, CategoryCreate};
use super::error::CategoryError;

impl Entity for Category {
    const KIND: &'static str = "category";

    type Id = String;
    type CreateParams = CategoryCreate;
    type Patch = ();
    type Action = ();
    type ActionResult = ();
    type Error = CategoryError;

    fn from_create_params(id: String, params: CategoryCreate) -> Result<Self, CategoryError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(CategoryError::ValidationError("Category name required".to_string()));
        }
        Ok(Self { id, name: name.to_string() })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), CategoryError> {
        Ok(())
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), CategoryError> {
        Ok(())
    }
}
