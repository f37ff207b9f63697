use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::category_actor::CategoryError;
use crate::domain::{Category, CategoryCreate};

/// Client for interacting with the Category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl_basic_client!(CategoryClient, Category, CategoryError, category, categories);

impl CategoryClient {
    #[instrument(skip(self))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<String, CategoryError> {
        debug!("Sending request");
        let id = self.inner.create(params).await?;
        info!(category_id = %id, "Category created");
        Ok(id)
    }
}
