use tracing::{debug, info, instrument, warn};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::clients::CategoryClient;
use crate::domain::{LineItem, Product, ProductCreate, ProductPatch};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError, StockReceipt};

/// Client for the Product actor and the stock ledger it keeps.
///
/// Every stock change is a single request to the actor, so concurrent callers
/// can never decide on a stale stock level.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
    category_client: CategoryClient,
}

impl_client_methods!(ProductClient, Product, ProductError, product, products);

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>, category_client: CategoryClient) -> Self {
        Self { inner, category_client }
    }

    /// Registers a product after resolving its category.
    #[instrument(skip(self, params), fields(product_name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, ProductError> {
        debug!("Sending request");
        if let Some(category_id) = &params.category_id {
            let category = self
                .category_client
                .get_category(category_id.clone())
                .await
                .map_err(|e| ProductError::ActorCommunicationError(e.to_string()))?;
            if category.is_none() {
                warn!(category_id = %category_id, "Unknown category");
                return Err(ProductError::InvalidCategory(category_id.clone()));
            }
        }
        let id = self.inner.create(params).await?;
        info!(product_id = %id, "Product created");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: String, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    #[instrument(skip(self))]
    pub async fn products_in_category(&self, category_id: String) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        Ok(self
            .inner
            .find(move |product: &Product| product.category_id.as_deref() == Some(category_id.as_str()))
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn stock(&self, id: String) -> Result<u64, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::CheckStock).await? {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Restocks a product and returns the new level.
    #[instrument(skip(self))]
    pub async fn increase_stock(&self, id: String, quantity: u64) -> Result<u64, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::AddStock(quantity)).await? {
            ProductActionResult::AddStock(level) => {
                info!(stock_level = level, "Stock increased");
                Ok(level)
            }
            other => Err(unexpected(other)),
        }
    }

    /// Takes stock from one product and returns what is left.
    ///
    /// # Errors
    /// `Stock(InsufficientStock)` with stock unchanged when the request exceeds the level.
    #[instrument(skip(self))]
    pub async fn decrease_stock(&self, id: String, quantity: u64) -> Result<u64, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::RemoveStock(quantity)).await? {
            ProductActionResult::RemoveStock(receipt) => {
                info!(remaining_stock = receipt.remaining, "Stock decreased");
                Ok(receipt.remaining)
            }
            other => Err(unexpected(other)),
        }
    }

    /// Takes stock for every line as one unit.
    ///
    /// # Errors
    /// `Rejected` naming the first line that cannot be served; no line is applied then.
    #[instrument(skip(self, lines), fields(line_count = lines.len()))]
    pub async fn decrease_all(&self, lines: &[LineItem]) -> Result<Vec<StockReceipt>, ProductError> {
        debug!("Sending request");
        let steps = lines
            .iter()
            .map(|line| (line.product_id.clone(), ProductAction::RemoveStock(line.quantity)))
            .collect();
        let results = self.inner.transact(steps).await.map_err(|e| rejected_line(lines, e))?;
        let receipts = results
            .into_iter()
            .map(|result| match result {
                ProductActionResult::RemoveStock(receipt) => Ok(receipt),
                other => Err(unexpected(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        info!("Stock decreased for all lines");
        Ok(receipts)
    }

    /// Returns stock for every line as one unit.
    #[instrument(skip(self, lines), fields(line_count = lines.len()))]
    pub async fn increase_all(&self, lines: &[LineItem]) -> Result<(), ProductError> {
        debug!("Sending request");
        let steps = lines
            .iter()
            .map(|line| (line.product_id.clone(), ProductAction::AddStock(line.quantity)))
            .collect();
        self.inner.transact(steps).await.map_err(|e| rejected_line(lines, e))?;
        info!("Stock increased for all lines");
        Ok(())
    }
}

/// Attributes a failed transaction step to the product of that line.
fn rejected_line(lines: &[LineItem], err: FrameworkError<ProductError>) -> ProductError {
    match err {
        FrameworkError::StepFailed { index, error: ProductError::Stock(source) } => {
            let product_id = lines.get(index).map(|line| line.product_id.clone()).unwrap_or_default();
            warn!(product_id = %product_id, error = %source, "Stock change rejected");
            ProductError::Rejected { product_id, source }
        }
        other => ProductError::from(other),
    }
}
