use tracing::{error, info, warn, Instrument};
use cakebake::app_system::{setup_tracing, OrderSystem};
use cakebake::basket_actor::BasketError;
use cakebake::config::SystemConfig;
use cakebake::domain::{CategoryCreate, LineItem, MemberJoin, ProductCreate};
use cakebake::order_actor::OrderError;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::load();
    setup_tracing(&config);

    info!("Starting cakebake shop");

    let system = OrderSystem::new(&config);

    // Seed the catalog
    let span = tracing::info_span!("catalog_seed");
    let (castella, baguette) = async {
        info!("Seeding catalog");
        let cakes = system
            .category_client
            .create_category(CategoryCreate::new("Cakes"))
            .await
            .map_err(|e| e.to_string())?;
        let breads = system
            .category_client
            .create_category(CategoryCreate::new("Breads"))
            .await
            .map_err(|e| e.to_string())?;
        let castella = system
            .product_client
            .create_product(
                ProductCreate::new("Castella", 12_000, 10)
                    .category(cakes)
                    .ingredient("egg, flour, sugar, honey")
                    .image("castella.png"),
            )
            .await
            .map_err(|e| e.to_string())?;
        let baguette = system
            .product_client
            .create_product(ProductCreate::new("Baguette", 4_500, 1).category(breads).image("baguette.png"))
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((castella, baguette))
    }
    .instrument(span)
    .await?;

    // Join a member (opens their basket)
    let span = tracing::info_span!("member_join");
    let member = async {
        info!("Joining test member");
        system
            .member_client
            .join(MemberJoin::new("alice", "cheesecake", "Alice", "010-1234-5678", "alice@example.com"))
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    let basket_id = member.basket_id.clone().ok_or("member has no basket")?;

    // Fill the basket and check out
    let span = tracing::info_span!("order_processing");
    async {
        system.basket_client.add_item(basket_id.clone(), castella.clone(), 2).await?;
        system.basket_client.add_item(basket_id.clone(), baguette.clone(), 3).await?;
        Ok::<_, BasketError>(())
    }
    .instrument(span.clone())
    .await
    .map_err(|e| e.to_string())?;

    let first_attempt = system.order_client.place_order(member.id.clone()).instrument(span.clone()).await;
    match first_attempt {
        Ok(order) => info!(order_id = %order.id, "Order processed successfully"),
        Err(e) => warn!(error = %e, "Order rejected, basket kept for retry"),
    }

    // Drop the line that cannot be served and retry
    system
        .basket_client
        .remove_item(basket_id.clone(), baguette.clone())
        .await
        .map_err(|e| e.to_string())?;
    let order = match system.order_client.place_order(member.id.clone()).instrument(span).await {
        Ok(order) => {
            info!(order_id = %order.id, total = order.total, "Order processed successfully");
            Some(order)
        }
        Err(e) => {
            error!(error = %e, "Order processing failed");
            None
        }
    };

    // Buy-now order, then cancel it
    let span = tracing::info_span!("order_cancellation");
    async {
        let quick = system
            .order_client
            .place_order_lines(member.id.clone(), vec![LineItem::new(baguette.clone(), 1)])
            .await?;
        let cancelled = system.order_client.cancel_order(quick.id.clone()).await?;
        info!(order_id = %cancelled.id, status = %cancelled.status, "Order cancelled");
        Ok::<_, OrderError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    for product_id in [castella, baguette] {
        let level = system.product_client.stock(product_id.clone()).await.map_err(|e| e.to_string())?;
        info!(product_id = %product_id, stock_level = level, "Closing stock");
    }
    if let Some(order) = order {
        info!(order_id = %order.id, lines = order.lines.len(), "Kept order");
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
