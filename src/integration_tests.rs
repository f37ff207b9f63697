#[cfg(test)]
mod tests {
    use crate::actor_framework::FrameworkError;
    use crate::app_system::OrderSystem;
    use crate::basket_actor::{BasketAction, BasketActionResult};
    use crate::clients::{BasketClient, CategoryClient, MemberClient, OrderClient, ProductClient};
    use crate::config::SystemConfig;
    use crate::domain::{
        Basket, Category, CategoryCreate, LineItem, Member, MemberJoin, Order, OrderStatus, Product, ProductCreate,
        ProductPatch,
    };
    use crate::member_actor::MemberError;
    use crate::mock_framework::{
        create_mock_client, expect_action, expect_create, expect_delete, expect_get, expect_transact,
    };
    use crate::order_actor::OrderError;
    use crate::product_actor::{ProductAction, ProductActionResult, ProductError, StockError, StockReceipt};

    fn member(id: &str) -> Member {
        Member {
            id: id.into(),
            user_id: "kim".into(),
            password: "pw".into(),
            name: "Kim".into(),
            phone: "010-0000-0000".into(),
            email: "kim@example.com".into(),
            basket_id: Some("basket_1".into()),
        }
    }

    #[tokio::test]
    async fn test_order_creation_flow() {
        // 1. Setup Mocks
        let (member_inner, mut member_rx) = create_mock_client::<Member>(10);
        let (basket_inner, mut basket_rx) = create_mock_client::<Basket>(10);
        let (category_inner, _category_rx) = create_mock_client::<Category>(10);
        let (product_inner, mut product_rx) = create_mock_client::<Product>(10);
        let (order_inner, mut order_rx) = create_mock_client::<Order>(10);

        let basket_client = BasketClient::new(basket_inner);
        let member_client = MemberClient::new(member_inner, basket_client.clone());
        let product_client = ProductClient::new(product_inner, CategoryClient::new(category_inner));
        let order_client = OrderClient::new(order_inner, member_client, basket_client, product_client);

        // 2. Execute Order Placement in background
        let order_task = tokio::spawn(async move { order_client.place_order("member_1".to_string()).await });

        // 3. Verify Interactions

        // Expect Member Get
        let (member_id, responder) = expect_get(&mut member_rx).await.expect("Expected Member Get");
        assert_eq!(member_id, "member_1");
        responder.send(Ok(Some(member("member_1")))).unwrap();

        // Expect Basket Checkout
        let (basket_id, action, responder) = expect_action(&mut basket_rx).await.expect("Expected Basket Action");
        assert_eq!(basket_id, "basket_1");
        assert!(matches!(action, BasketAction::Checkout));
        responder
            .send(Ok(BasketActionResult::Checkout(vec![LineItem::new("product_1", 5)])))
            .unwrap();

        // Expect Stock Transaction
        let (steps, responder) = expect_transact(&mut product_rx).await.expect("Expected Product Transact");
        assert_eq!(steps.len(), 1);
        match &steps[0] {
            (id, ProductAction::RemoveStock(qty)) => {
                assert_eq!(id, "product_1");
                assert_eq!(*qty, 5);
            }
            other => panic!("Unexpected step: {:?}", other),
        }
        responder
            .send(Ok(vec![ProductActionResult::RemoveStock(StockReceipt {
                product_id: "product_1".into(),
                product_name: "Castella".into(),
                unit_price: 20,
                quantity: 5,
                remaining: 95,
            })]))
            .unwrap();

        // Expect Order Create
        let (params, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(params.member_id, "member_1");
        assert_eq!(params.lines.len(), 1);
        assert_eq!(params.lines[0].unit_price, 20);
        responder.send(Ok("order_1".to_string())).unwrap();

        // Expect Order Get
        let (order_id, responder) = expect_get(&mut order_rx).await.expect("Expected Order Get");
        assert_eq!(order_id, "order_1");
        let order = Order {
            id: "order_1".into(),
            member_id: "member_1".into(),
            lines: params.lines,
            total: 100,
            status: OrderStatus::Ordered,
        };
        responder.send(Ok(Some(order))).unwrap();

        // 4. Verify Result
        let result = order_task.await.unwrap().unwrap();
        assert_eq!(result.id, "order_1");
        assert_eq!(result.total, 100);
    }

    #[tokio::test]
    async fn test_rejected_stock_restores_basket() {
        let (member_inner, mut member_rx) = create_mock_client::<Member>(10);
        let (basket_inner, mut basket_rx) = create_mock_client::<Basket>(10);
        let (category_inner, _category_rx) = create_mock_client::<Category>(10);
        let (product_inner, mut product_rx) = create_mock_client::<Product>(10);
        let (order_inner, mut order_rx) = create_mock_client::<Order>(10);

        let basket_client = BasketClient::new(basket_inner);
        let member_client = MemberClient::new(member_inner, basket_client.clone());
        let product_client = ProductClient::new(product_inner, CategoryClient::new(category_inner));
        let order_client = OrderClient::new(order_inner, member_client, basket_client, product_client);

        let order_task = tokio::spawn(async move { order_client.place_order("member_1".to_string()).await });

        let (_, responder) = expect_get(&mut member_rx).await.expect("Expected Member Get");
        responder.send(Ok(Some(member("member_1")))).unwrap();

        let lines = vec![LineItem::new("product_1", 2), LineItem::new("product_2", 100)];
        let (_, _, responder) = expect_action(&mut basket_rx).await.expect("Expected Basket Checkout");
        responder.send(Ok(BasketActionResult::Checkout(lines.clone()))).unwrap();

        let (_, responder) = expect_transact(&mut product_rx).await.expect("Expected Product Transact");
        responder
            .send(Err(FrameworkError::StepFailed {
                index: 1,
                error: ProductError::Stock(StockError::InsufficientStock { requested: 100, available: 1 }),
            }))
            .unwrap();

        // The lines go back into the basket
        let (basket_id, action, responder) = expect_action(&mut basket_rx).await.expect("Expected Basket Restore");
        assert_eq!(basket_id, "basket_1");
        match action {
            BasketAction::Restore(restored) => assert_eq!(restored, lines),
            other => panic!("Unexpected action: {:?}", other),
        }
        responder.send(Ok(BasketActionResult::Restore(()))).unwrap();

        let result = order_task.await.unwrap();
        assert_eq!(
            result,
            Err(OrderError::OrderPlacementFailed { product_id: "product_2".into(), requested: 100, available: 1 })
        );
        // No order was recorded
        assert!(order_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_failed_order_record_returns_stock() {
        let (member_inner, mut member_rx) = create_mock_client::<Member>(10);
        let (basket_inner, mut basket_rx) = create_mock_client::<Basket>(10);
        let (category_inner, _category_rx) = create_mock_client::<Category>(10);
        let (product_inner, mut product_rx) = create_mock_client::<Product>(10);
        let (order_inner, mut order_rx) = create_mock_client::<Order>(10);

        let basket_client = BasketClient::new(basket_inner);
        let member_client = MemberClient::new(member_inner, basket_client.clone());
        let product_client = ProductClient::new(product_inner, CategoryClient::new(category_inner));
        let order_client = OrderClient::new(order_inner, member_client, basket_client, product_client);

        let order_task = tokio::spawn(async move { order_client.place_order("member_1".to_string()).await });

        let (_, responder) = expect_get(&mut member_rx).await.expect("Expected Member Get");
        responder.send(Ok(Some(member("member_1")))).unwrap();

        let lines = vec![LineItem::new("product_1", 2)];
        let (_, _, responder) = expect_action(&mut basket_rx).await.expect("Expected Basket Checkout");
        responder.send(Ok(BasketActionResult::Checkout(lines.clone()))).unwrap();

        let (_, responder) = expect_transact(&mut product_rx).await.expect("Expected Product Transact");
        responder
            .send(Ok(vec![ProductActionResult::RemoveStock(StockReceipt {
                product_id: "product_1".into(),
                product_name: "Castella".into(),
                unit_price: 12_000,
                quantity: 2,
                remaining: 3,
            })]))
            .unwrap();

        // Recording the order fails after the stock was taken
        let (_, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        responder
            .send(Err(FrameworkError::Entity(OrderError::ValidationError("Order total overflows".into()))))
            .unwrap();

        // The taken stock is returned
        let (steps, responder) = expect_transact(&mut product_rx).await.expect("Expected Product Restock");
        assert_eq!(steps.len(), 1);
        match &steps[0] {
            (id, ProductAction::AddStock(qty)) => {
                assert_eq!(id, "product_1");
                assert_eq!(*qty, 2);
            }
            other => panic!("Unexpected step: {:?}", other),
        }
        responder.send(Ok(vec![ProductActionResult::AddStock(5)])).unwrap();

        // Then the basket gets its lines back
        let (basket_id, action, responder) = expect_action(&mut basket_rx).await.expect("Expected Basket Restore");
        assert_eq!(basket_id, "basket_1");
        match action {
            BasketAction::Restore(restored) => assert_eq!(restored, lines),
            other => panic!("Unexpected action: {:?}", other),
        }
        responder.send(Ok(BasketActionResult::Restore(()))).unwrap();

        let result = order_task.await.unwrap();
        assert_eq!(result, Err(OrderError::ValidationError("Order total overflows".into())));
    }

    #[tokio::test]
    async fn test_join_removes_member_when_basket_fails() {
        let (member_inner, mut member_rx) = create_mock_client::<Member>(10);
        let (basket_inner, mut basket_rx) = create_mock_client::<Basket>(10);
        let member_client = MemberClient::new(member_inner, BasketClient::new(basket_inner));

        let join_task = tokio::spawn(async move {
            member_client
                .join(MemberJoin::new("kim", "pw", "Kim", "010-0000-0000", "kim@example.com"))
                .await
        });

        let (params, responder) = expect_create(&mut member_rx).await.expect("Expected Member Create");
        assert_eq!(params.user_id, "kim");
        responder.send(Ok("member_1".to_string())).unwrap();

        let (params, responder) = expect_create(&mut basket_rx).await.expect("Expected Basket Create");
        assert_eq!(params.member_id, "member_1");
        responder.send(Err(FrameworkError::ActorClosed)).unwrap();

        // The member is removed so the user id can join again
        let (member_id, responder) = expect_delete(&mut member_rx).await.expect("Expected Member Delete");
        assert_eq!(member_id, "member_1");
        let mut removed = member("member_1");
        removed.basket_id = None;
        responder.send(Ok(removed)).unwrap();

        let result = join_task.await.unwrap();
        assert!(matches!(result, Err(MemberError::Basket(_))));
    }

    // --- Full system ---

    async fn seed_product(system: &OrderSystem, name: &str, price: u64, stock: u64) -> String {
        system
            .product_client
            .create_product(ProductCreate::new(name, price, stock))
            .await
            .unwrap()
    }

    async fn join(system: &OrderSystem, user_id: &str) -> Member {
        system
            .member_client
            .join(MemberJoin::new(user_id, "pw", user_id, "010-1234-5678", format!("{user_id}@example.com")))
            .await
            .unwrap()
    }

    async fn stock(system: &OrderSystem, product_id: &str) -> u64 {
        system.product_client.stock(product_id.to_string()).await.unwrap()
    }

    #[tokio::test]
    async fn test_ledger_scenario() {
        let system = OrderSystem::new(&SystemConfig::default());
        let a = seed_product(&system, "Castella", 12_000, 5).await;

        assert_eq!(system.product_client.decrease_stock(a.clone(), 3).await, Ok(2));
        assert_eq!(
            system.product_client.decrease_stock(a.clone(), 3).await,
            Err(ProductError::Stock(StockError::InsufficientStock { requested: 3, available: 2 }))
        );
        assert_eq!(stock(&system, &a).await, 2);

        assert_eq!(system.product_client.increase_stock(a.clone(), 7).await, Ok(9));
        assert_eq!(system.product_client.decrease_stock(a.clone(), 7).await, Ok(2));
        assert_eq!(
            system.product_client.decrease_stock("product_404".into(), 1).await,
            Err(ProductError::NotFound("product_404".into()))
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_checkout_all_or_nothing() {
        let system = OrderSystem::new(&SystemConfig::default());
        let a = seed_product(&system, "Castella", 12_000, 10).await;
        let b = seed_product(&system, "Baguette", 4_000, 1).await;
        let member = join(&system, "kim").await;
        let basket_id = member.basket_id.clone().unwrap();

        system.basket_client.add_item(basket_id.clone(), a.clone(), 2).await.unwrap();
        system.basket_client.add_item(basket_id.clone(), b.clone(), 100).await.unwrap();

        let err = system.order_client.place_order(member.id.clone()).await.unwrap_err();
        assert_eq!(err, OrderError::OrderPlacementFailed { product_id: b.clone(), requested: 100, available: 1 });
        assert_eq!(stock(&system, &a).await, 10);
        assert_eq!(stock(&system, &b).await, 1);

        // Basket kept for a retry
        let basket = system.basket_client.get_basket(basket_id.clone()).await.unwrap().unwrap();
        assert_eq!(basket.quantity_of(&a), 2);
        assert_eq!(basket.quantity_of(&b), 100);
        assert!(system.order_client.orders_of(member.id.clone()).await.unwrap().is_empty());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_middle_line_failure_leaves_other_lines() {
        let system = OrderSystem::new(&SystemConfig::default());
        let a = seed_product(&system, "Castella", 1_000, 4).await;
        let b = seed_product(&system, "Baguette", 1_000, 1).await;
        let c = seed_product(&system, "Madeleine", 1_000, 4).await;
        let member = join(&system, "lee").await;

        let lines = vec![LineItem::new(a.clone(), 1), LineItem::new(b.clone(), 2), LineItem::new(c.clone(), 1)];
        let err = system.order_client.place_order_lines(member.id.clone(), lines).await.unwrap_err();
        assert!(matches!(err, OrderError::OrderPlacementFailed { ref product_id, .. } if *product_id == b));

        assert_eq!(stock(&system, &a).await, 4);
        assert_eq!(stock(&system, &b).await, 1);
        assert_eq!(stock(&system, &c).await, 4);

        let unknown = system
            .order_client
            .place_order_lines(member.id.clone(), vec![LineItem::new(a.clone(), 1), LineItem::new("product_404", 1)])
            .await
            .unwrap_err();
        assert_eq!(unknown, OrderError::InvalidProduct("product_404".into()));
        assert_eq!(stock(&system, &a).await, 4);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_checkout_freezes_price_and_clears_basket() {
        let system = OrderSystem::new(&SystemConfig::default());
        let a = seed_product(&system, "Castella", 12_000, 5).await;
        let member = join(&system, "park").await;
        let basket_id = member.basket_id.clone().unwrap();

        system.basket_client.add_item(basket_id.clone(), a.clone(), 1).await.unwrap();
        system.basket_client.add_item(basket_id.clone(), a.clone(), 1).await.unwrap();

        let order = system.order_client.place_order(member.id.clone()).await.unwrap();
        assert_eq!(order.total, 24_000);
        assert_eq!(order.lines[0].quantity, 2);
        assert_eq!(order.lines[0].product_name, "Castella");
        assert_eq!(stock(&system, &a).await, 3);

        let basket = system.basket_client.get_basket(basket_id).await.unwrap().unwrap();
        assert!(basket.is_empty());

        // Submitting the same checkout twice does not order twice
        let again = system.order_client.place_order(member.id.clone()).await.unwrap_err();
        assert!(matches!(again, OrderError::EmptyBasket(_)));
        assert_eq!(stock(&system, &a).await, 3);

        system
            .product_client
            .update_product(a.clone(), ProductPatch { price: Some(15_000), ..Default::default() })
            .await
            .unwrap();
        let stored = system.order_client.get_order(order.id.clone()).await.unwrap().unwrap();
        assert_eq!(stored.lines[0].unit_price, 12_000);
        assert_eq!(stored.total, 24_000);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_cancel_returns_stock_once() {
        let system = OrderSystem::new(&SystemConfig::default());
        let a = seed_product(&system, "Castella", 12_000, 5).await;
        let member = join(&system, "choi").await;

        let order = system
            .order_client
            .place_order_lines(member.id.clone(), vec![LineItem::new(a.clone(), 3)])
            .await
            .unwrap();
        assert_eq!(stock(&system, &a).await, 2);

        let cancelled = system.order_client.cancel_order(order.id.clone()).await.unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);
        assert_eq!(stock(&system, &a).await, 5);

        let err = system.order_client.cancel_order(order.id.clone()).await.unwrap_err();
        assert_eq!(err, OrderError::AlreadyCancelled(order.id.clone()));
        assert_eq!(stock(&system, &a).await, 5);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_restock_reopens_order() {
        let system = OrderSystem::new(&SystemConfig::default());
        let a = seed_product(&system, "Castella", 12_000, u64::MAX - 1).await;
        let member = join(&system, "han").await;

        let order = system
            .order_client
            .place_order_lines(member.id.clone(), vec![LineItem::new(a.clone(), 1)])
            .await
            .unwrap();
        system.product_client.increase_stock(a.clone(), 2).await.unwrap();
        assert_eq!(stock(&system, &a).await, u64::MAX);

        // Returning the line would overflow the ledger
        let err = system.order_client.cancel_order(order.id.clone()).await.unwrap_err();
        assert!(matches!(err, OrderError::ValidationError(_)));
        let stored = system.order_client.get_order(order.id.clone()).await.unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::Ordered);
        assert_eq!(stock(&system, &a).await, u64::MAX);

        // Once there is room the cancellation goes through
        system.product_client.decrease_stock(a.clone(), 1).await.unwrap();
        let cancelled = system.order_client.cancel_order(order.id.clone()).await.unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);
        assert_eq!(stock(&system, &a).await, u64::MAX);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_repeated_lines_checked_against_real_stock() {
        let system = OrderSystem::new(&SystemConfig::default());
        let a = seed_product(&system, "Castella", 12_000, 5).await;
        let member = join(&system, "lee").await;

        let err = system
            .order_client
            .place_order_lines(member.id.clone(), vec![LineItem::new(a.clone(), 3), LineItem::new(a.clone(), 3)])
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::OrderPlacementFailed { product_id: a.clone(), requested: 6, available: 5 });
        assert_eq!(stock(&system, &a).await, 5);

        let order = system
            .order_client
            .place_order_lines(member.id.clone(), vec![LineItem::new(a.clone(), 2), LineItem::new(a.clone(), 3)])
            .await
            .unwrap();
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].quantity, 5);
        assert_eq!(order.total, 60_000);
        assert_eq!(stock(&system, &a).await, 0);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_orders_never_oversell() {
        let system = OrderSystem::new(&SystemConfig::default());
        let a = seed_product(&system, "Castella", 12_000, 10).await;

        let mut members = Vec::new();
        for i in 0..8 {
            members.push(join(&system, &format!("buyer{i}")).await);
        }

        let mut tasks = Vec::new();
        for member in &members {
            let order_client = system.order_client.clone();
            let line = vec![LineItem::new(a.clone(), 3)];
            let member_id = member.id.clone();
            tasks.push(tokio::spawn(async move { order_client.place_order_lines(member_id, line).await }));
        }

        let mut placed = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => placed += 1,
                Err(OrderError::OrderPlacementFailed { requested: 3, .. }) => {}
                Err(other) => panic!("Unexpected error: {:?}", other),
            }
        }
        assert_eq!(placed, 3);
        assert_eq!(stock(&system, &a).await, 1);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_member_cannot_order() {
        let system = OrderSystem::new(&SystemConfig::default());
        let err = system.order_client.place_order("member_404".into()).await.unwrap_err();
        assert_eq!(err, OrderError::InvalidMember("member_404".into()));
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_member_flows() {
        let system = OrderSystem::new(&SystemConfig::default());
        let member = join(&system, "kim").await;
        assert!(member.basket_id.is_some());

        let duplicate = system
            .member_client
            .join(MemberJoin::new("kim", "other", "Other Kim", "010", "other@example.com"))
            .await
            .unwrap_err();
        assert_eq!(duplicate, MemberError::AlreadyExists(member.id.clone()));
        assert_eq!(system.member_client.list_members().await.unwrap().len(), 1);
        assert_eq!(system.basket_client.list_baskets().await.unwrap().len(), 1);

        let logged_in = system.member_client.login("kim".into(), "pw".into()).await.unwrap();
        assert_eq!(logged_in.map(|m| m.id), Some(member.id.clone()));
        assert_eq!(system.member_client.login("kim".into(), "wrong".into()).await.unwrap(), None);
        assert_eq!(system.member_client.login("nobody".into(), "pw".into()).await.unwrap(), None);

        let found = system.member_client.find_id("kim".into(), "kim@example.com".into()).await.unwrap();
        assert_eq!(found.map(|m| m.user_id), Some("kim".to_string()));
        assert!(system.member_client.find_id("kim".into(), "x@example.com".into()).await.unwrap().is_none());

        assert!(system
            .member_client
            .find_for_password_reset("kim".into(), "kim".into())
            .await
            .unwrap()
            .is_some());

        let mismatch = system
            .member_client
            .change_password("kim".into(), "kim".into(), "new".into(), "newer".into())
            .await
            .unwrap_err();
        assert_eq!(mismatch, MemberError::PasswordMismatch);

        let missing = system
            .member_client
            .change_password("kim".into(), "someone else".into(), "new".into(), "new".into())
            .await
            .unwrap_err();
        assert_eq!(missing, MemberError::NotFound("kim".into()));

        system
            .member_client
            .change_password("kim".into(), "kim".into(), "new".into(), "new".into())
            .await
            .unwrap();
        assert!(system.member_client.login("kim".into(), "pw".into()).await.unwrap().is_none());
        assert!(system.member_client.login("kim".into(), "new".into()).await.unwrap().is_some());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_catalog_flows() {
        let system = OrderSystem::new(&SystemConfig::default());
        let cakes = system.category_client.create_category(CategoryCreate::new("Cakes")).await.unwrap();
        let breads = system.category_client.create_category(CategoryCreate::new("Breads")).await.unwrap();
        assert_eq!(system.category_client.list_categories().await.unwrap().len(), 2);

        let castella = system
            .product_client
            .create_product(ProductCreate::new("Castella", 12_000, 5).category(cakes.clone()).ingredient("egg, flour"))
            .await
            .unwrap();
        system
            .product_client
            .create_product(ProductCreate::new("Baguette", 4_000, 5).category(breads.clone()))
            .await
            .unwrap();

        let duplicate = system
            .product_client
            .create_product(ProductCreate::new("Castella", 9_000, 1).category(cakes.clone()))
            .await
            .unwrap_err();
        assert_eq!(duplicate, ProductError::AlreadyExists(castella.clone()));

        let invalid = system
            .product_client
            .create_product(ProductCreate::new("Scone", 3_000, 5).category("category_404"))
            .await
            .unwrap_err();
        assert_eq!(invalid, ProductError::InvalidCategory("category_404".into()));

        let in_cakes = system.product_client.products_in_category(cakes).await.unwrap();
        assert_eq!(in_cakes.len(), 1);
        assert_eq!(in_cakes[0].id, castella);
        assert_eq!(in_cakes[0].ingredient, "egg, flour");
        assert_eq!(system.product_client.list_products().await.unwrap().len(), 2);

        system.shutdown().await.unwrap();
    }
}
