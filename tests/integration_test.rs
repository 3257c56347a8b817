use actor_framework::ActorClient;
use order_placement::lifecycle::{OrderSystem, SystemConfig};
use order_placement::model::{
    CreateOrderRequest, CustomerCreate, CustomerId, OrderProductRequest, ProductCreate, ProductId,
};
use order_placement::persistence::OrderProductRow;
use order_placement::product_actor::ProductError;
use order_placement::services::{AppError, Resource};
use rust_decimal_macros::dec;

/// Seeds customer C1 and product P1 (10.00, 5 in stock).
async fn seeded() -> (OrderSystem, CustomerId, ProductId) {
    let system = OrderSystem::with_config(SystemConfig {
        channel_capacity: 8,
    });
    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .expect("Failed to create customer");
    let product_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Widget".to_string(),
            price: dec!(10.00),
            quantity: 5,
        })
        .await
        .expect("Failed to create product");
    (system, customer_id, product_id)
}

fn request(customer_id: &CustomerId, product_id: &ProductId, quantity: u32) -> CreateOrderRequest {
    CreateOrderRequest {
        customer_id: customer_id.clone(),
        products: vec![OrderProductRequest {
            id: product_id.clone(),
            quantity,
        }],
    }
}

/// Full end-to-end test with all real actors.
#[tokio::test]
async fn test_order_decrements_stock() {
    let (system, customer_id, product_id) = seeded().await;
    let service = system.create_order_service();

    let order = service
        .execute(request(&customer_id, &product_id, 3))
        .await
        .expect("Failed to place order");

    assert_eq!(order.customer.id, customer_id);
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].product_id, product_id);
    assert_eq!(order.lines[0].price, dec!(10.00));
    assert_eq!(order.lines[0].quantity, 3);
    assert_eq!(order.total(), dec!(30.00));

    let stock = system
        .product_client
        .check_stock(product_id)
        .await
        .expect("Failed to check stock");
    assert_eq!(stock, 2);

    // The order actor kept what it returned
    let stored = system
        .order_client
        .get(order.id.clone())
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(stored, order);

    let rows = OrderProductRow::from_order(&stored).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].order_id, order.id);

    drop(service);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_out_of_stock_leaves_stock_alone() {
    let (system, customer_id, product_id) = seeded().await;
    let service = system.create_order_service();

    let result = service.execute(request(&customer_id, &product_id, 6)).await;

    assert_eq!(result, Err(AppError::OutOfStock(product_id.clone())));
    assert_eq!(system.product_client.check_stock(product_id).await, Ok(5));

    drop(service);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_same_request_twice_places_two_orders() {
    let (system, customer_id, product_id) = seeded().await;
    let service = system.create_order_service();

    let first = service
        .execute(request(&customer_id, &product_id, 2))
        .await
        .unwrap();
    let second = service
        .execute(request(&customer_id, &product_id, 2))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(system.product_client.check_stock(product_id.clone()).await, Ok(1));

    // Only one left now
    let third = service.execute(request(&customer_id, &product_id, 2)).await;
    assert_eq!(third, Err(AppError::OutOfStock(product_id)));

    drop(service);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_unknown_ids() {
    let (system, customer_id, product_id) = seeded().await;
    let service = system.create_order_service();

    let unknown_customer = service
        .execute(request(&CustomerId::from("nobody"), &product_id, 1))
        .await;
    assert_eq!(unknown_customer, Err(AppError::NotFound(Resource::Customer)));

    let unknown_product = service
        .execute(request(&customer_id, &ProductId::from("nothing"), 1))
        .await;
    assert_eq!(unknown_product, Err(AppError::NotFound(Resource::Product)));

    assert_eq!(system.product_client.check_stock(product_id).await, Ok(5));

    drop(service);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_invalid_product_rejected_by_actor() {
    let system = OrderSystem::new();

    let result = system
        .product_client
        .create_product(ProductCreate {
            name: "Refund".to_string(),
            price: dec!(-1.00),
            quantity: 1,
        })
        .await;

    assert_eq!(result, Err(ProductError::InvalidPrice(dec!(-1.00))));
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_check_stock_unknown_product() {
    let system = OrderSystem::new();

    let result = system
        .product_client
        .check_stock(ProductId::from("nothing"))
        .await;

    assert_eq!(result, Err(ProductError::NotFound("nothing".to_string())));
    system.shutdown().await.expect("Shutdown failed");
}
