//! # Order Placement Demo
//!
//! Starts the [`OrderSystem`], seeds one customer and two products, then
//! places an order decoded from JSON and tries one that oversells.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use actor_framework::tracing::setup_tracing;
use order_placement::lifecycle::{OrderSystem, SystemConfig};
use order_placement::model::{CreateOrderRequest, CustomerCreate, OrderProductRequest, ProductCreate};
use order_placement::persistence::OrderProductRow;
use rust_decimal::Decimal;
use serde_json::json;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    let system = OrderSystem::with_config(config);

    let span = tracing::info_span!("seed");
    let (customer_id, keyboard_id, mouse_id) = async {
        let customer_id = system
            .customer_client
            .create_customer(CustomerCreate {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;
        let keyboard_id = system
            .product_client
            .create_product(ProductCreate {
                name: "Keyboard".to_string(),
                price: Decimal::new(4990, 2),
                quantity: 5,
            })
            .await
            .map_err(|e| e.to_string())?;
        let mouse_id = system
            .product_client
            .create_product(ProductCreate {
                name: "Mouse".to_string(),
                price: Decimal::new(1999, 2),
                quantity: 10,
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((customer_id, keyboard_id, mouse_id))
    }
    .instrument(span)
    .await?;

    let service = system.create_order_service();

    let body = json!({
        "customer_id": customer_id,
        "products": [
            { "id": keyboard_id, "quantity": 2 },
            { "id": mouse_id, "quantity": 1 },
        ],
    });
    let request: CreateOrderRequest =
        serde_json::from_value(body).map_err(|e| e.to_string())?;

    match service.execute(request).await {
        Ok(order) => {
            let rows = OrderProductRow::from_order(&order).map_err(|e| e.to_string())?;
            let rows = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
            info!(order_id = %order.id, total = %order.total(), "Order stored");
            info!("orders_products rows:\n{rows}");
        }
        Err(e) => error!(error = %e, "Order failed"),
    }

    // Only 3 keyboards are left
    let oversell = CreateOrderRequest {
        customer_id,
        products: vec![OrderProductRequest {
            id: keyboard_id.clone(),
            quantity: 4,
        }],
    };
    if let Err(e) = service.execute(oversell).await {
        info!(error = %e, "Oversell rejected as expected");
    }

    let stock = system
        .product_client
        .check_stock(keyboard_id)
        .await
        .map_err(|e| e.to_string())?;
    info!(stock, "Keyboards left");

    drop(service);
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
