//! # Create Order
//!
//! Places an order in a fixed sequence:
//!
//! 1. Reject a request without a customer id or without products.
//! 2. Look up the customer.
//! 3. Look up every distinct requested product in one call.
//! 4. Build the order lines, capturing each product's current price.
//! 5. Compute the new stock levels, failing if any would go negative.
//! 6. Write the stock levels, then write the order.
//!
//! Steps 4 and 5 are pure and live in [`build_order_lines`] and
//! [`apply_stock_decrements`]. Step 6 is two separate writes. If the order
//! write fails, the stock has already been decremented; nothing is rolled back.
//! Nothing locks the products between the lookup and the stock write either,
//! so two concurrent orders for the last unit can both succeed.

use super::{AppError, Resource};
use crate::model::{CreateOrderRequest, NewOrderLine, Order, OrderCreate, OrderProductRequest};
use crate::model::{Product, ProductId};
use crate::repositories::{CustomersRepository, OrdersRepository, ProductsRepository};
use tracing::{debug, info, instrument, warn};

/// The order-placement workflow.
///
/// Collaborators are passed in explicitly, so tests can hand it mock clients
/// and [`OrderSystem`](crate::lifecycle::OrderSystem) hands it the actor clients.
pub struct CreateOrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomersRepository,
    P: ProductsRepository,
    O: OrdersRepository,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Places an order and returns it as stored.
    ///
    /// Calling this twice with the same request places two orders.
    #[instrument(
        name = "create_order",
        skip_all,
        fields(customer_id = %request.customer_id, lines = request.products.len())
    )]
    pub async fn execute(&self, request: CreateOrderRequest) -> Result<Order, AppError> {
        info!("Placing order");
        self.place(request)
            .await
            .inspect(|order| info!(order_id = %order.id, total = %order.total(), "Order placed"))
            .inspect_err(|e| warn!(error = %e, "Order rejected"))
    }

    async fn place(&self, request: CreateOrderRequest) -> Result<Order, AppError> {
        if request.customer_id.as_str().is_empty() || request.products.is_empty() {
            return Err(AppError::InvalidArgument);
        }

        let customer = self
            .customers
            .find_by_id(&request.customer_id)
            .await?
            .ok_or(AppError::NotFound(Resource::Customer))?;

        let ids = distinct_ids(&request.products);
        let mut products = self.products.find_all_by_id(&ids).await?;
        if products.len() != ids.len() {
            debug!(requested = ids.len(), found = products.len(), "Product lookup incomplete");
            return Err(AppError::NotFound(Resource::Product));
        }

        let lines = build_order_lines(&request.products, &products)?;
        apply_stock_decrements(&request.products, &mut products)?;

        self.products.update_quantity(&products).await?;
        let order = self
            .orders
            .create(OrderCreate {
                customer,
                products: lines,
            })
            .await?;
        Ok(order)
    }
}

/// Requested product ids, first occurrence order, duplicates removed.
pub fn distinct_ids(requested: &[OrderProductRequest]) -> Vec<ProductId> {
    let mut ids: Vec<ProductId> = Vec::with_capacity(requested.len());
    for item in requested {
        if !ids.contains(&item.id) {
            ids.push(item.id.clone());
        }
    }
    ids
}

/// One line per requested entry, priced from the looked-up product.
///
/// # Errors
/// [`AppError::NotFound`] if a requested id is not among `products`.
pub fn build_order_lines(
    requested: &[OrderProductRequest],
    products: &[Product],
) -> Result<Vec<NewOrderLine>, AppError> {
    requested
        .iter()
        .map(|item| -> Result<NewOrderLine, AppError> {
            let product = products
                .iter()
                .find(|p| p.id == item.id)
                .ok_or(AppError::NotFound(Resource::Product))?;
            Ok(NewOrderLine {
                product_id: item.id.clone(),
                price: product.price,
                quantity: item.quantity,
            })
        })
        .collect()
}

/// Subtracts the requested quantities from each product's stock.
///
/// A product requested more than once is decremented by the sum of its
/// entries. `products` is left untouched when an error is returned.
///
/// # Errors
/// - [`AppError::Inconsistent`] if a product was not requested at all.
/// - [`AppError::OutOfStock`] if a product has less stock than requested.
pub fn apply_stock_decrements(
    requested: &[OrderProductRequest],
    products: &mut [Product],
) -> Result<(), AppError> {
    let mut remaining = Vec::with_capacity(products.len());
    for product in products.iter() {
        let mut entries = requested.iter().filter(|item| item.id == product.id).peekable();
        if entries.peek().is_none() {
            return Err(AppError::Inconsistent);
        }
        let wanted: u64 = entries.map(|item| u64::from(item.quantity)).sum();
        let on_hand = u64::from(product.quantity);
        if wanted > on_hand {
            return Err(AppError::OutOfStock(product.id.clone()));
        }
        // wanted <= on_hand, so the difference fits in u32
        remaining.push((on_hand - wanted) as u32);
    }

    for (product, quantity) in products.iter_mut().zip(remaining) {
        product.quantity = quantity;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: &str, quantity: u32) -> Product {
        Product::new(id.into(), id, dec!(10.00), quantity)
    }

    fn wants(id: &str, quantity: u32) -> OrderProductRequest {
        OrderProductRequest {
            id: id.into(),
            quantity,
        }
    }

    #[test]
    fn test_distinct_ids_keeps_first_occurrence_order() {
        let ids = distinct_ids(&[wants("P2", 1), wants("P1", 1), wants("P2", 4)]);
        assert_eq!(ids, vec![ProductId::from("P2"), ProductId::from("P1")]);
    }

    #[test]
    fn test_lines_capture_price_and_requested_quantity() {
        let mut cheap = product("P2", 9);
        cheap.price = dec!(2.50);
        let lines = build_order_lines(&[wants("P1", 3), wants("P2", 1)], &[cheap, product("P1", 5)])
            .unwrap();

        assert_eq!(
            lines,
            vec![
                NewOrderLine {
                    product_id: "P1".into(),
                    price: dec!(10.00),
                    quantity: 3,
                },
                NewOrderLine {
                    product_id: "P2".into(),
                    price: dec!(2.50),
                    quantity: 1,
                },
            ]
        );
    }

    #[test]
    fn test_lines_keep_duplicate_entries() {
        let lines = build_order_lines(&[wants("P1", 1), wants("P1", 2)], &[product("P1", 5)]).unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_lines_unknown_product() {
        let err = build_order_lines(&[wants("P9", 1)], &[product("P1", 5)]).unwrap_err();
        assert_eq!(err, AppError::NotFound(Resource::Product));
    }

    #[test]
    fn test_decrement() {
        let mut products = vec![product("P1", 5)];
        apply_stock_decrements(&[wants("P1", 3)], &mut products).unwrap();
        assert_eq!(products[0].quantity, 2);
    }

    #[test]
    fn test_decrement_to_zero() {
        let mut products = vec![product("P1", 5)];
        apply_stock_decrements(&[wants("P1", 5)], &mut products).unwrap();
        assert_eq!(products[0].quantity, 0);
    }

    #[test]
    fn test_decrement_sums_duplicates() {
        let mut products = vec![product("P1", 5)];
        apply_stock_decrements(&[wants("P1", 2), wants("P1", 3)], &mut products).unwrap();
        assert_eq!(products[0].quantity, 0);

        let mut products = vec![product("P1", 5)];
        let err = apply_stock_decrements(&[wants("P1", 3), wants("P1", 3)], &mut products)
            .unwrap_err();
        assert_eq!(err, AppError::OutOfStock("P1".into()));
    }

    #[test]
    fn test_out_of_stock_leaves_products_untouched() {
        let mut products = vec![product("P1", 5), product("P2", 1)];
        let err = apply_stock_decrements(&[wants("P1", 3), wants("P2", 2)], &mut products)
            .unwrap_err();

        assert_eq!(err, AppError::OutOfStock("P2".into()));
        assert_eq!(products[0].quantity, 5);
        assert_eq!(products[1].quantity, 1);
    }

    #[test]
    fn test_unrequested_product_is_inconsistent() {
        let mut products = vec![product("P1", 5), product("P2", 5)];
        let err = apply_stock_decrements(&[wants("P1", 1)], &mut products).unwrap_err();
        assert_eq!(err, AppError::Inconsistent);
    }

    #[test]
    fn test_large_quantities_do_not_overflow() {
        let mut products = vec![product("P1", u32::MAX)];
        let err = apply_stock_decrements(&[wants("P1", u32::MAX), wants("P1", 1)], &mut products)
            .unwrap_err();
        assert_eq!(err, AppError::OutOfStock("P1".into()));
    }
}
