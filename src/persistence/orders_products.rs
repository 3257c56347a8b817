//! The `orders_products` join table: one row per order line.

use crate::model::{Order, OrderId, OrderLine, Price, ProductId, PRICE_SCALE};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const TABLE: &str = "orders_products";

pub const MIGRATION_UP: &str = r#"
CREATE TABLE orders_products (
    id          varchar PRIMARY KEY DEFAULT uuid_generate_v4(),
    order_id    varchar NOT NULL,
    product_id  varchar NOT NULL,
    price       decimal(7, 2),
    quantity    integer,
    created_at  timestamp DEFAULT now(),
    updated_at  timestamp DEFAULT now()
);

ALTER TABLE orders_products
    ADD CONSTRAINT fk_ordersproducts_product
    FOREIGN KEY (product_id) REFERENCES products (id)
    ON UPDATE CASCADE ON DELETE CASCADE;

ALTER TABLE orders_products
    ADD CONSTRAINT fk_ordersproducts_order
    FOREIGN KEY (order_id) REFERENCES orders (id)
    ON UPDATE CASCADE ON DELETE CASCADE;
"#;

pub const MIGRATION_DOWN: &str = r#"
ALTER TABLE orders_products DROP CONSTRAINT fk_ordersproducts_product;
ALTER TABLE orders_products DROP CONSTRAINT fk_ordersproducts_order;
DROP TABLE orders_products;
"#;

/// Largest magnitude a `decimal(7, 2)` column holds.
pub const MAX_PRICE: Decimal = Decimal::from_parts(9_999_999, 0, 0, false, PRICE_SCALE);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("Price {0} does not fit decimal(7, 2)")]
    PriceOutOfRange(Price),

    #[error("Quantity {0} does not fit the quantity column")]
    QuantityOutOfRange(i64),

    #[error("Column {0} is null")]
    MissingColumn(&'static str),
}

/// A row of `orders_products`. `price` and `quantity` are nullable in the
/// table, hence the `Option`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProductRow {
    pub id: Uuid,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub price: Option<Price>,
    pub quantity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderProductRow {
    /// Flattens an order into one row per line, in line order.
    pub fn from_order(order: &Order) -> Result<Vec<Self>, RowError> {
        order
            .lines
            .iter()
            .map(|line| Self::from_line(order, line))
            .collect()
    }

    fn from_line(order: &Order, line: &OrderLine) -> Result<Self, RowError> {
        let price = line.price.round_dp(PRICE_SCALE);
        if price.abs() > MAX_PRICE {
            return Err(RowError::PriceOutOfRange(line.price));
        }
        let quantity = i32::try_from(line.quantity)
            .map_err(|_| RowError::QuantityOutOfRange(i64::from(line.quantity)))?;
        Ok(Self {
            id: line.id,
            order_id: order.id.clone(),
            product_id: line.product_id.clone(),
            price: Some(price),
            quantity: Some(quantity),
            created_at: order.created_at,
            updated_at: order.updated_at,
        })
    }

    /// Reads the row back as an order line.
    pub fn to_line(&self) -> Result<OrderLine, RowError> {
        let price = self.price.ok_or(RowError::MissingColumn("price"))?;
        let quantity = self.quantity.ok_or(RowError::MissingColumn("quantity"))?;
        let quantity = u32::try_from(quantity)
            .map_err(|_| RowError::QuantityOutOfRange(i64::from(quantity)))?;
        Ok(OrderLine {
            id: self.id,
            product_id: self.product_id.clone(),
            price,
            quantity,
        })
    }
}
