//! Entity trait implementation for the Product domain type.
//!
//! Prices are rounded to [`PRICE_SCALE`] digits on create and on update, and
//! every successful update moves `updated_at`.

use super::actions::ProductAction;
use super::error::ProductError;
use crate::model::{Price, Product, ProductCreate, ProductId, ProductUpdate, PRICE_SCALE};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

fn validate_price(price: Price) -> Result<Price, ProductError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(price.round_dp(PRICE_SCALE))
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = u32;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        let price = validate_price(params.price)?;
        Ok(Self::new(id, params.name, price, params.quantity))
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `price`: Product price
    /// - `quantity`: Available stock quantity
    ///
    /// The update is validated before any field changes.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        let price = update.price.map(validate_price).transpose()?;
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(&mut self, action: ProductAction, _ctx: &()) -> Result<u32, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(self.quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn widget(price: Price) -> ProductCreate {
        ProductCreate {
            name: "Widget".to_string(),
            price,
            quantity: 5,
        }
    }

    #[test]
    fn test_create_rounds_price() {
        let product = Product::from_create_params("P1".into(), widget(dec!(10.005))).unwrap();
        assert_eq!(product.price, dec!(10.00));
        assert_eq!(product.quantity, 5);
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let err = Product::from_create_params("P1".into(), widget(dec!(-1))).unwrap_err();
        assert_eq!(err, ProductError::InvalidPrice(dec!(-1)));
    }

    #[test]
    fn test_create_accepts_free_product() {
        let product = Product::from_create_params("P1".into(), widget(dec!(0))).unwrap();
        assert!(product.price.is_zero());
    }

    #[tokio::test]
    async fn test_update_quantity_only() {
        let mut product = Product::from_create_params("P1".into(), widget(dec!(10))).unwrap();
        let before = product.updated_at;

        product.on_update(ProductUpdate::quantity(2), &()).await.unwrap();

        assert_eq!(product.quantity, 2);
        assert_eq!(product.price, dec!(10));
        assert!(product.updated_at >= before);
    }

    #[tokio::test]
    async fn test_invalid_update_changes_nothing() {
        let mut product = Product::from_create_params("P1".into(), widget(dec!(10))).unwrap();
        let update = ProductUpdate {
            price: Some(dec!(-5)),
            quantity: Some(0),
        };

        let err = product.on_update(update, &()).await.unwrap_err();

        assert_eq!(err, ProductError::InvalidPrice(dec!(-5)));
        assert_eq!(product.quantity, 5);
    }

    #[tokio::test]
    async fn test_check_stock() {
        let mut product = Product::from_create_params("P1".into(), widget(dec!(10))).unwrap();
        let stock = product
            .handle_action(ProductAction::CheckStock, &())
            .await
            .unwrap();
        assert_eq!(stock, 5);
    }
}
