//! Entity trait implementation for the Customer domain type.

use super::error::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    /// Creates a new Customer, rejecting a blank name or an email without `@`.
    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(CustomerError::EmptyName);
        }
        if !params.email.contains('@') {
            return Err(CustomerError::InvalidEmail(params.email));
        }
        Ok(Self::new(id, name, params.email))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str, email: &str) -> CustomerCreate {
        CustomerCreate {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_create_trims_name() {
        let customer =
            Customer::from_create_params("C1".into(), params("  Alice ", "alice@example.com"))
                .unwrap();
        assert_eq!(customer.id, CustomerId::from("C1"));
        assert_eq!(customer.name, "Alice");
        assert_eq!(customer.created_at, customer.updated_at);
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let err = Customer::from_create_params("C1".into(), params("   ", "a@example.com"))
            .unwrap_err();
        assert_eq!(err, CustomerError::EmptyName);
    }

    #[test]
    fn test_create_rejects_email_without_at() {
        let err =
            Customer::from_create_params("C1".into(), params("Alice", "alice")).unwrap_err();
        assert_eq!(err, CustomerError::InvalidEmail("alice".to_string()));
    }
}
