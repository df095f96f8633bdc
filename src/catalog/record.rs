//! [`Record`] implementation for the [`Product`] domain type.

use crate::model::{Product, ProductDraft, ProductId};
use record_store::Record;
use rust_decimal::Decimal;
use thiserror::Error;

/// Rejection raised while building a product from a draft.
#[derive(Debug, Error, PartialEq)]
#[error("price must not be negative, got {0}")]
pub struct NegativePrice(pub Decimal);

impl Record for Product {
    type Id = ProductId;
    type Create = ProductDraft;
    type Error = NegativePrice;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Builds a product from a draft.
    ///
    /// Used for both creation and full replacement, so a replacement is held
    /// to the same price rule as a new product.
    fn from_create_params(id: ProductId, draft: ProductDraft) -> Result<Self, NegativePrice> {
        if draft.price < Decimal::ZERO {
            return Err(NegativePrice(draft.price));
        }
        Ok(Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
        })
    }
}
