//! Product Models

use std::num::FpCategory;

use jiff::Timestamp;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("invalid id")]
    InvalidId,

    #[error("name is required")]
    NameRequired,

    #[error("price is required")]
    PriceRequired,

    #[error("invalid price")]
    InvalidPrice,
}

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: f64,
    pub created_at: Timestamp,
}

impl Product {
    /// Build a validated product with a fresh identity and creation time.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProductError`] the new product violates.
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self, ProductError> {
        let product = Self {
            uuid: ProductUuid::new(),
            name: name.into(),
            price,
            created_at: Timestamp::now(),
        };

        product.validate()?;

        Ok(product)
    }

    /// Check the product invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProductError`] the product violates.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.uuid.is_nil() {
            return Err(ProductError::InvalidId);
        }

        if self.name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }

        match self.price.classify() {
            FpCategory::Zero => Err(ProductError::PriceRequired),
            FpCategory::Nan | FpCategory::Infinite => Err(ProductError::InvalidPrice),
            FpCategory::Normal | FpCategory::Subnormal if self.price < 0.0 => {
                Err(ProductError::InvalidPrice)
            }
            FpCategory::Normal | FpCategory::Subnormal => Ok(()),
        }
    }

    /// Replace the mutable fields, keeping the product unchanged if the result
    /// would be invalid.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProductError`] the updated product would violate.
    pub fn apply(&mut self, update: ProductUpdate) -> Result<(), ProductError> {
        let candidate = Self {
            name: update.name,
            price: update.price,
            ..self.clone()
        };

        candidate.validate()?;

        *self = candidate;

        Ok(())
    }
}

/// Product Update Model
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
}
