use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default number of distinct products the warehouse can stock
pub const DEFAULT_CAPACITY: usize = 100;

/// A stocked product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// Warehouse stock, bounded by a product capacity
#[derive(Debug, Clone)]
pub struct Inventory {
    products: Vec<Product>,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Inventory {
            products: Vec::new(),
            capacity,
        }
    }

    /// Adds a product line; fails with `InventoryFull` when at capacity
    pub fn add_product(&mut self, name: impl Into<String>, quantity: u32, price: f64) -> Result<&Product> {
        if self.products.len() >= self.capacity {
            return Err(Error::InventoryFull(self.capacity));
        }

        self.products.push(Product {
            name: name.into(),
            quantity,
            price,
        });
        debug!("inventory now holds {} products", self.products.len());

        // Just pushed
        Ok(&self.products[self.products.len() - 1])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up the first product with this name
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.name == name)
    }

    /// Removes `quantity` units of a product from stock
    pub(crate) fn take(&mut self, name: &str, quantity: u32) -> Result<u32> {
        let product = self
            .products
            .iter_mut()
            .find(|product| product.name == name)
            .ok_or_else(|| Error::ProductNotFound(name.to_string()))?;

        if product.quantity < quantity {
            return Err(Error::InsufficientStock {
                product: name.to_string(),
                requested: quantity,
                available: product.quantity,
            });
        }

        product.quantity -= quantity;
        Ok(product.quantity)
    }
}
