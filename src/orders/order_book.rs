use log::info;
use serde::{Deserialize, Serialize};

use crate::orders::inventory::Inventory;
use crate::Result;

/// A placed order waiting for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub product: String,
    pub quantity: u32,
    /// Customer location the order is delivered to
    pub location: usize,
}

/// Pending orders, in placement order
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
    next_id: u64,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves stock and records a delivery to `location`.
    ///
    /// Stock is only taken when the whole quantity is available; a failed
    /// order leaves both the inventory and the book untouched.
    pub fn place_order(
        &mut self,
        inventory: &mut Inventory,
        product: &str,
        quantity: u32,
        location: usize,
    ) -> Result<&Order> {
        let remaining = inventory.take(product, quantity)?;

        self.next_id += 1;
        info!(
            "order {} placed: {} x {} to location {}, {} left in stock",
            self.next_id,
            quantity,
            product,
            location,
            remaining
        );

        self.orders.push(Order {
            id: self.next_id,
            product: product.to_string(),
            quantity,
            location,
        });
        Ok(&self.orders[self.orders.len() - 1])
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Delivery locations in placement order; repeated locations are kept
    pub fn stops(&self) -> Vec<usize> {
        self.orders.iter().map(|order| order.location).collect()
    }

    /// Drops every pending order, returning them
    pub fn clear(&mut self) -> Vec<Order> {
        std::mem::take(&mut self.orders)
    }
}
