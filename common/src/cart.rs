use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductId};

/// A product in the cart with how many units were requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartEntry {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(self.quantity as u64)
    }
}

/// Insertion-ordered shopping cart holding at most one entry per product.
///
/// Every operation is total: unknown ids are no-ops, never errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.get(id).map(|e| e.quantity).unwrap_or(0)
    }

    /// Add one unit. Existing entries keep their position.
    pub fn add(&mut self, product: &Product) {
        match self.entries.iter_mut().find(|e| e.id() == product.id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => self.entries.push(CartEntry {
                product: product.clone(),
                quantity: 1,
            }),
        }
    }

    pub fn remove(&mut self, id: ProductId) {
        self.entries.retain(|e| e.id() != id);
    }

    /// Adjust quantity by `delta`, never going below 1. Use [`Cart::remove`]
    /// to drop an entry.
    pub fn set_quantity_delta(&mut self, id: ProductId, delta: i32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id() == id) {
            let next = (entry.quantity as i64 + delta as i64).clamp(1, u32::MAX as i64);
            entry.quantity = next as u32;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of `price * quantity` in whole rupees.
    pub fn total_price(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.line_total()))
    }

    /// Sum of quantities across all entries.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| e.quantity as u64).sum()
    }
}
