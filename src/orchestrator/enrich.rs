//! Read-time enrichment of stored orders.
//!
//! Stored line items carry the product snapshot taken when the order was placed. When
//! orders are read back, the snapshot can be refreshed from the catalog. Which way that
//! goes is a named policy so it can be revisited in one place.

use crate::model::{Order, Product};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnrichmentPolicy {
    /// Overwrite each line item's name, description and unit price with the current
    /// catalog values. Quantities and the stored `total_price` are left alone, so the
    /// displayed unit price of an old order may no longer multiply out to its total.
    #[default]
    LiveCatalog,
}

impl EnrichmentPolicy {
    pub fn apply(self, orders: &mut [Order], catalog: &[Product]) {
        match self {
            Self::LiveCatalog => overwrite_from_catalog(orders, catalog),
        }
    }
}

/// Distinct product ids across `orders`, in first-seen order.
pub fn referenced_product_ids(orders: &[Order]) -> Vec<String> {
    let mut seen = HashSet::new();
    orders
        .iter()
        .flat_map(Order::product_ids)
        .filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect()
}

fn overwrite_from_catalog(orders: &mut [Order], catalog: &[Product]) {
    let by_id: HashMap<&str, &Product> = catalog.iter().map(|p| (p.id.as_str(), p)).collect();
    for line in orders.iter_mut().flat_map(|o| o.products.iter_mut()) {
        if let Some(product) = by_id.get(line.id.as_str()) {
            line.name = product.name.clone();
            line.description = product.description.clone();
            line.price = product.price;
        }
    }
}
