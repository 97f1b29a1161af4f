//! Catalog store: the normalized product list plus the user's selection set.
//!
//! The store is the sole owner of both for the lifetime of a session. Nothing
//! here is persisted.

use rust_decimal::Decimal;

use crate::products::{sum_prices, Product, SelectionEntry};

/// Ordered selection of products, keyed by name, with no duplicates.
///
/// Insertion order is kept for the order summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Adds a snapshot of `product` if its name is absent, removes the entry
    /// with that name otherwise. Returns whether the name is selected afterwards.
    ///
    /// Re-adding always appends: toggling a current member off and back on
    /// moves it to the end of the selection. Toggling a non-member twice
    /// leaves the selection exactly as it was.
    pub fn toggle(&mut self, product: &Product) -> bool {
        match self
            .entries
            .iter()
            .position(|entry| entry.name == product.name)
        {
            Some(idx) => {
                self.entries.remove(idx);
                false
            }
            None => {
                self.entries.push(product.to_selection_entry());
                true
            }
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the snapshotted prices, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn total(&self) -> Decimal {
        sum_prices(self.entries.iter().map(|entry| entry.price))
    }
}

/// Why a selection toggle did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRejected {
    /// No product at the requested catalog index.
    UnknownProduct,
    /// The product's stock is tracked and exhausted.
    OutOfStock,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    selection: Selection,
}

impl CatalogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog. The selection is left untouched: entries are
    /// snapshots and survive a reload.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn product(&self, catalog_index: usize) -> Option<&Product> {
        self.products.get(catalog_index)
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Toggles selection membership of the product at `catalog_index`.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleRejected::OutOfStock`] for exhausted products (the
    /// selection is unchanged) and [`ToggleRejected::UnknownProduct`] when the
    /// index is out of range.
    pub fn toggle_selection(&mut self, catalog_index: usize) -> Result<bool, ToggleRejected> {
        let product = self
            .products
            .get(catalog_index)
            .ok_or(ToggleRejected::UnknownProduct)?;
        if product.is_out_of_stock() {
            return Err(ToggleRejected::OutOfStock);
        }
        Ok(self.selection.toggle(product))
    }
}
