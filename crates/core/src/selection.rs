//! Selection

use thiserror::Error;

use crate::catalog::{Catalog, ProductId};

/// Errors raised when changing the selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The product is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Single-slot register for the product open in the detail view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<ProductId>,
}

impl Selection {
    /// Open a product, replacing any current selection.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::UnknownProduct` when `id` is not in the catalog. The
    /// current selection is left untouched.
    pub fn open(&mut self, catalog: &Catalog, id: ProductId) -> Result<(), SelectionError> {
        if !catalog.contains(&id) {
            return Err(SelectionError::UnknownProduct(id));
        }

        self.current = Some(id);

        Ok(())
    }

    /// Clear the selection, returning what was open.
    pub fn close(&mut self) -> Option<ProductId> {
        self.current.take()
    }

    /// The currently open product, if any.
    pub fn current(&self) -> Option<&ProductId> {
        self.current.as_ref()
    }

    /// Check whether a product is open.
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
