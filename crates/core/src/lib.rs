//! Mercatus
//!
//! Storefront domain core: an immutable multilingual product catalog, an append-only
//! review store with rating filters, and the single-slot selection state that ties the
//! two together behind one application-state object.

pub mod catalog;
pub mod fixtures;
pub mod language;
pub mod prelude;
pub mod reviews;
pub mod selection;
pub mod storefront;
