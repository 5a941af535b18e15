//! Mercatus storefront application: configuration, the product assistant and the
//! interactive shell built on the `mercatus` core.

pub mod assistant;
pub mod config;
pub mod context;
pub mod observability;
pub mod shell;
