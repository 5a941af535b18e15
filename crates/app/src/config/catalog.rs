//! Catalog Config

use std::path::PathBuf;

use clap::Args;

/// Seed data settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Products YAML fixture; the built-in catalog is used when omitted
    #[arg(long, env = "MERCATUS_PRODUCTS")]
    pub products: Option<PathBuf>,

    /// Reviews YAML fixture; the built-in reviews are used when omitted
    #[arg(long, env = "MERCATUS_REVIEWS")]
    pub reviews: Option<PathBuf>,
}
