//! Seed Service Module
//!
//! Populates the Storefront database with its fixed lookup catalogs
//! (brands, categories, product attributes, tags, wishlist priorities,
//! provider types and specializations), registers the access-control
//! permission sets, and inserts guarded sample data (customer notes,
//! wishlist items, provider notes).

// Public exports
pub mod contract;
pub use contract::{
    error::SeedError, Brand, Category, Customer, Permission, Product, ProductAttribute,
    ProductAttributeValue, ProductTag, Provider, ProviderSpecialization, ProviderType, Role,
    WishlistPriority,
};

pub mod domain;
pub use domain::report::{SeedReport, SeedRunSummary};
pub use domain::runner::SeedRunner;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod infra;

pub use infra::storage::migrations::Migrator;
