//! Contract layer - public models of the seed service
//!
//! Transport-agnostic records read back from storage plus the literal
//! seed-declaration structs. NO serde derives on read models.

pub mod error;
pub mod model;

pub use error::SeedError;
pub use model::{
    AttributeSeed, Brand, BrandSeed, Category, CategorySeed, Customer, Permission, Product,
    ProductAttribute, ProductAttributeValue, ProductTag, Provider, ProviderSpecialization,
    ProviderSpecializationSeed, ProviderType, ProviderTypeSeed, Role, TagSeed, WishlistPriority,
    WishlistPrioritySeed,
};
