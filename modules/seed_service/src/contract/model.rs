//! Contract models for the seed service
//!
//! Read models mirror the stored rows; `*Seed` structs carry the literal
//! data the seeders declare. Seed structs hold `&'static str` because the
//! catalogs are compile-time constants.

use chrono::{DateTime, Utc};
use uuid::Uuid;

// ===== Read models =====

/// Product brand lookup row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    /// URL-safe unique key
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Category lookup row; nested via `parent_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    /// None for root categories
    pub parent_id: Option<i32>,
    /// Ordering within the parent
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// Product attribute definition (color, size, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAttribute {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

/// One admissible value of a product attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAttributeValue {
    pub id: i32,
    pub attribute_id: i32,
    pub value: String,
    pub position: i32,
}

/// Product tag lookup row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTag {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Wishlist priority level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistPriority {
    pub id: i32,
    pub name: String,
    pub code: String,
    /// Higher weight sorts first
    pub weight: i32,
}

/// Provider (supplier) type lookup row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderType {
    pub id: i32,
    pub name: String,
    pub code: String,
}

/// Provider specialization lookup row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSpecialization {
    pub id: i32,
    pub name: String,
    pub code: String,
}

/// Access-control permission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permission {
    pub id: i32,
    /// Dotted `resource.action` name, unique
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Access-control role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Customer row (platform-owned; never seeded here)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Product row (platform-owned; never seeded here)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub created_at: DateTime<Utc>,
}

/// Provider row (platform-owned; never seeded here)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

// ===== Seed declarations =====

/// Literal brand declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandSeed {
    pub name: &'static str,
    pub slug: &'static str,
}

/// Literal category declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySeed {
    pub name: &'static str,
    pub slug: &'static str,
}

/// Literal product-attribute declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSeed {
    pub name: &'static str,
    pub code: &'static str,
}

/// Literal product-tag declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSeed {
    pub name: &'static str,
    pub slug: &'static str,
}

/// Literal wishlist-priority declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WishlistPrioritySeed {
    pub name: &'static str,
    pub code: &'static str,
    pub weight: i32,
}

/// Literal provider-type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderTypeSeed {
    pub name: &'static str,
    pub code: &'static str,
}

/// Literal provider-specialization declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderSpecializationSeed {
    pub name: &'static str,
    pub code: &'static str,
}
