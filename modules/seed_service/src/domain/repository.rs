//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    AttributeSeed, Brand, BrandSeed, Category, CategorySeed, Customer, Permission, Product,
    ProductAttribute, ProductAttributeValue, ProductTag, Provider, ProviderSpecialization,
    ProviderSpecializationSeed, ProviderType, ProviderTypeSeed, Role, TagSeed, WishlistPriority,
    WishlistPrioritySeed,
};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository for catalog lookup tables
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Find a brand by its unique slug
    async fn find_brand_by_slug(&self, slug: &str) -> Result<Option<Brand>>;

    /// Create a brand from a literal declaration
    async fn create_brand(&self, seed: &BrandSeed) -> Result<Brand>;

    /// Find a category by its unique slug
    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>>;

    /// Create a category, optionally attached to a parent
    async fn create_category(
        &self,
        seed: &CategorySeed,
        parent_id: Option<i32>,
        position: i32,
    ) -> Result<Category>;

    /// Find a product attribute by its unique code
    async fn find_attribute_by_code(&self, code: &str) -> Result<Option<ProductAttribute>>;

    /// Create a product attribute
    async fn create_attribute(&self, seed: &AttributeSeed) -> Result<ProductAttribute>;

    /// Find a value of an attribute
    async fn find_attribute_value(
        &self,
        attribute_id: i32,
        value: &str,
    ) -> Result<Option<ProductAttributeValue>>;

    /// Create a value for an attribute
    async fn create_attribute_value(
        &self,
        attribute_id: i32,
        value: &str,
        position: i32,
    ) -> Result<ProductAttributeValue>;

    /// Find a product tag by its unique slug
    async fn find_tag_by_slug(&self, slug: &str) -> Result<Option<ProductTag>>;

    /// Create a product tag
    async fn create_tag(&self, seed: &TagSeed) -> Result<ProductTag>;

    /// Find a wishlist priority by its unique code
    async fn find_wishlist_priority_by_code(&self, code: &str) -> Result<Option<WishlistPriority>>;

    /// Create a wishlist priority
    async fn create_wishlist_priority(&self, seed: &WishlistPrioritySeed)
        -> Result<WishlistPriority>;
}

/// Repository for provider lookups and provider sample data
#[async_trait]
pub trait ProviderRepository: Send + Sync {
    /// Find a provider type by its unique code
    async fn find_provider_type_by_code(&self, code: &str) -> Result<Option<ProviderType>>;

    /// Create a provider type
    async fn create_provider_type(&self, seed: &ProviderTypeSeed) -> Result<ProviderType>;

    /// Find a provider specialization by its unique code
    async fn find_specialization_by_code(
        &self,
        code: &str,
    ) -> Result<Option<ProviderSpecialization>>;

    /// Create a provider specialization
    async fn create_specialization(
        &self,
        seed: &ProviderSpecializationSeed,
    ) -> Result<ProviderSpecialization>;

    /// List all providers
    async fn list_providers(&self) -> Result<Vec<Provider>>;

    /// Attach a note to a provider
    async fn create_provider_note(&self, provider_id: Uuid, body: &str) -> Result<()>;
}

/// Repository for access-control bootstrap
#[async_trait]
pub trait AccessRepository: Send + Sync {
    /// Find a permission by its unique name
    async fn find_permission_by_name(&self, name: &str) -> Result<Option<Permission>>;

    /// Register a permission
    async fn create_permission(&self, name: &str) -> Result<Permission>;

    /// Find a role by its unique name
    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>>;

    /// Create a role
    async fn create_role(&self, name: &str) -> Result<Role>;

    /// Check whether a role already holds a permission
    async fn has_grant(&self, role_id: i32, permission_id: i32) -> Result<bool>;

    /// Grant a permission to a role
    async fn create_grant(&self, role_id: i32, permission_id: i32) -> Result<()>;

    /// List the permission names granted to a role
    async fn list_role_permissions(&self, role_id: i32) -> Result<Vec<String>>;
}

/// Repository for customer/product reads and sample-data writes
#[async_trait]
pub trait CrmRepository: Send + Sync {
    /// List all customers
    async fn list_customers(&self) -> Result<Vec<Customer>>;

    /// List all products
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// List the wishlist priority levels
    async fn list_wishlist_priorities(&self) -> Result<Vec<WishlistPriority>>;

    /// Attach a note to a customer
    async fn create_customer_note(&self, customer_id: Uuid, body: &str) -> Result<()>;

    /// Put a product on a customer's wishlist
    async fn create_wishlist_item(
        &self,
        customer_id: Uuid,
        product_id: Uuid,
        priority_id: i32,
    ) -> Result<()>;
}
