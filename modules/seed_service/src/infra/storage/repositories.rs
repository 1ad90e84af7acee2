//! SeaORM repository implementations

use crate::contract::{
    AttributeSeed, Brand, BrandSeed, Category, CategorySeed, Customer, Permission, Product,
    ProductAttribute, ProductAttributeValue, ProductTag, Provider, ProviderSpecialization,
    ProviderSpecializationSeed, ProviderType, ProviderTypeSeed, Role, TagSeed, WishlistPriority,
    WishlistPrioritySeed,
};
use crate::domain::repository::{
    AccessRepository, CatalogRepository, CrmRepository, ProviderRepository,
};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use super::entity::{access, catalog, crm};

// ===== Catalog Repository =====

pub struct SeaOrmCatalogRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn find_brand_by_slug(&self, slug: &str) -> Result<Option<Brand>> {
        let result = catalog::brand::Entity::find()
            .filter(catalog::brand::Column::Slug.eq(slug))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn create_brand(&self, seed: &BrandSeed) -> Result<Brand> {
        let active = catalog::brand::ActiveModel {
            name: Set(seed.name.to_string()),
            slug: Set(seed.slug.to_string()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let result = catalog::brand::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let result = catalog::category::Entity::find()
            .filter(catalog::category::Column::Slug.eq(slug))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn create_category(
        &self,
        seed: &CategorySeed,
        parent_id: Option<i32>,
        position: i32,
    ) -> Result<Category> {
        let active = catalog::category::ActiveModel {
            name: Set(seed.name.to_string()),
            slug: Set(seed.slug.to_string()),
            parent_id: Set(parent_id),
            position: Set(position),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let result = catalog::category::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_attribute_by_code(&self, code: &str) -> Result<Option<ProductAttribute>> {
        let result = catalog::product_attribute::Entity::find()
            .filter(catalog::product_attribute::Column::Code.eq(code))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn create_attribute(&self, seed: &AttributeSeed) -> Result<ProductAttribute> {
        let active = catalog::product_attribute::ActiveModel {
            name: Set(seed.name.to_string()),
            code: Set(seed.code.to_string()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let result = catalog::product_attribute::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_attribute_value(
        &self,
        attribute_id: i32,
        value: &str,
    ) -> Result<Option<ProductAttributeValue>> {
        let result = catalog::product_attribute_value::Entity::find()
            .filter(catalog::product_attribute_value::Column::AttributeId.eq(attribute_id))
            .filter(catalog::product_attribute_value::Column::Value.eq(value))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn create_attribute_value(
        &self,
        attribute_id: i32,
        value: &str,
        position: i32,
    ) -> Result<ProductAttributeValue> {
        let active = catalog::product_attribute_value::ActiveModel {
            attribute_id: Set(attribute_id),
            value: Set(value.to_string()),
            position: Set(position),
            ..Default::default()
        };

        let result = catalog::product_attribute_value::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_tag_by_slug(&self, slug: &str) -> Result<Option<ProductTag>> {
        let result = catalog::product_tag::Entity::find()
            .filter(catalog::product_tag::Column::Slug.eq(slug))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn create_tag(&self, seed: &TagSeed) -> Result<ProductTag> {
        let active = catalog::product_tag::ActiveModel {
            name: Set(seed.name.to_string()),
            slug: Set(seed.slug.to_string()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let result = catalog::product_tag::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_wishlist_priority_by_code(&self, code: &str) -> Result<Option<WishlistPriority>> {
        let result = catalog::wishlist_priority::Entity::find()
            .filter(catalog::wishlist_priority::Column::Code.eq(code))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn create_wishlist_priority(
        &self,
        seed: &WishlistPrioritySeed,
    ) -> Result<WishlistPriority> {
        let active = catalog::wishlist_priority::ActiveModel {
            name: Set(seed.name.to_string()),
            code: Set(seed.code.to_string()),
            weight: Set(seed.weight),
            ..Default::default()
        };

        let result = catalog::wishlist_priority::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }
}

// ===== Provider Repository =====

pub struct SeaOrmProviderRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmProviderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProviderRepository for SeaOrmProviderRepository {
    async fn find_provider_type_by_code(&self, code: &str) -> Result<Option<ProviderType>> {
        let result = catalog::provider_type::Entity::find()
            .filter(catalog::provider_type::Column::Code.eq(code))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn create_provider_type(&self, seed: &ProviderTypeSeed) -> Result<ProviderType> {
        let active = catalog::provider_type::ActiveModel {
            name: Set(seed.name.to_string()),
            code: Set(seed.code.to_string()),
            ..Default::default()
        };

        let result = catalog::provider_type::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_specialization_by_code(
        &self,
        code: &str,
    ) -> Result<Option<ProviderSpecialization>> {
        let result = catalog::provider_specialization::Entity::find()
            .filter(catalog::provider_specialization::Column::Code.eq(code))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn create_specialization(
        &self,
        seed: &ProviderSpecializationSeed,
    ) -> Result<ProviderSpecialization> {
        let active = catalog::provider_specialization::ActiveModel {
            name: Set(seed.name.to_string()),
            code: Set(seed.code.to_string()),
            ..Default::default()
        };

        let result = catalog::provider_specialization::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn list_providers(&self) -> Result<Vec<Provider>> {
        let results = crm::provider::Entity::find()
            .order_by_asc(crm::provider::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn create_provider_note(&self, provider_id: Uuid, body: &str) -> Result<()> {
        let active = crm::provider_note::ActiveModel {
            id: Set(Uuid::new_v4()),
            provider_id: Set(provider_id),
            body: Set(body.to_string()),
            created_at: Set(chrono::Utc::now()),
        };

        crm::provider_note::Entity::insert(active)
            .exec(&*self.db)
            .await?;

        Ok(())
    }
}

// ===== Access Repository =====

pub struct SeaOrmAccessRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmAccessRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccessRepository for SeaOrmAccessRepository {
    async fn find_permission_by_name(&self, name: &str) -> Result<Option<Permission>> {
        let result = access::permission::Entity::find()
            .filter(access::permission::Column::Name.eq(name))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn create_permission(&self, name: &str) -> Result<Permission> {
        let active = access::permission::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let result = access::permission::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        let result = access::role::Entity::find()
            .filter(access::role::Column::Name.eq(name))
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn create_role(&self, name: &str) -> Result<Role> {
        let active = access::role::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let result = access::role::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn has_grant(&self, role_id: i32, permission_id: i32) -> Result<bool> {
        let count = access::role_permission::Entity::find_by_id((role_id, permission_id))
            .count(&*self.db)
            .await?;

        Ok(count > 0)
    }

    async fn create_grant(&self, role_id: i32, permission_id: i32) -> Result<()> {
        let active = access::role_permission::ActiveModel {
            role_id: Set(role_id),
            permission_id: Set(permission_id),
        };

        access::role_permission::Entity::insert(active)
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    async fn list_role_permissions(&self, role_id: i32) -> Result<Vec<String>> {
        let grants = access::role_permission::Entity::find()
            .filter(access::role_permission::Column::RoleId.eq(role_id))
            .all(&*self.db)
            .await?;

        let ids: Vec<i32> = grants.into_iter().map(|g| g.permission_id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let permissions = access::permission::Entity::find()
            .filter(access::permission::Column::Id.is_in(ids))
            .order_by_asc(access::permission::Column::Name)
            .all(&*self.db)
            .await?;

        Ok(permissions.into_iter().map(|p| p.name).collect())
    }
}

// ===== CRM Repository =====

pub struct SeaOrmCrmRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCrmRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrmRepository for SeaOrmCrmRepository {
    async fn list_customers(&self) -> Result<Vec<Customer>> {
        let results = crm::customer::Entity::find()
            .order_by_asc(crm::customer::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let results = crm::product::Entity::find()
            .order_by_asc(crm::product::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn list_wishlist_priorities(&self) -> Result<Vec<WishlistPriority>> {
        let results = catalog::wishlist_priority::Entity::find()
            .order_by_asc(catalog::wishlist_priority::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn create_customer_note(&self, customer_id: Uuid, body: &str) -> Result<()> {
        let active = crm::customer_note::ActiveModel {
            id: Set(Uuid::new_v4()),
            customer_id: Set(customer_id),
            body: Set(body.to_string()),
            created_at: Set(chrono::Utc::now()),
        };

        crm::customer_note::Entity::insert(active)
            .exec(&*self.db)
            .await?;

        Ok(())
    }

    async fn create_wishlist_item(
        &self,
        customer_id: Uuid,
        product_id: Uuid,
        priority_id: i32,
    ) -> Result<()> {
        let active = crm::wishlist_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            customer_id: Set(customer_id),
            product_id: Set(product_id),
            priority_id: Set(priority_id),
            created_at: Set(chrono::Utc::now()),
        };

        crm::wishlist_item::Entity::insert(active)
            .exec(&*self.db)
            .await?;

        Ok(())
    }
}
