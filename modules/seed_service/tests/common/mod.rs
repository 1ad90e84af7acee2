//! Shared in-memory store backing every repository trait for tests

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use seed_service::contract::*;
use seed_service::domain::repository::{
    AccessRepository, CatalogRepository, CrmRepository, ProviderRepository,
};

#[derive(Default)]
struct State {
    next_id: i32,
    brands: Vec<Brand>,
    categories: Vec<Category>,
    attributes: Vec<ProductAttribute>,
    attribute_values: Vec<ProductAttributeValue>,
    tags: Vec<ProductTag>,
    priorities: Vec<WishlistPriority>,
    provider_types: Vec<ProviderType>,
    specializations: Vec<ProviderSpecialization>,
    permissions: Vec<Permission>,
    roles: Vec<Role>,
    grants: Vec<(i32, i32)>,
    customers: Vec<Customer>,
    products: Vec<Product>,
    providers: Vec<Provider>,
    customer_notes: Vec<(Uuid, String)>,
    wishlist_items: Vec<(Uuid, Uuid, i32)>,
    provider_notes: Vec<(Uuid, String)>,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory stand-in for all four repositories.
#[derive(Default)]
pub struct MockStore {
    state: RwLock<State>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- fixtures -----

    pub fn add_customer(&self, id: Uuid, full_name: &str, email: &str) {
        self.state.write().customers.push(Customer {
            id,
            full_name: full_name.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        });
    }

    pub fn add_product(&self, id: Uuid, name: &str, sku: &str) {
        self.state.write().products.push(Product {
            id,
            name: name.to_string(),
            sku: sku.to_string(),
            created_at: Utc::now(),
        });
    }

    pub fn add_provider(&self, id: Uuid, name: &str) {
        self.state.write().providers.push(Provider {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
        });
    }

    // ----- inspection -----

    pub fn brand_count(&self) -> usize {
        self.state.read().brands.len()
    }

    pub fn brand_slugs(&self) -> Vec<String> {
        self.state.read().brands.iter().map(|b| b.slug.clone()).collect()
    }

    pub fn category_count(&self) -> usize {
        self.state.read().categories.len()
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<Category> {
        self.state
            .read()
            .categories
            .iter()
            .find(|c| c.slug == slug)
            .cloned()
    }

    pub fn attribute_count(&self) -> usize {
        self.state.read().attributes.len()
    }

    pub fn attribute_value_count(&self) -> usize {
        self.state.read().attribute_values.len()
    }

    pub fn values_of_attribute(&self, attribute_id: i32) -> Vec<String> {
        self.state
            .read()
            .attribute_values
            .iter()
            .filter(|v| v.attribute_id == attribute_id)
            .map(|v| v.value.clone())
            .collect()
    }

    pub fn tag_count(&self) -> usize {
        self.state.read().tags.len()
    }

    pub fn priority_count(&self) -> usize {
        self.state.read().priorities.len()
    }

    pub fn provider_type_count(&self) -> usize {
        self.state.read().provider_types.len()
    }

    pub fn specialization_count(&self) -> usize {
        self.state.read().specializations.len()
    }

    pub fn permission_names(&self) -> Vec<String> {
        self.state
            .read()
            .permissions
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    pub fn role_names(&self) -> Vec<String> {
        self.state.read().roles.iter().map(|r| r.name.clone()).collect()
    }

    pub fn role_permission_names(&self, role_name: &str) -> Vec<String> {
        let state = self.state.read();
        let Some(role) = state.roles.iter().find(|r| r.name == role_name) else {
            return Vec::new();
        };
        let mut names: Vec<String> = state
            .grants
            .iter()
            .filter(|(role_id, _)| *role_id == role.id)
            .filter_map(|(_, permission_id)| {
                state
                    .permissions
                    .iter()
                    .find(|p| p.id == *permission_id)
                    .map(|p| p.name.clone())
            })
            .collect();
        names.sort();
        names
    }

    pub fn grant_count(&self) -> usize {
        self.state.read().grants.len()
    }

    pub fn customer_note_count(&self) -> usize {
        self.state.read().customer_notes.len()
    }

    pub fn customer_note_bodies(&self) -> Vec<String> {
        self.state
            .read()
            .customer_notes
            .iter()
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn wishlist_items(&self) -> Vec<(Uuid, Uuid, i32)> {
        self.state.read().wishlist_items.clone()
    }

    pub fn provider_note_count(&self) -> usize {
        self.state.read().provider_notes.len()
    }
}

#[async_trait]
impl CatalogRepository for MockStore {
    async fn find_brand_by_slug(&self, slug: &str) -> Result<Option<Brand>> {
        Ok(self.state.read().brands.iter().find(|b| b.slug == slug).cloned())
    }

    async fn create_brand(&self, seed: &BrandSeed) -> Result<Brand> {
        let mut state = self.state.write();
        let brand = Brand {
            id: state.next_id(),
            name: seed.name.to_string(),
            slug: seed.slug.to_string(),
            created_at: Utc::now(),
        };
        state.brands.push(brand.clone());
        Ok(brand)
    }

    async fn find_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        Ok(self
            .state
            .read()
            .categories
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn create_category(
        &self,
        seed: &CategorySeed,
        parent_id: Option<i32>,
        position: i32,
    ) -> Result<Category> {
        let mut state = self.state.write();
        let category = Category {
            id: state.next_id(),
            name: seed.name.to_string(),
            slug: seed.slug.to_string(),
            parent_id,
            position,
            created_at: Utc::now(),
        };
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn find_attribute_by_code(&self, code: &str) -> Result<Option<ProductAttribute>> {
        Ok(self
            .state
            .read()
            .attributes
            .iter()
            .find(|a| a.code == code)
            .cloned())
    }

    async fn create_attribute(&self, seed: &AttributeSeed) -> Result<ProductAttribute> {
        let mut state = self.state.write();
        let attribute = ProductAttribute {
            id: state.next_id(),
            name: seed.name.to_string(),
            code: seed.code.to_string(),
            created_at: Utc::now(),
        };
        state.attributes.push(attribute.clone());
        Ok(attribute)
    }

    async fn find_attribute_value(
        &self,
        attribute_id: i32,
        value: &str,
    ) -> Result<Option<ProductAttributeValue>> {
        Ok(self
            .state
            .read()
            .attribute_values
            .iter()
            .find(|v| v.attribute_id == attribute_id && v.value == value)
            .cloned())
    }

    async fn create_attribute_value(
        &self,
        attribute_id: i32,
        value: &str,
        position: i32,
    ) -> Result<ProductAttributeValue> {
        let mut state = self.state.write();
        let attribute_value = ProductAttributeValue {
            id: state.next_id(),
            attribute_id,
            value: value.to_string(),
            position,
        };
        state.attribute_values.push(attribute_value.clone());
        Ok(attribute_value)
    }

    async fn find_tag_by_slug(&self, slug: &str) -> Result<Option<ProductTag>> {
        Ok(self.state.read().tags.iter().find(|t| t.slug == slug).cloned())
    }

    async fn create_tag(&self, seed: &TagSeed) -> Result<ProductTag> {
        let mut state = self.state.write();
        let tag = ProductTag {
            id: state.next_id(),
            name: seed.name.to_string(),
            slug: seed.slug.to_string(),
            created_at: Utc::now(),
        };
        state.tags.push(tag.clone());
        Ok(tag)
    }

    async fn find_wishlist_priority_by_code(&self, code: &str) -> Result<Option<WishlistPriority>> {
        Ok(self
            .state
            .read()
            .priorities
            .iter()
            .find(|p| p.code == code)
            .cloned())
    }

    async fn create_wishlist_priority(
        &self,
        seed: &WishlistPrioritySeed,
    ) -> Result<WishlistPriority> {
        let mut state = self.state.write();
        let priority = WishlistPriority {
            id: state.next_id(),
            name: seed.name.to_string(),
            code: seed.code.to_string(),
            weight: seed.weight,
        };
        state.priorities.push(priority.clone());
        Ok(priority)
    }
}

#[async_trait]
impl ProviderRepository for MockStore {
    async fn find_provider_type_by_code(&self, code: &str) -> Result<Option<ProviderType>> {
        Ok(self
            .state
            .read()
            .provider_types
            .iter()
            .find(|t| t.code == code)
            .cloned())
    }

    async fn create_provider_type(&self, seed: &ProviderTypeSeed) -> Result<ProviderType> {
        let mut state = self.state.write();
        let provider_type = ProviderType {
            id: state.next_id(),
            name: seed.name.to_string(),
            code: seed.code.to_string(),
        };
        state.provider_types.push(provider_type.clone());
        Ok(provider_type)
    }

    async fn find_specialization_by_code(
        &self,
        code: &str,
    ) -> Result<Option<ProviderSpecialization>> {
        Ok(self
            .state
            .read()
            .specializations
            .iter()
            .find(|s| s.code == code)
            .cloned())
    }

    async fn create_specialization(
        &self,
        seed: &ProviderSpecializationSeed,
    ) -> Result<ProviderSpecialization> {
        let mut state = self.state.write();
        let specialization = ProviderSpecialization {
            id: state.next_id(),
            name: seed.name.to_string(),
            code: seed.code.to_string(),
        };
        state.specializations.push(specialization.clone());
        Ok(specialization)
    }

    async fn list_providers(&self) -> Result<Vec<Provider>> {
        Ok(self.state.read().providers.clone())
    }

    async fn create_provider_note(&self, provider_id: Uuid, body: &str) -> Result<()> {
        self.state
            .write()
            .provider_notes
            .push((provider_id, body.to_string()));
        Ok(())
    }
}

#[async_trait]
impl AccessRepository for MockStore {
    async fn find_permission_by_name(&self, name: &str) -> Result<Option<Permission>> {
        Ok(self
            .state
            .read()
            .permissions
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn create_permission(&self, name: &str) -> Result<Permission> {
        let mut state = self.state.write();
        let permission = Permission {
            id: state.next_id(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        state.permissions.push(permission.clone());
        Ok(permission)
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        Ok(self.state.read().roles.iter().find(|r| r.name == name).cloned())
    }

    async fn create_role(&self, name: &str) -> Result<Role> {
        let mut state = self.state.write();
        let role = Role {
            id: state.next_id(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        state.roles.push(role.clone());
        Ok(role)
    }

    async fn has_grant(&self, role_id: i32, permission_id: i32) -> Result<bool> {
        Ok(self
            .state
            .read()
            .grants
            .iter()
            .any(|g| *g == (role_id, permission_id)))
    }

    async fn create_grant(&self, role_id: i32, permission_id: i32) -> Result<()> {
        self.state.write().grants.push((role_id, permission_id));
        Ok(())
    }

    async fn list_role_permissions(&self, role_id: i32) -> Result<Vec<String>> {
        let state = self.state.read();
        let mut names: Vec<String> = state
            .grants
            .iter()
            .filter(|(rid, _)| *rid == role_id)
            .filter_map(|(_, pid)| {
                state
                    .permissions
                    .iter()
                    .find(|p| p.id == *pid)
                    .map(|p| p.name.clone())
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

#[async_trait]
impl CrmRepository for MockStore {
    async fn list_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.state.read().customers.clone())
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.state.read().products.clone())
    }

    async fn list_wishlist_priorities(&self) -> Result<Vec<WishlistPriority>> {
        Ok(self.state.read().priorities.clone())
    }

    async fn create_customer_note(&self, customer_id: Uuid, body: &str) -> Result<()> {
        self.state
            .write()
            .customer_notes
            .push((customer_id, body.to_string()));
        Ok(())
    }

    async fn create_wishlist_item(
        &self,
        customer_id: Uuid,
        product_id: Uuid,
        priority_id: i32,
    ) -> Result<()> {
        self.state
            .write()
            .wishlist_items
            .push((customer_id, product_id, priority_id));
        Ok(())
    }
}
