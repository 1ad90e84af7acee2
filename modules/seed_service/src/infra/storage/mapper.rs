//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use crate::contract::{
    Brand, Category, Customer, Permission, Product, ProductAttribute, ProductAttributeValue,
    ProductTag, Provider, ProviderSpecialization, ProviderType, Role, WishlistPriority,
};
use super::entity::{access, catalog, crm};

// ===== Catalog conversions =====

impl From<catalog::brand::Model> for Brand {
    fn from(entity: catalog::brand::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            created_at: entity.created_at,
        }
    }
}

impl From<catalog::category::Model> for Category {
    fn from(entity: catalog::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            parent_id: entity.parent_id,
            position: entity.position,
            created_at: entity.created_at,
        }
    }
}

impl From<catalog::product_attribute::Model> for ProductAttribute {
    fn from(entity: catalog::product_attribute::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            created_at: entity.created_at,
        }
    }
}

impl From<catalog::product_attribute_value::Model> for ProductAttributeValue {
    fn from(entity: catalog::product_attribute_value::Model) -> Self {
        Self {
            id: entity.id,
            attribute_id: entity.attribute_id,
            value: entity.value,
            position: entity.position,
        }
    }
}

impl From<catalog::product_tag::Model> for ProductTag {
    fn from(entity: catalog::product_tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            created_at: entity.created_at,
        }
    }
}

impl From<catalog::wishlist_priority::Model> for WishlistPriority {
    fn from(entity: catalog::wishlist_priority::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            weight: entity.weight,
        }
    }
}

impl From<catalog::provider_type::Model> for ProviderType {
    fn from(entity: catalog::provider_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
        }
    }
}

impl From<catalog::provider_specialization::Model> for ProviderSpecialization {
    fn from(entity: catalog::provider_specialization::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
        }
    }
}

// ===== Access conversions =====

impl From<access::permission::Model> for Permission {
    fn from(entity: access::permission::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}

impl From<access::role::Model> for Role {
    fn from(entity: access::role::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}

// ===== CRM conversions =====

impl From<crm::customer::Model> for Customer {
    fn from(entity: crm::customer::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            created_at: entity.created_at,
        }
    }
}

impl From<crm::product::Model> for Product {
    fn from(entity: crm::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            sku: entity.sku,
            created_at: entity.created_at,
        }
    }
}

impl From<crm::provider::Model> for Provider {
    fn from(entity: crm::provider::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}
