//! Catalog lookup seeders
//!
//! Every seeder here walks a literal dataset and creates each row unless
//! a row with the same unique key (slug or code) already exists, so a
//! re-run never duplicates data.

use std::sync::Arc;

use crate::contract::{
    AttributeSeed, BrandSeed, CategorySeed, ProviderSpecializationSeed, ProviderTypeSeed, SeedError,
    TagSeed, WishlistPrioritySeed,
};
use super::report::SeedReport;
use super::repository::{CatalogRepository, ProviderRepository};

/// Seeder for the fixed catalog lookup tables.
pub struct CatalogSeeder {
    catalog: Arc<dyn CatalogRepository>,
    providers: Arc<dyn ProviderRepository>,
}

impl CatalogSeeder {
    pub fn new(catalog: Arc<dyn CatalogRepository>, providers: Arc<dyn ProviderRepository>) -> Self {
        Self { catalog, providers }
    }

    /// Insert the brand catalog.
    pub async fn seed_brands(&self) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        for seed in brand_catalog() {
            let existing = self
                .catalog
                .find_brand_by_slug(seed.slug)
                .await
                .map_err(SeedError::storage)?;
            if existing.is_some() {
                report.record_skipped();
            } else {
                self.catalog
                    .create_brand(&seed)
                    .await
                    .map_err(SeedError::storage)?;
                report.record_created();
            }
        }
        Ok(report)
    }

    /// Insert the category tree. Children are reconciled individually, so
    /// an existing parent still receives any missing children.
    pub async fn seed_categories(&self) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        for (position, (parent, children)) in category_tree().into_iter().enumerate() {
            let parent_row = match self
                .catalog
                .find_category_by_slug(parent.slug)
                .await
                .map_err(SeedError::storage)?
            {
                Some(row) => {
                    report.record_skipped();
                    row
                }
                None => {
                    report.record_created();
                    self.catalog
                        .create_category(&parent, None, position as i32)
                        .await
                        .map_err(SeedError::storage)?
                }
            };

            for (child_position, child) in children.into_iter().enumerate() {
                let existing = self
                    .catalog
                    .find_category_by_slug(child.slug)
                    .await
                    .map_err(SeedError::storage)?;
                if existing.is_some() {
                    report.record_skipped();
                } else {
                    self.catalog
                        .create_category(&child, Some(parent_row.id), child_position as i32)
                        .await
                        .map_err(SeedError::storage)?;
                    report.record_created();
                }
            }
        }
        Ok(report)
    }

    /// Insert the product attributes and their admissible values. Values
    /// of an existing attribute are reconciled one by one.
    pub async fn seed_product_attributes(&self) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        for (attribute, values) in attribute_catalog() {
            let attribute_row = match self
                .catalog
                .find_attribute_by_code(attribute.code)
                .await
                .map_err(SeedError::storage)?
            {
                Some(row) => {
                    report.record_skipped();
                    row
                }
                None => {
                    report.record_created();
                    self.catalog
                        .create_attribute(&attribute)
                        .await
                        .map_err(SeedError::storage)?
                }
            };

            for (position, value) in values.into_iter().enumerate() {
                let existing = self
                    .catalog
                    .find_attribute_value(attribute_row.id, value)
                    .await
                    .map_err(SeedError::storage)?;
                if existing.is_some() {
                    report.record_skipped();
                } else {
                    self.catalog
                        .create_attribute_value(attribute_row.id, value, position as i32)
                        .await
                        .map_err(SeedError::storage)?;
                    report.record_created();
                }
            }
        }
        Ok(report)
    }

    /// Insert the product tag catalog.
    pub async fn seed_product_tags(&self) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        for seed in tag_catalog() {
            let existing = self
                .catalog
                .find_tag_by_slug(seed.slug)
                .await
                .map_err(SeedError::storage)?;
            if existing.is_some() {
                report.record_skipped();
            } else {
                self.catalog
                    .create_tag(&seed)
                    .await
                    .map_err(SeedError::storage)?;
                report.record_created();
            }
        }
        Ok(report)
    }

    /// Insert the wishlist priority levels.
    pub async fn seed_wishlist_priorities(&self) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        for seed in wishlist_priority_catalog() {
            let existing = self
                .catalog
                .find_wishlist_priority_by_code(seed.code)
                .await
                .map_err(SeedError::storage)?;
            if existing.is_some() {
                report.record_skipped();
            } else {
                self.catalog
                    .create_wishlist_priority(&seed)
                    .await
                    .map_err(SeedError::storage)?;
                report.record_created();
            }
        }
        Ok(report)
    }

    /// Insert the provider type lookup.
    pub async fn seed_provider_types(&self) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        for seed in provider_type_catalog() {
            let existing = self
                .providers
                .find_provider_type_by_code(seed.code)
                .await
                .map_err(SeedError::storage)?;
            if existing.is_some() {
                report.record_skipped();
            } else {
                self.providers
                    .create_provider_type(&seed)
                    .await
                    .map_err(SeedError::storage)?;
                report.record_created();
            }
        }
        Ok(report)
    }

    /// Insert the provider specialization lookup.
    pub async fn seed_provider_specializations(&self) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        for seed in provider_specialization_catalog() {
            let existing = self
                .providers
                .find_specialization_by_code(seed.code)
                .await
                .map_err(SeedError::storage)?;
            if existing.is_some() {
                report.record_skipped();
            } else {
                self.providers
                    .create_specialization(&seed)
                    .await
                    .map_err(SeedError::storage)?;
                report.record_created();
            }
        }
        Ok(report)
    }
}

// ===== Literal datasets =====

/// The ten launch brands.
pub fn brand_catalog() -> Vec<BrandSeed> {
    vec![
        BrandSeed { name: "Aurelia Home", slug: "aurelia-home" },
        BrandSeed { name: "Borealis Audio", slug: "borealis-audio" },
        BrandSeed { name: "Cinderpeak", slug: "cinderpeak" },
        BrandSeed { name: "Driftwood Supply", slug: "driftwood-supply" },
        BrandSeed { name: "Emberline", slug: "emberline" },
        BrandSeed { name: "Fjell & Frost", slug: "fjell-frost" },
        BrandSeed { name: "Gilded Grove", slug: "gilded-grove" },
        BrandSeed { name: "Halcyon Labs", slug: "halcyon-labs" },
        BrandSeed { name: "Ironbark", slug: "ironbark" },
        BrandSeed { name: "Juniper Trading Co.", slug: "juniper-trading-co" },
    ]
}

/// Root categories with their children, in display order.
pub fn category_tree() -> Vec<(CategorySeed, Vec<CategorySeed>)> {
    vec![
        (
            CategorySeed { name: "Electronics", slug: "electronics" },
            vec![
                CategorySeed { name: "Smartphones", slug: "smartphones" },
                CategorySeed { name: "Laptops", slug: "laptops" },
                CategorySeed { name: "Audio & Headphones", slug: "audio-headphones" },
            ],
        ),
        (
            CategorySeed { name: "Fashion", slug: "fashion" },
            vec![
                CategorySeed { name: "Menswear", slug: "menswear" },
                CategorySeed { name: "Womenswear", slug: "womenswear" },
                CategorySeed { name: "Footwear", slug: "footwear" },
            ],
        ),
        (
            CategorySeed { name: "Home & Living", slug: "home-living" },
            vec![
                CategorySeed { name: "Furniture", slug: "furniture" },
                CategorySeed { name: "Kitchen & Dining", slug: "kitchen-dining" },
                CategorySeed { name: "Decor", slug: "decor" },
            ],
        ),
        (
            CategorySeed { name: "Beauty & Care", slug: "beauty-care" },
            vec![
                CategorySeed { name: "Skincare", slug: "skincare" },
                CategorySeed { name: "Fragrance", slug: "fragrance" },
            ],
        ),
        (
            CategorySeed { name: "Sports & Outdoor", slug: "sports-outdoor" },
            vec![
                CategorySeed { name: "Fitness Equipment", slug: "fitness-equipment" },
                CategorySeed { name: "Camping & Hiking", slug: "camping-hiking" },
            ],
        ),
    ]
}

/// Product attributes with their admissible values, in display order.
pub fn attribute_catalog() -> Vec<(AttributeSeed, Vec<&'static str>)> {
    vec![
        (
            AttributeSeed { name: "Color", code: "color" },
            vec![
                "Black", "White", "Navy", "Forest Green", "Burgundy", "Sand", "Charcoal", "Ochre",
            ],
        ),
        (
            AttributeSeed { name: "Size", code: "size" },
            vec!["XS", "S", "M", "L", "XL", "XXL"],
        ),
        (
            AttributeSeed { name: "Material", code: "material" },
            vec!["Cotton", "Wool", "Leather", "Linen", "Recycled Polyester"],
        ),
    ]
}

/// The product tag vocabulary.
pub fn tag_catalog() -> Vec<TagSeed> {
    vec![
        TagSeed { name: "New arrival", slug: "new-arrival" },
        TagSeed { name: "Bestseller", slug: "bestseller" },
        TagSeed { name: "On sale", slug: "on-sale" },
        TagSeed { name: "Clearance", slug: "clearance" },
        TagSeed { name: "Eco friendly", slug: "eco-friendly" },
        TagSeed { name: "Limited edition", slug: "limited-edition" },
        TagSeed { name: "Staff pick", slug: "staff-pick" },
        TagSeed { name: "Back in stock", slug: "back-in-stock" },
    ]
}

/// Wishlist priority levels; higher weight sorts first.
pub fn wishlist_priority_catalog() -> Vec<WishlistPrioritySeed> {
    vec![
        WishlistPrioritySeed { name: "Must have", code: "must-have", weight: 3 },
        WishlistPrioritySeed { name: "Nice to have", code: "nice-to-have", weight: 2 },
        WishlistPrioritySeed { name: "Someday", code: "someday", weight: 1 },
    ]
}

/// Provider (supplier) types.
pub fn provider_type_catalog() -> Vec<ProviderTypeSeed> {
    vec![
        ProviderTypeSeed { name: "Manufacturer", code: "manufacturer" },
        ProviderTypeSeed { name: "Distributor", code: "distributor" },
        ProviderTypeSeed { name: "Wholesaler", code: "wholesaler" },
        ProviderTypeSeed { name: "Importer", code: "importer" },
        ProviderTypeSeed { name: "Dropship Partner", code: "dropship-partner" },
    ]
}

/// Provider specializations.
pub fn provider_specialization_catalog() -> Vec<ProviderSpecializationSeed> {
    vec![
        ProviderSpecializationSeed { name: "Electronics", code: "electronics" },
        ProviderSpecializationSeed { name: "Apparel", code: "apparel" },
        ProviderSpecializationSeed { name: "Furniture", code: "furniture" },
        ProviderSpecializationSeed { name: "Cosmetics", code: "cosmetics" },
        ProviderSpecializationSeed { name: "Sporting Goods", code: "sporting-goods" },
        ProviderSpecializationSeed { name: "Homeware", code: "homeware" },
    ]
}
