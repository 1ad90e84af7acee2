//! Guarded sample-data seeders
//!
//! Demo rows only make sense once the platform has real customers,
//! products or providers, so every seeder here checks its prerequisites
//! first and reports a guard skip with zero writes when they are absent.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Config;
use crate::contract::SeedError;
use super::report::SeedReport;
use super::repository::{CrmRepository, ProviderRepository};

const CUSTOMER_NOTE_TEMPLATES: [&str; 6] = [
    "Prefers delivery notifications by SMS.",
    "Asked to be contacted about the loyalty program.",
    "Returned an item in March; refund settled.",
    "Interested in bulk ordering for office supplies.",
    "Requested gift wrapping on previous orders.",
    "Newsletter subscriber since signup.",
];

const PROVIDER_NOTE_TEMPLATES: [&str; 5] = [
    "Ships within 3 business days on average.",
    "Quarterly price review scheduled.",
    "Requires purchase orders over email.",
    "Offers volume discounts above 500 units.",
    "Certified for recycled packaging.",
];

/// Seeder for randomized demo rows behind prerequisite guards.
pub struct SampleDataSeeder {
    crm: Arc<dyn CrmRepository>,
    providers: Arc<dyn ProviderRepository>,
    config: Config,
}

impl SampleDataSeeder {
    pub fn new(
        crm: Arc<dyn CrmRepository>,
        providers: Arc<dyn ProviderRepository>,
        config: Config,
    ) -> Self {
        Self {
            crm,
            providers,
            config,
        }
    }

    /// Attach a few notes to every customer. Guard: customers exist.
    pub async fn seed_customer_notes(&self, rng: &mut StdRng) -> Result<SeedReport, SeedError> {
        let customers = self.crm.list_customers().await.map_err(SeedError::storage)?;
        if customers.is_empty() {
            return Ok(SeedReport::guarded());
        }

        let mut report = SeedReport::default();
        for customer in &customers {
            for _ in 0..self.config.notes_per_customer {
                let body = CUSTOMER_NOTE_TEMPLATES
                    [rng.random_range(0..CUSTOMER_NOTE_TEMPLATES.len())];
                self.crm
                    .create_customer_note(customer.id, body)
                    .await
                    .map_err(SeedError::storage)?;
                report.record_created();
            }
        }
        Ok(report)
    }

    /// Put a random selection of products on each customer's wishlist.
    /// Guard: customers, products and priority levels all exist.
    pub async fn seed_wishlist_items(&self, rng: &mut StdRng) -> Result<SeedReport, SeedError> {
        let customers = self.crm.list_customers().await.map_err(SeedError::storage)?;
        let products = self.crm.list_products().await.map_err(SeedError::storage)?;
        let priorities = self
            .crm
            .list_wishlist_priorities()
            .await
            .map_err(SeedError::storage)?;
        if customers.is_empty() || products.is_empty() || priorities.is_empty() {
            return Ok(SeedReport::guarded());
        }

        let lo = self.config.wishlist_min_per_customer.max(1) as usize;
        let hi = (self.config.wishlist_max_per_customer as usize).max(lo);

        let mut report = SeedReport::default();
        for customer in &customers {
            let count = rng.random_range(lo..=hi).min(products.len());
            let mut picks: Vec<usize> = (0..products.len()).collect();
            picks.shuffle(rng);
            for index in picks.into_iter().take(count) {
                let priority = &priorities[rng.random_range(0..priorities.len())];
                self.crm
                    .create_wishlist_item(customer.id, products[index].id, priority.id)
                    .await
                    .map_err(SeedError::storage)?;
                report.record_created();
            }
        }
        Ok(report)
    }

    /// Attach one note to every provider. Guard: providers exist.
    pub async fn seed_provider_notes(&self, rng: &mut StdRng) -> Result<SeedReport, SeedError> {
        let providers = self
            .providers
            .list_providers()
            .await
            .map_err(SeedError::storage)?;
        if providers.is_empty() {
            return Ok(SeedReport::guarded());
        }

        let mut report = SeedReport::default();
        for provider in &providers {
            let body =
                PROVIDER_NOTE_TEMPLATES[rng.random_range(0..PROVIDER_NOTE_TEMPLATES.len())];
            self.providers
                .create_provider_note(provider.id, body)
                .await
                .map_err(SeedError::storage)?;
            report.record_created();
        }
        Ok(report)
    }
}
