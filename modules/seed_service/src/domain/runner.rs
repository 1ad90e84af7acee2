//! Seed run orchestration
//!
//! Executes every seeder in a fixed order and collects the per-step
//! reports. The first failing step aborts the run; there are no retries.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::contract::SeedError;
use super::access::AccessSeeder;
use super::catalog::CatalogSeeder;
use super::report::{SeedReport, SeedRunSummary};
use super::repository::{AccessRepository, CatalogRepository, CrmRepository, ProviderRepository};
use super::sample::SampleDataSeeder;

/// Runs the full seeding sequence.
pub struct SeedRunner {
    catalog: CatalogSeeder,
    access: AccessSeeder,
    sample: SampleDataSeeder,
    config: Config,
}

impl SeedRunner {
    pub fn new(
        catalog_repo: Arc<dyn CatalogRepository>,
        provider_repo: Arc<dyn ProviderRepository>,
        access_repo: Arc<dyn AccessRepository>,
        crm_repo: Arc<dyn CrmRepository>,
        config: Config,
    ) -> Self {
        Self {
            catalog: CatalogSeeder::new(catalog_repo, provider_repo.clone()),
            access: AccessSeeder::new(access_repo),
            sample: SampleDataSeeder::new(crm_repo, provider_repo, config.clone()),
            config,
        }
    }

    /// Execute all steps in order and return the collected summary.
    pub async fn run_all(&self) -> Result<SeedRunSummary, SeedError> {
        let mut summary = SeedRunSummary::default();

        self.step(&mut summary, "brands", self.catalog.seed_brands().await?);
        self.step(
            &mut summary,
            "categories",
            self.catalog.seed_categories().await?,
        );
        self.step(
            &mut summary,
            "product attributes",
            self.catalog.seed_product_attributes().await?,
        );
        self.step(
            &mut summary,
            "product tags",
            self.catalog.seed_product_tags().await?,
        );
        self.step(
            &mut summary,
            "wishlist priorities",
            self.catalog.seed_wishlist_priorities().await?,
        );
        self.step(
            &mut summary,
            "provider types",
            self.catalog.seed_provider_types().await?,
        );
        self.step(
            &mut summary,
            "provider specializations",
            self.catalog.seed_provider_specializations().await?,
        );

        self.step(
            &mut summary,
            "customer permissions",
            self.access.seed_customer_permissions().await?,
        );
        self.step(
            &mut summary,
            "employee permissions",
            self.access.seed_employee_permissions().await?,
        );
        self.step(
            &mut summary,
            "shipment item permissions",
            self.access.seed_shipment_item_permissions().await?,
        );
        self.step(
            &mut summary,
            "user account permissions",
            self.access.seed_user_account_permissions().await?,
        );
        self.step(
            &mut summary,
            "customer segment permissions",
            self.access.seed_customer_segment_permissions().await?,
        );

        if !self.config.skip_sample_data {
            let mut rng = match self.config.rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            self.step(
                &mut summary,
                "customer notes",
                self.sample.seed_customer_notes(&mut rng).await?,
            );
            self.step(
                &mut summary,
                "wishlist items",
                self.sample.seed_wishlist_items(&mut rng).await?,
            );
            self.step(
                &mut summary,
                "provider notes",
                self.sample.seed_provider_notes(&mut rng).await?,
            );
        }

        Ok(summary)
    }

    fn step(&self, summary: &mut SeedRunSummary, name: &'static str, report: SeedReport) {
        tracing::info!(step = name, created = report.created, skipped = report.skipped, guard_skipped = report.guard_skipped, "seed step finished");
        summary.push(name, report);
    }
}
