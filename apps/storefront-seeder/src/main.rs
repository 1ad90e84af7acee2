//! Storefront seeder - console entry point
//!
//! `migrate` applies the schema, `seed` runs the full seeding sequence,
//! `status` prints row counts for the seeded tables.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use sea_orm::{Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use sea_orm_migration::MigratorTrait;
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use seed_service::domain::access::{
    ROLE_ADMINISTRATOR, ROLE_OPERATIONS_MANAGER, ROLE_SUPPORT_AGENT,
};
use seed_service::domain::repository::AccessRepository;
use seed_service::infra::storage::entity::{access, catalog};
use seed_service::infra::storage::repositories::{
    SeaOrmAccessRepository, SeaOrmCatalogRepository, SeaOrmCrmRepository,
    SeaOrmProviderRepository,
};
use seed_service::{Migrator, SeedRunner};

#[derive(Debug, Parser)]
#[command(
    name = "storefront-seeder",
    about = "Storefront database seeding toolkit",
    version
)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "storefront.yaml")]
    config: PathBuf,

    /// Database connection string (overrides config file and env)
    #[arg(long)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending schema migrations
    Migrate,
    /// Run the full seeding sequence
    Seed {
        /// Skip the guarded sample-data steps
        #[arg(long)]
        skip_sample_data: bool,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show row counts for the seeded tables
    Status,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AppConfig {
    #[serde(default)]
    database: DatabaseConfig,

    #[serde(default)]
    seeder: seed_service::Config,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatabaseConfig {
    url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = load_config(&cli)?;

    let url = match cli.database_url.or(config.database.url.take()) {
        Some(url) => url,
        None => bail!(
            "no database URL configured; pass --database-url, set database.url in the \
             config file, or export STOREFRONT_DATABASE__URL"
        ),
    };

    let db = Arc::new(
        Database::connect(url.as_str())
            .await
            .context("failed to connect to the database")?,
    );

    match cli.command {
        Command::Migrate => {
            Migrator::up(&*db, None)
                .await
                .context("failed to apply migrations")?;
            info!("migrations applied");
        }
        Command::Seed {
            skip_sample_data,
            json,
        } => {
            let mut seeder_config = config.seeder.clone();
            seeder_config.skip_sample_data |= skip_sample_data;

            let runner = SeedRunner::new(
                Arc::new(SeaOrmCatalogRepository::new(db.clone())),
                Arc::new(SeaOrmProviderRepository::new(db.clone())),
                Arc::new(SeaOrmAccessRepository::new(db.clone())),
                Arc::new(SeaOrmCrmRepository::new(db.clone())),
                seeder_config,
            );

            let summary = runner.run_all().await.context("seeding run failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary);
            }
        }
        Command::Status => {
            print_status(&db).await?;
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut figment = Figment::new();
    if cli.config.exists() {
        figment = figment.merge(Yaml::file(&cli.config));
    }
    figment
        .merge(Env::prefixed("STOREFRONT_").split("__"))
        .extract()
        .context("invalid configuration")
}

async fn print_status(db: &Arc<DatabaseConnection>) -> Result<()> {
    let rows: [(&str, u64); 9] = [
        ("brands", catalog::brand::Entity::find().count(&**db).await?),
        (
            "categories",
            catalog::category::Entity::find().count(&**db).await?,
        ),
        (
            "product attributes",
            catalog::product_attribute::Entity::find().count(&**db).await?,
        ),
        (
            "product tags",
            catalog::product_tag::Entity::find().count(&**db).await?,
        ),
        (
            "wishlist priorities",
            catalog::wishlist_priority::Entity::find().count(&**db).await?,
        ),
        (
            "provider types",
            catalog::provider_type::Entity::find().count(&**db).await?,
        ),
        (
            "provider specializations",
            catalog::provider_specialization::Entity::find()
                .count(&**db)
                .await?,
        ),
        (
            "permissions",
            access::permission::Entity::find().count(&**db).await?,
        ),
        ("roles", access::role::Entity::find().count(&**db).await?),
    ];

    for (name, count) in rows {
        println!("{:<26} {}", name, count);
    }

    let access_repo = SeaOrmAccessRepository::new(db.clone());
    for role_name in [ROLE_ADMINISTRATOR, ROLE_OPERATIONS_MANAGER, ROLE_SUPPORT_AGENT] {
        if let Some(role) = access_repo.find_role_by_name(role_name).await? {
            let permissions = access_repo.list_role_permissions(role.id).await?;
            println!("{:<26} {} permissions", role.name, permissions.len());
        }
    }

    Ok(())
}
