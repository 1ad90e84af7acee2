//! Integration tests for the full seeding run

use std::sync::Arc;

use uuid::Uuid;

use seed_service::config::Config;
use seed_service::domain::runner::SeedRunner;

mod common;
use common::MockStore;

const FULL_STEP_ORDER: [&str; 15] = [
    "brands",
    "categories",
    "product attributes",
    "product tags",
    "wishlist priorities",
    "provider types",
    "provider specializations",
    "customer permissions",
    "employee permissions",
    "shipment item permissions",
    "user account permissions",
    "customer segment permissions",
    "customer notes",
    "wishlist items",
    "provider notes",
];

fn runner(store: &Arc<MockStore>, config: Config) -> SeedRunner {
    SeedRunner::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        config,
    )
}

#[tokio::test]
async fn run_all_executes_every_step_in_the_declared_order() {
    let store = Arc::new(MockStore::new());
    let summary = runner(&store, Config::default()).run_all().await.unwrap();

    let names: Vec<_> = summary.steps.iter().map(|s| s.name).collect();
    assert_eq!(names, FULL_STEP_ORDER);
}

#[tokio::test]
async fn run_on_an_empty_store_seeds_lookups_and_guards_samples() {
    let store = Arc::new(MockStore::new());
    let summary = runner(&store, Config::default()).run_all().await.unwrap();

    let by_name = |name: &str| {
        summary
            .steps
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.report)
            .unwrap()
    };

    assert_eq!(by_name("brands").created, 10);
    assert_eq!(by_name("categories").created, 18);
    assert_eq!(by_name("product attributes").created, 22);
    assert_eq!(by_name("product tags").created, 8);
    assert_eq!(by_name("wishlist priorities").created, 3);
    assert_eq!(by_name("provider types").created, 5);
    assert_eq!(by_name("provider specializations").created, 6);

    assert_eq!(store.permission_names().len(), 31);
    assert_eq!(store.role_names().len(), 3);

    assert!(by_name("customer notes").guard_skipped);
    assert!(by_name("wishlist items").guard_skipped);
    assert!(by_name("provider notes").guard_skipped);
    assert_eq!(store.customer_note_count(), 0);
    assert!(store.wishlist_items().is_empty());
    assert_eq!(store.provider_note_count(), 0);
}

#[tokio::test]
async fn second_run_creates_nothing_new() {
    let store = Arc::new(MockStore::new());
    let seed_runner = runner(&store, Config::default());

    seed_runner.run_all().await.unwrap();
    let second = seed_runner.run_all().await.unwrap();

    assert_eq!(second.total_created(), 0);
    assert_eq!(store.brand_count(), 10);
    assert_eq!(store.permission_names().len(), 31);
}

#[tokio::test]
async fn skip_sample_data_drops_the_guarded_steps() {
    let store = Arc::new(MockStore::new());
    let config = Config {
        skip_sample_data: true,
        ..Config::default()
    };
    let summary = runner(&store, config).run_all().await.unwrap();

    assert_eq!(summary.steps.len(), 12);
    assert!(summary.steps.iter().all(|s| s.name != "customer notes"));
}

#[tokio::test]
async fn populated_store_receives_sample_data() {
    let store = Arc::new(MockStore::new());
    store.add_customer(Uuid::from_u128(1), "Nora Lindqvist", "nora@example.com");
    store.add_product(Uuid::from_u128(2), "Walnut Desk", "SKU-0001");
    store.add_provider(Uuid::from_u128(3), "Meridian Goods");

    let config = Config {
        rng_seed: Some(42),
        ..Config::default()
    };
    let summary = runner(&store, config).run_all().await.unwrap();

    let by_name = |name: &str| {
        summary
            .steps
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.report)
            .unwrap()
    };

    assert!(!by_name("customer notes").guard_skipped);
    assert_eq!(by_name("customer notes").created, 2);
    assert!(!by_name("wishlist items").guard_skipped);
    assert_eq!(by_name("provider notes").created, 1);

    assert_eq!(summary.total_created(), 10 + 18 + 22 + 8 + 3 + 5 + 6
        + by_name("customer permissions").created
        + by_name("employee permissions").created
        + by_name("shipment item permissions").created
        + by_name("user account permissions").created
        + by_name("customer segment permissions").created
        + by_name("customer notes").created
        + by_name("wishlist items").created
        + by_name("provider notes").created);
}
