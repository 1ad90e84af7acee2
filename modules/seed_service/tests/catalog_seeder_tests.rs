//! Integration tests for the catalog lookup seeders

use std::sync::Arc;

use seed_service::contract::CategorySeed;
use seed_service::domain::catalog::CatalogSeeder;
use seed_service::domain::repository::CatalogRepository;

mod common;
use common::MockStore;

fn seeder(store: &Arc<MockStore>) -> CatalogSeeder {
    CatalogSeeder::new(store.clone(), store.clone())
}

#[tokio::test]
async fn brand_seeder_inserts_the_ten_declared_brands() {
    let store = Arc::new(MockStore::new());
    let report = seeder(&store).seed_brands().await.unwrap();

    assert_eq!(report.created, 10);
    assert_eq!(report.skipped, 0);
    assert_eq!(store.brand_count(), 10);

    let slugs = store.brand_slugs();
    assert!(slugs.contains(&"aurelia-home".to_string()));
    assert!(slugs.contains(&"fjell-frost".to_string()));
    assert!(slugs.contains(&"juniper-trading-co".to_string()));
}

#[tokio::test]
async fn brand_seeder_is_idempotent() {
    let store = Arc::new(MockStore::new());
    let catalog = seeder(&store);

    catalog.seed_brands().await.unwrap();
    let second = catalog.seed_brands().await.unwrap();

    assert_eq!(second.created, 0);
    assert_eq!(second.skipped, 10);
    assert_eq!(store.brand_count(), 10);
}

#[tokio::test]
async fn category_seeder_builds_the_nested_tree() {
    let store = Arc::new(MockStore::new());
    let report = seeder(&store).seed_categories().await.unwrap();

    assert_eq!(report.created, 18);
    assert_eq!(store.category_count(), 18);

    let electronics = store.category_by_slug("electronics").unwrap();
    assert_eq!(electronics.parent_id, None);

    let laptops = store.category_by_slug("laptops").unwrap();
    assert_eq!(laptops.parent_id, Some(electronics.id));

    let fragrance = store.category_by_slug("fragrance").unwrap();
    let beauty = store.category_by_slug("beauty-care").unwrap();
    assert_eq!(fragrance.parent_id, Some(beauty.id));
}

#[tokio::test]
async fn category_seeder_backfills_children_of_an_existing_parent() {
    let store = Arc::new(MockStore::new());
    store
        .create_category(
            &CategorySeed {
                name: "Electronics",
                slug: "electronics",
            },
            None,
            0,
        )
        .await
        .unwrap();

    let report = seeder(&store).seed_categories().await.unwrap();

    assert_eq!(report.created, 17);
    assert_eq!(report.skipped, 1);
    assert_eq!(store.category_count(), 18);
}

#[tokio::test]
async fn attribute_seeder_attaches_values_to_their_attribute() {
    let store = Arc::new(MockStore::new());
    let catalog = seeder(&store);

    let report = catalog.seed_product_attributes().await.unwrap();
    assert_eq!(report.created, 22);
    assert_eq!(store.attribute_count(), 3);
    assert_eq!(store.attribute_value_count(), 19);

    let color = store
        .find_attribute_by_code("color")
        .await
        .unwrap()
        .unwrap();
    let values = store.values_of_attribute(color.id);
    assert_eq!(values.len(), 8);
    assert!(values.contains(&"Forest Green".to_string()));

    let second = catalog.seed_product_attributes().await.unwrap();
    assert_eq!(second.created, 0);
    assert_eq!(second.skipped, 22);
}

#[tokio::test]
async fn remaining_lookups_insert_their_declared_counts() {
    let store = Arc::new(MockStore::new());
    let catalog = seeder(&store);

    assert_eq!(catalog.seed_product_tags().await.unwrap().created, 8);
    assert_eq!(catalog.seed_wishlist_priorities().await.unwrap().created, 3);
    assert_eq!(catalog.seed_provider_types().await.unwrap().created, 5);
    assert_eq!(
        catalog.seed_provider_specializations().await.unwrap().created,
        6
    );

    assert_eq!(store.tag_count(), 8);
    assert_eq!(store.priority_count(), 3);
    assert_eq!(store.provider_type_count(), 5);
    assert_eq!(store.specialization_count(), 6);

    // second pass creates nothing
    assert_eq!(catalog.seed_product_tags().await.unwrap().created, 0);
    assert_eq!(catalog.seed_wishlist_priorities().await.unwrap().created, 0);
    assert_eq!(catalog.seed_provider_types().await.unwrap().created, 0);
    assert_eq!(
        catalog.seed_provider_specializations().await.unwrap().created,
        0
    );
}
