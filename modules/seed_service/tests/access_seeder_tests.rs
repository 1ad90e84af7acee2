//! Integration tests for the access-control bootstrap

use std::sync::Arc;

use seed_service::domain::access::{
    AccessSeeder, ROLE_ADMINISTRATOR, ROLE_OPERATIONS_MANAGER, ROLE_SUPPORT_AGENT,
};

mod common;
use common::MockStore;

async fn seed_all(seeder: &AccessSeeder) -> usize {
    let mut created = 0;
    created += seeder.seed_customer_permissions().await.unwrap().created;
    created += seeder.seed_employee_permissions().await.unwrap().created;
    created += seeder.seed_shipment_item_permissions().await.unwrap().created;
    created += seeder.seed_user_account_permissions().await.unwrap().created;
    created += seeder
        .seed_customer_segment_permissions()
        .await
        .unwrap()
        .created;
    created
}

#[tokio::test]
async fn customer_group_registers_permissions_roles_and_grants() {
    let store = Arc::new(MockStore::new());
    let seeder = AccessSeeder::new(store.clone());

    seeder.seed_customer_permissions().await.unwrap();

    let mut names = store.permission_names();
    names.sort();
    assert_eq!(
        names,
        vec![
            "customer.create",
            "customer.delete",
            "customer.export",
            "customer.list",
            "customer.update",
            "customer.view",
        ]
    );

    let mut roles = store.role_names();
    roles.sort();
    assert_eq!(
        roles,
        vec![ROLE_ADMINISTRATOR, ROLE_OPERATIONS_MANAGER, ROLE_SUPPORT_AGENT]
    );
}

#[tokio::test]
async fn grant_sets_match_the_declared_subsets_exactly() {
    let store = Arc::new(MockStore::new());
    let seeder = AccessSeeder::new(store.clone());

    seeder.seed_customer_permissions().await.unwrap();

    assert_eq!(
        store.role_permission_names(ROLE_ADMINISTRATOR),
        vec![
            "customer.create",
            "customer.delete",
            "customer.export",
            "customer.list",
            "customer.update",
            "customer.view",
        ]
    );
    assert_eq!(
        store.role_permission_names(ROLE_OPERATIONS_MANAGER),
        vec![
            "customer.create",
            "customer.export",
            "customer.list",
            "customer.update",
            "customer.view",
        ]
    );
    assert_eq!(
        store.role_permission_names(ROLE_SUPPORT_AGENT),
        vec!["customer.list", "customer.view"]
    );
}

#[tokio::test]
async fn employee_group_only_touches_its_declared_roles() {
    let store = Arc::new(MockStore::new());
    let seeder = AccessSeeder::new(store.clone());

    seeder.seed_employee_permissions().await.unwrap();

    let mut roles = store.role_names();
    roles.sort();
    // no support-agent grant in the employee group, so the role is not created
    assert_eq!(roles, vec![ROLE_ADMINISTRATOR, ROLE_OPERATIONS_MANAGER]);
    assert_eq!(
        store.role_permission_names(ROLE_OPERATIONS_MANAGER),
        vec!["employee.list", "employee.view"]
    );
}

#[tokio::test]
async fn full_bootstrap_registers_thirty_one_permissions_once() {
    let store = Arc::new(MockStore::new());
    let seeder = AccessSeeder::new(store.clone());

    seed_all(&seeder).await;
    assert_eq!(store.permission_names().len(), 31);
    assert_eq!(store.role_names().len(), 3);
    let grants_after_first = store.grant_count();

    let created_on_second_pass = seed_all(&seeder).await;
    assert_eq!(created_on_second_pass, 0);
    assert_eq!(store.permission_names().len(), 31);
    assert_eq!(store.grant_count(), grants_after_first);
}

#[tokio::test]
async fn administrator_holds_every_registered_permission() {
    let store = Arc::new(MockStore::new());
    let seeder = AccessSeeder::new(store.clone());

    seed_all(&seeder).await;

    let mut all = store.permission_names();
    all.sort();
    assert_eq!(store.role_permission_names(ROLE_ADMINISTRATOR), all);
}
