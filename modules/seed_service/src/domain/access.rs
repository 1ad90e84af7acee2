//! Access-control bootstrap seeders
//!
//! Registers the permission vocabulary and grants each role its subset.
//! Permissions, roles and grant rows are all create-if-missing, so the
//! seeders can run any number of times.

use std::sync::Arc;

use crate::contract::SeedError;
use super::report::SeedReport;
use super::repository::AccessRepository;

pub const ROLE_ADMINISTRATOR: &str = "administrator";
pub const ROLE_OPERATIONS_MANAGER: &str = "operations-manager";
pub const ROLE_SUPPORT_AGENT: &str = "support-agent";

/// A role paired with the permission names it receives.
#[derive(Debug, Clone, Copy)]
pub struct RoleGrant {
    pub role: &'static str,
    pub permissions: &'static [&'static str],
}

/// One resource's permission vocabulary plus its per-role grants.
#[derive(Debug, Clone, Copy)]
pub struct PermissionGroup {
    pub permissions: &'static [&'static str],
    pub grants: &'static [RoleGrant],
}

pub const CUSTOMER_PERMISSIONS: PermissionGroup = PermissionGroup {
    permissions: &[
        "customer.list",
        "customer.view",
        "customer.create",
        "customer.update",
        "customer.delete",
        "customer.export",
    ],
    grants: &[
        RoleGrant {
            role: ROLE_ADMINISTRATOR,
            permissions: &[
                "customer.list",
                "customer.view",
                "customer.create",
                "customer.update",
                "customer.delete",
                "customer.export",
            ],
        },
        RoleGrant {
            role: ROLE_OPERATIONS_MANAGER,
            permissions: &[
                "customer.list",
                "customer.view",
                "customer.create",
                "customer.update",
                "customer.export",
            ],
        },
        RoleGrant {
            role: ROLE_SUPPORT_AGENT,
            permissions: &["customer.list", "customer.view"],
        },
    ],
};

pub const EMPLOYEE_PERMISSIONS: PermissionGroup = PermissionGroup {
    permissions: &[
        "employee.list",
        "employee.view",
        "employee.create",
        "employee.update",
        "employee.delete",
        "employee.assign-role",
    ],
    grants: &[
        RoleGrant {
            role: ROLE_ADMINISTRATOR,
            permissions: &[
                "employee.list",
                "employee.view",
                "employee.create",
                "employee.update",
                "employee.delete",
                "employee.assign-role",
            ],
        },
        RoleGrant {
            role: ROLE_OPERATIONS_MANAGER,
            permissions: &["employee.list", "employee.view"],
        },
    ],
};

pub const SHIPMENT_ITEM_PERMISSIONS: PermissionGroup = PermissionGroup {
    permissions: &[
        "shipment-item.list",
        "shipment-item.view",
        "shipment-item.create",
        "shipment-item.update",
        "shipment-item.delete",
        "shipment-item.reconcile",
    ],
    grants: &[
        RoleGrant {
            role: ROLE_ADMINISTRATOR,
            permissions: &[
                "shipment-item.list",
                "shipment-item.view",
                "shipment-item.create",
                "shipment-item.update",
                "shipment-item.delete",
                "shipment-item.reconcile",
            ],
        },
        RoleGrant {
            role: ROLE_OPERATIONS_MANAGER,
            permissions: &[
                "shipment-item.list",
                "shipment-item.view",
                "shipment-item.create",
                "shipment-item.update",
                "shipment-item.reconcile",
            ],
        },
        RoleGrant {
            role: ROLE_SUPPORT_AGENT,
            permissions: &["shipment-item.list", "shipment-item.view"],
        },
    ],
};

pub const USER_ACCOUNT_PERMISSIONS: PermissionGroup = PermissionGroup {
    permissions: &[
        "user.list",
        "user.view",
        "user.create",
        "user.update",
        "user.delete",
        "user.reset-password",
        "user.suspend",
    ],
    grants: &[
        RoleGrant {
            role: ROLE_ADMINISTRATOR,
            permissions: &[
                "user.list",
                "user.view",
                "user.create",
                "user.update",
                "user.delete",
                "user.reset-password",
                "user.suspend",
            ],
        },
        RoleGrant {
            role: ROLE_OPERATIONS_MANAGER,
            permissions: &["user.list", "user.view"],
        },
    ],
};

pub const CUSTOMER_SEGMENT_PERMISSIONS: PermissionGroup = PermissionGroup {
    permissions: &[
        "segment.list",
        "segment.view",
        "segment.create",
        "segment.update",
        "segment.delete",
        "segment.rebuild",
    ],
    grants: &[
        RoleGrant {
            role: ROLE_ADMINISTRATOR,
            permissions: &[
                "segment.list",
                "segment.view",
                "segment.create",
                "segment.update",
                "segment.delete",
                "segment.rebuild",
            ],
        },
        RoleGrant {
            role: ROLE_OPERATIONS_MANAGER,
            permissions: &[
                "segment.list",
                "segment.view",
                "segment.create",
                "segment.update",
                "segment.rebuild",
            ],
        },
        RoleGrant {
            role: ROLE_SUPPORT_AGENT,
            permissions: &["segment.list", "segment.view"],
        },
    ],
};

/// Seeder for permission registration and role grants.
pub struct AccessSeeder {
    repo: Arc<dyn AccessRepository>,
}

impl AccessSeeder {
    pub fn new(repo: Arc<dyn AccessRepository>) -> Self {
        Self { repo }
    }

    pub async fn seed_customer_permissions(&self) -> Result<SeedReport, SeedError> {
        self.apply_group(&CUSTOMER_PERMISSIONS).await
    }

    pub async fn seed_employee_permissions(&self) -> Result<SeedReport, SeedError> {
        self.apply_group(&EMPLOYEE_PERMISSIONS).await
    }

    pub async fn seed_shipment_item_permissions(&self) -> Result<SeedReport, SeedError> {
        self.apply_group(&SHIPMENT_ITEM_PERMISSIONS).await
    }

    pub async fn seed_user_account_permissions(&self) -> Result<SeedReport, SeedError> {
        self.apply_group(&USER_ACCOUNT_PERMISSIONS).await
    }

    pub async fn seed_customer_segment_permissions(&self) -> Result<SeedReport, SeedError> {
        self.apply_group(&CUSTOMER_SEGMENT_PERMISSIONS).await
    }

    /// Register a group's permissions, then reconcile each role grant.
    /// The report counts permissions, roles and grant rows alike.
    async fn apply_group(&self, group: &PermissionGroup) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();

        for name in group.permissions {
            let existing = self
                .repo
                .find_permission_by_name(name)
                .await
                .map_err(SeedError::storage)?;
            if existing.is_some() {
                report.record_skipped();
            } else {
                self.repo
                    .create_permission(name)
                    .await
                    .map_err(SeedError::storage)?;
                report.record_created();
            }
        }

        for grant in group.grants {
            let role = match self
                .repo
                .find_role_by_name(grant.role)
                .await
                .map_err(SeedError::storage)?
            {
                Some(role) => {
                    report.record_skipped();
                    role
                }
                None => {
                    report.record_created();
                    self.repo
                        .create_role(grant.role)
                        .await
                        .map_err(SeedError::storage)?
                }
            };

            for name in grant.permissions {
                let permission = self
                    .repo
                    .find_permission_by_name(name)
                    .await
                    .map_err(SeedError::storage)?
                    .ok_or_else(|| SeedError::MissingPermission {
                        name: (*name).to_string(),
                    })?;

                if self
                    .repo
                    .has_grant(role.id, permission.id)
                    .await
                    .map_err(SeedError::storage)?
                {
                    report.record_skipped();
                } else {
                    self.repo
                        .create_grant(role.id, permission.id)
                        .await
                        .map_err(SeedError::storage)?;
                    report.record_created();
                }
            }
        }

        Ok(report)
    }
}

/// All permission groups in seeding order.
pub fn permission_groups() -> [&'static PermissionGroup; 5] {
    [
        &CUSTOMER_PERMISSIONS,
        &EMPLOYEE_PERMISSIONS,
        &SHIPMENT_ITEM_PERMISSIONS,
        &USER_ACCOUNT_PERMISSIONS,
        &CUSTOMER_SEGMENT_PERMISSIONS,
    ]
}
