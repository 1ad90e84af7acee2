//! SeaORM entities for database tables, grouped by concern

pub mod access;
pub mod catalog;
pub mod crm;
