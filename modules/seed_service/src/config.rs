//! Configuration for the seed service module

use serde::Deserialize;

/// Seed service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Sample notes inserted per customer
    #[serde(default = "default_notes_per_customer")]
    pub notes_per_customer: u32,

    /// Minimum sample wishlist items per customer
    #[serde(default = "default_wishlist_min")]
    pub wishlist_min_per_customer: u32,

    /// Maximum sample wishlist items per customer
    #[serde(default = "default_wishlist_max")]
    pub wishlist_max_per_customer: u32,

    /// Skip the guarded sample-data steps entirely
    #[serde(default)]
    pub skip_sample_data: bool,

    /// Fixed RNG seed for reproducible sample data
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_per_customer: default_notes_per_customer(),
            wishlist_min_per_customer: default_wishlist_min(),
            wishlist_max_per_customer: default_wishlist_max(),
            skip_sample_data: false,
            rng_seed: None,
        }
    }
}

fn default_notes_per_customer() -> u32 {
    2
}

fn default_wishlist_min() -> u32 {
    1
}

fn default_wishlist_max() -> u32 {
    4
}
