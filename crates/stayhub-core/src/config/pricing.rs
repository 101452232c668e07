//! Pricing rate configuration.

use serde::{Deserialize, Serialize};

/// Per-night pricing rates applied by the booking engine.
///
/// Historically these were process-wide constants; they are injected as a
/// configuration value object so a tenant can override them without a
/// rebuild. All amounts are integer currency units. The defaults mirror
/// the long-standing production rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Adults included in a unit's base price.
    #[serde(default = "default_included_adults")]
    pub included_adults: u32,
    /// Children included in a unit's base price.
    #[serde(default = "default_included_children")]
    pub included_children: u32,
    /// Per-night surcharge for each adult beyond the included allowance.
    #[serde(default = "default_extra_adult_rate")]
    pub extra_adult_rate: i64,
    /// Per-night breakfast rate for each adult beyond the included allowance.
    #[serde(default = "default_adult_breakfast_rate")]
    pub adult_breakfast_rate: i64,
    /// Per-night breakfast rate for each child beyond the included allowance.
    #[serde(default = "default_child_breakfast_rate")]
    pub child_breakfast_rate: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            included_adults: default_included_adults(),
            included_children: default_included_children(),
            extra_adult_rate: default_extra_adult_rate(),
            adult_breakfast_rate: default_adult_breakfast_rate(),
            child_breakfast_rate: default_child_breakfast_rate(),
        }
    }
}

fn default_included_adults() -> u32 {
    2
}

fn default_included_children() -> u32 {
    1
}

fn default_extra_adult_rate() -> i64 {
    1500
}

fn default_adult_breakfast_rate() -> i64 {
    350
}

fn default_child_breakfast_rate() -> i64 {
    250
}
