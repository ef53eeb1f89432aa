//! Statutory rate-table configuration.
//!
//! This module loads the externally-owned statutory configuration the engine
//! consumes: provident-fund and state-insurance rules, professional-tax
//! brackets, and income-tax slabs, keyed by effective date so historical
//! periods recompute with the rates that applied at the time.

mod loader;
mod types;

pub use loader::StatutoryConfigLoader;
pub use types::{
    EsiRules, IncomeTaxSlab, PfRules, PolicyMetadata, ProfessionalTaxBracket, StatutoryConfig,
    StatutoryRates,
};
