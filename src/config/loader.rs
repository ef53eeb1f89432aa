//! Configuration loading functionality.
//!
//! This module provides the [`StatutoryConfigLoader`] type for loading
//! statutory rate tables from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PolicyMetadata, StatutoryConfig, StatutoryRates};

/// Loads and provides access to statutory configuration.
///
/// The loader reads YAML configuration files from a directory and answers
/// effective-dated rate lookups so historical periods recompute with the
/// rates that applied at the time.
///
/// # Directory Structure
///
/// ```text
/// config/statutory/
/// ├── policy.yaml          # Policy metadata
/// └── rates/
///     ├── 2024-04-01.yaml  # Rates effective from this date
///     └── 2025-04-01.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::StatutoryConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = StatutoryConfigLoader::load("./config/statutory").unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let rates = loader.rates_for(date).unwrap();
/// println!("PF ceiling: {}", rates.provident_fund.wage_ceiling);
/// ```
#[derive(Debug, Clone)]
pub struct StatutoryConfigLoader {
    config: StatutoryConfig,
}

impl StatutoryConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/statutory")
    ///
    /// # Returns
    ///
    /// Returns a loader instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A professional-tax or income-tax table is not monotonically ordered
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let metadata = Self::load_yaml::<PolicyMetadata>(&policy_path)?;

        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        for table in &rates {
            Self::validate_table(table)?;
        }

        Ok(Self {
            config: StatutoryConfig::new(metadata, rates),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> PayrollResult<Vec<StatutoryRates>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(PayrollError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| PayrollError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| PayrollError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<StatutoryRates>(&path)?;
                rates.push(table);
            }
        }

        if rates.is_empty() {
            return Err(PayrollError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Rejects bracket and slab tables whose bounds are not strictly
    /// ascending or whose open-ended entry is not last.
    fn validate_table(table: &StatutoryRates) -> PayrollResult<()> {
        let path = format!("rates effective {}", table.effective_date);

        let mut previous: Option<Decimal> = None;
        for (index, bracket) in table.professional_tax.iter().enumerate() {
            match bracket.gross_up_to {
                Some(bound) => {
                    if previous.is_some_and(|p| bound <= p) {
                        return Err(PayrollError::ConfigParseError {
                            path: path.clone(),
                            message: "professional-tax brackets must be strictly ascending"
                                .to_string(),
                        });
                    }
                    previous = Some(bound);
                }
                None => {
                    if index != table.professional_tax.len() - 1 {
                        return Err(PayrollError::ConfigParseError {
                            path: path.clone(),
                            message: "open-ended professional-tax bracket must be last"
                                .to_string(),
                        });
                    }
                }
            }
        }

        let mut previous: Option<Decimal> = None;
        for (index, slab) in table.income_tax.iter().enumerate() {
            match slab.annual_up_to {
                Some(bound) => {
                    if previous.is_some_and(|p| bound <= p) {
                        return Err(PayrollError::ConfigParseError {
                            path: path.clone(),
                            message: "income-tax slabs must be strictly ascending".to_string(),
                        });
                    }
                    previous = Some(bound);
                }
                None => {
                    if index != table.income_tax.len() - 1 {
                        return Err(PayrollError::ConfigParseError {
                            path: path.clone(),
                            message: "open-ended income-tax slab must be last".to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Returns the underlying statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        self.config.policy()
    }

    /// Returns the rate table effective on the given date.
    ///
    /// The most recent table with an effective date on or before `date` wins.
    /// Historical periods therefore recompute with the rates that applied at
    /// the time.
    pub fn rates_for(&self, date: NaiveDate) -> PayrollResult<&StatutoryRates> {
        self.config
            .rates()
            .iter()
            .rev()
            .find(|table| table.effective_date <= date)
            .ok_or(PayrollError::RateNotFound { date })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/statutory"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = StatutoryConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().code, "IN-STAT");
    }

    #[test]
    fn test_rates_for_recent_date_uses_latest_table() {
        let loader = StatutoryConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let rates = loader.rates_for(date).unwrap();

        assert_eq!(
            rates.effective_date,
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
        );
        assert_eq!(rates.provident_fund.wage_ceiling, dec("15000"));
        assert_eq!(rates.provident_fund.employee_rate, dec("0.12"));
    }

    #[test]
    fn test_rates_for_historical_date_uses_older_table() {
        let loader = StatutoryConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let rates = loader.rates_for(date).unwrap();

        assert_eq!(
            rates.effective_date,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
    }

    #[test]
    fn test_rates_for_date_before_any_table_fails() {
        let loader = StatutoryConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        match loader.rates_for(date) {
            Err(PayrollError::RateNotFound { date: d }) => assert_eq!(d, date),
            other => panic!("Expected RateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = StatutoryConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_esi_rates_loaded() {
        let loader = StatutoryConfigLoader::load(config_path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let rates = loader.rates_for(date).unwrap();

        assert_eq!(rates.state_insurance.wage_ceiling, dec("21000"));
        assert_eq!(rates.state_insurance.employee_rate, dec("0.0075"));
        assert_eq!(rates.state_insurance.employer_rate, dec("0.0325"));
    }

    #[test]
    fn test_professional_tax_lowest_bracket_is_zero() {
        let loader = StatutoryConfigLoader::load(config_path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let rates = loader.rates_for(date).unwrap();

        let first = rates.professional_tax.first().unwrap();
        assert_eq!(first.tax, Decimal::ZERO);
    }

    #[test]
    fn test_professional_tax_last_bracket_open_ended() {
        let loader = StatutoryConfigLoader::load(config_path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let rates = loader.rates_for(date).unwrap();

        assert!(rates.professional_tax.last().unwrap().gross_up_to.is_none());
    }
}
