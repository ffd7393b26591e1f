//! # Report Configuration
//!
//! Tunables for report shaping. Both have defaults that reproduce the
//! standard report, so most callers never touch this.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Explicit values (builder / CLI flags)       (highest priority)     │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     SALES_REPORT_TOP_PRODUCTS=10                                       │
//! │     SALES_REPORT_PRECISION=2                                           │
//! │                                                                         │
//! │  3. Default Values                               (lowest priority)     │
//! │     top 10 products, 2 fractional digits                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::REPORT_PRECISION;
use crate::TOP_PRODUCTS_LIMIT;

/// Environment variable overriding [`ReportConfig::top_products_limit`].
pub const ENV_TOP_PRODUCTS: &str = "SALES_REPORT_TOP_PRODUCTS";

/// Environment variable overriding [`ReportConfig::precision`].
pub const ENV_PRECISION: &str = "SALES_REPORT_PRECISION";

/// Largest accepted precision. Anything finer is noise on an f64 amount.
pub const MAX_PRECISION: u32 = 10;

// =============================================================================
// Report Config
// =============================================================================

/// Output shaping options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// How many best-selling products to keep per seller.
    pub top_products_limit: usize,

    /// Fractional digits kept in revenue, profit and bonus.
    pub precision: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            top_products_limit: TOP_PRODUCTS_LIMIT,
            precision: REPORT_PRECISION,
        }
    }
}

impl ReportConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// `lookup` returns the raw value for a variable name, or `None` when
    /// it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ReportConfig::default();

        let top_products_limit = match lookup(ENV_TOP_PRODUCTS) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_TOP_PRODUCTS.to_string()))?,
            None => defaults.top_products_limit,
        };

        let precision = match lookup(ENV_PRECISION) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_PRECISION.to_string()))?,
            None => defaults.precision,
        };

        ReportConfig {
            top_products_limit,
            precision,
        }
        .validated()
    }

    /// Overrides the top-products limit.
    pub fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }

    /// Overrides the precision.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Checks value ranges.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::OutOfRange {
                name: ENV_PRECISION.to_string(),
                max: MAX_PRECISION as usize,
            });
        }

        Ok(self)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("{name} must be at most {max}")]
    OutOfRange { name: String, max: usize },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.top_products_limit, 10);
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_unset_variables_use_defaults() {
        let config = ReportConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_variables_override_defaults() {
        let config = ReportConfig::from_lookup(lookup_from(&[
            (ENV_TOP_PRODUCTS, " 5 "),
            (ENV_PRECISION, "3"),
        ]))
        .unwrap();
        assert_eq!(config.top_products_limit, 5);
        assert_eq!(config.precision, 3);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = ReportConfig::from_lookup(lookup_from(&[(ENV_TOP_PRODUCTS, "ten")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref name) if name == ENV_TOP_PRODUCTS));

        let err = ReportConfig::from_lookup(lookup_from(&[(ENV_PRECISION, "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));

        let err = ReportConfig::from_lookup(lookup_from(&[(ENV_PRECISION, "11")])).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { max: 10, .. }));
    }

    #[test]
    fn test_builder_and_serde_defaults() {
        let config = ReportConfig::default().with_top_products_limit(3).with_precision(0);
        assert_eq!(config.top_products_limit, 3);
        assert_eq!(config.precision, 0);

        let parsed: ReportConfig = serde_json::from_str(r#"{"top_products_limit": 4}"#).unwrap();
        assert_eq!(parsed.top_products_limit, 4);
        assert_eq!(parsed.precision, 2);
    }
}
