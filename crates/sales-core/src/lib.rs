//! # sales-core: Seller Performance Analytics
//!
//! Turns raw sales data into a ranked seller report: revenue, profit, number
//! of sales, best-selling products and a rank-based bonus per seller.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Sales Analytics Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              sales-report (CLI, apps/sales-report)              │   │
//! │  │     read dataset.json ──► analyze ──► print report JSON         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sales-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   index   │─►│ aggregate │─►│   rank    │─►│  report   │  │   │
//! │  │   │  sellers  │  │  revenue  │  │  sort     │  │  rounding │  │   │
//! │  │   │  products │  │  profit   │  │  bonus    │  │  rows     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   policy (revenue, bonus) • validation • config • money        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE BETWEEN CALLS • SINGLE PASS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Input, working and output types
//! - [`policy`] - Revenue and bonus policies, analysis options
//! - [`validation`] - Structural input checks
//! - [`index`] - Seller and product lookup tables
//! - [`aggregate`] - The pass over purchase records
//! - [`rank`] - Profit ranking, bonuses, top products
//! - [`report`] - Entry point and report rows
//! - [`money`] - Fixed-precision rounding
//! - [`config`] - Report tunables
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use sales_core::{analyze_sales_data, parse_sales_data, AnalysisOptions};
//!
//! let data = parse_sales_data(r#"{
//!     "sellers": [
//!         {"id": "s1", "first_name": "Anna", "last_name": "Smirnova"},
//!         {"id": "s2", "first_name": "Boris", "last_name": "Orlov"}
//!     ],
//!     "products": [{"sku": "SKU_001", "purchase_price": 50}],
//!     "purchase_records": [
//!         {"seller_id": "s2", "total_amount": 200,
//!          "items": [{"sku": "SKU_001", "quantity": 2, "sale_price": 100, "discount": 0}]},
//!         {"seller_id": "s1", "total_amount": 100,
//!          "items": [{"sku": "SKU_001", "quantity": 1, "sale_price": 100, "discount": 0}]}
//!     ]
//! }"#).unwrap();
//!
//! let report = analyze_sales_data(&data, &AnalysisOptions::standard()).unwrap();
//!
//! assert_eq!(report[0].seller_id, "s2");
//! assert_eq!(report[0].profit, 100.0);
//! assert_eq!(report[0].bonus, 15.0);
//! assert_eq!(report[1].bonus, 5.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod config;
pub mod error;
pub mod index;
pub mod money;
pub mod policy;
pub mod rank;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{ConfigError, ReportConfig};
pub use error::{CoreError, CoreResult, ValidationError};
pub use policy::{
    calculate_bonus_by_profit, calculate_simple_revenue, AnalysisOptions, BonusPolicy,
    ProfitRankBonus, RevenuePolicy, SimpleRevenue,
};
pub use report::analyze_sales_data;
pub use types::*;
pub use validation::parse_sales_data;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Best-selling products kept per seller.
pub const TOP_PRODUCTS_LIMIT: usize = 10;
