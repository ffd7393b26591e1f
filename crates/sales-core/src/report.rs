//! # Seller Report
//!
//! Entry point that wires the phases together, and the final shaping of
//! ranked accumulators into report rows.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     analyze_sales_data()                                │
//! │                                                                         │
//! │  SalesData ─┬─► validate_sales_data ──► InvalidInput                    │
//! │  Options  ──┼─► options.policies()  ──► MissingPolicy                   │
//! │             └─► config.validated()  ──► InvalidConfig                   │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │              SellerIndex::build + index_products                        │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │              accumulate ──────────────► UnknownSeller / UnknownProduct  │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │              rank_sellers                                               │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │              to_report_row (rounding)  ──► Vec<ReportRow>               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing survives between calls: every index and accumulator is built
//! inside the call and dropped before it returns.

use tracing::info;

use crate::aggregate::accumulate;
use crate::error::CoreResult;
use crate::index::{index_products, SellerIndex};
use crate::money::round_to;
use crate::policy::AnalysisOptions;
use crate::rank::rank_sellers;
use crate::types::{ReportRow, SalesData, SellerStats};
use crate::validation::validate_sales_data;

/// Builds the seller performance report, most profitable seller first.
///
/// ## Errors
/// - `InvalidInput` if any collection in `data` is empty
/// - `MissingPolicy` if either policy in `options` is absent
/// - `InvalidConfig` if `options.config` is out of range (builder-made
///   configs are checked here, env-loaded ones already were)
/// - `UnknownSeller` / `UnknownProduct` if a record or item points at
///   something that isn't in `data`
///
/// Input is checked before policies, policies before config, and all of it
/// before any aggregation.
///
/// ## Example
/// ```rust
/// use sales_core::{analyze_sales_data, AnalysisOptions, SalesData};
///
/// let data: SalesData = serde_json::from_str(r#"{
///     "sellers": [{"id": "s1", "first_name": "Ivan", "last_name": "Ivanov"}],
///     "products": [{"sku": "SKU_001", "purchase_price": 60}],
///     "purchase_records": [{
///         "seller_id": "s1",
///         "total_amount": 270,
///         "items": [{"sku": "SKU_001", "quantity": 3, "sale_price": 100, "discount": 10}]
///     }]
/// }"#).unwrap();
///
/// let report = analyze_sales_data(&data, &AnalysisOptions::standard()).unwrap();
/// assert_eq!(report[0].name, "Ivan Ivanov");
/// assert_eq!(report[0].profit, 90.0);
/// assert_eq!(report[0].bonus, 13.5);
/// ```
pub fn analyze_sales_data(data: &SalesData, options: &AnalysisOptions) -> CoreResult<Vec<ReportRow>> {
    validate_sales_data(data)?;
    let (revenue_policy, bonus_policy) = options.policies()?;
    let config = options.config.validated()?;

    let mut sellers = SellerIndex::build(&data.sellers);
    let products = index_products(&data.products);

    accumulate(&data.purchase_records, &mut sellers, &products, revenue_policy)?;

    let ranked = rank_sellers(
        sellers.into_stats(),
        bonus_policy,
        config.top_products_limit,
    );

    info!(
        sellers = ranked.len(),
        products = products.len(),
        records = data.purchase_records.len(),
        "seller report built"
    );

    let precision = config.precision;
    Ok(ranked
        .into_iter()
        .map(|seller| to_report_row(seller, precision))
        .collect())
}

/// Final shape of one seller: amounts rounded, everything else as is.
pub fn to_report_row(seller: SellerStats, precision: u32) -> ReportRow {
    ReportRow {
        seller_id: seller.id,
        name: seller.name,
        revenue: round_to(seller.revenue, precision),
        profit: round_to(seller.profit, precision),
        sales_count: seller.sales_count,
        top_products: seller.top_products,
        bonus: round_to(seller.bonus, precision),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
