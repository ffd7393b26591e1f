//! # Domain Types
//!
//! Input, working, and output types for the seller performance report.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT (immutable)          WORKING (mutable)       OUTPUT              │
//! │  ─────────────────          ─────────────────       ──────              │
//! │  ┌───────────────┐                                                      │
//! │  │ Seller        │──────┐                                               │
//! │  └───────────────┘      │   ┌───────────────┐      ┌───────────────┐    │
//! │  ┌───────────────┐      ├──►│ SellerStats   │─────►│ ReportRow     │    │
//! │  │ Product       │──────┤   │  revenue      │      │  (rounded)    │    │
//! │  └───────────────┘      │   │  profit       │      │  TopProduct[] │    │
//! │  ┌───────────────┐      │   │  sales_count  │      └───────────────┘    │
//! │  │ PurchaseRecord│──────┘   │  products_sold│                           │
//! │  │  PurchaseItem │          └───────────────┘                           │
//! │  └───────────────┘                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Money Representation
//! Amounts are `f64` here. The report is defined over floating-point
//! accumulation and only rounds at the output boundary (see [`crate::money`]).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Input: Seller
// =============================================================================

/// A seller whose sales are being analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Business identifier referenced by purchase records.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// Name shown in the report: `"{first_name} {last_name}"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Input: Product
// =============================================================================

/// A product card. Only the fields the report needs are modelled;
/// anything else in the source data is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stock Keeping Unit - unique key referenced by purchase items.
    pub sku: String,

    /// Unit cost paid to the supplier.
    pub purchase_price: f64,
}

impl Product {
    /// Cost of `quantity` units at the purchase price.
    #[inline]
    pub fn cost_of(&self, quantity: f64) -> f64 {
        self.purchase_price * quantity
    }
}

// =============================================================================
// Input: Purchase Record
// =============================================================================

/// A line item on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItem {
    pub sku: String,

    /// Units sold on this line. Fractional amounts (weighed goods) are
    /// accepted as-is.
    pub quantity: f64,

    /// Unit price charged before discount.
    pub sale_price: f64,

    /// Discount in percent, 0-100.
    pub discount: f64,
}

/// A receipt attributed to one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Receipt number, when the source data carries one.
    /// Only used for log and error context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,

    pub seller_id: String,

    /// Receipt total as recorded at the till.
    pub total_amount: f64,

    pub items: Vec<PurchaseItem>,
}

// =============================================================================
// Input: Dataset
// =============================================================================

/// The three input collections, as delivered by the data loader.
///
/// Missing collections deserialize to empty vectors so that the validator,
/// not serde, decides what counts as invalid input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

// =============================================================================
// Working: Seller Stats
// =============================================================================

/// Per-seller accumulator.
///
/// ## Lifecycle
/// ```text
/// Indexer ──► zeroed ──► Aggregator ──► totals ──► Ranker ──► bonus + top
///                         (mutated)                 (finalized once)
/// ```
///
/// Bonus policies receive a reference to this type, so the fields are public.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellerStats {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: usize,
    /// SKU → cumulative quantity sold.
    pub products_sold: HashMap<String, f64>,
    /// Set by the ranker.
    pub bonus: f64,
    /// Set by the ranker.
    pub top_products: Vec<TopProduct>,
}

impl SellerStats {
    /// Creates a zeroed accumulator for `seller`.
    pub fn new(seller: &Seller) -> Self {
        SellerStats {
            id: seller.id.clone(),
            name: seller.display_name(),
            ..Default::default()
        }
    }

    /// Adds `quantity` units of `sku`, creating the entry at zero if absent.
    pub fn record_quantity(&mut self, sku: &str, quantity: f64) {
        *self.products_sold.entry(sku.to_string()).or_insert(0.0) += quantity;
    }
}

// =============================================================================
// Output: Top Product
// =============================================================================

/// One entry of a seller's best-selling products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: f64,
}

// =============================================================================
// Output: Report Row
// =============================================================================

/// One line of the seller performance report.
///
/// Monetary fields are already rounded to the report precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportRow {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    #[ts(type = "number")]
    pub sales_count: usize,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
