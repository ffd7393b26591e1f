//! # Aggregator
//!
//! The single pass over purchase records.
//!
//! ## Per-Record Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PurchaseRecord                                                         │
//! │      │                                                                  │
//! │      ├──► seller = sellers[record.seller_id]     (UnknownSeller on miss)│
//! │      ├──► seller.sales_count += 1                                       │
//! │      ├──► seller.revenue     += record.total_amount                     │
//! │      │                                                                  │
//! │      └──► for item in record.items                                      │
//! │               product = products[item.sku]       (UnknownProduct)       │
//! │               cost    = purchase_price × quantity                       │
//! │               revenue = RevenuePolicy(item, product)                    │
//! │               seller.profit += revenue − cost                           │
//! │               seller.products_sold[sku] += quantity                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Seller revenue is the receipt total; the revenue policy only feeds profit.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::index::SellerIndex;
use crate::policy::RevenuePolicy;
use crate::types::{Product, PurchaseRecord};

/// Folds every purchase record into the seller accumulators, in input order.
///
/// Stops at the first unresolved seller id or SKU. The accumulators are
/// left partially updated in that case; callers discard them with the error.
pub fn accumulate(
    records: &[PurchaseRecord],
    sellers: &mut SellerIndex,
    products: &HashMap<&str, &Product>,
    revenue_policy: &dyn RevenuePolicy,
) -> CoreResult<()> {
    let mut items_seen = 0usize;

    for (record_index, record) in records.iter().enumerate() {
        let seller = sellers.get_mut(&record.seller_id).ok_or_else(|| {
            warn!(
                seller_id = %record.seller_id,
                record_index,
                "purchase record references unknown seller"
            );
            CoreError::UnknownSeller {
                seller_id: record.seller_id.clone(),
                record_index,
                receipt_id: record.receipt_id.clone(),
            }
        })?;

        seller.sales_count += 1;
        seller.revenue += record.total_amount;

        for item in &record.items {
            let product = products.get(item.sku.as_str()).ok_or_else(|| {
                warn!(
                    sku = %item.sku,
                    seller_id = %record.seller_id,
                    record_index,
                    "purchase item references unknown product"
                );
                CoreError::UnknownProduct {
                    sku: item.sku.clone(),
                    record_index,
                    receipt_id: record.receipt_id.clone(),
                }
            })?;

            let cost = product.cost_of(item.quantity);
            let revenue = revenue_policy.calculate(item, product);
            seller.profit += revenue - cost;
            seller.record_quantity(&item.sku, item.quantity);
        }

        items_seen += record.items.len();
    }

    debug!(records = records.len(), items = items_seen, "aggregation complete");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
