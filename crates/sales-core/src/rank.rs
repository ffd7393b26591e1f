//! # Ranker
//!
//! Orders sellers by profit and finalizes each accumulator.
//!
//! ## Steps
//! ```text
//! SellerStats[] (seller-list order)
//!      │
//!      ▼
//! stable sort by profit, descending
//!      │
//!      ▼
//! for (index, seller):
//!     seller.bonus        = BonusPolicy(index, total, seller)
//!     seller.top_products = products_sold sorted by quantity desc, first N
//! ```
//!
//! Sellers with equal profit keep their seller-list order. That falls out of
//! the stable sort and callers should not rely on it.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::policy::BonusPolicy;
use crate::types::{SellerStats, TopProduct};

/// Sorts `stats` by profit (highest first) and fills in bonus and top
/// products for every seller.
pub fn rank_sellers(
    mut stats: Vec<SellerStats>,
    bonus_policy: &dyn BonusPolicy,
    top_products_limit: usize,
) -> Vec<SellerStats> {
    stats.sort_by(|a, b| compare_profit_desc(a.profit, b.profit));

    let total = stats.len();
    for (index, seller) in stats.iter_mut().enumerate() {
        seller.bonus = bonus_policy.calculate(index, total, seller);
        seller.top_products = top_products(&seller.products_sold, top_products_limit);
    }

    debug!(sellers = total, "ranking complete");
    stats
}

/// Highest profit first. NaN profits sort last.
fn compare_profit_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    }
}

/// The `limit` best-selling SKUs, highest quantity first.
///
/// Equal quantities come out in SKU order so repeated runs agree; this is not
/// part of the contract.
pub fn top_products(products_sold: &HashMap<String, f64>, limit: usize) -> Vec<TopProduct> {
    let mut top: Vec<TopProduct> = products_sold
        .iter()
        .map(|(sku, &quantity)| TopProduct {
            sku: sku.clone(),
            quantity,
        })
        .collect();

    top.sort_by(|a, b| {
        b.quantity
            .total_cmp(&a.quantity)
            .then_with(|| a.sku.cmp(&b.sku))
    });
    top.truncate(limit);
    top
}

// =============================================================================
// Unit Tests
// =============================================================================
