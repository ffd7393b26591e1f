//! # Policies
//!
//! The two calculations callers may swap out: how much revenue a line item
//! earns, and how much bonus a seller gets for their rank.
//!
//! ## Injection Points
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Aggregator ──► RevenuePolicy::calculate(item, product) ──► f64       │
//! │                                                                         │
//! │   Ranker     ──► BonusPolicy::calculate(index, total, seller) ──► f64  │
//! │                                                                         │
//! │   Both are required. The core never falls back to a default; callers   │
//! │   that want the standard rules ask for them with                       │
//! │   AnalysisOptions::standard().                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any `Fn` with the right signature is a policy:
//!
//! ```rust
//! use sales_core::policy::{AnalysisOptions, calculate_bonus_by_profit};
//!
//! let options = AnalysisOptions::default()
//!     .with_revenue(|item: &sales_core::PurchaseItem, _: &sales_core::Product| {
//!         item.sale_price * item.quantity as f64
//!     })
//!     .with_bonus(calculate_bonus_by_profit);
//! assert!(options.calculate_revenue.is_some());
//! ```

use std::fmt;

use crate::config::ReportConfig;
use crate::error::{CoreError, CoreResult};
use crate::types::{Product, PurchaseItem, SellerStats};

// =============================================================================
// Policy Traits
// =============================================================================

/// Revenue earned by one purchase item.
pub trait RevenuePolicy {
    fn calculate(&self, item: &PurchaseItem, product: &Product) -> f64;
}

impl<F> RevenuePolicy for F
where
    F: Fn(&PurchaseItem, &Product) -> f64,
{
    fn calculate(&self, item: &PurchaseItem, product: &Product) -> f64 {
        self(item, product)
    }
}

/// Bonus for the seller at rank `index` (0 = most profitable) of `total`.
pub trait BonusPolicy {
    fn calculate(&self, index: usize, total: usize, seller: &SellerStats) -> f64;
}

impl<F> BonusPolicy for F
where
    F: Fn(usize, usize, &SellerStats) -> f64,
{
    fn calculate(&self, index: usize, total: usize, seller: &SellerStats) -> f64 {
        self(index, total, seller)
    }
}

// =============================================================================
// Standard Revenue
// =============================================================================

/// `sale_price × quantity × (1 − discount / 100)`.
///
/// The product card is not consulted.
///
/// ## Example
/// ```rust
/// use sales_core::policy::calculate_simple_revenue;
/// use sales_core::{Product, PurchaseItem};
///
/// let item = PurchaseItem {
///     sku: "SKU_001".to_string(),
///     quantity: 3.0,
///     sale_price: 100.0,
///     discount: 10.0,
/// };
/// let product = Product { sku: "SKU_001".to_string(), purchase_price: 60.0 };
/// assert_eq!(calculate_simple_revenue(&item, &product), 270.0);
/// ```
pub fn calculate_simple_revenue(item: &PurchaseItem, _product: &Product) -> f64 {
    item.sale_price * item.quantity * (1.0 - item.discount / 100.0)
}

/// [`calculate_simple_revenue`] as a named policy type.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenuePolicy for SimpleRevenue {
    fn calculate(&self, item: &PurchaseItem, product: &Product) -> f64 {
        calculate_simple_revenue(item, product)
    }
}

// =============================================================================
// Standard Bonus
// =============================================================================

/// Bonus share of profit for the top seller.
pub const FIRST_PLACE_RATE: f64 = 0.15;

/// Bonus share of profit for second and third place.
pub const PODIUM_RATE: f64 = 0.10;

/// Bonus share of profit for everyone else except last place.
pub const BASE_RATE: f64 = 0.05;

/// Rank-based bonus.
///
/// ## Tiers
/// ```text
/// ┌──────────────────────┬─────────────────┐
/// │ rank (index)         │ bonus           │
/// ├──────────────────────┼─────────────────┤
/// │ 0                    │ profit × 0.15   │
/// │ 1, 2                 │ profit × 0.10   │
/// │ total − 1            │ 0               │
/// │ anything else        │ profit × 0.05   │
/// └──────────────────────┴─────────────────┘
/// ```
///
/// Rows are checked top to bottom, so with fewer than four sellers the
/// earlier tiers win: a lone seller gets 15%, and with three sellers the
/// last one still gets 10%.
pub fn calculate_bonus_by_profit(index: usize, total: usize, seller: &SellerStats) -> f64 {
    if index == 0 {
        seller.profit * FIRST_PLACE_RATE
    } else if index == 1 || index == 2 {
        seller.profit * PODIUM_RATE
    } else if index + 1 == total {
        0.0
    } else {
        seller.profit * BASE_RATE
    }
}

/// [`calculate_bonus_by_profit`] as a named policy type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitRankBonus;

impl BonusPolicy for ProfitRankBonus {
    fn calculate(&self, index: usize, total: usize, seller: &SellerStats) -> f64 {
        calculate_bonus_by_profit(index, total, seller)
    }
}

// =============================================================================
// Analysis Options
// =============================================================================

/// Everything `analyze_sales_data` needs besides the data itself.
#[derive(Default)]
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Box<dyn RevenuePolicy>>,
    pub calculate_bonus: Option<Box<dyn BonusPolicy>>,
    pub config: ReportConfig,
}

impl AnalysisOptions {
    /// The standard rules: [`SimpleRevenue`] and [`ProfitRankBonus`].
    pub fn standard() -> Self {
        AnalysisOptions::default()
            .with_revenue(SimpleRevenue)
            .with_bonus(ProfitRankBonus)
    }

    pub fn with_revenue<P>(mut self, policy: P) -> Self
    where
        P: RevenuePolicy + 'static,
    {
        self.calculate_revenue = Some(Box::new(policy));
        self
    }

    pub fn with_bonus<P>(mut self, policy: P) -> Self
    where
        P: BonusPolicy + 'static,
    {
        self.calculate_bonus = Some(Box::new(policy));
        self
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Both policies, or `MissingPolicy` naming the first one absent.
    pub fn policies(&self) -> CoreResult<(&dyn RevenuePolicy, &dyn BonusPolicy)> {
        let revenue = self
            .calculate_revenue
            .as_deref()
            .ok_or(CoreError::MissingPolicy {
                policy: "calculate_revenue",
            })?;
        let bonus = self
            .calculate_bonus
            .as_deref()
            .ok_or(CoreError::MissingPolicy {
                policy: "calculate_bonus",
            })?;

        Ok((revenue, bonus))
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .field("config", &self.config)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
