//! Seller and product lookup tables.

use std::collections::HashMap;

use tracing::debug;

use crate::types::{Product, Seller, SellerStats};

/// Seller accumulators in seller-list order, plus id → position.
#[derive(Debug, Default)]
pub struct SellerIndex {
    stats: Vec<SellerStats>,
    positions: HashMap<String, usize>,
}

impl SellerIndex {
    /// Creates one zeroed accumulator per distinct seller id.
    ///
    /// A repeated id replaces the earlier accumulator in place (last write
    /// wins) and keeps the earlier position.
    ///
    /// The report therefore has one row per distinct id, and the `total`
    /// handed to the bonus policy counts distinct ids. Mapping the seller list
    /// one-to-one instead would leave a zeroed row for every earlier duplicate
    /// and count it in `total`.
    pub fn build(sellers: &[Seller]) -> Self {
        let mut index = SellerIndex {
            stats: Vec::with_capacity(sellers.len()),
            positions: HashMap::with_capacity(sellers.len()),
        };

        for seller in sellers {
            let stats = SellerStats::new(seller);
            match index.positions.get(&seller.id).copied() {
                Some(position) => {
                    debug!(seller_id = %seller.id, "duplicate seller id, keeping the last one");
                    index.stats[position] = stats;
                }
                None => {
                    index.positions.insert(seller.id.clone(), index.stats.len());
                    index.stats.push(stats);
                }
            }
        }

        index
    }

    pub fn get_mut(&mut self, seller_id: &str) -> Option<&mut SellerStats> {
        let position = *self.positions.get(seller_id)?;
        self.stats.get_mut(position)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Hands the accumulators over in seller-list order.
    pub fn into_stats(self) -> Vec<SellerStats> {
        self.stats
    }
}

/// SKU → product card. Later duplicates win.
pub fn index_products(products: &[Product]) -> HashMap<&str, &Product> {
    let mut index = HashMap::with_capacity(products.len());
    for product in products {
        if index.insert(product.sku.as_str(), product).is_some() {
            debug!(sku = %product.sku, "duplicate product sku, keeping the last one");
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller(id: &str, first_name: &str) -> Seller {
        Seller {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: "Test".to_string(),
        }
    }

    fn product(sku: &str, purchase_price: f64) -> Product {
        Product {
            sku: sku.to_string(),
            purchase_price,
        }
    }

    #[test]
    fn test_seller_index_keeps_input_order() {
        let sellers = vec![seller("s2", "Boris"), seller("s1", "Anna"), seller("s3", "Vera")];
        let index = SellerIndex::build(&sellers);

        assert_eq!(index.len(), 3);
        let ids: Vec<String> = index.into_stats().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["s2", "s1", "s3"]);
    }

    #[test]
    fn test_seller_index_lookup() {
        let sellers = vec![seller("s1", "Anna")];
        let mut index = SellerIndex::build(&sellers);

        index.get_mut("s1").unwrap().sales_count += 1;
        assert!(index.get_mut("missing").is_none());
        assert_eq!(index.into_stats()[0].sales_count, 1);
    }

    #[test]
    fn test_duplicate_seller_last_write_wins() {
        let sellers = vec![seller("s1", "Anna"), seller("s2", "Boris"), seller("s1", "Alla")];
        let index = SellerIndex::build(&sellers);

        let stats = index.into_stats();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].id, "s1");
        assert_eq!(stats[0].name, "Alla Test");
        assert_eq!(stats[1].id, "s2");
    }

    #[test]
    fn test_product_index() {
        let products = vec![
            product("SKU_001", 1.0),
            product("SKU_002", 2.0),
            product("SKU_001", 3.0),
        ];
        let index = index_products(&products);

        assert_eq!(index.len(), 2);
        assert_eq!(index["SKU_001"].purchase_price, 3.0);
        assert_eq!(index["SKU_002"].purchase_price, 2.0);
        assert!(!index.contains_key("SKU_003"));
    }
}
