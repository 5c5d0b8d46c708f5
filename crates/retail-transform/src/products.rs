//! Product table cleaning.
//!
//! Policy: categories collapse to the canonical set, negative or unparsable
//! prices become missing and are imputed from the category median (global
//! median when the category has none), stock is truncated and clamped into
//! [0, 1000]. No row is ever dropped.

use std::collections::BTreeMap;

use retail_model::{Category, Product, RawProduct};
use tracing::debug;

use crate::normalization::numeric::{median, parse_f64, truncate_and_clamp};

/// Inclusive stock bounds after cleaning.
pub const STOCK_RANGE: (i64, i64) = (0, 1000);

struct ParsedProduct {
    product_id: String,
    product_name: Option<String>,
    category: Category,
    price: Option<f64>,
    stock: i64,
}

fn parse_price(raw: Option<&str>) -> Option<f64> {
    // Negative prices are treated as missing before imputation.
    raw.and_then(parse_f64).filter(|price| *price >= 0.0)
}

/// Cleans the raw product table.
///
/// Imputation is two-pass: medians are computed over the parsed prices
/// first, then missing prices are filled, so an imputed value never feeds
/// back into another row's imputation.
pub fn clean_products(raw: &[RawProduct]) -> Vec<Product> {
    let parsed: Vec<ParsedProduct> = raw
        .iter()
        .map(|row| ParsedProduct {
            product_id: row.product_id.clone().unwrap_or_default(),
            product_name: row.product_name.as_deref().map(|name| name.trim().to_string()),
            category: Category::from_raw(row.category.as_deref()),
            price: parse_price(row.price.as_deref()),
            stock: truncate_and_clamp(
                row.stock.as_deref().and_then(parse_f64).unwrap_or(0.0),
                STOCK_RANGE.0,
                STOCK_RANGE.1,
            ),
        })
        .collect();

    let mut prices_by_category: BTreeMap<Category, Vec<f64>> = BTreeMap::new();
    let mut all_prices = Vec::new();
    for product in &parsed {
        if let Some(price) = product.price {
            prices_by_category
                .entry(product.category)
                .or_default()
                .push(price);
            all_prices.push(price);
        }
    }
    let category_medians: BTreeMap<Category, f64> = prices_by_category
        .iter()
        .filter_map(|(category, prices)| median(prices).map(|value| (*category, value)))
        .collect();
    let global_median = median(&all_prices);

    let mut imputed = 0usize;
    let cleaned = parsed
        .into_iter()
        .map(|product| {
            let price = match product.price {
                Some(price) => price,
                None => {
                    imputed += 1;
                    category_medians
                        .get(&product.category)
                        .copied()
                        .or(global_median)
                        .unwrap_or(0.0)
                }
            };
            Product {
                product_id: product.product_id,
                product_name: product.product_name,
                category: product.category,
                price,
                stock: product.stock,
            }
        })
        .collect();
    if imputed > 0 {
        debug!(imputed, "filled missing product prices from medians");
    }
    cleaned
}
