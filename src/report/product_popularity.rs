//! Product sales rollup.

use crate::models::{ItemSales, Money, Product, Transaction, TransactionKind};

use super::TOP_SPOTS;

/// Ranks catalog products by revenue from product sales in the filtered set
/// and keeps the top five.
///
/// The same name join as the service rollup applies: each filtered product
/// sale is attributed to the first snapshot product whose name equals the
/// sale's description.
pub fn rank_product_sales(
    products: &[Product],
    transactions: &[&Transaction],
) -> Vec<ItemSales> {
    let mut rows: Vec<ItemSales> = products
        .iter()
        .map(|product| ItemSales {
            name: product.name.clone(),
            revenue: Money::ZERO,
            sale_count: 0,
        })
        .collect();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Product {
            continue;
        }
        let Some(description) = transaction.description.as_deref() else {
            continue;
        };
        if let Some(row) = rows.iter_mut().find(|row| row.name == description) {
            row.revenue += transaction.amount;
            row.sale_count += 1;
        }
    }

    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    rows.truncate(TOP_SPOTS);
    rows
}
