//! Service sales rollup.

use crate::models::{ItemSales, Money, Service, Transaction, TransactionKind};

use super::TOP_SPOTS;

/// Ranks catalog services by revenue from service sales in the filtered set
/// and keeps the top five.
///
/// Sales join to the catalog by name: each filtered service sale is
/// attributed to the first snapshot service whose name equals the sale's
/// description. A description matching no service contributes to no row, and
/// duplicate catalog names collect on the first entry only.
pub fn rank_service_sales(
    services: &[Service],
    transactions: &[&Transaction],
) -> Vec<ItemSales> {
    let mut rows: Vec<ItemSales> = services
        .iter()
        .map(|service| ItemSales {
            name: service.name.clone(),
            revenue: Money::ZERO,
            sale_count: 0,
        })
        .collect();

    for transaction in transactions {
        if transaction.kind != TransactionKind::Service {
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

#[cfg(test)]
mod tests {
    use crate::models::PaymentMethod;

    use super::*;

    fn create_test_service(id: i64, name: &str) -> Service {
        Service {
            id,
            name: name.to_string(),
            price: Money::from_cents(5000),
            active: true,
        }
    }

    fn create_test_sale(kind: TransactionKind, description: &str, amount: i64) -> Transaction {
        Transaction {
            id: 1,
            kind,
            client_id: 1,
            employee_id: None,
            appointment_id: None,
            amount: Money::from_cents(amount),
            commission: Money::ZERO,
            payment_method: PaymentMethod::Cash,
            description: Some(description.to_string()),
            occurred_at: "2026-03-10T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_sales_attribute_by_name() {
        let services = [
            create_test_service(1, "Manicure"),
            create_test_service(2, "Pedicure"),
        ];
        let first = create_test_sale(TransactionKind::Service, "Manicure", 5000);
        let second = create_test_sale(TransactionKind::Service, "Manicure", 5000);
        let third = create_test_sale(TransactionKind::Service, "Pedicure", 6000);

        let rows = rank_service_sales(&services, &[&first, &second, &third]);

        assert_eq!(rows[0].name, "Manicure");
        assert_eq!(rows[0].revenue, Money::from_cents(10_000));
        assert_eq!(rows[0].sale_count, 2);
        assert_eq!(rows[1].name, "Pedicure");
        assert_eq!(rows[1].sale_count, 1);
    }

    #[test]
    fn test_product_sales_are_ignored() {
        let services = [create_test_service(1, "Manicure")];
        let product_sale = create_test_sale(TransactionKind::Product, "Manicure", 5000);

        let rows = rank_service_sales(&services, &[&product_sale]);

        assert_eq!(rows[0].revenue, Money::ZERO);
        assert_eq!(rows[0].sale_count, 0);
    }

    #[test]
    fn test_unmatched_description_reaches_no_row() {
        let services = [create_test_service(1, "Manicure")];
        let unknown = create_test_sale(TransactionKind::Service, "Haircut", 5000);

        let rows = rank_service_sales(&services, &[&unknown]);

        assert_eq!(rows[0].revenue, Money::ZERO);
    }

    #[test]
    fn test_duplicate_names_collect_on_first_entry() {
        let services = [
            create_test_service(1, "Manicure"),
            create_test_service(2, "Manicure"),
        ];
        let sale = create_test_sale(TransactionKind::Service, "Manicure", 5000);

        let rows = rank_service_sales(&services, &[&sale]);

        // One attribution, not one per duplicate entry.
        let total: i64 = rows.iter().map(|row| row.revenue.cents()).sum();
        assert_eq!(total, 5000);
        assert_eq!(rows[0].revenue, Money::from_cents(5000));
        assert_eq!(rows[1].revenue, Money::ZERO);
    }

    #[test]
    fn test_ranking_is_capped_at_five_rows() {
        let services: Vec<Service> = (1..=7)
            .map(|id| create_test_service(id, &format!("Service {id}")))
            .collect();
        let sales: Vec<Transaction> = (1..=7)
            .map(|id| {
                create_test_sale(TransactionKind::Service, &format!("Service {id}"), id * 100)
            })
            .collect();
        let borrowed: Vec<&Transaction> = sales.iter().collect();

        let rows = rank_service_sales(&services, &borrowed);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].name, "Service 7");
    }
}
