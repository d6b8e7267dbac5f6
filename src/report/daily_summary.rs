//! Day-at-a-glance dashboard metrics.

use chrono::NaiveDate;

use crate::models::{DailySummary, Money, Snapshot};

/// Computes the dashboard's at-a-glance numbers for `today`.
///
/// Unlike the reporting screen this rollup takes no filter selection; it
/// always looks at one calendar day across the whole snapshot. `today` is an
/// explicit argument rather than a clock read so the rollup stays
/// deterministic and testable.
pub fn summarize_day(snapshot: &Snapshot, today: NaiveDate) -> DailySummary {
    let appointments_today = snapshot
        .appointments
        .iter()
        .filter(|a| a.scheduled_at.date_naive() == today)
        .count();
    let revenue_today: Money = snapshot
        .transactions
        .iter()
        .filter(|t| t.occurred_at.date_naive() == today)
        .map(|t| t.amount)
        .sum();
    let new_clients_today = snapshot
        .clients
        .iter()
        .filter(|c| c.registered_at.date_naive() == today)
        .count();
    let low_stock_products = snapshot
        .products
        .iter()
        .filter(|p| p.is_low_stock())
        .count();

    DailySummary {
        appointments_today,
        revenue_today,
        new_clients_today,
        low_stock_products,
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{
        Appointment, AppointmentStatus, Client, PaymentMethod, Product, Transaction,
        TransactionKind,
    };

    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_test_appointment(scheduled_at: &str) -> Appointment {
        Appointment {
            id: 1,
            client_id: 1,
            employee_id: 1,
            service_id: 1,
            scheduled_at: scheduled_at.parse().unwrap(),
            status: AppointmentStatus::Scheduled,
        }
    }

    fn create_test_transaction(occurred_at: &str, amount: i64) -> Transaction {
        Transaction {
            id: 1,
            kind: TransactionKind::Service,
            client_id: 1,
            employee_id: None,
            appointment_id: None,
            amount: Money::from_cents(amount),
            commission: Money::ZERO,
            payment_method: PaymentMethod::Cash,
            description: None,
            occurred_at: occurred_at.parse().unwrap(),
        }
    }

    fn create_test_client(registered_at: &str) -> Client {
        Client {
            id: 1,
            name: "Ana Souza".to_string(),
            registered_at: registered_at.parse().unwrap(),
        }
    }

    fn create_test_product(stock: i64, minimum_stock: i64) -> Product {
        Product {
            id: 1,
            name: "Shampoo".to_string(),
            price: Money::from_cents(3500),
            active: true,
            stock,
            minimum_stock,
        }
    }

    #[test]
    fn test_counts_cover_the_whole_day() {
        let snapshot = Snapshot {
            appointments: vec![
                create_test_appointment("2026-03-10T00:00:00Z"),
                create_test_appointment("2026-03-10T23:59:59Z"),
                create_test_appointment("2026-03-11T09:00:00Z"),
            ],
            transactions: vec![
                create_test_transaction("2026-03-10T12:00:00Z", 5000),
                create_test_transaction("2026-03-09T12:00:00Z", 9999),
            ],
            clients: vec![
                create_test_client("2026-03-10T08:00:00Z"),
                create_test_client("2026-02-01T08:00:00Z"),
            ],
            ..Snapshot::default()
        };

        let summary = summarize_day(&snapshot, make_date("2026-03-10"));

        assert_eq!(summary.appointments_today, 2);
        assert_eq!(summary.revenue_today, Money::from_cents(5000));
        assert_eq!(summary.new_clients_today, 1);
    }

    #[test]
    fn test_low_stock_counts_ignore_the_day() {
        let snapshot = Snapshot {
            products: vec![
                create_test_product(0, 5),
                create_test_product(5, 5),
                create_test_product(20, 5),
            ],
            ..Snapshot::default()
        };

        let summary = summarize_day(&snapshot, make_date("2026-03-10"));

        assert_eq!(summary.low_stock_products, 2);
    }

    #[test]
    fn test_empty_snapshot_yields_zeroes() {
        let summary = summarize_day(&Snapshot::default(), make_date("2026-03-10"));

        assert_eq!(summary.appointments_today, 0);
        assert_eq!(summary.revenue_today, Money::ZERO);
        assert_eq!(summary.new_clients_today, 0);
        assert_eq!(summary.low_stock_products, 0);
    }
}
