//! Per-client spend rollup.

use crate::models::{Client, ClientSpend, Money, Transaction};

use super::TOP_SPOTS;

/// Ranks clients by the revenue they generated in the filtered set and keeps
/// the top five.
///
/// Every snapshot client is rolled up before ranking, so a top spot can be a
/// zero row when fewer than five clients had any activity; the stable sort
/// keeps snapshot order between ties.
pub fn rank_client_spend(clients: &[Client], transactions: &[&Transaction]) -> Vec<ClientSpend> {
    let mut rows: Vec<ClientSpend> = clients
        .iter()
        .map(|client| {
            let revenue: Money = transactions
                .iter()
                .filter(|t| t.client_id == client.id)
                .map(|t| t.amount)
                .sum();

            ClientSpend {
                name: client.name.clone(),
                revenue,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    rows.truncate(TOP_SPOTS);
    rows
}

#[cfg(test)]
mod tests {
    use crate::models::{PaymentMethod, TransactionKind};

    use super::*;

    fn create_test_client(id: i64, name: &str) -> Client {
        Client {
            id,
            name: name.to_string(),
            registered_at: "2026-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    fn create_test_transaction(client_id: i64, amount: i64) -> Transaction {
        Transaction {
            id: 1,
            kind: TransactionKind::Service,
            client_id,
            employee_id: None,
            appointment_id: None,
            amount: Money::from_cents(amount),
            commission: Money::ZERO,
            payment_method: PaymentMethod::Cash,
            description: None,
            occurred_at: "2026-03-10T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_clients_rank_by_spend_descending() {
        let clients = [
            create_test_client(1, "Ana Souza"),
            create_test_client(2, "Beatriz Lima"),
        ];
        let small = create_test_transaction(1, 1000);
        let large = create_test_transaction(2, 8000);

        let rows = rank_client_spend(&clients, &[&small, &large]);

        assert_eq!(rows[0].name, "Beatriz Lima");
        assert_eq!(rows[0].revenue, Money::from_cents(8000));
        assert_eq!(rows[1].name, "Ana Souza");
    }

    #[test]
    fn test_multiple_transactions_accumulate_per_client() {
        let clients = [create_test_client(1, "Ana Souza")];
        let first = create_test_transaction(1, 1000);
        let second = create_test_transaction(1, 2500);

        let rows = rank_client_spend(&clients, &[&first, &second]);

        assert_eq!(rows[0].revenue, Money::from_cents(3500));
    }

    #[test]
    fn test_ranking_is_capped_at_five_rows() {
        let clients: Vec<Client> = (1..=8)
            .map(|id| create_test_client(id, &format!("Client {id}")))
            .collect();
        let transactions: Vec<Transaction> = (1..=8)
            .map(|id| create_test_transaction(id, id * 1000))
            .collect();
        let borrowed: Vec<&Transaction> = transactions.iter().collect();

        let rows = rank_client_spend(&clients, &borrowed);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].name, "Client 8");
        assert_eq!(rows[4].name, "Client 4");
    }

    #[test]
    fn test_unknown_client_reference_reaches_no_row() {
        let clients = [create_test_client(1, "Ana Souza")];
        let orphaned = create_test_transaction(99, 5000);

        let rows = rank_client_spend(&clients, &[&orphaned]);

        assert_eq!(rows[0].revenue, Money::ZERO);
    }

    #[test]
    fn test_zero_rows_are_retained() {
        let clients = [
            create_test_client(1, "Ana Souza"),
            create_test_client(2, "Beatriz Lima"),
        ];

        let rows = rank_client_spend(&clients, &[]);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.revenue.is_zero()));
    }
}
