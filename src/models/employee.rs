//! Employee model.

use serde::{Deserialize, Serialize};

/// A salon employee.
///
/// Transactions and appointments reference employees by id. Inactive
/// employees stay in the snapshot so historical records still resolve to a
/// name in the productivity rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: i64,
    /// The employee's display name.
    pub name: String,
    /// Whether the employee currently works at the salon.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": 3,
            "name": "Carla Mendes",
            "active": true
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 3);
        assert_eq!(employee.name, "Carla Mendes");
        assert!(employee.active);
    }

    #[test]
    fn test_employee_round_trips_through_json() {
        let employee = Employee {
            id: 9,
            name: "Diego Castro".to_string(),
            active: false,
        };

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
