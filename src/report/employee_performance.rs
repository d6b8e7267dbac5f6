//! Per-employee productivity rollup.

use crate::models::{
    Appointment, AppointmentStatus, Employee, EmployeePerformance, Money, Transaction,
};

/// Builds one productivity row per snapshot employee.
///
/// Revenue counts filtered transactions credited to the employee; the
/// appointment figure counts filtered appointments that actually took place
/// (`completed` status). Every employee gets a row, including inactive ones
/// and those with no activity in the period — suppressing zero rows is the
/// presenter's call. Rows sort by revenue descending; the stable sort keeps
/// snapshot order between ties.
///
/// Transactions without an employee id contribute to the period totals but
/// to no row here, so the rows may sum to less than total revenue.
pub fn rank_employee_performance(
    employees: &[Employee],
    transactions: &[&Transaction],
    appointments: &[&Appointment],
) -> Vec<EmployeePerformance> {
    let mut rows: Vec<EmployeePerformance> = employees
        .iter()
        .map(|employee| {
            let revenue: Money = transactions
                .iter()
                .filter(|t| t.employee_id == Some(employee.id))
                .map(|t| t.amount)
                .sum();
            let completed_appointments = appointments
                .iter()
                .filter(|a| {
                    a.employee_id == employee.id && a.status == AppointmentStatus::Completed
                })
                .count();

            EmployeePerformance {
                name: employee.name.clone(),
                revenue,
                completed_appointments,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    rows
}
