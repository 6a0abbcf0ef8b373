//! Salary report assembly.
//!
//! Composes the entry-total, aggregate, and expense calculators into the
//! full report structure the presentation layer renders: one line per
//! entry, monthly subtotals, and overall totals.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    CategoryCatalog, EntryKind, EntryLine, ExpenseRecord, MonthGroup, MonthKey, RateTable,
    ReportTotals, SalaryReport, WorkLogEntry,
};

use super::{
    entry_total, expense_total, expenses_by_month, resolved_rate, salary_by_month, salary_total,
};

/// Display label for an entry: the category's display name (falling back
/// to the raw id when the catalog does not know it), or
/// "Other: {description}" for custom-rated work.
fn entry_label(entry: &WorkLogEntry, catalog: &CategoryCatalog) -> String {
    match &entry.kind {
        EntryKind::Standard { category_id } => catalog
            .get(category_id)
            .map(|category| category.name.clone())
            .unwrap_or_else(|| category_id.clone()),
        EntryKind::CustomRated { description, .. } => format!("Other: {}", description),
    }
}

/// Builds the complete salary report for one subject.
///
/// Entries and expenses are expected to already belong to the subject and
/// period of interest; the engine computes, it does not fetch. Monthly
/// groups follow the first-appearance order of the entries, with
/// expense-only months appended after. The net amount is salary plus
/// reimbursed expenses.
pub fn build_salary_report(
    subject_id: &str,
    entries: &[WorkLogEntry],
    expenses: &[ExpenseRecord],
    catalog: &CategoryCatalog,
    rates: &RateTable,
) -> SalaryReport {
    let lines = entries
        .iter()
        .map(|entry| EntryLine {
            entry_id: entry.id.clone(),
            work_date: entry.work_date,
            label: entry_label(entry, catalog),
            quantity: entry.quantity,
            rate: resolved_rate(entry, catalog, rates),
            total: entry_total(entry, catalog, rates),
        })
        .collect();

    let salary_months = salary_by_month(entries, catalog, rates);
    let expense_months = expenses_by_month(expenses);

    let expense_for = |month: MonthKey| -> Decimal {
        expense_months
            .iter()
            .find(|(key, _)| *key == month)
            .map(|(_, subtotal)| *subtotal)
            .unwrap_or(Decimal::ZERO)
    };

    let mut months: Vec<MonthGroup> = salary_months
        .iter()
        .map(|(month, salary_subtotal)| {
            let expense_subtotal = expense_for(*month);
            MonthGroup {
                month: *month,
                label: month.to_string(),
                salary_total: *salary_subtotal,
                expense_total: expense_subtotal,
                net_amount: *salary_subtotal + expense_subtotal,
            }
        })
        .collect();

    // Months with expenses but no logged work still get a group.
    for (month, expense_subtotal) in &expense_months {
        if !salary_months.iter().any(|(key, _)| key == month) {
            months.push(MonthGroup {
                month: *month,
                label: month.to_string(),
                salary_total: Decimal::ZERO,
                expense_total: *expense_subtotal,
                net_amount: *expense_subtotal,
            });
        }
    }

    let salary = salary_total(entries, catalog, rates);
    let expense = expense_total(expenses);

    SalaryReport {
        report_id: Uuid::new_v4(),
        subject_id: subject_id.to_string(),
        generated_at: Utc::now(),
        lines,
        months,
        totals: ReportTotals {
            salary_total: salary,
            expense_total: expense,
            net_amount: salary + expense,
        },
    }
}
