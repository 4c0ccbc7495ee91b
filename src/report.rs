//! Report assembly: structured data for an external renderer, plus the
//! plain-text rendering used by the CLI's printable output.
//!
//! The builders are pure functions of a document snapshot. Calling one
//! twice on the same snapshot yields identical rows and totals; only
//! `generated_at` moves.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::{
    aggregation::{grand_totals, per_farmer_summary, profit, total_expense, total_income},
    domain::LedgerDocument,
    errors::LedgerError,
    format::format_rupees,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallRow {
    pub farmer_name: String,
    pub crop: String,
    pub income: f64,
    pub expense: f64,
    pub profit: f64,
}

/// Ledger-wide report: one row per farmer in document order, plus totals.
#[derive(Debug, Clone, Serialize)]
pub struct OverallReport {
    pub rows: Vec<OverallRow>,
    pub total_income: f64,
    pub total_expense: f64,
    pub total_profit: f64,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeLine {
    pub date: NaiveDate,
    pub note: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseLine {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
}

/// Detail report for one farmer: entry listings plus totals.
#[derive(Debug, Clone, Serialize)]
pub struct FarmerReport {
    pub farmer_name: String,
    pub crop: String,
    pub area: String,
    pub incomes: Vec<IncomeLine>,
    pub expenses: Vec<ExpenseLine>,
    pub income_total: f64,
    pub expense_total: f64,
    pub profit: f64,
    pub generated_at: DateTime<Utc>,
}

pub fn build_overall_report(doc: &LedgerDocument) -> OverallReport {
    let summaries = per_farmer_summary(doc);
    let totals = grand_totals(&summaries);
    OverallReport {
        rows: summaries
            .into_iter()
            .map(|summary| OverallRow {
                farmer_name: summary.name,
                crop: summary.crop,
                income: summary.income,
                expense: summary.expense,
                profit: summary.profit,
            })
            .collect(),
        total_income: totals.total_income,
        total_expense: totals.total_expense,
        total_profit: totals.total_profit,
        generated_at: Utc::now(),
    }
}

/// Builds the detail report for `farmer_id`, or `FarmerNotFound` when the
/// id does not resolve. Callers are expected to surface that as a
/// user-visible notice rather than a crash.
pub fn build_farmer_report(
    doc: &LedgerDocument,
    farmer_id: u32,
) -> Result<FarmerReport, LedgerError> {
    let farmer = doc
        .farmer(farmer_id)
        .ok_or(LedgerError::FarmerNotFound(farmer_id))?;
    let income_total = total_income(farmer);
    let expense_total = total_expense(doc, farmer_id);
    Ok(FarmerReport {
        farmer_name: farmer.name.clone(),
        crop: farmer.crop.clone(),
        area: farmer.area.clone(),
        incomes: farmer
            .incomes
            .iter()
            .map(|income| IncomeLine {
                date: income.date,
                note: income.note.clone(),
                amount: income.amount,
            })
            .collect(),
        expenses: doc
            .expenses_for(farmer_id)
            .map(|expense| ExpenseLine {
                date: expense.date,
                category: expense.category.clone(),
                amount: expense.amount,
            })
            .collect(),
        income_total,
        expense_total,
        profit: profit(income_total, expense_total),
        generated_at: Utc::now(),
    })
}

/// Renders the overall report as the notebook-style text the original
/// printable window produced.
pub fn render_overall(report: &OverallReport) -> String {
    let mut out = String::new();
    out.push_str("Farmbook — Overall Report\n");
    out.push_str(&format!(
        "Generated: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M")
    ));
    out.push_str(&format!(
        "{:<20} {:<12} {:>14} {:>14} {:>14}\n",
        "Farmer", "Crop", "Income", "Expense", "Profit"
    ));
    for row in &report.rows {
        out.push_str(&format!(
            "{:<20} {:<12} {:>14} {:>14} {:>14}\n",
            row.farmer_name,
            row.crop,
            format_rupees(row.income),
            format_rupees(row.expense),
            format_rupees(row.profit)
        ));
    }
    out.push_str(&format!("\nTotal Income:  {}\n", format_rupees(report.total_income)));
    out.push_str(&format!("Total Expense: {}\n", format_rupees(report.total_expense)));
    out.push_str(&format!("Overall Profit: {}\n", format_rupees(report.total_profit)));
    out
}

/// Renders a single farmer's report as printable text.
pub fn render_farmer(report: &FarmerReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} — Report\n", report.farmer_name));
    out.push_str(&format!("Crop: {} • Area: {}\n", report.crop, report.area));
    out.push_str(&format!(
        "Generated: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M")
    ));

    out.push_str("\nIncomes\n");
    if report.incomes.is_empty() {
        out.push_str("  (no incomes)\n");
    }
    for line in &report.incomes {
        out.push_str(&format!(
            "  {}  {:<24} {:>14}\n",
            line.date,
            line.note,
            format_rupees(line.amount)
        ));
    }

    out.push_str("\nExpenses\n");
    if report.expenses.is_empty() {
        out.push_str("  (no expenses)\n");
    }
    for line in &report.expenses {
        out.push_str(&format!(
            "  {}  {:<24} {:>14}\n",
            line.date,
            line.category,
            format_rupees(line.amount)
        ));
    }

    out.push_str(&format!("\nIncome:  {}\n", format_rupees(report.income_total)));
    out.push_str(&format!("Expense: {}\n", format_rupees(report.expense_total)));
    out.push_str(&format!("Profit:  {}\n", format_rupees(report.profit)));
    out
}
