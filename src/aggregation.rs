//! Pure aggregation over a ledger snapshot. No side effects; identical
//! input yields identical totals.

use serde::Serialize;

use crate::domain::{Farmer, LedgerDocument};

/// Income, expense, and profit for a single farmer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmerSummary {
    pub id: u32,
    pub name: String,
    pub crop: String,
    pub income: f64,
    pub expense: f64,
    pub profit: f64,
}

/// Totals across every farmer in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GrandTotals {
    pub total_income: f64,
    pub total_expense: f64,
    pub total_profit: f64,
}

pub fn total_income(farmer: &Farmer) -> f64 {
    farmer.incomes.iter().map(|income| income.amount).sum()
}

pub fn total_expense(doc: &LedgerDocument, farmer_id: u32) -> f64 {
    doc.expenses_for(farmer_id)
        .map(|expense| expense.amount)
        .sum()
}

/// Profit may be negative; the sign carries through to the reports.
pub fn profit(income: f64, expense: f64) -> f64 {
    income - expense
}

/// One summary per farmer, in document order.
pub fn per_farmer_summary(doc: &LedgerDocument) -> Vec<FarmerSummary> {
    doc.farmers
        .iter()
        .map(|farmer| {
            let income = total_income(farmer);
            let expense = total_expense(doc, farmer.id);
            FarmerSummary {
                id: farmer.id,
                name: farmer.name.clone(),
                crop: farmer.crop.clone(),
                income,
                expense,
                profit: profit(income, expense),
            }
        })
        .collect()
}

pub fn grand_totals(summaries: &[FarmerSummary]) -> GrandTotals {
    let total_income = summaries.iter().map(|summary| summary.income).sum();
    let total_expense: f64 = summaries.iter().map(|summary| summary.expense).sum();
    GrandTotals {
        total_income,
        total_expense,
        total_profit: profit(total_income, total_expense),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Expense, Farmer, Income, LedgerDocument};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, day).unwrap()
    }

    fn doc_with_two_farmers() -> LedgerDocument {
        let mut ali = Farmer::new(1, "Ali", "Rice", "3 acres");
        ali.incomes.push(Income {
            id: 1,
            amount: 5000.0,
            date: date(1),
            note: String::new(),
        });
        let sara = Farmer::new(2, "Sara", "Cotton", "8 acres");
        LedgerDocument {
            farmers: vec![ali, sara],
            expenses: vec![
                Expense {
                    id: 1,
                    farmer_id: 1,
                    category: "Seed".into(),
                    amount: 2000.0,
                    date: date(2),
                    note: String::new(),
                },
                Expense {
                    id: 2,
                    farmer_id: 2,
                    category: "Labour".into(),
                    amount: 300.0,
                    date: date(3),
                    note: String::new(),
                },
            ],
        }
    }

    #[test]
    fn per_farmer_summary_matches_raw_entries() {
        let doc = doc_with_two_farmers();
        let summaries = per_farmer_summary(&doc);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].income, 5000.0);
        assert_eq!(summaries[0].expense, 2000.0);
        assert_eq!(summaries[0].profit, 3000.0);
        // No incomes recorded yet, so the expense drives profit negative.
        assert_eq!(summaries[1].profit, -300.0);
    }

    #[test]
    fn grand_totals_balance() {
        let doc = doc_with_two_farmers();
        let totals = grand_totals(&per_farmer_summary(&doc));
        assert_eq!(totals.total_income, 5000.0);
        assert_eq!(totals.total_expense, 2300.0);
        assert_eq!(
            totals.total_profit,
            totals.total_income - totals.total_expense
        );
    }

    #[test]
    fn empty_document_totals_are_zero() {
        let totals = grand_totals(&per_farmer_summary(&LedgerDocument::empty()));
        assert_eq!(totals, GrandTotals::default());
    }

    #[test]
    fn orphaned_expenses_do_not_enter_summaries() {
        let mut doc = doc_with_two_farmers();
        doc.expenses.push(Expense {
            id: 3,
            farmer_id: 99,
            category: "Other".into(),
            amount: 1000.0,
            date: date(4),
            note: String::new(),
        });
        let totals = grand_totals(&per_farmer_summary(&doc));
        assert_eq!(totals.total_expense, 2300.0);
    }
}
