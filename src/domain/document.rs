use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Expense, Farmer, Income};

/// Root aggregate and sole unit of persistence. Vectors preserve insertion
/// order, which doubles as display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerDocument {
    #[serde(default)]
    pub farmers: Vec<Farmer>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl LedgerDocument {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The default content written on first use and after a reset.
    pub fn seed() -> Self {
        let mut jawad = Farmer::new(1, "Jawad", "Wheat", "5 acres");
        jawad.incomes.push(Income {
            id: 1,
            amount: 12000.0,
            date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            note: "Sale".into(),
        });
        Self {
            farmers: vec![jawad],
            expenses: vec![Expense {
                id: 1,
                farmer_id: 1,
                category: "Fertilizer".into(),
                amount: 3000.0,
                date: NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
                note: "Urea".into(),
            }],
        }
    }

    pub fn farmer(&self, id: u32) -> Option<&Farmer> {
        self.farmers.iter().find(|farmer| farmer.id == id)
    }

    pub fn farmer_mut(&mut self, id: u32) -> Option<&mut Farmer> {
        self.farmers.iter_mut().find(|farmer| farmer.id == id)
    }

    /// Expenses linked to `farmer_id`, in document order.
    pub fn expenses_for(&self, farmer_id: u32) -> impl Iterator<Item = &Expense> {
        self.expenses
            .iter()
            .filter(move |expense| expense.farmer_id == farmer_id)
    }
}

/// Next identifier for a collection: one past the highest live id, or 1 when
/// the collection is empty. Max-based on purpose — deleting the entry that
/// holds the max frees its id for the next insert. This matches the
/// persisted-id semantics of the document format and must not be replaced
/// with a monotonic counter.
pub fn next_id(ids: impl IntoIterator<Item = u32>) -> u32 {
    ids.into_iter().max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id([]), 1);
    }

    #[test]
    fn next_id_is_one_past_the_max() {
        assert_eq!(next_id([1, 5, 3]), 6);
    }

    #[test]
    fn seed_contains_jawad_with_linked_expense() {
        let doc = LedgerDocument::seed();
        let farmer = doc.farmer(1).expect("seed farmer");
        assert_eq!(farmer.name, "Jawad");
        assert_eq!(farmer.incomes.len(), 1);
        assert_eq!(doc.expenses_for(1).count(), 1);
    }

    #[test]
    fn sparse_json_loads_with_empty_collections() {
        let doc: LedgerDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.farmers.is_empty());
        assert!(doc.expenses.is_empty());
    }
}
