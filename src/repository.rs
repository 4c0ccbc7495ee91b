//! CRUD operations over the ledger document.
//!
//! Every operation is a complete load → mutate → save cycle against the
//! injected store. Nothing is cached between calls, so back-to-back
//! operations always observe the latest persisted state. Missing entities
//! never error: mutations report them as `false` or `None` so callers can
//! surface or ignore the condition.

use chrono::{NaiveDate, Utc};

use crate::{
    domain::{
        coerce_amount, next_id, Expense, Farmer, FarmerPatch, Income, LedgerDocument,
        expense::DEFAULT_EXPENSE_CATEGORY,
    },
    storage::{LedgerStore, Result},
};

/// Parameters for recording an income entry. Omitted fields take the
/// documented defaults: empty note, today's date.
#[derive(Debug, Clone, Default)]
pub struct NewIncome {
    pub amount: f64,
    pub note: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Parameters for recording an expense entry.
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub farmer_id: u32,
    pub category: Option<String>,
    pub amount: f64,
    pub note: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Repository over farmers, incomes, and expenses, backed by a
/// [`LedgerStore`].
pub struct LedgerRepository {
    store: Box<dyn LedgerStore>,
}

impl LedgerRepository {
    pub fn new(store: Box<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Snapshot of the current document, as persisted.
    pub fn document(&self) -> LedgerDocument {
        self.store.load()
    }

    /// Clears the store back to the seed document.
    pub fn reset(&self) -> Result<()> {
        self.store.reset()
    }

    /// Adds a farmer with no incomes and returns its assigned id.
    pub fn add_farmer(
        &self,
        name: impl Into<String>,
        crop: impl Into<String>,
        area: impl Into<String>,
    ) -> Result<u32> {
        let mut doc = self.store.load();
        let id = next_id(doc.farmers.iter().map(|farmer| farmer.id));
        doc.farmers.push(Farmer::new(id, name, crop, area));
        self.store.save(&doc)?;
        tracing::debug!("added farmer {id}");
        Ok(id)
    }

    /// Merges `patch` into the matching farmer. Returns `false` when the id
    /// is unknown, in which case nothing is written.
    pub fn update_farmer(&self, id: u32, patch: &FarmerPatch) -> Result<bool> {
        let mut doc = self.store.load();
        let Some(farmer) = doc.farmer_mut(id) else {
            return Ok(false);
        };
        patch.apply_to(farmer);
        self.store.save(&doc)?;
        Ok(true)
    }

    /// Removes the farmer and cascades: its incomes go with it, and every
    /// expense linked to it is filtered out of the document. Returns `false`
    /// when the id is unknown.
    pub fn delete_farmer(&self, id: u32) -> Result<bool> {
        let mut doc = self.store.load();
        let before = doc.farmers.len();
        doc.farmers.retain(|farmer| farmer.id != id);
        if doc.farmers.len() == before {
            return Ok(false);
        }
        doc.expenses.retain(|expense| expense.farmer_id != id);
        self.store.save(&doc)?;
        tracing::debug!("deleted farmer {id} and its linked expenses");
        Ok(true)
    }

    pub fn farmer(&self, id: u32) -> Option<Farmer> {
        self.store.load().farmer(id).cloned()
    }

    /// Records an income against a farmer, returning the new income id, or
    /// `None` when the farmer is unknown. Income ids are scoped to the
    /// owning farmer, not the whole document.
    pub fn add_income(&self, farmer_id: u32, income: NewIncome) -> Result<Option<u32>> {
        let mut doc = self.store.load();
        let Some(farmer) = doc.farmer_mut(farmer_id) else {
            return Ok(None);
        };
        let id = next_id(farmer.incomes.iter().map(|income| income.id));
        farmer.incomes.push(Income {
            id,
            amount: coerce_amount(income.amount),
            date: income.date.unwrap_or_else(today),
            note: income.note.unwrap_or_default(),
        });
        self.store.save(&doc)?;
        Ok(Some(id))
    }

    /// Deletes one income entry. Returns `false` when the farmer or the
    /// income is unknown.
    pub fn delete_income(&self, farmer_id: u32, income_id: u32) -> Result<bool> {
        let mut doc = self.store.load();
        let Some(farmer) = doc.farmer_mut(farmer_id) else {
            return Ok(false);
        };
        let before = farmer.incomes.len();
        farmer.incomes.retain(|income| income.id != income_id);
        if farmer.incomes.len() == before {
            return Ok(false);
        }
        self.store.save(&doc)?;
        Ok(true)
    }

    /// Records an expense and returns its id, assigned over the document's
    /// expense collection. The farmer link is not validated here — an
    /// expense may reference a farmer that does not exist, and cascade
    /// delete is the only integrity mechanism. Rejecting orphans would
    /// change the persisted-document contract.
    pub fn add_expense(&self, expense: NewExpense) -> Result<u32> {
        let mut doc = self.store.load();
        let id = next_id(doc.expenses.iter().map(|expense| expense.id));
        doc.expenses.push(Expense {
            id,
            farmer_id: expense.farmer_id,
            category: expense
                .category
                .unwrap_or_else(|| DEFAULT_EXPENSE_CATEGORY.into()),
            amount: coerce_amount(expense.amount),
            date: expense.date.unwrap_or_else(today),
            note: expense.note.unwrap_or_default(),
        });
        self.store.save(&doc)?;
        Ok(id)
    }

    /// Deletes one expense entry. Returns `false` when the id is unknown.
    pub fn delete_expense(&self, id: u32) -> Result<bool> {
        let mut doc = self.store.load();
        let before = doc.expenses.len();
        doc.expenses.retain(|expense| expense.id != id);
        if doc.expenses.len() == before {
            return Ok(false);
        }
        self.store.save(&doc)?;
        Ok(true)
    }

    /// Expenses linked to `farmer_id`, in document order.
    pub fn expenses_for_farmer(&self, farmer_id: u32) -> Vec<Expense> {
        self.store
            .load()
            .expenses_for(farmer_id)
            .cloned()
            .collect()
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
