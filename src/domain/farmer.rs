use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A farmer tracked by the ledger, owning its income entries outright.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Farmer {
    pub id: u32,
    pub name: String,
    pub crop: String,
    pub area: String,
    #[serde(default)]
    pub incomes: Vec<Income>,
}

impl Farmer {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        crop: impl Into<String>,
        area: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            crop: crop.into(),
            area: area.into(),
            incomes: Vec::new(),
        }
    }

    pub fn income(&self, id: u32) -> Option<&Income> {
        self.incomes.iter().find(|income| income.id == id)
    }
}

/// A single income entry. Immutable once recorded; only deletable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: u32,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
}

/// Field-wise update for a farmer. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct FarmerPatch {
    pub name: Option<String>,
    pub crop: Option<String>,
    pub area: Option<String>,
}

impl FarmerPatch {
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn crop(mut self, value: impl Into<String>) -> Self {
        self.crop = Some(value.into());
        self
    }

    pub fn area(mut self, value: impl Into<String>) -> Self {
        self.area = Some(value.into());
        self
    }

    /// Merges the provided fields into `farmer`. The id is never part of a
    /// patch.
    pub fn apply_to(&self, farmer: &mut Farmer) {
        if let Some(name) = &self.name {
            farmer.name = name.clone();
        }
        if let Some(crop) = &self.crop {
            farmer.crop = crop.clone();
        }
        if let Some(area) = &self.area {
            farmer.area = area.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_merges_only_provided_fields() {
        let mut farmer = Farmer::new(1, "Jawad", "Wheat", "5 acres");
        FarmerPatch::default().crop("Rice").apply_to(&mut farmer);
        assert_eq!(farmer.name, "Jawad");
        assert_eq!(farmer.crop, "Rice");
        assert_eq!(farmer.area, "5 acres");
    }

    #[test]
    fn incomes_default_when_missing_from_json() {
        let farmer: Farmer = serde_json::from_str(
            r#"{ "id": 2, "name": "Ali", "crop": "Rice", "area": "3 acres" }"#,
        )
        .unwrap();
        assert!(farmer.incomes.is_empty());
    }
}
