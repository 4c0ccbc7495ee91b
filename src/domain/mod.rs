//! Pure data types for the farm ledger. No I/O, no presentation.

pub mod document;
pub mod expense;
pub mod farmer;

pub use document::{next_id, LedgerDocument};
pub use expense::Expense;
pub use farmer::{Farmer, FarmerPatch, Income};

/// Coerces a raw amount into a usable number. Non-finite input (the typed
/// equivalent of a failed numeric parse) degrades to zero rather than
/// erroring.
pub fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_amount_passes_finite_values_through() {
        assert_eq!(coerce_amount(3000.0), 3000.0);
        assert_eq!(coerce_amount(-15.5), -15.5);
    }

    #[test]
    fn coerce_amount_zeroes_non_finite_values() {
        assert_eq!(coerce_amount(f64::NAN), 0.0);
        assert_eq!(coerce_amount(f64::INFINITY), 0.0);
    }
}
