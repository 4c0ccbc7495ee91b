pub mod json_backend;
pub mod memory;

use crate::{domain::LedgerDocument, errors::LedgerError};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends holding the single ledger document.
///
/// `load` is total: a backend with no persisted state, or with state it can
/// no longer parse, hands back the seed document instead of failing. Every
/// `save` rewrites the whole document; the last write wins.
pub trait LedgerStore: Send + Sync {
    fn load(&self) -> LedgerDocument;
    fn save(&self, doc: &LedgerDocument) -> Result<()>;

    /// Clears persisted state and writes the seed document back.
    fn reset(&self) -> Result<()> {
        self.save(&LedgerDocument::seed())
    }
}

pub use json_backend::JsonStore;
pub use memory::MemoryStore;
