use std::sync::Mutex;

use crate::domain::LedgerDocument;

use super::{LedgerStore, Result};

/// In-memory store used by tests and embedders that do not want a file on
/// disk. The document is held serialized so loads and saves exercise the
/// same serde path as the JSON backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> LedgerDocument {
        let slot = self.slot.lock().expect("memory store lock");
        match slot.as_deref() {
            Some(data) => serde_json::from_str(data).unwrap_or_else(|err| {
                tracing::warn!("unparsable in-memory ledger document, falling back to seed: {err}");
                LedgerDocument::seed()
            }),
            None => LedgerDocument::seed(),
        }
    }

    fn save(&self, doc: &LedgerDocument) -> Result<()> {
        let json = serde_json::to_string(doc)?;
        *self.slot.lock().expect("memory store lock") = Some(json);
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        *self.slot.lock().expect("memory store lock") = None;
        self.save(&LedgerDocument::seed())
    }
}
