use std::sync::Mutex;

use farmbook::{repository::LedgerRepository, storage::JsonStore};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a repository backed by a unique on-disk store for each test.
pub fn setup_repository() -> LedgerRepository {
    let temp = TempDir::new().expect("create temp dir");
    let store = JsonStore::new(temp.path().join("ledger_document.json"))
        .expect("create json store in temp dir");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    LedgerRepository::new(Box::new(store))
}
