use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::domain::LedgerDocument;

use super::{LedgerStore, Result};

const DEFAULT_DIR_NAME: &str = ".farmbook";
const DOCUMENT_FILE: &str = "ledger_document.json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application data directory, defaulting to `~/.farmbook`.
/// `FARMBOOK_HOME` overrides it, which test suites rely on for isolation.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FARMBOOK_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Filesystem-backed JSON persistence for the ledger document.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Opens a store rooted at an explicit document path, creating parent
    /// directories as needed.
    pub fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Opens the store at the managed location under [`app_data_dir`].
    pub fn open_default() -> Result<Self> {
        Self::new(app_data_dir().join(DOCUMENT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonStore {
    fn load(&self) -> LedgerDocument {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("failed to read {}: {err}", self.path.display());
                }
                return LedgerDocument::seed();
            }
        };
        match serde_json::from_str(&data) {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!(
                    "unparsable ledger document at {}, falling back to seed: {err}",
                    self.path.display()
                );
                LedgerDocument::seed()
            }
        }
    }

    fn save(&self, doc: &LedgerDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(doc)?;
        write_atomic(&self.path, &json)
    }

    fn reset(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.save(&LedgerDocument::seed())
    }
}

/// Writes the document atomically by staging to a temporary file and
/// renaming it over the target.
fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Farmer, LedgerDocument};
    use tempfile::TempDir;

    fn store_in_temp_dir() -> (JsonStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonStore::new(temp.path().join(DOCUMENT_FILE)).expect("json store");
        (store, temp)
    }

    #[test]
    fn missing_file_loads_the_seed() {
        let (store, _guard) = store_in_temp_dir();
        assert_eq!(store.load(), LedgerDocument::seed());
    }

    #[test]
    fn save_and_load_round_trip() {
        let (store, _guard) = store_in_temp_dir();
        let mut doc = LedgerDocument::empty();
        doc.farmers.push(Farmer::new(1, "Ali", "Rice", "3 acres"));
        store.save(&doc).expect("save document");
        assert_eq!(store.load(), doc);
    }

    #[test]
    fn corrupt_file_loads_the_seed() {
        let (store, _guard) = store_in_temp_dir();
        std::fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.load(), LedgerDocument::seed());
    }

    #[test]
    fn reset_reinstates_the_seed() {
        let (store, _guard) = store_in_temp_dir();
        store.save(&LedgerDocument::empty()).unwrap();
        store.reset().expect("reset store");
        assert_eq!(store.load(), LedgerDocument::seed());
    }

    #[test]
    fn failed_save_preserves_the_previous_document() {
        let (store, _guard) = store_in_temp_dir();
        let doc = LedgerDocument::seed();
        store.save(&doc).expect("initial save");

        // A directory squatting on the staging path forces the write to fail
        // before the rename, leaving the original file untouched.
        std::fs::create_dir_all(tmp_path(store.path())).unwrap();
        let mut changed = doc.clone();
        changed.farmers.push(Farmer::new(2, "Ali", "Rice", "3 acres"));
        assert!(store.save(&changed).is_err());
        assert_eq!(store.load(), doc);
    }
}
