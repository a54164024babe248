//! JSON Ledger Repository
//!
//! Persists the ledger collection as a JSON array, by default at
//! `<data dir>/carbon-ledger/carbon_calculations.json`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::domain::entities::LedgerEntry;
use crate::domain::ports::{LedgerStore, LedgerStoreError};

const LEDGER_FILE_NAME: &str = "carbon_calculations.json";

pub struct JsonLedgerRepository {
    path: PathBuf,
}

impl JsonLedgerRepository {
    pub fn new() -> Self {
        Self {
            path: default_ledger_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> Result<Vec<LedgerEntry>, LedgerStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| LedgerStoreError::AccessError {
            message: e.to_string(),
        })?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| LedgerStoreError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save_to_disk(&self, entries: &[LedgerEntry]) -> Result<(), LedgerStoreError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| LedgerStoreError::AccessError {
            message: e.to_string(),
        })?;

        let content = serde_json::to_string_pretty(entries).map_err(|e| {
            LedgerStoreError::SerializationError {
                message: e.to_string(),
            }
        })?;

        // Write next to the target, then rename over it.
        let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| LedgerStoreError::AccessError {
            message: e.to_string(),
        })?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| LedgerStoreError::AccessError {
                message: e.to_string(),
            })?;
        tmp.persist(&self.path)
            .map_err(|e| LedgerStoreError::AccessError {
                message: e.error.to_string(),
            })?;

        Ok(())
    }

    /// Run `f` while holding the exclusive ledger lock
    fn with_lock<T>(
        &self,
        f: impl FnOnce() -> Result<T, LedgerStoreError>,
    ) -> Result<T, LedgerStoreError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| LedgerStoreError::AccessError {
                    message: e.to_string(),
                })?;
            }
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| LedgerStoreError::AccessError {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| LedgerStoreError::AccessError {
                message: e.to_string(),
            })?;

        let result = f();

        let _ = lock_file.unlock();
        result
    }
}

impl Default for JsonLedgerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for JsonLedgerRepository {
    fn load(&self) -> Result<Vec<LedgerEntry>, LedgerStoreError> {
        self.load_from_disk()
    }

    fn save(&self, entries: &[LedgerEntry]) -> Result<(), LedgerStoreError> {
        self.with_lock(|| self.save_to_disk(entries))
    }

    fn append(&self, entry: LedgerEntry) -> Result<(), LedgerStoreError> {
        self.with_lock(|| {
            let mut entries = self.load_from_disk()?;
            entries.push(entry);
            self.save_to_disk(&entries)
        })
    }
}

/// Default ledger location under the platform data directory
pub fn default_ledger_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("carbon-ledger").join(LEDGER_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LEDGER_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{CalculationId, CompanySize, Industry, TechnologyType};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn entry(id: &str, credits: u64) -> LedgerEntry {
        LedgerEntry {
            calculation_id: CalculationId::from(id),
            calculation_date: NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
            company_size: CompanySize::Medium,
            industry: Industry::Energy,
            technology_type: TechnologyType::Hydro,
            project_lifespan: 12,
            total_credits: credits,
            annual_credits: credits / 12,
            financial_value: credits * 20,
            co2_reduction: credits / 12,
        }
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let repo = JsonLedgerRepository::with_path(dir.path().join("ledger.json"));

        assert_eq!(repo.load().unwrap(), Vec::new());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let dir = tempdir().unwrap();
        let repo = JsonLedgerRepository::with_path(dir.path().join("ledger.json"));

        repo.append(entry("b", 20)).unwrap();
        repo.append(entry("a", 10)).unwrap();
        repo.append(entry("b", 20)).unwrap();

        let ids: Vec<String> = repo
            .load()
            .unwrap()
            .into_iter()
            .map(|e| e.calculation_id.to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a", "b"]);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("ledger.json");
        let repo = JsonLedgerRepository::with_path(path.clone());

        repo.save(&[entry("x", 1)]).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn file_is_a_json_array_of_camel_case_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let repo = JsonLedgerRepository::with_path(path.clone());

        repo.append(entry("id-1", 240)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let first = &value.as_array().unwrap()[0];
        assert_eq!(first["calculationId"], "id-1");
        assert_eq!(first["technologyType"], "hydro");
        assert_eq!(first["calculationDate"], "2024-02-03");
        assert_eq!(first["financialValue"], 4800);
    }

    #[test]
    fn corrupt_file_reports_corrupted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, "{ not json").unwrap();

        let repo = JsonLedgerRepository::with_path(path);
        let err = repo.load().unwrap_err();
        assert!(matches!(err, LedgerStoreError::Corrupted { .. }));
    }

    #[test]
    fn append_does_not_overwrite_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, "garbage").unwrap();

        let repo = JsonLedgerRepository::with_path(path.clone());
        assert!(repo.append(entry("a", 1)).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "garbage");
    }

    #[test]
    fn append_keeps_unrecognized_stored_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let stored = r#"[{
  "calculationId": "old",
  "calculationDate": "2023-05-01",
  "companySize": "small",
  "industry": "mining",
  "technologyType": "solar",
  "projectLifespan": 10,
  "totalCredits": 10,
  "annualCredits": 1,
  "financialValue": 200,
  "co2Reduction": 1
}]"#;
        std::fs::write(&path, stored).unwrap();

        let repo = JsonLedgerRepository::with_path(path.clone());
        assert!(matches!(
            repo.append(entry("new", 5)),
            Err(LedgerStoreError::Corrupted { .. })
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), stored);
    }

    #[test]
    fn concurrent_appends_are_not_lost() {
        let dir = tempdir().unwrap();
        let repo = Arc::new(JsonLedgerRepository::with_path(dir.path().join("ledger.json")));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || repo.append(entry(&format!("t{i}"), i)).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(repo.load().unwrap().len(), 8);
    }
}
