use std::path::{Path, PathBuf};

use agada_core::models::case::{CaseDraft, CaseRecord, SeveritySummary};
use agada_core::models::exposure::ExposureType;
use agada_core::store_paths;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::StorageError;
use crate::file;

/// Current store file version. Bump when the case schema changes shape;
/// each bump needs a matching entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// On-disk shape of the cases file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CaseFile {
    #[serde(default)]
    store_version: u32,
    #[serde(default)]
    cases: Vec<CaseRecord>,
}

/// Offline case store backed by JSON files in a single directory.
pub struct CaseStore {
    root: PathBuf,
}

impl CaseStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Open the store at its default location under the platform data dir.
    pub fn open_default() -> Result<Self, StorageError> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Self::open(base.join(store_paths::APP_DIR))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All saved cases, newest first.
    pub fn list(&self) -> Result<Vec<CaseRecord>, StorageError> {
        Ok(self.load()?.cases)
    }

    pub fn get(&self, id: Uuid) -> Result<CaseRecord, StorageError> {
        self.load()?
            .cases
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(StorageError::CaseNotFound { id })
    }

    /// Save a completed assessment.
    ///
    /// With `id`, updates that case in place, keeping its creation time; an
    /// id with no stored case inserts at the front under that id. Without an
    /// id, a new case is created at the front of the list.
    pub fn save(
        &self,
        id: Option<Uuid>,
        draft: CaseDraft,
        severity: SeveritySummary,
    ) -> Result<CaseRecord, StorageError> {
        let mut cases = self.load()?;
        let now = jiff::Timestamp::now();

        let record = match id.and_then(|id| cases.cases.iter().position(|c| c.id == id)) {
            Some(idx) => {
                let created_at = cases.cases[idx].created_at;
                let record = build_record(cases.cases[idx].id, created_at, now, draft, severity);
                cases.cases[idx] = record.clone();
                record
            }
            None => {
                let record =
                    build_record(id.unwrap_or_else(Uuid::new_v4), now, now, draft, severity);
                cases.cases.insert(0, record.clone());
                record
            }
        };

        self.persist(&cases)?;
        info!(case_id = %record.id, tier = %record.severity.tier, "case saved");
        Ok(record)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let mut cases = self.load()?;
        let before = cases.cases.len();
        cases.cases.retain(|c| c.id != id);
        if cases.cases.len() == before {
            return Err(StorageError::CaseNotFound { id });
        }
        self.persist(&cases)?;
        info!(case_id = %id, "case deleted");
        Ok(())
    }

    /// Save the in-progress wizard state.
    pub fn save_draft(&self, draft: &CaseDraft) -> Result<(), StorageError> {
        file::save_json_atomic(&store_paths::draft_file(&self.root), draft)
    }

    /// Load the in-progress wizard state, if any.
    pub fn load_draft(&self) -> Result<Option<CaseDraft>, StorageError> {
        let path = store_paths::draft_file(&self.root);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(file::load_typed(&path)?))
    }

    /// Discard the in-progress wizard state after the case is saved.
    pub fn clear_draft(&self) -> Result<(), StorageError> {
        let path = store_paths::draft_file(&self.root);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<CaseFile, StorageError> {
        let path = store_paths::cases_file(&self.root);
        if !path.exists() {
            return Ok(CaseFile {
                store_version: CURRENT_VERSION,
                cases: Vec::new(),
            });
        }

        // Parse as raw JSON so migrations can run before deserializing.
        let json = file::load_value(&path)?;
        let on_disk_version = json
            .get("store_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let migrated = migrate(json, on_disk_version)?;
        Ok(serde_json::from_value(migrated)?)
    }

    fn persist(&self, cases: &CaseFile) -> Result<(), StorageError> {
        // Always write the current version, regardless of what was loaded.
        let stamped = CaseFile {
            store_version: CURRENT_VERSION,
            cases: cases.cases.clone(),
        };
        file::save_json_atomic(&store_paths::cases_file(&self.root), &stamped)
    }
}

fn build_record(
    id: Uuid,
    created_at: jiff::Timestamp,
    updated_at: jiff::Timestamp,
    draft: CaseDraft,
    severity: SeveritySummary,
) -> CaseRecord {
    CaseRecord {
        id,
        created_at,
        updated_at,
        identity: draft.identity,
        exposure: draft.exposure,
        findings: draft.findings,
        severity,
        notes: draft.notes,
        gara_answers: draft.gara_answers,
        dushi_answers: draft.dushi_answers,
        virruddha_ratings: draft.virruddha_ratings,
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, StorageError> {
    if from_version > CURRENT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 -> v1: exposure was stored as the wizard's string key; replace it
    // with the tagged form.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| StorageError::Migration("cases file is not a JSON object".to_string()))?;

        if let Some(cases) = obj.get_mut("cases").and_then(|c| c.as_array_mut()) {
            for case in cases {
                let Some(case) = case.as_object_mut() else {
                    continue;
                };
                let legacy = case
                    .get("exposure")
                    .and_then(|e| e.as_str())
                    .map(str::to_owned);
                if let Some(key) = legacy {
                    let exposure = ExposureType::from_legacy_key(&key)
                        .map_err(|e| StorageError::Migration(e.to_string()))?;
                    case.insert("exposure".to_string(), serde_json::to_value(exposure)?);
                }
            }
        }

        obj.insert(
            "store_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        info!("migrated case store v0 -> v1 (tagged exposure)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}
