//! Case store behavior against a throwaway directory: CRUD ordering, draft
//! lifecycle, and the v0 store migration.

use std::path::PathBuf;

use agada_core::models::case::{CaseDraft, GradedFinding, SeveritySummary};
use agada_core::models::exposure::{ExposureType, Organism};
use agada_core::store_paths;
use agada_severity::SeverityTier;
use agada_storage::{CaseStore, StorageError};
use uuid::Uuid;

struct TempStore {
    root: PathBuf,
    store: CaseStore,
}

impl TempStore {
    fn new() -> Self {
        let root = std::env::temp_dir().join(format!("agada-store-test-{}", Uuid::new_v4()));
        let store = CaseStore::open(&root).expect("open store");
        Self { root, store }
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

fn draft_for(organism: Organism, notes: &str) -> CaseDraft {
    CaseDraft {
        exposure: Some(ExposureType::Bite { organism }),
        findings: vec![GradedFinding {
            label: "Local Swelling".to_string(),
            grade: 4,
        }],
        notes: notes.to_string(),
        ..CaseDraft::default()
    }
}

fn moderate() -> SeveritySummary {
    SeveritySummary {
        percentage: 51.6,
        tier: SeverityTier::Moderate,
    }
}

#[test]
fn save_assigns_id_and_timestamps() {
    let tmp = TempStore::new();
    let record = tmp
        .store
        .save(None, draft_for(Organism::Cobra, "first"), moderate())
        .expect("save");

    assert_eq!(record.updated_at, record.created_at);
    let listed = tmp.store.list().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, record.id);
}

#[test]
fn newest_case_is_listed_first() {
    let tmp = TempStore::new();
    let first = tmp
        .store
        .save(None, draft_for(Organism::Cobra, "first"), moderate())
        .expect("save first");
    let second = tmp
        .store
        .save(None, draft_for(Organism::Viper, "second"), moderate())
        .expect("save second");

    let listed = tmp.store.list().expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[test]
fn update_preserves_creation_time() {
    let tmp = TempStore::new();
    let original = tmp
        .store
        .save(None, draft_for(Organism::Dog, "initial"), moderate())
        .expect("save");

    let updated = tmp
        .store
        .save(
            Some(original.id),
            draft_for(Organism::Dog, "amended"),
            SeveritySummary {
                percentage: 75.0,
                tier: SeverityTier::Alarming,
            },
        )
        .expect("update");

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);
    assert_eq!(updated.notes, "amended");

    let listed = tmp.store.list().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].severity.tier, SeverityTier::Alarming);
}

#[test]
fn get_and_delete() {
    let tmp = TempStore::new();
    let record = tmp
        .store
        .save(None, draft_for(Organism::Rat, "case"), moderate())
        .expect("save");

    let fetched = tmp.store.get(record.id).expect("get");
    assert_eq!(fetched, record);

    tmp.store.delete(record.id).expect("delete");
    assert!(matches!(
        tmp.store.get(record.id),
        Err(StorageError::CaseNotFound { .. }),
    ));
    assert!(matches!(
        tmp.store.delete(record.id),
        Err(StorageError::CaseNotFound { .. }),
    ));
}

#[test]
fn draft_lifecycle() {
    let tmp = TempStore::new();
    assert!(tmp.store.load_draft().expect("no draft yet").is_none());

    let draft = draft_for(Organism::Krait, "in progress");
    tmp.store.save_draft(&draft).expect("save draft");
    let loaded = tmp.store.load_draft().expect("load draft").expect("present");
    assert_eq!(loaded, draft);

    tmp.store.clear_draft().expect("clear");
    assert!(tmp.store.load_draft().expect("cleared").is_none());
    // Clearing twice is fine.
    tmp.store.clear_draft().expect("clear again");
}

#[test]
fn v0_store_migrates_string_exposures() {
    let tmp = TempStore::new();
    let v0 = serde_json::json!({
        "cases": [{
            "id": "7f4c2e9d-4b0a-4f3a-9a2c-0e9a6b5d1c88",
            "created_at": "2025-11-02T08:00:00Z",
            "updated_at": "2025-11-02T08:45:00Z",
            "identity": null,
            "exposure": "external_savisha_anjana",
            "findings": [{"label": "Eye Pain", "grade": 7}],
            "severity": {"percentage": 75.0, "tier": "alarming"},
            "notes": "referred"
        }]
    });
    std::fs::write(
        store_paths::cases_file(tmp.store.root()),
        serde_json::to_string_pretty(&v0).expect("fixture"),
    )
    .expect("write v0 file");

    let listed = tmp.store.list().expect("migrated list");
    assert_eq!(listed.len(), 1);
    assert_eq!(
        listed[0].exposure,
        Some(ExposureType::ExternalContact {
            route: agada_core::models::exposure::ContactRoute::EyeApplication,
        }),
    );
    assert_eq!(listed[0].severity.tier, SeverityTier::Alarming);

    // Saving stamps the current version on disk.
    tmp.store
        .save(None, draft_for(Organism::Cobra, "new"), moderate())
        .expect("save after migration");
    let raw: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(store_paths::cases_file(tmp.store.root())).expect("read"),
    )
    .expect("parse");
    assert_eq!(raw["store_version"], 1);
    assert_eq!(raw["cases"].as_array().expect("cases").len(), 2);
}

#[test]
fn v0_migration_rejects_unknown_exposure_keys() {
    let tmp = TempStore::new();
    let v0 = serde_json::json!({
        "cases": [{
            "id": "7f4c2e9d-4b0a-4f3a-9a2c-0e9a6b5d1c88",
            "created_at": "2025-11-02T08:00:00Z",
            "updated_at": "2025-11-02T08:00:00Z",
            "identity": null,
            "exposure": "wasp",
            "findings": [],
            "severity": {"percentage": 0.0, "tier": "mild"},
            "notes": ""
        }]
    });
    std::fs::write(
        store_paths::cases_file(tmp.store.root()),
        v0.to_string(),
    )
    .expect("write v0 file");

    assert!(matches!(
        tmp.store.list(),
        Err(StorageError::Migration(msg)) if msg.contains("wasp"),
    ));
}

#[test]
fn newer_store_versions_are_refused() {
    let tmp = TempStore::new();
    std::fs::write(
        store_paths::cases_file(tmp.store.root()),
        r#"{"store_version": 99, "cases": []}"#,
    )
    .expect("write future file");

    assert!(matches!(
        tmp.store.list(),
        Err(StorageError::UnsupportedVersion {
            found: 99,
            supported: 1,
        }),
    ));
}
