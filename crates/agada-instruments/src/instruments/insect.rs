use std::sync::LazyLock;

use crate::Instrument;
use crate::catalog::{Finding, FindingCategory, findings_from_rows};

/// Insect sting checklist. Spider (Luta) exposures score against this
/// catalog as well.
#[derive(Debug)]
pub struct Insect;

static FINDINGS: LazyLock<Vec<Finding>> = LazyLock::new(|| {
    use FindingCategory::*;
    findings_from_rows(&[
        ("insect_01", "Local Pain and Swelling", "Danstha Shotha", Local),
        ("insect_02", "Urticaria / Hives", "Sheetapitta", Allergic),
        ("insect_03", "Anaphylaxis", "Sarvanga Visarpa", Allergic),
        ("insect_04", "Bronchospasm", "Shwasa Sankocha", Respiratory),
        ("insect_05", "Hypotension / Shock", "Vipada", Cardiovascular),
    ])
});

impl Instrument for Insect {
    fn id(&self) -> &str {
        "insect"
    }

    fn name(&self) -> &str {
        "Insect Sting"
    }

    fn sanskrit_name(&self) -> &str {
        "Keeta Dansha"
    }

    fn findings(&self) -> &[Finding] {
        &FINDINGS
    }
}
