use std::sync::LazyLock;

use crate::Instrument;
use crate::catalog::{Finding, FindingCategory, findings_from_rows};

/// Krait (Rajimanta) envenomation checklist. Short catalog: krait bites
/// present with few local signs before the descending paralysis.
#[derive(Debug)]
pub struct Krait;

static FINDINGS: LazyLock<Vec<Finding>> = LazyLock::new(|| {
    use FindingCategory::*;
    findings_from_rows(&[
        ("krait_01", "Minimal or No Local Swelling", "Alpa Shotha", Local),
        ("krait_02", "Faint Fang Marks", "Sukshma Chihn", Local),
        ("krait_03", "Abdominal Cramps", "Udara Shula", Gastrointestinal),
        ("krait_04", "Progressive Descending Paralysis", "Upagami Sthamba", Neurological),
        ("krait_05", "Ptosis", "Pakshma Pata", Neurological),
        ("krait_06", "Respiratory Failure", "Shwasa Nasha", Respiratory),
        ("krait_07", "Death (if untreated)", "Mrityu", General),
    ])
});

impl Instrument for Krait {
    fn id(&self) -> &str {
        "krait"
    }

    fn name(&self) -> &str {
        "Krait Bite"
    }

    fn sanskrit_name(&self) -> &str {
        "Rajimanta Sarpa Dansha"
    }

    fn findings(&self) -> &[Finding] {
        &FINDINGS
    }
}
