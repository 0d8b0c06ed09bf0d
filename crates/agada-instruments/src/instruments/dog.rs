use std::sync::LazyLock;

use crate::Instrument;
use crate::catalog::{Finding, FindingCategory, findings_from_rows};

/// Dog bite checklist, including the late rabies picture.
#[derive(Debug)]
pub struct Dog;

static FINDINGS: LazyLock<Vec<Finding>> = LazyLock::new(|| {
    use FindingCategory::*;
    findings_from_rows(&[
        ("dog_01", "Wound / Laceration", "Vrana", Local),
        ("dog_02", "Bleeding", "Rakta Sruti", Local),
        ("dog_03", "Hydrophobia (Fear of Water)", "Jala Bhaya", Neurological),
        ("dog_04", "Aerophobia (Fear of Air)", "Vayu Bhaya", Neurological),
        ("dog_05", "Hypersalivation", "Lala Sruti", Neurological),
        ("dog_06", "Agitation / Aggression", "Krodha", Neurological),
        ("dog_07", "Fever", "Jwara", General),
        ("dog_08", "Paralysis (Late Stage)", "Sthamba", Neurological),
    ])
});

impl Instrument for Dog {
    fn id(&self) -> &str {
        "dog"
    }

    fn name(&self) -> &str {
        "Dog Bite"
    }

    fn sanskrit_name(&self) -> &str {
        "Shwana Dansha"
    }

    fn findings(&self) -> &[Finding] {
        &FINDINGS
    }
}
