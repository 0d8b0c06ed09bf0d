use std::sync::LazyLock;

use crate::Instrument;
use crate::catalog::{Finding, FindingCategory, findings_from_rows};

/// Scorpion (Vruschika) sting checklist.
#[derive(Debug)]
pub struct Scorpion;

static FINDINGS: LazyLock<Vec<Finding>> = LazyLock::new(|| {
    use FindingCategory::*;
    findings_from_rows(&[
        ("scorp_01", "Intense Local Pain", "Teevra Daha", Local),
        ("scorp_02", "Local Swelling", "Desha Shotha", Local),
        ("scorp_03", "Excessive Sweating", "Sveda Adhikya", Autonomic),
        ("scorp_04", "Hypertension", "Rakta Chapa Vriddhi", Cardiovascular),
        ("scorp_05", "Tachycardia", "Nadi Vegata", Cardiovascular),
        ("scorp_06", "Pulmonary Edema", "Phupphusa Shotha", Respiratory),
        ("scorp_07", "Priapism (Males)", "Shishna Utthana", Autonomic),
    ])
});

impl Instrument for Scorpion {
    fn id(&self) -> &str {
        "scorpion"
    }

    fn name(&self) -> &str {
        "Scorpion Sting"
    }

    fn sanskrit_name(&self) -> &str {
        "Vruschika Dansha"
    }

    fn findings(&self) -> &[Finding] {
        &FINDINGS
    }
}
