use std::sync::LazyLock;

use crate::Instrument;
use crate::catalog::{Finding, FindingCategory, findings_from_rows};

/// Rat bite checklist. 20 findings covering rat-bite fever and
/// leptospirosis-pattern systemic signs.
#[derive(Debug)]
pub struct Rat;

static FINDINGS: LazyLock<Vec<Finding>> = LazyLock::new(|| {
    use FindingCategory::*;
    findings_from_rows(&[
        ("rat_01", "Puncture Wound", "Chhedana Vrana", Local),
        ("rat_02", "Local Swelling", "Shotha", Local),
        ("rat_03", "Intermittent Fever", "Vishamajwara", Systemic),
        ("rat_04", "Chills", "Shita Kampana", Systemic),
        ("rat_05", "Headache", "Shirah Shula", Systemic),
        ("rat_06", "Muscle Pain (Myalgia)", "Mamsa Vedana", Systemic),
        ("rat_07", "Joint Pain (Arthralgia)", "Sandhi Vedana", Systemic),
        ("rat_08", "Skin Rash", "Tvak Vikara", Dermatological),
        ("rat_09", "Lymph Node Enlargement", "Granthi Vriddhi", Systemic),
        ("rat_10", "Vomiting", "Chhardi", Gastrointestinal),
        ("rat_11", "Diarrhea", "Atisara", Gastrointestinal),
        ("rat_12", "Abdominal Pain", "Udara Shula", Gastrointestinal),
        ("rat_13", "Jaundice", "Kamala", Systemic),
        ("rat_14", "Renal Dysfunction", "Vrikka Vikara", Urological),
        ("rat_15", "Bleeding Tendency", "Rakta Pravritti", Hemorrhagic),
        ("rat_16", "Meningeal Signs", "Mastishka Avarana Vikara", Neurological),
        ("rat_17", "Splenomegaly", "Pliha Vriddhi", Systemic),
        ("rat_18", "Hepatomegaly", "Yakrit Vriddhi", Systemic),
        ("rat_19", "Conjunctival Hemorrhage", "Netra Rakta", Ocular),
        ("rat_20", "Pulmonary Hemorrhage", "Phupphusa Rakta", Respiratory),
    ])
});

impl Instrument for Rat {
    fn id(&self) -> &str {
        "rat"
    }

    fn name(&self) -> &str {
        "Rat Bite"
    }

    fn sanskrit_name(&self) -> &str {
        "Mushika Dansha"
    }

    fn findings(&self) -> &[Finding] {
        &FINDINGS
    }
}
