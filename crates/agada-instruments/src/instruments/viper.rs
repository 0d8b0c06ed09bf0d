use std::sync::LazyLock;

use crate::Instrument;
use crate::catalog::{Finding, FindingCategory, findings_from_rows};

/// Viper (Mandali) envenomation checklist. 18 findings dominated by the
/// hemorrhagic and vasculotoxic picture.
#[derive(Debug)]
pub struct Viper;

static FINDINGS: LazyLock<Vec<Finding>> = LazyLock::new(|| {
    use FindingCategory::*;
    findings_from_rows(&[
        ("viper_01", "Severe Local Pain", "Teevra Vedana", Local),
        ("viper_02", "Massive Swelling", "Maha Shotha", Local),
        ("viper_03", "Hemorrhagic Blister", "Rakta Sphota", Local),
        ("viper_04", "Tissue Necrosis", "Mamsa Nashta", Local),
        ("viper_05", "Bleeding from Bite Site", "Danstha Rakta Sruti", Local),
        ("viper_06", "Gum Bleeding", "Danta Mamsa Sruti", Hemorrhagic),
        ("viper_07", "Nasal Bleeding (Epistaxis)", "Nasa Rakta Sruti", Hemorrhagic),
        ("viper_08", "Blood in Urine (Hematuria)", "Rakta Mutra", Hemorrhagic),
        ("viper_09", "Blood in Stool", "Rakta Mala", Hemorrhagic),
        ("viper_10", "Vomiting Blood", "Rakta Chhardi", Hemorrhagic),
        ("viper_11", "Skin Petechiae / Purpura", "Tvak Rakta Bindu", Dermatological),
        ("viper_12", "Hypotension", "Rakta Chapa Hrasa", Cardiovascular),
        ("viper_13", "Tachycardia", "Nadi Vegata", Cardiovascular),
        ("viper_14", "Shock", "Vipada", Cardiovascular),
        ("viper_15", "Oliguria / Anuria", "Mutra Alpa / Kshaya", Urological),
        ("viper_16", "Renal Failure Signs", "Vrikka Vikara", Urological),
        ("viper_17", "Coagulopathy (Clotting Failure)", "Rakta Skandana Doshita", Hemorrhagic),
        (
            "viper_18",
            "DIC Signs (Disseminated Intravascular Coagulation)",
            "Sarvangi Rakta Vikara",
            Hemorrhagic,
        ),
    ])
});

impl Instrument for Viper {
    fn id(&self) -> &str {
        "viper"
    }

    fn name(&self) -> &str {
        "Viper Bite"
    }

    fn sanskrit_name(&self) -> &str {
        "Mandali Sarpa Dansha"
    }

    fn findings(&self) -> &[Finding] {
        &FINDINGS
    }
}
