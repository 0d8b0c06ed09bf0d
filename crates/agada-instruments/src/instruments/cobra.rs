use std::sync::LazyLock;

use crate::Instrument;
use crate::catalog::{Finding, FindingCategory, findings_from_rows};

/// Cobra (Darvikara) envenomation checklist. 31 findings: local signs plus
/// the neurotoxic progression from ptosis through respiratory failure.
#[derive(Debug)]
pub struct Cobra;

static FINDINGS: LazyLock<Vec<Finding>> = LazyLock::new(|| {
    use FindingCategory::*;
    findings_from_rows(&[
        ("cobra_01", "Local Swelling", "Shotha", Local),
        ("cobra_02", "Pain at Bite Site", "Vedana", Local),
        ("cobra_03", "Fang Marks", "Danda Chihn", Local),
        ("cobra_04", "Tissue Necrosis", "Mamsa Kshaya", Local),
        ("cobra_05", "Blister Formation", "Sphota", Local),
        ("cobra_06", "Ptosis (Drooping Eyelids)", "Pakshma Pata", Neurological),
        ("cobra_07", "Diplopia (Double Vision)", "Dvandva Drishti", Neurological),
        ("cobra_08", "Dysphagia (Difficulty Swallowing)", "Grasana Kasta", Neurological),
        ("cobra_09", "Dysphonia (Altered Voice)", "Swara Bheda", Neurological),
        ("cobra_10", "Facial Muscle Weakness", "Mukha Sthamba", Neurological),
        ("cobra_11", "Neck Muscle Weakness", "Griva Sthamba", Neurological),
        ("cobra_12", "Limb Weakness / Paralysis", "Anga Sthamba", Neurological),
        ("cobra_13", "Respiratory Failure", "Shwasa Rodha", Respiratory),
        ("cobra_14", "Breathing Difficulty", "Shwasa Kastha", Respiratory),
        ("cobra_15", "Excessive Salivation", "Praseka", Gastrointestinal),
        ("cobra_16", "Nausea", "Hrillasa", Gastrointestinal),
        ("cobra_17", "Vomiting", "Chhardi", Gastrointestinal),
        ("cobra_18", "Abdominal Pain", "Udara Shula", Gastrointestinal),
        ("cobra_19", "Hypotension (Low BP)", "Rakta Chapa Hrasa", Cardiovascular),
        ("cobra_20", "Bradycardia (Slow Pulse)", "Nadi Mandya", Cardiovascular),
        ("cobra_21", "Cardiac Arrhythmia", "Hridaya Vikrita", Cardiovascular),
        ("cobra_22", "Dizziness", "Bhrama", General),
        ("cobra_23", "Headache", "Shirah Shula", General),
        ("cobra_24", "Confusion / Altered Sensorium", "Moha", General),
        ("cobra_25", "Unconsciousness", "Murcha", General),
        ("cobra_26", "Convulsions", "Aakshepaka", Neurological),
        ("cobra_27", "Urinary Retention", "Mutra Sanga", Urological),
        ("cobra_28", "Dark Urine", "Krishna Mutra", Urological),
        ("cobra_29", "Skin Discoloration", "Varna Vikrita", Dermatological),
        ("cobra_30", "Cold Clammy Skin", "Shita Sparsha", Dermatological),
        ("cobra_31", "Death-like Appearance", "Mrita Lakshana", General),
    ])
});

impl Instrument for Cobra {
    fn id(&self) -> &str {
        "cobra"
    }

    fn name(&self) -> &str {
        "Cobra Bite"
    }

    fn sanskrit_name(&self) -> &str {
        "Darvikara Sarpa Dansha"
    }

    fn findings(&self) -> &[Finding] {
        &FINDINGS
    }
}
