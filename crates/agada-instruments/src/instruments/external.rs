use std::sync::LazyLock;

use agada_core::models::exposure::ContactRoute;

use crate::Instrument;
use crate::catalog::{Finding, FindingCategory, findings_from_rows};

/// External-contact checklist for one Savisha route. Each of the twelve
/// routes carries its own small symptom catalog.
#[derive(Debug)]
pub struct ExternalContact(pub ContactRoute);

static CATALOGS: LazyLock<Vec<(ContactRoute, Vec<Finding>)>> = LazyLock::new(|| {
    use FindingCategory::*;
    vec![
        (
            ContactRoute::ToxicClothing,
            findings_from_rows(&[
                ("ev_01", "Skin Redness", "Tvak Rakta", Dermatological),
                ("ev_02", "Burning Sensation", "Daha", Dermatological),
                ("ev_03", "Itching", "Kandu", Dermatological),
                ("ev_04", "Rash / Urticaria", "Kotha", Dermatological),
            ]),
        ),
        (
            ContactRoute::FaceApplication,
            findings_from_rows(&[
                ("em_01", "Facial Burning", "Mukha Daha", Local),
                ("em_02", "Swelling of Face", "Mukha Shotha", Local),
                ("em_03", "Eye Irritation", "Netra Raga", Ocular),
                ("em_04", "Blurred Vision", "Drishti Dhundha", Ocular),
                ("em_05", "Headache", "Shirah Shula", Neurological),
            ]),
        ),
        (
            ContactRoute::BathWater,
            findings_from_rows(&[
                ("es_01", "Diffuse Skin Irritation", "Sarvangi Tvak Kopa", Dermatological),
                ("es_02", "Hair Loss", "Kesha Pata", Dermatological),
                ("es_03", "Nail Discoloration", "Nakha Vikara", Dermatological),
                ("es_04", "Systemic Absorption Signs", "Sarira Vikara", Systemic),
            ]),
        ),
        (
            ContactRoute::Inhalation,
            findings_from_rows(&[
                ("eg_01", "Headache", "Shirah Shula", Neurological),
                ("eg_02", "Dizziness", "Bhrama", Neurological),
                ("eg_03", "Nausea", "Hrillasa", Gastrointestinal),
                ("eg_04", "Respiratory Irritation", "Shwasa Daha", Respiratory),
                ("eg_05", "Eye Watering", "Ashru Sruti", Ocular),
            ]),
        ),
        (
            ContactRoute::SmokeExposure,
            findings_from_rows(&[
                ("ed_01", "Coughing", "Kasa", Respiratory),
                ("ed_02", "Choking", "Shwasa Rodha", Respiratory),
                ("ed_03", "Watery Eyes", "Netra Sruti", Ocular),
                ("ed_04", "Chest Tightness", "Vaksha Sthabdata", Respiratory),
                ("ed_05", "Altered Consciousness", "Chit Vikara", Neurological),
            ]),
        ),
        (
            ContactRoute::EyeApplication,
            findings_from_rows(&[
                ("ea_01", "Eye Pain", "Netra Vedana", Ocular),
                ("ea_02", "Redness of Eyes", "Netra Raga", Ocular),
                ("ea_03", "Vision Loss", "Drishti Nasha", Ocular),
                ("ea_04", "Photophobia", "Arka Asahishnutva", Ocular),
            ]),
        ),
        (
            ContactRoute::SkinApplication,
            findings_from_rows(&[
                ("el_01", "Local Burns", "Desha Dagdha", Local),
                ("el_02", "Skin Peeling", "Tvak Patana", Dermatological),
                ("el_03", "Abscess Formation", "Vidradhi", Dermatological),
                ("el_04", "Systemic Toxicity", "Sarira Visha", Systemic),
            ]),
        ),
        (
            ContactRoute::NasalAdministration,
            findings_from_rows(&[
                ("en_01", "Nasal Burning", "Nasa Daha", Local),
                ("en_02", "Nasal Bleeding", "Nasa Sruti", Hemorrhagic),
                ("en_03", "Severe Headache", "Teevra Shirah Shula", Neurological),
                ("en_04", "Altered Consciousness", "Sanjnana Vikara", Neurological),
            ]),
        ),
        (
            ContactRoute::EarInstillation,
            findings_from_rows(&[
                ("ek_01", "Ear Pain", "Karna Vedana", Local),
                ("ek_02", "Tinnitus", "Karna Nada", Neurological),
                ("ek_03", "Hearing Loss", "Shravana Hrasa", Neurological),
                ("ek_04", "Vertigo", "Bhrama", Neurological),
            ]),
        ),
        (
            ContactRoute::ToxicDrink,
            findings_from_rows(&[
                ("ep_01", "Oral Burning", "Mukha Daha", Local),
                ("ep_02", "Dysphagia", "Grasana Kastha", Gastrointestinal),
                ("ep_03", "Vomiting", "Chhardi", Gastrointestinal),
                ("ep_04", "Abdominal Pain", "Udara Shula", Gastrointestinal),
                ("ep_05", "Systemic Toxicity", "Sarira Visha Vikara", Systemic),
            ]),
        ),
        (
            ContactRoute::FullBodyContact,
            findings_from_rows(&[
                ("esh_01", "Diffuse Skin Irritation", "Sarvangi Kotha", Dermatological),
                ("esh_02", "Systemic Absorption", "Visha Sharira Pravesha", Systemic),
                ("esh_03", "Liver Toxicity Signs", "Yakrit Vikara", Systemic),
                ("esh_04", "Renal Toxicity Signs", "Vrikka Vikara", Urological),
            ]),
        ),
        (
            ContactRoute::VitalPointContact,
            findings_from_rows(&[
                ("emr_01", "Sudden Collapse", "Akasmika Patana", Neurological),
                ("emr_02", "Cardiac Disturbance", "Hridaya Vikara", Cardiovascular),
                ("emr_03", "Respiratory Arrest", "Shwasa Nasha", Respiratory),
                ("emr_04", "Loss of Consciousness", "Chit Lopa", Neurological),
            ]),
        ),
    ]
});

impl Instrument for ExternalContact {
    fn id(&self) -> &str {
        self.0.id()
    }

    fn name(&self) -> &str {
        self.0.label()
    }

    fn sanskrit_name(&self) -> &str {
        self.0.sanskrit()
    }

    fn findings(&self) -> &[Finding] {
        CATALOGS
            .iter()
            .find(|(route, _)| *route == self.0)
            .map(|(_, findings)| findings.as_slice())
            .unwrap_or(&[])
    }
}
