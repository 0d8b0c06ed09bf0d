//! Exposure taxonomy: legacy key parsing and the tagged serde shape.

use agada_core::error::CoreError;
use agada_core::models::exposure::{ContactRoute, ExposureType, FoodSource, Organism};

#[test]
fn legacy_organism_keys_parse() {
    assert_eq!(
        ExposureType::from_legacy_key("cobra").expect("cobra"),
        ExposureType::Bite {
            organism: Organism::Cobra,
        },
    );
    assert_eq!(
        ExposureType::from_legacy_key("animal").expect("animal"),
        ExposureType::Bite {
            organism: Organism::OtherAnimal,
        },
    );
}

#[test]
fn legacy_food_keys_parse() {
    assert_eq!(
        ExposureType::from_legacy_key("spoiled").expect("spoiled"),
        ExposureType::Ingestion {
            source: FoodSource::SpoiledFood,
        },
    );
    assert_eq!(
        ExposureType::from_legacy_key("plant").expect("plant"),
        ExposureType::Ingestion {
            source: FoodSource::ToxicPlant,
        },
    );
}

#[test]
fn legacy_external_keys_parse() {
    assert_eq!(
        ExposureType::from_legacy_key("external_savisha_vastra").expect("vastra"),
        ExposureType::ExternalContact {
            route: ContactRoute::ToxicClothing,
        },
    );
    assert_eq!(
        ExposureType::from_legacy_key("external_savisha_marma").expect("marma"),
        ExposureType::ExternalContact {
            route: ContactRoute::VitalPointContact,
        },
    );
}

#[test]
fn legacy_questionnaire_and_diet_keys_parse() {
    assert_eq!(
        ExposureType::from_legacy_key("gara_visha").expect("gara"),
        ExposureType::GaraVisha,
    );
    assert_eq!(
        ExposureType::from_legacy_key("dushi_visha").expect("dushi"),
        ExposureType::DushiVisha,
    );
    assert_eq!(
        ExposureType::from_legacy_key("virruddha_aahara").expect("virruddha"),
        ExposureType::IncompatibleDiet,
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let err = ExposureType::from_legacy_key("centipede").expect_err("unknown key");
    let CoreError::UnknownExposureKey(key) = err;
    assert_eq!(key, "centipede");

    assert!(ExposureType::from_legacy_key("external_savisha_unknown").is_err());
}

#[test]
fn exposure_serializes_tagged() {
    let value = serde_json::to_value(ExposureType::Bite {
        organism: Organism::Krait,
    })
    .expect("serialize");
    assert_eq!(value, serde_json::json!({"type": "bite", "organism": "krait"}));

    let value = serde_json::to_value(ExposureType::GaraVisha).expect("serialize");
    assert_eq!(value, serde_json::json!({"type": "gara_visha"}));

    let parsed: ExposureType = serde_json::from_value(
        serde_json::json!({"type": "external_contact", "route": "eye_application"}),
    )
    .expect("deserialize");
    assert_eq!(
        parsed,
        ExposureType::ExternalContact {
            route: ContactRoute::EyeApplication,
        },
    );
}

#[test]
fn display_labels_carry_both_names() {
    let bite = ExposureType::Bite {
        organism: Organism::Cobra,
    };
    assert_eq!(bite.to_string(), "Cobra Bite (Darvikara Dansha)");

    let contact = ExposureType::ExternalContact {
        route: ContactRoute::SmokeExposure,
    };
    assert_eq!(
        contact.to_string(),
        "Toxic Smoke Exposure (Savisha Dhoopa Seva)",
    );
}
