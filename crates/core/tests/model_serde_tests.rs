//! Wire-format tests for the model enums and records.
//!
//! The JSON forms are consumed by external tooling, so the renames are
//! contract, not cosmetics: abstraction levels serialize as "2a"/"2b" and
//! applies-to classes as "type1-2"/"type3-4"/"both".

use serde_json::json;
use ucca_core::model::{AbstractUcca, AbstractionLevel, AppliesTo, SpecialInteraction, UccaType};

#[test]
fn abstraction_level_wire_form() {
    assert_eq!(
        serde_json::to_value(AbstractionLevel::TeamLevel).unwrap(),
        json!("2a")
    );
    assert_eq!(
        serde_json::to_value(AbstractionLevel::ControllerSpecific).unwrap(),
        json!("2b")
    );
}

#[test]
fn applies_to_wire_form_and_matching() {
    assert_eq!(serde_json::to_value(AppliesTo::Type12).unwrap(), json!("type1-2"));
    assert_eq!(serde_json::to_value(AppliesTo::Type34).unwrap(), json!("type3-4"));
    assert_eq!(serde_json::to_value(AppliesTo::Both).unwrap(), json!("both"));

    assert!(AppliesTo::Type12.matches(UccaType::TeamBased));
    assert!(AppliesTo::Type12.matches(UccaType::CrossController));
    assert!(!AppliesTo::Type12.matches(UccaType::Temporal));
    assert!(AppliesTo::Type34.matches(UccaType::Temporal));
    assert!(!AppliesTo::Type34.matches(UccaType::TeamBased));
    assert!(AppliesTo::Both.matches(UccaType::Temporal));
}

#[test]
fn abstract_ucca_deserializes_with_defaults() {
    let ucca: AbstractUcca = serde_json::from_value(json!({
        "id": "u1",
        "code": "U-1",
        "context": "during landing",
        "ucca_type": "team_based",
        "abstraction_level": "2a",
        "abstract_pattern": "\u{00AC}Deploy \u{2227} Retract"
    }))
    .unwrap();
    assert_eq!(ucca.ucca_type, UccaType::TeamBased);
    assert_eq!(ucca.abstraction_level, AbstractionLevel::TeamLevel);
    assert!(ucca.hazard_ids.is_empty());
    assert!(ucca.relevant_actions.is_empty());
    assert!(ucca.involved_controller_ids.is_empty());
    assert!(ucca.temporal_relationship.is_none());
}

#[test]
fn special_interaction_deserializes_with_wildcard_defaults() {
    let interaction: SpecialInteraction = serde_json::from_value(json!({
        "id": "si1",
        "kind": "prohibited",
        "applies_to": "both"
    }))
    .unwrap();
    assert!(interaction.controller_ids.is_empty());
    assert!(interaction.control_action_ids.is_empty());
    assert!(interaction.priority.is_none());
}
