//! Domain model for UCCA refinement.
//!
//! Controllers, control actions, authority declarations, interchangeable
//! controller groups, special interactions, and the abstract/refined UCCA
//! pair. All types (de)serialize to snake_case JSON; the engine treats the
//! configuration side (authority, groups, interactions, abstract UCCAs) as
//! read-only input and owns the refined side for the duration of one call.

use serde::{Deserialize, Serialize};

/// A controller in the control structure. Reference data for name lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Controller {
    pub id: String,
    pub name: String,
}

/// A control action a controller may issue. Reference data for name lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ControlAction {
    pub id: String,
    pub name: String,
}

/// Declares whether a controller may legitimately perform a control action.
///
/// `constraints` are free-text qualifiers carried through for display; the
/// engine treats them as always satisfied (see the constraint filter).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorityRelationship {
    pub controller_id: String,
    pub control_action_id: String,
    pub has_authority: bool,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegated_from: Option<String>,
}

/// How substitutable the members of an interchangeable group are.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InterchangeabilityType {
    Full,
    Partial,
    Conditional,
}

/// A set of controllers treated as substitutable when deduplicating
/// refined combinations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterchangeableControllerGroup {
    pub id: String,
    pub name: String,
    pub interchangeability_type: InterchangeabilityType,
    pub controller_ids: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

/// Kind of a cross-cutting special interaction rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpecialInteractionKind {
    Mandatory,
    Prohibited,
    Priority,
}

/// Which UCCA type class a special interaction applies to.
///
/// `Type12` covers the combination classes (team-based, cross-controller);
/// `Type34` covers the temporal classes; `Both` always applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppliesTo {
    #[serde(rename = "type1-2")]
    Type12,
    #[serde(rename = "type3-4")]
    Type34,
    #[serde(rename = "both")]
    Both,
}

/// A cross-cutting rule layered on top of authority declarations.
///
/// Empty `controller_ids` / `control_action_ids` act as wildcards: the
/// interaction then constrains any controller / any action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecialInteraction {
    pub id: String,
    pub kind: SpecialInteractionKind,
    pub applies_to: AppliesTo,
    #[serde(default)]
    pub controller_ids: Vec<String>,
    #[serde(default)]
    pub control_action_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

/// Classification of an unsafe combination of control actions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UccaType {
    TeamBased,
    CrossController,
    Temporal,
}

impl AppliesTo {
    /// Whether this class selector matches a concrete UCCA type.
    pub fn matches(&self, ucca_type: UccaType) -> bool {
        match self {
            AppliesTo::Type12 => {
                matches!(ucca_type, UccaType::TeamBased | UccaType::CrossController)
            }
            AppliesTo::Type34 => matches!(ucca_type, UccaType::Temporal),
            AppliesTo::Both => true,
        }
    }
}

/// Refinement mode: team-level infers the controller set from authority;
/// controller-specific fixes it to the abstract UCCA's own controllers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AbstractionLevel {
    #[serde(rename = "2a")]
    TeamLevel,
    #[serde(rename = "2b")]
    ControllerSpecific,
}

/// An abstract UCCA pattern, not yet bound to specific controllers.
/// Produced by an upstream enumeration step; immutable engine input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbstractUcca {
    pub id: String,
    pub code: String,
    pub context: String,
    #[serde(default)]
    pub hazard_ids: Vec<String>,
    pub ucca_type: UccaType,
    pub abstraction_level: AbstractionLevel,
    pub abstract_pattern: String,
    #[serde(default)]
    pub relevant_actions: Vec<String>,
    #[serde(default)]
    pub involved_controller_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_relationship: Option<String>,
}

/// One structured requirement derived from an abstract pattern.
///
/// `required = false` asserts the action is NOT performed. `is_from_set`
/// marks requirements that came out of an `any of {...}` clause.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionRequirement {
    pub control_action_id: String,
    pub required: bool,
    #[serde(default)]
    pub is_from_set: bool,
}

/// The atomic unit of a concrete refinement: one controller either
/// performing or withholding one control action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ControllerAssignment {
    pub controller_id: String,
    pub control_action_id: String,
    pub performed: bool,
}

/// Priority classification of a refined UCCA.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A concrete, controller-bound instantiation of an abstract UCCA.
///
/// Created by the engine; only the priority and prune fields change after
/// construction, and only while the refinement pipeline is still running.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefinedUcca {
    pub id: String,
    pub code: String,
    pub description: String,
    pub context: String,
    pub hazard_ids: Vec<String>,
    pub ucca_type: UccaType,
    pub involved_controller_ids: Vec<String>,
    pub parent_abstract_ucca_id: String,
    pub assignments: Vec<ControllerAssignment>,
    pub priority: Priority,
    pub priority_score: u32,
    pub is_pruned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prune_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_relationship: Option<String>,
}

/// The engine's unit of output: one abstract UCCA with all of its
/// refinements, pruned items retained for traceability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UccaHierarchy {
    pub abstract_ucca: AbstractUcca,
    pub refined_uccas: Vec<RefinedUcca>,
    /// Refinement count before pruning (pruned items are retained, so this
    /// equals `refined_uccas.len()`).
    pub total_refined: usize,
    pub pruned_count: usize,
    pub high_priority_count: usize,
}
