//! Refinement configuration and the prepared lookup bundle.
//!
//! `RefinementConfig` is the caller-supplied rule set; `RefinementBundle`
//! is the engine's working view of it: the built indices plus name lookup
//! maps for controllers and control actions. Construction is pure and the
//! bundle is read-only for the duration of a refinement call, so one
//! bundle can drive any number of calls.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ucca_core::{
    AuthorityIndex, AuthorityRelationship, ControlAction, Controller, InterchangeabilityIndex,
    InterchangeableControllerGroup, SpecialInteraction,
};

fn default_max_combinations() -> usize {
    10_000
}

/// Caller-supplied refinement rule set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefinementConfig {
    #[serde(default)]
    pub authority_relationships: Vec<AuthorityRelationship>,
    #[serde(default)]
    pub interchangeable_groups: Vec<InterchangeableControllerGroup>,
    #[serde(default)]
    pub special_interactions: Vec<SpecialInteraction>,
    /// Presentation hint: whether callers should hide pruned refinements.
    /// The engine always retains pruned items in its output.
    #[serde(default)]
    pub prune_equivalent: bool,
    /// Tolerate `performed = true` assignments without an affirmative
    /// authority declaration instead of rejecting the candidate.
    #[serde(default)]
    pub include_partial_authority: bool,
    /// Upper bound on generated candidates per abstract UCCA.
    #[serde(default = "default_max_combinations")]
    pub max_combinations: usize,
}

impl Default for RefinementConfig {
    fn default() -> Self {
        RefinementConfig {
            authority_relationships: Vec::new(),
            interchangeable_groups: Vec::new(),
            special_interactions: Vec::new(),
            prune_equivalent: false,
            include_partial_authority: false,
            max_combinations: default_max_combinations(),
        }
    }
}

/// The engine's prepared, read-only view of one configuration.
#[derive(Debug, Clone)]
pub struct RefinementBundle {
    pub config: RefinementConfig,
    pub controllers: Vec<Controller>,
    pub control_actions: Vec<ControlAction>,
    pub authority: AuthorityIndex,
    pub interchangeability: InterchangeabilityIndex,
    controller_names: BTreeMap<String, String>,
    action_names: BTreeMap<String, String>,
}

impl RefinementBundle {
    /// Build the working bundle: indices plus name lookup maps.
    pub fn build(
        config: RefinementConfig,
        controllers: Vec<Controller>,
        control_actions: Vec<ControlAction>,
    ) -> Self {
        let authority = AuthorityIndex::build(&config.authority_relationships);
        let interchangeability = InterchangeabilityIndex::build(&config.interchangeable_groups);
        let controller_names = controllers
            .iter()
            .map(|c| (c.id.clone(), c.name.clone()))
            .collect();
        let action_names = control_actions
            .iter()
            .map(|a| (a.id.clone(), a.name.clone()))
            .collect();
        RefinementBundle {
            config,
            controllers,
            control_actions,
            authority,
            interchangeability,
            controller_names,
            action_names,
        }
    }

    /// Display name of a controller; falls back to the raw id.
    pub fn controller_name<'a>(&'a self, controller_id: &'a str) -> &'a str {
        self.controller_names
            .get(controller_id)
            .map(String::as_str)
            .unwrap_or(controller_id)
    }

    /// Display name of a control action; falls back to the raw id.
    pub fn action_name<'a>(&'a self, control_action_id: &'a str) -> &'a str {
        self.action_names
            .get(control_action_id)
            .map(String::as_str)
            .unwrap_or(control_action_id)
    }

    /// Resolve a pattern name to a control action id: exact name match
    /// first, then id match. Returns None for unresolvable names.
    pub fn resolve_action(&self, name: &str) -> Option<&str> {
        self.control_actions
            .iter()
            .find(|a| a.name == name)
            .or_else(|| self.control_actions.iter().find(|a| a.id == name))
            .map(|a| a.id.as_str())
    }

    /// All known controller ids, in declaration order.
    pub fn controller_ids(&self) -> Vec<&str> {
        self.controllers.iter().map(|c| c.id.as_str()).collect()
    }
}
