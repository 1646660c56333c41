//! Authority and interchangeability lookup indices.
//!
//! Pure construction from the declared relationship/group lists into
//! O(log n) BTreeMap lookups. Absence of a relationship or group is a
//! valid, expected state -- lookups return `None` rather than erroring.
//! Duplicate declarations resolve last-write-wins; overlapping group
//! membership is additionally recorded so callers can surface a warning.

use crate::model::{AuthorityRelationship, InterchangeableControllerGroup};
use serde::Serialize;
use std::collections::BTreeMap;

/// Lookup from (controller, control action) to its authority declaration.
#[derive(Debug, Clone, Default)]
pub struct AuthorityIndex {
    by_pair: BTreeMap<(String, String), AuthorityRelationship>,
}

impl AuthorityIndex {
    /// Build the index. Later declarations for the same (controller, action)
    /// pair replace earlier ones.
    pub fn build(relationships: &[AuthorityRelationship]) -> Self {
        let mut by_pair = BTreeMap::new();
        for rel in relationships {
            by_pair.insert(
                (rel.controller_id.clone(), rel.control_action_id.clone()),
                rel.clone(),
            );
        }
        AuthorityIndex { by_pair }
    }

    /// The declaration for (controller, action), if any.
    pub fn lookup(&self, controller_id: &str, control_action_id: &str) -> Option<&AuthorityRelationship> {
        self.by_pair
            .get(&(controller_id.to_owned(), control_action_id.to_owned()))
    }

    /// Whether the controller holds affirmative authority over the action.
    pub fn has_authority(&self, controller_id: &str, control_action_id: &str) -> bool {
        self.lookup(controller_id, control_action_id)
            .map(|rel| rel.has_authority)
            .unwrap_or(false)
    }

    /// All controllers holding affirmative authority over the action, in
    /// deterministic (controller id) order.
    pub fn authorized_controllers(&self, control_action_id: &str) -> Vec<&str> {
        self.by_pair
            .values()
            .filter(|rel| rel.control_action_id == control_action_id && rel.has_authority)
            .map(|rel| rel.controller_id.as_str())
            .collect()
    }
}

/// A controller claimed by more than one interchangeable group.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GroupOverlap {
    pub controller_id: String,
    /// All group ids that list the controller, in declaration order.
    pub group_ids: Vec<String>,
}

/// Lookup from controller to its interchangeable group.
#[derive(Debug, Clone, Default)]
pub struct InterchangeabilityIndex {
    by_controller: BTreeMap<String, InterchangeableControllerGroup>,
    overlaps: Vec<GroupOverlap>,
}

impl InterchangeabilityIndex {
    /// Build the index. A controller listed in several groups keeps the last
    /// group seen; the overlap is recorded for a warning finding.
    pub fn build(groups: &[InterchangeableControllerGroup]) -> Self {
        let mut by_controller: BTreeMap<String, InterchangeableControllerGroup> = BTreeMap::new();
        let mut claims: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for group in groups {
            for controller_id in &group.controller_ids {
                claims
                    .entry(controller_id.clone())
                    .or_default()
                    .push(group.id.clone());
                by_controller.insert(controller_id.clone(), group.clone());
            }
        }
        let overlaps = claims
            .into_iter()
            .filter(|(_, group_ids)| group_ids.len() > 1)
            .map(|(controller_id, group_ids)| GroupOverlap {
                controller_id,
                group_ids,
            })
            .collect();
        InterchangeabilityIndex {
            by_controller,
            overlaps,
        }
    }

    /// The group the controller belongs to, if any.
    pub fn group_of(&self, controller_id: &str) -> Option<&InterchangeableControllerGroup> {
        self.by_controller.get(controller_id)
    }

    /// The id used when canonicalizing assignments for deduplication:
    /// the group id when the controller is grouped, else the controller id.
    pub fn canonical_id<'a>(&'a self, controller_id: &'a str) -> &'a str {
        self.by_controller
            .get(controller_id)
            .map(|group| group.id.as_str())
            .unwrap_or(controller_id)
    }

    /// Controllers claimed by more than one group.
    pub fn overlaps(&self) -> &[GroupOverlap] {
        &self.overlaps
    }
}
