//! # Action Policy
//!
//! The single source of truth for which actions each organization role may
//! perform. Every consumer (the evaluator, the effective permission listing
//! and any guard that needs a role's action set) goes through
//! [`ActionPolicy`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use tenantguard_org::OrganizationRole;

use crate::actions::Action;

/// An ordered set of actions.
///
/// Iteration and serialization follow the canonical [`Action`] order, so a
/// role's action list renders the same way every time.
///
/// # Example
///
/// ```
/// use tenantguard_rbac::{Action, ActionSet};
///
/// let set: ActionSet = [Action::Write, Action::Read].into_iter().collect();
/// assert_eq!(set.to_strings(), vec!["read", "write"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionSet {
    actions: BTreeSet<Action>,
}

impl ActionSet {
    /// Create a new empty action set.
    pub fn new() -> Self {
        Self {
            actions: BTreeSet::new(),
        }
    }

    /// Add an action to the set.
    pub fn add(&mut self, action: Action) {
        self.actions.insert(action);
    }

    /// Check if the set contains an action.
    pub fn contains(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Check if the set contains all actions from another set.
    pub fn contains_all(&self, other: &ActionSet) -> bool {
        self.actions.is_superset(&other.actions)
    }

    /// Iterate in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.actions.iter().copied()
    }

    /// Action names in canonical order.
    pub fn to_strings(&self) -> Vec<&'static str> {
        self.iter().map(|a| a.as_str()).collect()
    }

    /// Get the count of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

/// Maps organization roles to the actions they may perform.
///
/// - **Owner** → read, write, delete, manage, invite
/// - **Editor** → read, write, manage
/// - **Writer** → read, write
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionPolicy;

impl ActionPolicy {
    /// Actions granted to `role`.
    pub fn allowed_actions(role: OrganizationRole) -> ActionSet {
        let actions: &[Action] = match role {
            OrganizationRole::Owner => &[
                Action::Read,
                Action::Write,
                Action::Delete,
                Action::Manage,
                Action::Invite,
            ],
            OrganizationRole::Editor => &[Action::Read, Action::Write, Action::Manage],
            OrganizationRole::Writer => &[Action::Read, Action::Write],
        };
        actions.iter().copied().collect()
    }

    /// Check a typed action against a role.
    pub fn allows(role: OrganizationRole, action: Action) -> bool {
        Self::allowed_actions(role).contains(action)
    }

    /// Check an action name against a role.
    ///
    /// Unknown action names are denied.
    pub fn is_action_allowed(role: OrganizationRole, action: &str) -> bool {
        Action::parse(action).is_some_and(|action| Self::allows(role, action))
    }
}
