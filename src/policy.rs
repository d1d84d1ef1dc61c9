//! Policy model, definition builder, and storage
//!
//! Feature modules declare grants with the [`grant`] builder chain, expand
//! them into [`Policy`] triples with [`define`], and hand the resulting
//! tables to the enforcer at startup. The policy language is additive:
//! every policy is an allow rule, and requests matching none are denied.

use crate::error::Result;
use crate::types::{Action, ObjectKey, Resource, Role, Scope};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single allow rule: `subject` may perform `action` on `object`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Policy {
    /// Role the rule applies to, [`Role::ANY`] for every role
    pub subject: Role,
    /// Encoded `resource:scope` the rule covers
    pub object: ObjectKey,
    /// Action the rule permits, [`Action::ANY`] for every action
    pub action: Action,
}

/// One grant line: a role, a scope, a resource, and the permitted actions
///
/// Produced by the [`grant`] chain and expanded into concrete [`Policy`]
/// triples by [`define`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDefinition {
    /// Role receiving the grant
    pub role: Role,
    /// Scope the grant is limited to, [`Scope::ANY`] for all
    pub scope: Scope,
    /// Resource the grant covers
    pub resource: Resource,
    /// Actions the grant permits
    pub actions: Vec<Action>,
}

/// Expand definitions into policy triples, one per action
///
/// Input order is preserved so that dumps and tests are deterministic;
/// evaluation never depends on it.
pub fn define(definitions: impl IntoIterator<Item = PolicyDefinition>) -> Vec<Policy> {
    let mut policies = Vec::new();
    for definition in definitions {
        for action in &definition.actions {
            policies.push(Policy {
                subject: definition.role.clone(),
                object: ObjectKey::new(&definition.resource, &definition.scope),
                action: action.clone(),
            });
        }
    }
    policies
}

/// Start a grant line for `role`
///
/// # Examples
///
/// ```
/// use warden::{define, grant, Action, Resource, Role, Scope};
///
/// const USER: Role = Role::from_static("user");
/// const NOTE: Resource = Resource::from_static("note");
/// const OWNER: Scope = Scope::from_static("owner");
///
/// let policies = define([
///     grant(USER).scoped(OWNER).on(NOTE).can([
///         Action::from_static("update"),
///         Action::from_static("delete"),
///     ]),
/// ]);
/// assert_eq!(policies.len(), 2);
/// assert_eq!(policies[0].object.as_str(), "note:owner");
/// ```
pub fn grant(role: Role) -> PolicyBuilder {
    PolicyBuilder { role }
}

/// Grant with the role fixed; awaiting a scope
#[derive(Debug)]
pub struct PolicyBuilder {
    role: Role,
}

impl PolicyBuilder {
    /// Limit the grant to requests resolving to `scope`
    pub fn scoped(self, scope: Scope) -> ScopedPolicyBuilder {
        ScopedPolicyBuilder {
            role: self.role,
            scope,
        }
    }

    /// Shorthand for `.scoped(Scope::ANY)`: the grant applies whatever
    /// scope the request resolves to
    pub fn regardless(self) -> ScopedPolicyBuilder {
        self.scoped(Scope::ANY)
    }
}

/// Grant with role and scope fixed; awaiting a resource
#[derive(Debug)]
pub struct ScopedPolicyBuilder {
    role: Role,
    scope: Scope,
}

impl ScopedPolicyBuilder {
    /// Name the resource the grant covers
    pub fn on(self, resource: Resource) -> ResourcedPolicyBuilder {
        ResourcedPolicyBuilder {
            role: self.role,
            scope: self.scope,
            resource,
        }
    }
}

/// Grant with role, scope, and resource fixed; awaiting actions
#[derive(Debug)]
pub struct ResourcedPolicyBuilder {
    role: Role,
    scope: Scope,
    resource: Resource,
}

impl ResourcedPolicyBuilder {
    /// Name the permitted actions, completing the grant
    pub fn can(self, actions: impl IntoIterator<Item = Action>) -> PolicyDefinition {
        PolicyDefinition {
            role: self.role,
            scope: self.scope,
            resource: self.resource,
            actions: actions.into_iter().collect(),
        }
    }
}

/// Append-only storage for the policy set
///
/// The engine ships [`MemoryPolicyStore`] and nothing else. The trait keeps
/// registration failure a real, testable error path and lets tests
/// substitute a failing double.
pub trait PolicyStore: Send + Sync {
    /// Insert a policy. `Ok(false)` means an identical policy was already
    /// present and nothing changed.
    fn insert(&mut self, policy: Policy) -> Result<bool>;

    /// All stored policies, in insertion order
    fn policies(&self) -> &[Policy];

    /// Number of stored policies
    fn len(&self) -> usize;

    /// Whether the store holds no policies
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory policy store
///
/// A vector keeps stable insertion order for dumps; a hash index makes
/// duplicate detection O(1).
#[derive(Debug, Default)]
pub struct MemoryPolicyStore {
    policies: Vec<Policy>,
    index: HashSet<Policy>,
}

impl MemoryPolicyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl PolicyStore for MemoryPolicyStore {
    fn insert(&mut self, policy: Policy) -> Result<bool> {
        if self.index.contains(&policy) {
            return Ok(false);
        }

        self.index.insert(policy.clone());
        self.policies.push(policy);
        Ok(true)
    }

    fn policies(&self) -> &[Policy] {
        &self.policies
    }

    fn len(&self) -> usize {
        self.policies.len()
    }
}
