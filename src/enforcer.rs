//! Policy enforcement engine
//!
//! The enforcer owns the policy store and answers one question: may this
//! user, holding this role, perform this action on this resource, given the
//! scope the target resolves for them. Evaluation is a linear scan over the
//! stored allow rules with three AND-combined predicates; a request that
//! matches none is denied.

use crate::error::{AuthzError, ForbiddenError, Result};
use crate::policy::{MemoryPolicyStore, Policy, PolicyStore};
use crate::scope::ScopeResolver;
use crate::types::{Action, ObjectKey, Resource, Role, Scope, SEPARATOR, WILDCARD};
use tracing::{debug, info};
use uuid::Uuid;

/// Deny-by-default policy enforcer
///
/// Built once at bootstrap: feature modules hand their policy tables to
/// [`add_policies`](Enforcer::add_policies) during single-threaded startup,
/// after which the set is read-only and [`enforce`](Enforcer::enforce)
/// serves checks through `&self`. Sharing the enforcer (e.g. behind an
/// `Arc`) makes further mutation unrepresentable, which is exactly the
/// intended phase split.
pub struct Enforcer {
    store: Box<dyn PolicyStore>,
}

impl Enforcer {
    /// Create an enforcer backed by the in-memory store
    pub fn new() -> Self {
        Self::with_store(MemoryPolicyStore::new())
    }

    /// Create an enforcer backed by a caller-supplied store
    pub fn with_store(store: impl PolicyStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Register policy tables, one per feature module
    ///
    /// Registration is idempotent: a policy identical to one already stored
    /// is skipped and the remaining entries of the same call still register.
    /// Fails only when the underlying store does; duplicates are never an
    /// error.
    pub fn add_policies(
        &mut self,
        tables: impl IntoIterator<Item = Vec<Policy>>,
    ) -> Result<()> {
        for table in tables {
            let total = table.len();
            let mut added = 0usize;

            for policy in table {
                if self.store.insert(policy)? {
                    added += 1;
                }
            }

            info!(
                "policy table registered: {} added, {} duplicates skipped",
                added,
                total - added
            );
        }

        Ok(())
    }

    /// Check whether `user_id`, holding `role`, may perform `action` on
    /// `resource`, optionally qualified by `target`
    ///
    /// # Evaluation
    ///
    /// 1. Validate the request side. Reserved wildcards or a
    ///    separator-bearing resource fail loudly before any policy is
    ///    consulted.
    /// 2. Resolve the scope through `target`, falling back to the empty
    ///    scope when no target is supplied.
    /// 3. Encode the request object key and scan the stored policies. The
    ///    request is permitted if any single policy matches subject, object,
    ///    and action together.
    ///
    /// # Arguments
    ///
    /// * `user_id` - identity of the requesting user
    /// * `role` - role the user holds for this request
    /// * `resource` - resource kind under access
    /// * `action` - action being attempted
    /// * `target` - the specific object under access, supplied when its
    ///   policies are scope-sensitive
    ///
    /// # Returns
    ///
    /// `Ok(())` when permitted. [`AuthzError::Forbidden`] when no policy
    /// matches. Callers must not proceed with the protected operation on
    /// any error.
    pub fn enforce(
        &self,
        user_id: Uuid,
        role: &Role,
        resource: &Resource,
        action: &Action,
        target: Option<&dyn ScopeResolver>,
    ) -> Result<()> {
        validate_request(role, resource, action)?;

        let scope = match target {
            Some(target) => target.resolve_scope(user_id),
            None => Scope::default(),
        };
        validate_scope(&scope)?;

        let object = ObjectKey::new(resource, &scope);

        let allowed = self
            .store
            .policies()
            .iter()
            .any(|policy| policy_matches(policy, role, &object, action));

        if allowed {
            debug!(
                "allow: user={} role={} object={} action={}",
                user_id, role, object, action
            );
            return Ok(());
        }

        debug!(
            "deny: user={} role={} object={} action={}",
            user_id, role, object, action
        );
        Err(AuthzError::Forbidden(ForbiddenError::new(
            user_id,
            resource.clone(),
            action.clone(),
            "policy deny",
        )))
    }

    /// Stored policies in insertion order
    pub fn policies(&self) -> &[Policy] {
        self.store.policies()
    }

    /// Number of stored policies
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no policies are registered
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for Enforcer {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_request(role: &Role, resource: &Resource, action: &Action) -> Result<()> {
    if role.as_str().is_empty() {
        return Err(AuthzError::InvalidRequest("role is empty".to_string()));
    }
    if resource.as_str().is_empty() {
        return Err(AuthzError::InvalidRequest("resource is empty".to_string()));
    }
    if action.as_str().is_empty() {
        return Err(AuthzError::InvalidRequest("action is empty".to_string()));
    }

    if *role == Role::ANY {
        return Err(AuthzError::InvalidRequest(
            "request role must be concrete, not the wildcard".to_string(),
        ));
    }
    if *action == Action::ANY {
        return Err(AuthzError::InvalidRequest(
            "request action must be concrete, not the wildcard".to_string(),
        ));
    }
    if resource.as_str() == WILDCARD {
        return Err(AuthzError::InvalidRequest(
            "request resource must be concrete, not the wildcard".to_string(),
        ));
    }
    if resource.as_str().contains(SEPARATOR) {
        return Err(AuthzError::InvalidRequest(format!(
            "resource must not contain '{}': {}",
            SEPARATOR, resource
        )));
    }

    Ok(())
}

fn validate_scope(scope: &Scope) -> Result<()> {
    if *scope == Scope::ANY {
        return Err(AuthzError::InvalidRequest(
            "scope resolver returned the wildcard scope".to_string(),
        ));
    }
    if scope.as_str().contains(SEPARATOR) {
        return Err(AuthzError::InvalidRequest(format!(
            "scope resolver returned a scope containing '{}': {}",
            SEPARATOR, scope
        )));
    }

    Ok(())
}

fn policy_matches(policy: &Policy, role: &Role, object: &ObjectKey, action: &Action) -> bool {
    subject_match(&policy.subject, role)
        && object_match(&policy.object, object)
        && action_match(&policy.action, action)
}

fn subject_match(policy_subject: &Role, request_subject: &Role) -> bool {
    policy_subject == request_subject || *policy_subject == Role::ANY
}

/// Match the policy object key against the request object key.
///
/// Permits an exact match (`note:owner` vs `note:owner`), or a wildcard
/// scope on the policy side when the resource halves agree: `note:*`
/// covers `note:owner` and `note:other` but never `image:owner`.
///
/// A key missing the separator on either side falls through to false.
fn object_match(policy_object: &ObjectKey, request_object: &ObjectKey) -> bool {
    if policy_object == request_object {
        return true;
    }

    let Some((policy_resource, policy_scope)) = policy_object.split() else {
        return false;
    };
    let Some((request_resource, _)) = request_object.split() else {
        return false;
    };

    policy_resource == request_resource && policy_scope == WILDCARD
}

fn action_match(policy_action: &Action, request_action: &Action) -> bool {
    policy_action == request_action || *policy_action == Action::ANY
}
