//! Core authorization value types
//!
//! Roles, resources, actions, and scopes are newtypes over strings so that
//! feature modules can declare their own identifiers as constants while the
//! reserved wildcard values stay named rather than magic. [`ObjectKey`] is
//! the encoded `resource:scope` pair the matching layer reasons about.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Reserved wildcard value shared by [`Role::ANY`], [`Action::ANY`], and
/// [`Scope::ANY`].
pub(crate) const WILDCARD: &str = "*";

/// Separator joining the resource and scope halves of an [`ObjectKey`].
/// Identifiers must not contain it.
pub(crate) const SEPARATOR: char = ':';

/// Role held by the requesting actor (e.g. `admin`, `user`, `guest`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// Wildcard role: a policy whose subject is `Role::ANY` applies to
    /// every role. Requests must always name a concrete role.
    pub const ANY: Role = Role::from_static(WILDCARD);

    /// Create a role from a runtime string
    pub fn new(role: impl Into<String>) -> Self {
        Self(Cow::Owned(role.into()))
    }

    /// Create a role from a static string, usable in `const` declarations
    pub const fn from_static(role: &'static str) -> Self {
        Self(Cow::Borrowed(role))
    }

    /// String form of the role
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of object a policy protects (e.g. `note`, `bucket`)
///
/// A resource names a kind, never an instance; instance-level distinctions
/// are expressed through scopes. Resources have no reserved wildcard and
/// must not contain the `:` separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource(Cow<'static, str>);

impl Resource {
    /// Create a resource from a runtime string
    pub fn new(resource: impl Into<String>) -> Self {
        Self(Cow::Owned(resource.into()))
    }

    /// Create a resource from a static string, usable in `const` declarations
    pub const fn from_static(resource: &'static str) -> Self {
        Self(Cow::Borrowed(resource))
    }

    /// String form of the resource
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Operation being performed (e.g. `read`, `update`, `delete`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(Cow<'static, str>);

impl Action {
    /// Wildcard action: a policy whose action is `Action::ANY` permits
    /// every action. Requests must always name a concrete action.
    pub const ANY: Action = Action::from_static(WILDCARD);

    /// Create an action from a runtime string
    pub fn new(action: impl Into<String>) -> Self {
        Self(Cow::Owned(action.into()))
    }

    /// Create an action from a static string, usable in `const` declarations
    pub const fn from_static(action: &'static str) -> Self {
        Self(Cow::Borrowed(action))
    }

    /// String form of the action
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Relationship between the requesting user and the target object
/// (e.g. `owner`)
///
/// Scopes are produced by [`ScopeResolver`](crate::ScopeResolver)
/// implementations on the request side and declared on the policy side
/// through the builder. [`Scope::ANY`] is valid only on the policy side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope(Cow<'static, str>);

impl Scope {
    /// Wildcard scope: a policy carrying `Scope::ANY` applies whatever
    /// scope the request resolves to. A resolver must never return it.
    pub const ANY: Scope = Scope::from_static(WILDCARD);

    /// Conventional scope for "no particular relationship". Resolvers
    /// return it when the user does not stand in a closer relationship
    /// (such as ownership) to the target.
    pub const OTHER: Scope = Scope::from_static("other");

    /// Create a scope from a runtime string
    pub fn new(scope: impl Into<String>) -> Self {
        Self(Cow::Owned(scope.into()))
    }

    /// Create a scope from a static string, usable in `const` declarations
    pub const fn from_static(scope: &'static str) -> Self {
        Self(Cow::Borrowed(scope))
    }

    /// String form of the scope
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Scope {
    /// The empty scope a request resolves to when no target is supplied.
    /// It matches wildcard-scoped policies and nothing else.
    fn default() -> Self {
        Scope::from_static("")
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encoded `resource:scope` pair
///
/// Both policy objects and request objects take this form, so matching is
/// a comparison between two keys rather than between loose strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectKey(pub(crate) String);

impl ObjectKey {
    /// Join a resource and a scope with the separator
    pub fn new(resource: &Resource, scope: &Scope) -> Self {
        let resource = resource.as_str();
        let scope = scope.as_str();

        let mut key = String::with_capacity(resource.len() + scope.len() + 1);
        key.push_str(resource);
        key.push(SEPARATOR);
        key.push_str(scope);

        Self(key)
    }

    /// String form of the key
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the key back into its `(resource, scope)` halves. Returns
    /// `None` for a key that carries no separator.
    pub fn split(&self) -> Option<(&str, &str)> {
        self.0.split_once(SEPARATOR)
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
