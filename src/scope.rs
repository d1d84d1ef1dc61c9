//! Scope resolution protocol
//!
//! A scope names the relationship between the requesting user and the
//! specific object under access. Domain entities that carry scope-sensitive
//! policies implement [`ScopeResolver`]; the enforcer calls it at most once
//! per enforcement and treats the returned scope as opaque.

use crate::types::Scope;
use uuid::Uuid;

/// Per-entity capability: compute the scope of a user relative to `self`.
///
/// Implementations must be pure and synchronous. The scope is derived from
/// entity state already in memory; no I/O happens here. For owning entities
/// the canonical rule is: owner identity equals `user_id` yields the
/// entity's owner scope, anything else yields [`Scope::OTHER`].
///
/// Returning [`Scope::ANY`] or a scope containing `:` is a programmer
/// error; enforcement rejects the request instead of evaluating it.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use warden::{Scope, ScopeResolver};
///
/// const SCOPE_OWNER: Scope = Scope::from_static("owner");
///
/// struct Note {
///     owner_id: Uuid,
/// }
///
/// impl ScopeResolver for Note {
///     fn resolve_scope(&self, user_id: Uuid) -> Scope {
///         if self.owner_id == user_id {
///             SCOPE_OWNER
///         } else {
///             Scope::OTHER
///         }
///     }
/// }
///
/// let owner = Uuid::new_v4();
/// let note = Note { owner_id: owner };
/// assert_eq!(note.resolve_scope(owner), SCOPE_OWNER);
/// assert_eq!(note.resolve_scope(Uuid::new_v4()), Scope::OTHER);
/// ```
pub trait ScopeResolver {
    /// Scope of `user_id` relative to this entity
    fn resolve_scope(&self, user_id: Uuid) -> Scope;
}

/// Closures resolve scopes directly, which keeps one-off resolvers free of
/// a named type.
impl<F> ScopeResolver for F
where
    F: Fn(Uuid) -> Scope,
{
    fn resolve_scope(&self, user_id: Uuid) -> Scope {
        self(user_id)
    }
}
