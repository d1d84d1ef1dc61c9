//! # Warden
//!
//! Scope-aware policy authorization engine.
//!
//! Warden decides, for every protected operation, whether an actor (user
//! identity plus role) may perform an action on a resource, optionally
//! qualified by a runtime-computed relationship between the actor and the
//! specific target object, such as ownership.
//!
//! ## Features
//!
//! - **Deny by default** - the policy language is additive allow rules;
//!   requests matching none are refused
//! - **Scope-qualified grants** - a grant can require a relationship
//!   (e.g. `owner`) resolved per request through [`ScopeResolver`]
//! - **Wildcard matching** - [`Role::ANY`], [`Action::ANY`], and
//!   [`Scope::ANY`] cover whole dimensions on the policy side
//! - **Fluent policy tables** - feature modules declare grants with the
//!   [`grant`] builder chain, expand them with [`define`], and register
//!   them at startup
//! - **Typed denials** - refused requests surface as [`ForbiddenError`]
//!   with an HTTP status classification for transport layers
//!
//! ## Example
//!
//! ```rust
//! use uuid::Uuid;
//! use warden::{define, grant, Action, Enforcer, Resource, Role};
//!
//! const ADMIN: Role = Role::from_static("admin");
//! const GUEST: Role = Role::from_static("guest");
//! const NOTE: Resource = Resource::from_static("note");
//! const READ: Action = Action::from_static("read");
//! const DELETE: Action = Action::from_static("delete");
//!
//! fn main() -> Result<(), warden::AuthzError> {
//!     let mut enforcer = Enforcer::new();
//!     enforcer.add_policies([define([
//!         grant(ADMIN).regardless().on(NOTE).can([Action::ANY]),
//!         grant(GUEST).regardless().on(NOTE).can([READ]),
//!     ])])?;
//!
//!     let user = Uuid::new_v4();
//!     enforcer.enforce(user, &GUEST, &NOTE, &READ, None)?;
//!     assert!(enforcer.enforce(user, &GUEST, &NOTE, &DELETE, None).is_err());
//!
//!     Ok(())
//! }
//! ```

pub mod enforcer;
pub mod error;
pub mod policy;
pub mod scope;
pub mod types;

// Re-export commonly used types
pub use enforcer::Enforcer;
pub use error::{AuthzError, ForbiddenError, Result};
pub use policy::{define, grant, MemoryPolicyStore, Policy, PolicyDefinition, PolicyStore};
pub use scope::ScopeResolver;
pub use types::{Action, ObjectKey, Resource, Role, Scope};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
