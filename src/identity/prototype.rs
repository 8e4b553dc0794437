//! Prototype-cloned identity construction
//!
//! Any adapter that must emit typed identities instead of raw records embeds
//! an [`IdentityFactory`] by explicit delegation. The factory owns a
//! prototype instance and, per authentication, clones it and bulk-loads the
//! fetched record into the clone. The prototype itself is never mutated, so
//! identities produced across many attempts never contaminate each other.

use super::{FieldMap, Identity};

/// Capability a type needs to serve as an identity prototype
///
/// Conformance is a compile-time check: a prototype must be cloneable and
/// must accept a wholesale state replacement from a raw record map.
pub trait IdentityPrototype: Clone {
    /// Replace the whole internal state from a record map
    fn replace_fields(&mut self, fields: FieldMap);
}

impl IdentityPrototype for Identity {
    fn replace_fields(&mut self, fields: FieldMap) {
        Identity::replace_fields(self, fields);
    }
}

/// Composable holder for the prototype-clone construction capability
#[derive(Debug, Clone)]
pub struct IdentityFactory<I: IdentityPrototype> {
    prototype: Option<I>,
}

impl<I: IdentityPrototype> IdentityFactory<I> {
    /// Create a factory with no prototype installed yet
    pub fn new() -> Self {
        Self { prototype: None }
    }

    /// Install the prototype to clone identities from
    pub fn set_prototype(&mut self, prototype: I) {
        self.prototype = Some(prototype);
    }
}

impl<I: IdentityPrototype + Default> IdentityFactory<I> {
    /// Current prototype, lazily installing `I::default()` if never set
    pub fn prototype(&mut self) -> &I {
        self.prototype.get_or_insert_with(I::default)
    }

    /// Produce a fresh identity for `record`
    ///
    /// Clones the current prototype and bulk-loads `record` into the clone.
    /// The stored prototype is left untouched.
    pub fn create_identity(&mut self, record: FieldMap) -> I {
        let mut identity = self.prototype().clone();
        identity.replace_fields(record);
        identity
    }
}

impl<I: IdentityPrototype> Default for IdentityFactory<I> {
    fn default() -> Self {
        Self::new()
    }
}
