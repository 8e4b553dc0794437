//! Directory-service adapter variant
//!
//! Wraps an external directory-authentication call and re-derives a typed
//! identity from the principal string it returns. Demonstrates that the
//! prototype-clone construction contract is reusable across heterogeneous
//! authentication back-ends.

use serde_json::Value;
use tracing::debug;

use super::AuthenticationAdapter;
use crate::error::Result;
use crate::identity::{FieldMap, Identity, IdentityFactory, IdentityPrototype};
use crate::result::AuthenticationResult;

/// Directory (LDAP-style) authentication collaborator
///
/// The transport is external; all this crate needs is a classified result
/// whose identity payload, when present, is the raw principal string of the
/// form `account@domain`.
pub trait DirectoryService: Send + Sync {
    /// Perform the external directory authentication call
    fn authenticate(&mut self) -> Result<AuthenticationResult<String>>;
}

/// Adapter normalizing a directory-service result into a typed identity
///
/// After the external call returns, a result with no principal passes
/// through unchanged. A result carrying a principal is rebuilt with the same
/// code and messages but a fresh identity holding the account segment of the
/// principal under `"accountName"`.
pub struct DirectoryAdapter<D: DirectoryService, I: IdentityPrototype = Identity> {
    service: D,
    factory: IdentityFactory<I>,
}

impl<D: DirectoryService, I: IdentityPrototype> DirectoryAdapter<D, I> {
    /// Wrap a directory-service collaborator
    pub fn new(service: D) -> Self {
        Self {
            service,
            factory: IdentityFactory::new(),
        }
    }

    /// Install the prototype cloned for each constructed identity
    pub fn with_identity_prototype(mut self, prototype: I) -> Self {
        self.factory.set_prototype(prototype);
        self
    }
}

impl<D: DirectoryService, I: IdentityPrototype + Default> AuthenticationAdapter
    for DirectoryAdapter<D, I>
{
    type Identity = I;

    fn authenticate(&mut self) -> Result<AuthenticationResult<I>> {
        let result = self.service.authenticate()?;
        let (code, principal, messages) = result.into_parts();

        let principal = match principal {
            Some(principal) => principal,
            None => {
                debug!("directory result carried no principal, passing through");
                return Ok(AuthenticationResult::new(code, None, messages));
            }
        };

        // `account@domain`; a principal with no `@` is used whole
        let account = match principal.split_once('@') {
            Some((account, _)) => account,
            None => principal.as_str(),
        };
        debug!("normalized directory principal to account '{account}'");

        let mut record = FieldMap::new();
        record.insert("accountName".into(), Value::String(account.to_string()));
        let identity = self.factory.create_identity(record);

        Ok(AuthenticationResult::new(code, Some(identity), messages))
    }
}
