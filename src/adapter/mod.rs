//! Authentication adapters

use crate::error::Result;
use crate::result::AuthenticationResult;

/// Common seam implemented by every authentication adapter
///
/// One adapter instance serves one authentication attempt; taking `&mut self`
/// makes concurrent calls on a shared instance a compile error rather than a
/// documented hazard.
pub trait AuthenticationAdapter {
    /// Identity type carried by a successful result
    type Identity;

    /// Perform the authentication attempt
    ///
    /// Classified outcomes (including every failure mode) come back as
    /// `Ok(result)`; only collaborator faults surface as `Err`.
    fn authenticate(&mut self) -> Result<AuthenticationResult<Self::Identity>>;
}

/// Credential verification against an abstract data source
pub mod credential;

/// Post-processing of directory-service authentication
pub mod directory;

pub use credential::{sha1_hex, CredentialAdapter, VerificationMethod};
pub use directory::{DirectoryAdapter, DirectoryService};
