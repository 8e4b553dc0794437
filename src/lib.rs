//! # Verident
//!
//! Pluggable credential verification with prototype-cloned identities.
//!
//! Given a claimed username and password, a [`CredentialAdapter`] looks up
//! matching records through an abstract [`DataSource`], requires exactly one
//! match, checks the supplied password with a configurable verification
//! method (default: SHA-1 hex digest comparison), and on success clones a
//! prototype [`Identity`] loaded with the record. Every attempt returns a
//! classified [`AuthenticationResult`]; only collaborator faults surface as
//! errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use verident::{
//!     sha1_hex, AuthenticationAdapter, CredentialAdapter, FieldMap, MemoryDataSource,
//!     ResultCode,
//! };
//!
//! fn main() -> verident::Result<()> {
//!     let mut record = FieldMap::new();
//!     record.insert("username".into(), "teste".into());
//!     record.insert("password".into(), sha1_hex("teste123").into());
//!
//!     let source = MemoryDataSource::new().with_record(record);
//!     let mut adapter: CredentialAdapter<_> =
//!         CredentialAdapter::new("teste", "teste123", source);
//!
//!     let result = adapter.authenticate()?;
//!     assert_eq!(result.code(), ResultCode::Success);
//!     let identity = result.identity().unwrap();
//!     assert_eq!(identity.get("username").and_then(|v| v.as_str()), Some("teste"));
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

/// Authentication adapters and the common adapter seam
pub mod adapter;

/// Error types for the library
pub mod error;

/// Identity container and prototype machinery
pub mod identity;

/// Classified authentication outcome
pub mod result;

/// Data source boundary and the reference in-memory source
pub mod source;

// Re-export commonly used types
pub use adapter::{
    sha1_hex, AuthenticationAdapter, CredentialAdapter, DirectoryAdapter, DirectoryService,
    VerificationMethod,
};
pub use error::{Error, Result};
pub use identity::{FieldMap, Identity, IdentityFactory, IdentityPrototype};
pub use result::{AuthenticationResult, ResultCode};
pub use source::{DataSource, FetchOptions, FetchResult, MemoryDataSource, RecordSet, VecRecordSet};
