//! Credential-verification adapter
//!
//! Orchestrates one authentication attempt: lookup through the data source,
//! shape normalization, cardinality check, password verification, identity
//! construction. Every branch produces a classified
//! [`AuthenticationResult`]; only collaborator faults travel as errors.

use serde_json::Value;
use sha1::{Digest, Sha1};
use tracing::debug;
use zeroize::Zeroizing;

use super::AuthenticationAdapter;
use crate::error::Result;
use crate::identity::{FieldMap, Identity, IdentityFactory, IdentityPrototype};
use crate::result::{AuthenticationResult, ResultCode};
use crate::source::{DataSource, FetchOptions, FetchResult};

/// Pluggable predicate deciding whether a supplied password matches a record
pub type VerificationMethod = Box<dyn Fn(&FieldMap, &str) -> bool + Send + Sync>;

/// Lowercase SHA-1 hex digest, the format the default verification method
/// compares against
///
/// Exposed so callers can seed stores in the shape the default expects.
pub fn sha1_hex(input: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Default method: SHA-1 hex of the supplied password against the stored
/// value under `password_field`
///
/// A record whose password field is absent, or holds a non-string value,
/// never matches; the attempt classifies as `CredentialInvalid`, not a
/// structural fault.
fn default_verification_method(password_field: String) -> VerificationMethod {
    Box::new(move |record, password| {
        match record.get(&password_field).and_then(Value::as_str) {
            Some(stored) => sha1_hex(password) == stored,
            None => false,
        }
    })
}

/// Adapter verifying one username/password pair against a [`DataSource`]
///
/// Constructed with the claimed credentials and the source, then optionally
/// configured through the consuming `with_*` builders before calling
/// [`authenticate`](AuthenticationAdapter::authenticate). The supplied
/// password is held in a [`Zeroizing`] wrapper and wiped when the adapter is
/// dropped; it is never logged or persisted.
///
/// # Example
///
/// ```
/// use verident::{
///     sha1_hex, AuthenticationAdapter, CredentialAdapter, FieldMap, MemoryDataSource,
/// };
///
/// # fn main() -> verident::Result<()> {
/// let mut record = FieldMap::new();
/// record.insert("username".into(), "teste".into());
/// record.insert("password".into(), sha1_hex("teste123").into());
///
/// let source = MemoryDataSource::new().with_record(record);
/// let mut adapter: CredentialAdapter<_> = CredentialAdapter::new("teste", "teste123", source);
///
/// let result = adapter.authenticate()?;
/// assert!(result.is_valid());
/// # Ok(())
/// # }
/// ```
pub struct CredentialAdapter<S: DataSource, I: IdentityPrototype = Identity> {
    username: String,
    password: Zeroizing<String>,
    source: S,
    username_field: String,
    password_field: String,
    options: FetchOptions,
    method: Option<VerificationMethod>,
    factory: IdentityFactory<I>,
}

impl<S: DataSource, I: IdentityPrototype> CredentialAdapter<S, I> {
    /// Create an adapter for one authentication attempt
    pub fn new(username: impl Into<String>, password: impl Into<String>, source: S) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
            source,
            username_field: "username".into(),
            password_field: "password".into(),
            options: FetchOptions::new(),
            method: None,
            factory: IdentityFactory::new(),
        }
    }

    /// Field name used as the lookup key
    pub fn with_username_field(mut self, field: impl Into<String>) -> Self {
        self.username_field = field.into();
        self
    }

    /// Field name the stored password is read from
    pub fn with_password_field(mut self, field: impl Into<String>) -> Self {
        self.password_field = field.into();
        self
    }

    /// Opaque options forwarded to the data source on lookup
    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the verification method
    ///
    /// The predicate receives the single fetched record and the supplied
    /// password. When never set, the SHA-1 default is installed on first
    /// `authenticate()`, bound to the password field configured at that
    /// point.
    pub fn with_verification_method<F>(mut self, method: F) -> Self
    where
        F: Fn(&FieldMap, &str) -> bool + Send + Sync + 'static,
    {
        self.method = Some(Box::new(method));
        self
    }

    /// Install the prototype cloned for each constructed identity
    pub fn with_identity_prototype(mut self, prototype: I) -> Self {
        self.factory.set_prototype(prototype);
        self
    }

    /// Configured username field name
    pub fn username_field(&self) -> &str {
        &self.username_field
    }

    /// Configured password field name
    pub fn password_field(&self) -> &str {
        &self.password_field
    }

    /// Configured lookup options
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }
}

impl<S: DataSource, I: IdentityPrototype + Default> AuthenticationAdapter
    for CredentialAdapter<S, I>
{
    type Identity = I;

    fn authenticate(&mut self) -> Result<AuthenticationResult<I>> {
        debug!(
            "looking up user '{}' by field '{}'",
            self.username, self.username_field
        );
        let mut criteria = FieldMap::new();
        criteria.insert(
            self.username_field.clone(),
            Value::String(self.username.clone()),
        );
        let fetched = self.source.fetch_all(&criteria, &self.options)?;

        let records = match fetched {
            FetchResult::Records(records) => records,
            FetchResult::ResultSet(set) => set.into_records(),
            FetchResult::Raw(_) => {
                debug!("lookup for '{}' returned an unconvertible value", self.username);
                return Ok(AuthenticationResult::failure(
                    ResultCode::Uncategorized,
                    "The result of the data source lookup is not a record sequence and cannot be converted!",
                ));
            }
        };

        // Cardinality check, strictly before any password verification
        let mut records = records.into_iter();
        let record = match (records.next(), records.next()) {
            (None, _) => {
                debug!("user '{}' not found", self.username);
                return Ok(AuthenticationResult::failure(
                    ResultCode::IdentityNotFound,
                    format!("User {} is not found!", self.username),
                ));
            }
            (Some(_), Some(_)) => {
                debug!("ambiguous match for user '{}'", self.username);
                return Ok(AuthenticationResult::failure(
                    ResultCode::IdentityAmbiguous,
                    format!("Exists more than 1 user with '{}' username!", self.username),
                ));
            }
            (Some(record), None) => record,
        };

        let method = self.method.get_or_insert_with({
            let field = self.password_field.clone();
            move || default_verification_method(field)
        });

        if method(&record, self.password.as_str()) {
            debug!("user '{}' authenticated", self.username);
            let identity = self.factory.create_identity(record);
            Ok(AuthenticationResult::success(
                identity,
                "Successful authentication!",
            ))
        } else {
            debug!("invalid password for user '{}'", self.username);
            Ok(AuthenticationResult::failure(
                ResultCode::CredentialInvalid,
                "Invalid password!",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryDataSource;
    use serde_json::json;

    fn record(entries: &[(&str, Value)]) -> FieldMap {
        entries.iter().cloned().map(|(k, v)| (k.into(), v)).collect()
    }

    #[test]
    fn sha1_hex_known_vector() {
        assert_eq!(sha1_hex("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn default_field_names() {
        let adapter: CredentialAdapter<MemoryDataSource> =
            CredentialAdapter::new("teste", "teste123", MemoryDataSource::new());
        assert_eq!(adapter.username_field(), "username");
        assert_eq!(adapter.password_field(), "password");
        assert!(adapter.options().is_empty());
    }

    #[test]
    fn record_without_password_field_is_credential_invalid() {
        let source = MemoryDataSource::new()
            .with_record(record(&[("username", json!("teste"))]));
        let mut adapter: CredentialAdapter<_> =
            CredentialAdapter::new("teste", "teste123", source);

        let result = adapter.authenticate().unwrap();
        assert_eq!(result.code(), ResultCode::CredentialInvalid);
    }

    #[test]
    fn non_string_stored_password_never_matches() {
        let source = MemoryDataSource::new().with_record(record(&[
            ("username", json!("teste")),
            ("password", json!(42)),
        ]));
        let mut adapter: CredentialAdapter<_> =
            CredentialAdapter::new("teste", "teste123", source);

        let result = adapter.authenticate().unwrap();
        assert_eq!(result.code(), ResultCode::CredentialInvalid);
    }

    #[test]
    fn default_method_binds_the_configured_password_field() {
        let source = MemoryDataSource::new().with_record(record(&[
            ("username", json!("teste")),
            ("pass", json!(sha1_hex("teste123"))),
        ]));
        let mut adapter: CredentialAdapter<_> =
            CredentialAdapter::new("teste", "teste123", source).with_password_field("pass");

        let result = adapter.authenticate().unwrap();
        assert!(result.is_valid());
    }
}
