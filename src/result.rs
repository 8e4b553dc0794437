//! Classified authentication outcome

/// Classification code of one authentication attempt
///
/// A closed set: every attempt that returns at all returns exactly one of
/// these. Failure codes are outcomes, not errors — collaborator faults
/// travel as [`Error`](crate::Error) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// Authentication succeeded; an identity payload is present
    Success,
    /// The supplied password did not match the record
    CredentialInvalid,
    /// No record matched the claimed username
    IdentityNotFound,
    /// More than one record matched the claimed username
    IdentityAmbiguous,
    /// The data source returned a value that could not be normalized
    Uncategorized,
}

impl ResultCode {
    /// Whether this code denotes a successful authentication
    pub fn is_valid(self) -> bool {
        self == ResultCode::Success
    }
}

/// Outcome of one authentication attempt
///
/// A value type, immutable once constructed: a [`ResultCode`], an optional
/// identity payload, and a non-empty list of human-readable messages. The
/// identity is guaranteed present only when the code is
/// [`ResultCode::Success`]; callers must check the code before trusting the
/// payload.
///
/// Generic over the identity payload so a directory collaborator can yield
/// `AuthenticationResult<String>` (the raw principal) while adapters yield
/// results carrying their configured identity type.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticationResult<I> {
    code: ResultCode,
    identity: Option<I>,
    messages: Vec<String>,
}

impl<I> AuthenticationResult<I> {
    /// Assemble a result from its parts
    pub fn new(code: ResultCode, identity: Option<I>, messages: Vec<String>) -> Self {
        debug_assert!(!messages.is_empty(), "a result carries at least one message");
        Self {
            code,
            identity,
            messages,
        }
    }

    /// Successful outcome carrying `identity`
    pub fn success(identity: I, message: impl Into<String>) -> Self {
        Self::new(ResultCode::Success, Some(identity), vec![message.into()])
    }

    /// Failed outcome with no identity payload
    pub fn failure(code: ResultCode, message: impl Into<String>) -> Self {
        debug_assert!(code != ResultCode::Success, "failure takes a failure code");
        Self::new(code, None, vec![message.into()])
    }

    /// Classification code
    pub fn code(&self) -> ResultCode {
        self.code
    }

    /// Whether the attempt succeeded
    pub fn is_valid(&self) -> bool {
        self.code.is_valid()
    }

    /// Identity payload, present only on success
    pub fn identity(&self) -> Option<&I> {
        self.identity.as_ref()
    }

    /// Consume the result, yielding the identity payload
    pub fn into_identity(self) -> Option<I> {
        self.identity
    }

    /// Human-readable messages, never empty
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Decompose into `(code, identity, messages)`
    pub fn into_parts(self) -> (ResultCode, Option<I>, Vec<String>) {
        (self.code, self.identity, self.messages)
    }
}
