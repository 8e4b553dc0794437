//! Identity container and prototype machinery

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

pub mod prototype;

pub use prototype::{IdentityFactory, IdentityPrototype};

/// Open-ended field mapping, the raw-record currency of the crate
pub type FieldMap = serde_json::Map<String, Value>;

/// Structured representation of an authenticated principal
///
/// An `Identity` is an ordered mapping from field name to JSON value,
/// independent of the shape of the record it was built from. It is created
/// empty (or by cloning a prototype) and mutated only through [`set`] and
/// [`replace_fields`]; [`to_map`] hands out a defensive copy, so callers can
/// never mutate an identity through an exported map.
///
/// Serialization is transparent: the serialized form of an identity is
/// exactly its field map, and `from_json(&to_json(x)?)?` restores an
/// identity with an equal map.
///
/// [`set`]: Identity::set
/// [`replace_fields`]: Identity::replace_fields
/// [`to_map`]: Identity::to_map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity {
    fields: FieldMap,
}

impl Identity {
    /// Create an empty identity
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field, returning `self` for chaining
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Look up a field, `None` if absent
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Whether a field is present
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the identity holds no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields in order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Defensive copy of the full field map
    pub fn to_map(&self) -> FieldMap {
        self.fields.clone()
    }

    /// Replace the whole field map atomically, returning `self` for chaining
    ///
    /// No partial merge: previous fields are discarded even when `fields`
    /// is empty.
    pub fn replace_fields(&mut self, fields: FieldMap) -> &mut Self {
        self.fields = fields;
        self
    }

    /// Encode the identity as a JSON object string
    ///
    /// Encodes exactly the result of [`to_map`](Identity::to_map).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }

    /// Decode an identity from a JSON object string
    ///
    /// The decoded map is installed through the bulk-replace path, so the
    /// round-trip law `from_json(&to_json(x)?)?.to_map() == x.to_map()`
    /// holds for any identity state.
    pub fn from_json(json: &str) -> Result<Self> {
        let fields: FieldMap = serde_json::from_str(json)?;
        let mut identity = Self::new();
        identity.replace_fields(fields);
        Ok(identity)
    }
}

impl From<FieldMap> for Identity {
    fn from(fields: FieldMap) -> Self {
        Self { fields }
    }
}
