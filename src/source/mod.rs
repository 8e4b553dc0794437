//! Data source boundary
//!
//! The record store that executes lookups is an external collaborator; this
//! module defines only its interface. A source answers a criteria map with a
//! [`FetchResult`]: a ready record sequence, an object carrying a to-records
//! capability, or a raw backend value the adapter will classify as
//! uncategorized. Infrastructure faults are returned as `Err` and propagate
//! through `authenticate()` unmodified.

use serde_json::Value;

use crate::error::Result;
use crate::identity::FieldMap;

pub mod memory;

pub use memory::MemoryDataSource;

/// Opaque lookup options forwarded to the source unmodified
pub type FetchOptions = FieldMap;

/// Object with a to-records capability
///
/// The typed rendition of "result object convertible to an array": a buffer
/// a source may hand back instead of a plain record vector.
pub trait RecordSet: Send {
    /// Consume the set, yielding its records
    fn into_records(self: Box<Self>) -> Vec<FieldMap>;
}

/// Materialized record buffer
#[derive(Debug, Clone, Default)]
pub struct VecRecordSet {
    records: Vec<FieldMap>,
}

impl VecRecordSet {
    /// Wrap an already-materialized row buffer
    pub fn new(records: Vec<FieldMap>) -> Self {
        Self { records }
    }
}

impl RecordSet for VecRecordSet {
    fn into_records(self: Box<Self>) -> Vec<FieldMap> {
        self.records
    }
}

impl From<Vec<FieldMap>> for VecRecordSet {
    fn from(records: Vec<FieldMap>) -> Self {
        Self::new(records)
    }
}

/// Value returned by a lookup, before shape normalization
pub enum FetchResult {
    /// A ready sequence of records
    Records(Vec<FieldMap>),
    /// An object that can be converted into records
    ResultSet(Box<dyn RecordSet>),
    /// A backend value with no conversion capability
    ///
    /// Deliberately not coerced even when the JSON happens to be an array:
    /// only the explicit [`RecordSet`] capability converts, so normalization
    /// stays deterministic. Adapters classify this as `Uncategorized`.
    Raw(Value),
}

impl std::fmt::Debug for FetchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchResult::Records(records) => f.debug_tuple("Records").field(records).finish(),
            FetchResult::ResultSet(_) => f.debug_tuple("ResultSet").finish(),
            FetchResult::Raw(value) => f.debug_tuple("Raw").field(value).finish(),
        }
    }
}

/// Record store collaborator executing lookups
///
/// Records are field maps; no schema is enforced beyond the field names an
/// adapter is configured with being present when needed.
pub trait DataSource: Send + Sync {
    /// Fetch every record matching `criteria`, forwarding `options` opaquely
    fn fetch_all(&self, criteria: &FieldMap, options: &FetchOptions) -> Result<FetchResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn vec_record_set_yields_its_records() {
        let mut record = FieldMap::new();
        record.insert("username".into(), json!("teste"));
        let set: Box<dyn RecordSet> = Box::new(VecRecordSet::from(vec![record.clone()]));
        assert_eq!(set.into_records(), vec![record]);
    }

    #[test]
    fn empty_record_set_yields_nothing() {
        let set: Box<dyn RecordSet> = Box::new(VecRecordSet::default());
        assert!(set.into_records().is_empty());
    }
}
