//! In-memory data source

use super::{DataSource, FetchOptions, FetchResult};
use crate::error::Result;
use crate::identity::FieldMap;

/// Reference in-memory [`DataSource`]
///
/// Holds a seeded record vector and answers lookups by exact-equality
/// filtering: a record matches when every criteria entry equals the record's
/// value under the same field name. Lookup options are accepted and ignored.
/// Intended for tests, doctests, and as the reference implementation for
/// data-source authors.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataSource {
    records: Vec<FieldMap>,
}

impl MemoryDataSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, consuming style
    pub fn with_record(mut self, record: FieldMap) -> Self {
        self.records.push(record);
        self
    }

    /// Seed a record in place
    pub fn push_record(&mut self, record: FieldMap) {
        self.records.push(record);
    }

    /// Number of seeded records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the source holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DataSource for MemoryDataSource {
    fn fetch_all(&self, criteria: &FieldMap, _options: &FetchOptions) -> Result<FetchResult> {
        let matches = self
            .records
            .iter()
            .filter(|record| {
                criteria
                    .iter()
                    .all(|(field, value)| record.get(field) == Some(value))
            })
            .cloned()
            .collect();
        Ok(FetchResult::Records(matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(username: &str, role: &str) -> FieldMap {
        let mut record = FieldMap::new();
        record.insert("username".into(), json!(username));
        record.insert("role".into(), json!(role));
        record
    }

    fn criteria(field: &str, value: &str) -> FieldMap {
        let mut criteria = FieldMap::new();
        criteria.insert(field.into(), json!(value));
        criteria
    }

    fn records_of(result: FetchResult) -> Vec<FieldMap> {
        match result {
            FetchResult::Records(records) => records,
            other => panic!("expected records, got {other:?}"),
        }
    }

    #[test]
    fn filters_by_exact_equality() {
        let source = MemoryDataSource::new()
            .with_record(record("teste", "admin"))
            .with_record(record("other", "user"));

        let found = records_of(
            source
                .fetch_all(&criteria("username", "teste"), &FetchOptions::new())
                .unwrap(),
        );
        assert_eq!(found, vec![record("teste", "admin")]);
    }

    #[test]
    fn every_criteria_entry_must_match() {
        let source = MemoryDataSource::new().with_record(record("teste", "admin"));

        let mut both = criteria("username", "teste");
        both.insert("role".into(), json!("user"));

        let found = records_of(source.fetch_all(&both, &FetchOptions::new()).unwrap());
        assert!(found.is_empty());
    }

    #[test]
    fn unmatched_lookup_is_empty_not_error() {
        let source = MemoryDataSource::new();
        let found = records_of(
            source
                .fetch_all(&criteria("username", "teste"), &FetchOptions::new())
                .unwrap(),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn duplicate_matches_are_all_returned() {
        let source = MemoryDataSource::new()
            .with_record(record("teste", "admin"))
            .with_record(record("teste", "user"));

        let found = records_of(
            source
                .fetch_all(&criteria("username", "teste"), &FetchOptions::new())
                .unwrap(),
        );
        assert_eq!(found.len(), 2);
    }
}
