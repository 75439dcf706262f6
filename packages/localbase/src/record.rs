//! The Record type and its merge policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Free-form string fields of a record, keyed by name.
pub type Fields = BTreeMap<String, String>;

/// A single entry in a store.
///
/// A record is a flat JSON object: a unique `id` assigned at creation time
/// plus arbitrary string-valued fields. The `id` is serialized alongside
/// the fields at the same level, so the on-disk shape is
/// `{"id": "...", "name": "...", ...}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    /// Create a record with a freshly generated id.
    ///
    /// Any `id` key smuggled in through `fields` is discarded; the generated
    /// id always wins.
    pub fn new(mut fields: Fields) -> Record {
        fields.remove("id");
        Record {
            id: Uuid::new_v4().to_string(),
            fields,
        }
    }

    /// Create a record carrying a caller-provided id.
    pub fn with_id(id: impl Into<String>, mut fields: Fields) -> Record {
        fields.remove("id");
        Record {
            id: id.into(),
            fields,
        }
    }

    /// Shallow-merge `fields` onto this record.
    ///
    /// Later keys win over existing ones; keys absent from `fields` are
    /// retained. The id is never touched.
    pub fn merge(&mut self, mut fields: Fields) {
        fields.remove("id");
        self.fields.extend(fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn new_generates_distinct_ids() {
        let a = Record::new(fields(&[("name", "Alice")]));
        let b = Record::new(fields(&[("name", "Alice")]));
        assert!(!a.id.is_empty());
        assert!(!b.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn new_discards_caller_supplied_id() {
        let record = Record::new(fields(&[("id", "forged"), ("name", "Alice")]));
        assert_ne!(record.id, "forged");
        assert!(!record.fields.contains_key("id"));
    }

    #[test]
    fn merge_overrides_and_retains() {
        let mut record = Record::with_id("r1", fields(&[("name", "Alice"), ("city", "Oslo")]));
        record.merge(fields(&[("city", "Bergen"), ("role", "admin")]));

        assert_eq!(record.id, "r1");
        assert_eq!(record.fields["name"], "Alice");
        assert_eq!(record.fields["city"], "Bergen");
        assert_eq!(record.fields["role"], "admin");
    }

    #[test]
    fn merge_cannot_reassign_id() {
        let mut record = Record::with_id("r1", Fields::new());
        record.merge(fields(&[("id", "r2")]));
        assert_eq!(record.id, "r1");
        assert!(!record.fields.contains_key("id"));
    }

    #[test]
    fn serializes_flat() {
        let record = Record::with_id("r1", fields(&[("name", "Alice")]));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "r1", "name": "Alice"})
        );

        let parsed: Record = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, record);
    }
}
