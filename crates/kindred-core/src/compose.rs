//! Feature composition: records → documents.
//!
//! Each catalog record is flattened into a single document string by
//! joining its selected attribute values with spaces. The field order is
//! fixed for reproducibility, though it does not affect the eventual
//! bag-of-words result. Unknown field names contribute an empty string,
//! matching the "missing value means empty string" invariant of
//! [`ItemRecord`].

use crate::models::ItemRecord;

/// Join the named attribute fields of one record into a document string.
///
/// A record whose selected fields are all empty composes to a blank
/// document; the vectorizer turns that into a zero vector rather than
/// treating it as an error.
pub fn compose_document(record: &ItemRecord, fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| record.attribute(f).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compose a full corpus, one document per record, preserving order.
///
/// Guarantees `result.len() == records.len()` and that `result[i]` is
/// derived solely from `records[i]`.
pub fn compose_corpus(records: &[ItemRecord], fields: &[String]) -> Vec<String> {
    records
        .iter()
        .map(|r| compose_document(r, fields))
        .collect()
}
