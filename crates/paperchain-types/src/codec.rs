//! Record codec: the mapping between [`PaperRecord`] and the byte values
//! stored under its key in the ledger.
//!
//! The encoding is the fixed JSON wire shape. Decoding fails explicitly on
//! malformed or truncated input rather than yielding a partial record, so
//! callers can distinguish "key absent" from "key present but unreadable".

use crate::error::TypeError;
use crate::record::PaperRecord;

/// Encode a record to its ledger value bytes.
pub fn encode_record(record: &PaperRecord) -> Result<Vec<u8>, TypeError> {
    serde_json::to_vec(record).map_err(|e| TypeError::Encode(e.to_string()))
}

/// Decode ledger value bytes into a record.
pub fn decode_record(bytes: &[u8]) -> Result<PaperRecord, TypeError> {
    serde_json::from_slice(bytes).map_err(|e| TypeError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample() -> PaperRecord {
        PaperRecord::new(
            "S1",
            "h1",
            "2024-01-01T00:00:00Z",
            "Alice",
            "A1",
            "2023-12-01",
        )
    }

    #[test]
    fn roundtrip_preserves_every_field() {
        let record = sample();
        let bytes = encode_record(&record).unwrap();
        let decoded = decode_record(&bytes).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode_record(b"not json at all").unwrap_err();
        assert!(matches!(err, TypeError::Decode(_)));
    }

    #[test]
    fn decode_rejects_truncated_input() {
        let mut bytes = encode_record(&sample()).unwrap();
        bytes.truncate(bytes.len() / 2);
        let err = decode_record(&bytes).unwrap_err();
        assert!(matches!(err, TypeError::Decode(_)));
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let err = decode_record(br#"{"studentId":"S1"}"#).unwrap_err();
        assert!(matches!(err, TypeError::Decode(_)));
    }

    #[test]
    fn decode_rejects_unknown_fields() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .insert("grade".into(), "A+".into());
        let bytes = serde_json::to_vec(&value).unwrap();
        let err = decode_record(&bytes).unwrap_err();
        assert!(matches!(err, TypeError::Decode(_)));
    }

    proptest! {
        #[test]
        fn roundtrip_arbitrary_strings(
            student_id in ".*",
            hash in ".+",
            timestamp in ".*",
            author in ".*",
            author_id in ".*",
            paper_date in ".*",
        ) {
            let record = PaperRecord::new(
                student_id, hash.as_str(), timestamp, author, author_id, paper_date,
            );
            let bytes = encode_record(&record).unwrap();
            let decoded = decode_record(&bytes).unwrap();
            prop_assert_eq!(decoded, record);
        }
    }
}
