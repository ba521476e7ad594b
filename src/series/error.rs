use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to parse JSON response")]
    Json(#[from] serde_json::Error),

    #[error("Failed to decode '{key}' in the {group} group")]
    Field {
        group: &'static str,
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed timestamp '{value}'")]
    MalformedTimestamp { value: String },

    #[error("Timestamp {index} of '{key}' in the {group} group is malformed")]
    MalformedTimestampAt {
        group: &'static str,
        key: String,
        index: usize,
        #[source]
        source: Box<DecodeError>,
    },

    #[error("Value {index} of '{key}' in the {group} group is not numeric")]
    NotNumeric {
        group: &'static str,
        key: String,
        index: usize,
    },

    #[error("'{key}' in the {group} group has {found} values but the time axis has {expected}")]
    LengthMismatch {
        group: &'static str,
        key: String,
        expected: usize,
        found: usize,
    },
}

impl DecodeError {
    /// True for a timestamp that neither codec recognises, wherever it was found.
    pub fn is_malformed_timestamp(&self) -> bool {
        matches!(
            self,
            DecodeError::MalformedTimestamp { .. } | DecodeError::MalformedTimestampAt { .. }
        )
    }
}
