use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomsError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Rate schedule gap: {0}")]
    ScheduleGap(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CustomsError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        CustomsError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CustomsError {
    fn from(e: serde_json::Error) -> Self {
        CustomsError::SerializationError(e.to_string())
    }
}
