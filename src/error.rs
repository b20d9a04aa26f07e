use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Fewer records than a drawable panel needs.
    #[error("insufficient data: {len} record(s) supplied, at least 2 are required")]
    InsufficientData { len: usize },

    /// Raw input row violating the preprocessor contract.
    #[error("malformed record #{index}: field `{field}` has unusable value {value:?}")]
    MalformedRecord {
        index: usize,
        field: &'static str,
        value: String,
    },
}

impl ChartError {
    /// Returns `true` for the recoverable "not ready yet" condition.
    #[must_use]
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}
