#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TesseraScaleError {
    #[error("Empty domain")]
    EmptyDomain,

    #[error("Log scale domain must have positive bounds: ({start}, {end})")]
    NonPositiveLogDomain { start: f32, end: f32 },

    #[error("Log scale base must be positive and not 1: {0}")]
    InvalidLogBase(f32),
}
