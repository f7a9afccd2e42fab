#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("Critical level ({critical}%) must be above moderate level ({moderate}%)")]
    ThresholdOrder { critical: u8, moderate: u8 },

    #[error("Unknown bin: {0}")]
    UnknownBin(String),
}
