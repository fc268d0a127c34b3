use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    #[error("unknown precision tier '{0}' (expected one of: High, Good, Alta, Buena)")]
    InvalidTier(String),
}
