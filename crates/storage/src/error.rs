#![forbid(unsafe_code)]

use sg_core::model::{PersonNameError, SgpaError};
use sg_core::partition::MIN_PARTICIPANTS;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("{}", .0.message())]
    InvalidSgpa(SgpaError),
    #[error("invalid name: {}", .0.message())]
    InvalidName(PersonNameError),
    #[error(
        "not enough participants (found={found}, required={required})",
        required = MIN_PARTICIPANTS
    )]
    NotEnoughParticipants { found: usize },
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO",
            Self::Sql(_) => "SQLITE",
            Self::InvalidSgpa(_) | Self::InvalidName(_) => "VALIDATION",
            Self::NotEnoughParticipants { .. } => "NOT_ENOUGH_PARTICIPANTS",
        }
    }
}

impl From<SgpaError> for StoreError {
    fn from(value: SgpaError) -> Self {
        Self::InvalidSgpa(value)
    }
}

impl From<PersonNameError> for StoreError {
    fn from(value: PersonNameError) -> Self {
        Self::InvalidName(value)
    }
}
