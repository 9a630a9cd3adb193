use crate::modules::shifts::core::shift::NewShift;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("end time must be after start time")]
    InvalidInterval,

    #[error("unknown position: {0}")]
    UnknownPosition(String),

    #[error("employee is required")]
    MissingEmployee,
}

#[derive(Debug)]
pub enum Decision {
    Accepted { shift: NewShift },
    Rejected { reason: DecideError },
}
