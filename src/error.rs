use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("no date selected for the new task")]
    MissingDate,

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("task {0} not found")]
    TaskNotFound(String),

    #[error("task id prefix '{0}' is ambiguous ({1} matches)")]
    AmbiguousTaskId(String, usize),

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("locked by another process: {0}")]
    Locked(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlannerError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "empty_title",
            Self::MissingDate => "missing_date",
            Self::InvalidDate(_) => "invalid_date",
            Self::TaskNotFound(_) => "task_not_found",
            Self::AmbiguousTaskId(_, _) => "ambiguous_task_id",
            Self::InvalidKey(_) => "invalid_key",
            Self::Locked(_) => "locked",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
