use thiserror::Error;

/// Errors raised by the planner and its config layer
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("no wardrobe item with id {0}")]
    UnknownItem(i64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
