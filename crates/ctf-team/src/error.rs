use ctf_agent::TerminationReason;
use ctf_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TeamError {
    #[error("team configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("no agent with index {index} (team has {count})")]
    AgentNotFound { index: usize, count: usize },

    #[error("vision window range {got} does not match configured range {expected}")]
    VisionRange { expected: u32, got: u32 },

    #[error("team already terminated ({0})")]
    Terminated(TerminationReason),

    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

pub type TeamResult<T> = Result<T, TeamError>;
