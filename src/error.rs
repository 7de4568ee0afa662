use thiserror::Error;

pub type ChatResult<T> = Result<T, ChatError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("message not present in the transcript")]
    NotFound,

    #[error("clear ran {iterations} iterations against a starting size of {start_len}")]
    IterationGuard { iterations: usize, start_len: usize },
}
