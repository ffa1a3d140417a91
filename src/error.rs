use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("status session has been shut down")]
    Stopped,
    #[error("status session lock poisoned by a panicking tick")]
    Poisoned,
    #[error("failed to spawn timer thread: {0}")]
    Spawn(#[from] std::io::Error),
}
