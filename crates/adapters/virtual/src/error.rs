//! Virtual bridge errors.

use coupling_app::ports::WriteError;

#[derive(Debug, thiserror::Error)]
pub enum VirtualError {
    #[error("no virtual service named {0:?}")]
    UnknownService(String),
    #[error("virtual service {0:?} has no On characteristic")]
    NoOnCharacteristic(String),
    #[error(transparent)]
    Write(#[from] WriteError),
}
