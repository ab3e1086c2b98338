use thiserror::Error;

/// Errors from child management on a [`Container`](crate::Container).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// No child is registered under this key.
    #[error("no item named {0:?}")]
    ItemNotFound(String),
}
