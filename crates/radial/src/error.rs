use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("at least one of the menu icons or labels must be set")]
    MissingItems,
}
