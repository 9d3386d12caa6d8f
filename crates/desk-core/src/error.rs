use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// A focus id or subject id that the registry/catalog does not know.
    #[error("unknown subject '{0}'")]
    UnknownSubject(String),
    #[error("subject '{0}' is registered more than once")]
    DuplicateSubject(String),
    #[error("catalog contains no subjects")]
    EmptyCatalog,
}
