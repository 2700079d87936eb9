/// Alias for `Result<T, BgError>`.
pub type BgResult<T> = Result<T, BgError>;

/// Errors that can occur when assembling or querying a game world.
#[derive(Debug, thiserror::Error)]
pub enum BgError {
    /// The named room does not exist in the world catalog.
    #[error("room not found: \"{0}\"")]
    UnknownRoom(String),

    /// Two rooms share the same name.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// Two objects in the same room share the same name.
    #[error("object \"{object}\" appears twice in room \"{room}\"")]
    DuplicateObject {
        /// The owning room.
        room: String,
        /// The repeated object name.
        object: String,
    },
}
