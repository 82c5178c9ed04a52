/// Alias for `Result<T, WoError>`.
pub type WoResult<T> = Result<T, WoError>;

/// Errors that can occur while loading or assembling a world.
#[derive(Debug, thiserror::Error)]
pub enum WoError {
    /// A room label does not exist in the world.
    #[error("room not found: \"{0}\"")]
    RoomNotFound(String),

    /// Two definitions share the same label.
    #[error("duplicate label: \"{0}\"")]
    DuplicateLabel(String),

    /// A direction token is not part of the compass or vertical set.
    #[error("unknown direction \"{token}\" on exit \"{exit}\"")]
    UnknownDirection {
        /// The exit carrying the bad token.
        exit: String,
        /// The unrecognized direction token.
        token: String,
    },

    /// An open/closed flag that is neither `yes` nor `no`.
    #[error("invalid open flag \"{0}\" (expected \"yes\" or \"no\")")]
    InvalidFlag(String),

    /// A guarded exit named by setup is missing from the registry.
    #[error("guarded exit \"{0}\" is missing from the world data")]
    MissingSpecialExit(String),

    /// The world file could not be parsed.
    #[error("invalid world data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The world file could not be read.
    #[error("cannot read world file: {0}")]
    Io(#[from] std::io::Error),
}
