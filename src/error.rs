use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowseError {
    // Resolution
    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("not a container: {0}")]
    NotAContainer(String),

    // Request parameters
    #[error("malformed name pattern `{pattern}`")]
    MalformedPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl BrowseError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present "cannot browse: <path>" without pattern
    /// matching on variants.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::PathNotFound(p) | Self::NotAContainer(p) => Some(p),
            Self::MalformedPattern { .. } => None,
        }
    }
}
