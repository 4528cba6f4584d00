use thiserror::Error;

/// Why a search produced no heroes.
///
/// The `Display` output is the exact text shown in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The API answered, but reported a non-success status or an empty list.
    #[error("No heroes found with that name")]
    NotFound,

    /// The request never produced a usable envelope: connection failure,
    /// timeout, non-2xx status or a body that failed to deserialize.
    #[error("Error loading heroes: {0}")]
    Transport(String),
}
