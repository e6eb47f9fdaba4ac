use std::fmt;
use std::path::PathBuf;

/// Error types for the reconcile/adopt engine.
///
/// Variants are split by recovery policy: everything here is fatal to the
/// current run except `Fetch`, which the reconciler reports per resource
/// type and skips, and commit-phase subprocess failures, which never
/// surface as an error at all (they are logged and the batch continues).
#[derive(Debug)]
pub enum AdoptError {
    /// Resource type has no registered adapter
    UnknownResourceType(String),

    /// Queued resource reached the import phase without an identifier
    MissingIdentifier { resource_type: String },

    /// Import address was not of the form `type/identifier`
    InvalidAddress(String),

    /// State snapshot could not be read
    StateRead { path: PathBuf, message: String },

    /// State snapshot was not valid JSON
    StateParse { path: PathBuf, message: String },

    /// Remote listing failed for one resource type
    Fetch {
        resource_type: String,
        message: String,
    },

    /// Detail fetch or artifact construction failed during the resolve phase
    ImportFailed {
        resource_type: String,
        identifier: String,
        message: String,
    },

    /// General I/O error
    Io(std::io::Error),
}

impl fmt::Display for AdoptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdoptError::UnknownResourceType(resource_type) => {
                write!(f, "No adapter registered for resource type '{}'", resource_type)
            }
            AdoptError::MissingIdentifier { resource_type } => {
                write!(
                    f,
                    "Resource of type '{}' has no identifier and cannot be imported",
                    resource_type
                )
            }
            AdoptError::InvalidAddress(address) => {
                write!(
                    f,
                    "Invalid resource address '{}' (expected <type>/<identifier>)",
                    address
                )
            }
            AdoptError::StateRead { path, message } => {
                write!(f, "Failed to read state file {:?}: {}", path, message)
            }
            AdoptError::StateParse { path, message } => {
                write!(f, "Failed to parse state file {:?}: {}", path, message)
            }
            AdoptError::Fetch {
                resource_type,
                message,
            } => {
                write!(f, "Failed to list '{}' resources: {}", resource_type, message)
            }
            AdoptError::ImportFailed {
                resource_type,
                identifier,
                message,
            } => {
                write!(
                    f,
                    "Import of {}/{} failed: {}",
                    resource_type, identifier, message
                )
            }
            AdoptError::Io(err) => {
                write!(f, "I/O error: {}", err)
            }
        }
    }
}

impl std::error::Error for AdoptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdoptError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AdoptError {
    fn from(err: std::io::Error) -> Self {
        AdoptError::Io(err)
    }
}

/// Result type for adopt engine operations
pub type AdoptResult<T> = Result<T, AdoptError>;
