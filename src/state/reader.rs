use std::path::Path;

use crate::adopt::error::{AdoptError, AdoptResult};
use crate::traits::FileSystem;

use super::TerraformState;

/// Loads the tracked-resource inventory for one reconciliation pass
pub struct StateReader;

impl StateReader {
    /// Read and parse the state snapshot.
    ///
    /// A missing or malformed snapshot is a fatal startup error; there is
    /// nothing sensible to reconcile against without it.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> AdoptResult<TerraformState> {
        let contents = fs
            .read_to_string(path)
            .map_err(|err| AdoptError::StateRead {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;

        serde_json::from_str(&contents).map_err(|err| AdoptError::StateParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}
