use anyhow::Result;

use crate::state::TrackedInstance;
use crate::traits::CloudClient;

use super::artifact::ConfigArtifact;

/// Opaque remote payload returned by a listing call.
///
/// Only the adapter that fetched it knows its shape; nothing outside the
/// owning adapter may interpret it.
pub type RemoteObject = serde_json::Value;

/// Minimal projection of a remote object, used for display and import
/// addressing. The identifier is `None` only when the remote item
/// fundamentally lacks a usable key.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceDescriptor {
    pub identifier: Option<String>,
}

impl ResourceDescriptor {
    pub fn new(identifier: Option<impl Into<String>>) -> Self {
        Self {
            identifier: identifier.map(Into::into),
        }
    }
}

/// A remote resource with no matching tracked instance, queued for import
#[derive(Debug, Clone, PartialEq)]
pub struct UntrackedResource {
    pub resource_type: String,
    pub identifier: Option<String>,
}

impl UntrackedResource {
    /// Display address, `type/identifier`
    pub fn address(&self) -> String {
        format!(
            "{}/{}",
            self.resource_type,
            self.identifier.as_deref().unwrap_or("<no identifier>")
        )
    }
}

/// Output of a successful import: the adoption key for state registration
/// plus the configuration unit to persist
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedResource {
    pub name: String,
    pub artifact: ConfigArtifact,
}

/// Per-resource-type adapter: enumerate remote instances, project their
/// identifier, match them against tracked instances, and materialize a
/// full import.
///
/// One adapter per resource type; adding a type means adding one adapter
/// and registering it, nothing else changes.
pub trait ResourceAdapter: Send + Sync {
    /// The resource type key this adapter owns
    fn resource_type(&self) -> &'static str;

    /// Full remote listing for this type. An empty account yields an empty
    /// vec, not an error; network and auth failures propagate.
    fn fetch(&self, cloud: &dyn CloudClient) -> Result<Vec<RemoteObject>>;

    /// Pure projection of a remote object to its descriptor
    fn describe(&self, item: &RemoteObject) -> ResourceDescriptor;

    /// Whether a remote object corresponds to an already-tracked instance.
    /// Total over all inputs this adapter's fetch can produce.
    fn matches(&self, item: &RemoteObject, instance: &TrackedInstance) -> bool;

    /// Detail-fetch the identified resource and build its configuration
    /// artifacts. May return more than one result (a parent resource and
    /// its auto-discovered children). Fails when the identifier no longer
    /// resolves remotely.
    fn import(&self, cloud: &dyn CloudClient, identifier: &str) -> Result<Vec<ImportedResource>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_formatting() {
        let untracked = UntrackedResource {
            resource_type: "aws_s3_bucket".to_string(),
            identifier: Some("other-bucket".to_string()),
        };
        assert_eq!(untracked.address(), "aws_s3_bucket/other-bucket");
    }

    #[test]
    fn test_address_without_identifier() {
        let untracked = UntrackedResource {
            resource_type: "aws_api_gateway_rest_api".to_string(),
            identifier: None,
        };
        assert_eq!(untracked.address(), "aws_api_gateway_rest_api/<no identifier>");
    }
}
