use anyhow::Result;
use serde_json::Value;

use crate::adopt::adapter::{ImportedResource, RemoteObject, ResourceAdapter, ResourceDescriptor};
use crate::adopt::artifact::ConfigArtifact;
use crate::state::TrackedInstance;
use crate::traits::CloudClient;

/// Adapter for S3 buckets.
///
/// Buckets are tracked in state under their name, stored in the `id`
/// attribute.
pub struct S3BucketAdapter;

impl ResourceAdapter for S3BucketAdapter {
    fn resource_type(&self) -> &'static str {
        "aws_s3_bucket"
    }

    fn fetch(&self, cloud: &dyn CloudClient) -> Result<Vec<RemoteObject>> {
        let response = cloud.get("s3api", "list-buckets", &[])?;
        Ok(response
            .get("Buckets")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    fn describe(&self, item: &RemoteObject) -> ResourceDescriptor {
        ResourceDescriptor::new(item.get("Name").and_then(Value::as_str))
    }

    fn matches(&self, item: &RemoteObject, instance: &TrackedInstance) -> bool {
        match item.get("Name").and_then(Value::as_str) {
            Some(name) => instance.attribute("id") == Some(name),
            None => false,
        }
    }

    fn import(&self, cloud: &dyn CloudClient, identifier: &str) -> Result<Vec<ImportedResource>> {
        // Detail call doubles as an existence check; a bucket deleted
        // between listing and import fails here.
        cloud.get("s3api", "get-bucket-location", &["--bucket", identifier])?;

        let artifact = ConfigArtifact::new(
            self.resource_type(),
            identifier,
            vec![("bucket".to_string(), identifier.to_string())],
        );

        Ok(vec![ImportedResource {
            name: identifier.to_string(),
            artifact,
        }])
    }
}
