use anyhow::{Context, Result};
use serde_json::Value;

use crate::adopt::adapter::{ImportedResource, RemoteObject, ResourceAdapter, ResourceDescriptor};
use crate::adopt::artifact::ConfigArtifact;
use crate::state::TrackedInstance;
use crate::traits::CloudClient;

/// Adapter for IAM roles.
///
/// Roles are tracked in state under their role name, stored in the `id`
/// attribute.
pub struct IamRoleAdapter;

impl ResourceAdapter for IamRoleAdapter {
    fn resource_type(&self) -> &'static str {
        "aws_iam_role"
    }

    fn fetch(&self, cloud: &dyn CloudClient) -> Result<Vec<RemoteObject>> {
        let response = cloud.get("iam", "list-roles", &[])?;
        Ok(response
            .get("Roles")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    fn describe(&self, item: &RemoteObject) -> ResourceDescriptor {
        ResourceDescriptor::new(item.get("RoleName").and_then(Value::as_str))
    }

    fn matches(&self, item: &RemoteObject, instance: &TrackedInstance) -> bool {
        match item.get("RoleName").and_then(Value::as_str) {
            Some(name) => instance.attribute("id") == Some(name),
            None => false,
        }
    }

    fn import(&self, cloud: &dyn CloudClient, identifier: &str) -> Result<Vec<ImportedResource>> {
        let response = cloud.get("iam", "get-role", &["--role-name", identifier])?;
        let role = response
            .get("Role")
            .with_context(|| format!("get-role response for '{}' has no Role", identifier))?;

        let mut attributes = vec![("name".to_string(), identifier.to_string())];

        if let Some(path) = role.get("Path").and_then(Value::as_str) {
            if path != "/" {
                attributes.push(("path".to_string(), path.to_string()));
            }
        }

        if let Some(policy) = role.get("AssumeRolePolicyDocument") {
            attributes.push((
                "assume_role_policy".to_string(),
                serde_json::to_string(policy)?,
            ));
        }

        let artifact = ConfigArtifact::new(self.resource_type(), identifier, attributes);

        Ok(vec![ImportedResource {
            name: identifier.to_string(),
            artifact,
        }])
    }
}
