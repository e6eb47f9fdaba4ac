use anyhow::{Context, Result};
use serde_json::Value;

use crate::adopt::adapter::{ImportedResource, RemoteObject, ResourceAdapter, ResourceDescriptor};
use crate::adopt::artifact::ConfigArtifact;
use crate::state::TrackedInstance;
use crate::traits::CloudClient;

/// Adapter for Route 53 hosted zones.
///
/// Zones are addressed by DNS name (the `name` attribute in state); the
/// zone id is only resolved during import, where it becomes the adoption
/// key expected by the state tool.
pub struct Route53ZoneAdapter;

impl Route53ZoneAdapter {
    fn find_zone(&self, cloud: &dyn CloudClient, name: &str) -> Result<Value> {
        let response = cloud.get("route53", "list-hosted-zones", &[])?;
        response
            .get("HostedZones")
            .and_then(Value::as_array)
            .and_then(|zones| {
                zones
                    .iter()
                    .find(|z| z.get("Name").and_then(Value::as_str) == Some(name))
            })
            .cloned()
            .with_context(|| format!("Hosted zone '{}' not found", name))
    }
}

impl ResourceAdapter for Route53ZoneAdapter {
    fn resource_type(&self) -> &'static str {
        "aws_route53_zone"
    }

    fn fetch(&self, cloud: &dyn CloudClient) -> Result<Vec<RemoteObject>> {
        let response = cloud.get("route53", "list-hosted-zones", &[])?;
        Ok(response
            .get("HostedZones")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    fn describe(&self, item: &RemoteObject) -> ResourceDescriptor {
        ResourceDescriptor::new(item.get("Name").and_then(Value::as_str))
    }

    fn matches(&self, item: &RemoteObject, instance: &TrackedInstance) -> bool {
        match item.get("Name").and_then(Value::as_str) {
            Some(name) => instance.attribute("name") == Some(name),
            None => false,
        }
    }

    fn import(&self, cloud: &dyn CloudClient, identifier: &str) -> Result<Vec<ImportedResource>> {
        let zone = self.find_zone(cloud, identifier)?;

        // "/hostedzone/Z123..." -> "Z123..."
        let zone_id = zone
            .get("Id")
            .and_then(Value::as_str)
            .map(|id| id.rsplit('/').next().unwrap_or(id).to_string())
            .with_context(|| format!("Hosted zone '{}' has no Id", identifier))?;

        let mut attributes = vec![("name".to_string(), identifier.to_string())];

        if let Some(comment) = zone
            .get("Config")
            .and_then(|c| c.get("Comment"))
            .and_then(Value::as_str)
        {
            if !comment.is_empty() {
                attributes.push(("comment".to_string(), comment.to_string()));
            }
        }

        let artifact = ConfigArtifact::new(self.resource_type(), identifier, attributes);

        Ok(vec![ImportedResource {
            name: zone_id,
            artifact,
        }])
    }
}
