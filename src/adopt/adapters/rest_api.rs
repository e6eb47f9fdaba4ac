use anyhow::{Context, Result};
use serde_json::Value;

use crate::adopt::adapter::{ImportedResource, RemoteObject, ResourceAdapter, ResourceDescriptor};
use crate::adopt::artifact::ConfigArtifact;
use crate::state::TrackedInstance;
use crate::traits::CloudClient;

/// Adapter for API Gateway REST APIs.
///
/// Importing an API also imports its deployments: one import call yields
/// the API artifact followed by one artifact per discovered deployment.
/// APIs are matched by declared name; an API without a name cannot be
/// addressed and is surfaced with an absent identifier.
pub struct ApiGatewayRestApiAdapter;

impl ApiGatewayRestApiAdapter {
    fn find_api(&self, cloud: &dyn CloudClient, name: &str) -> Result<Value> {
        let response = cloud.get("apigateway", "get-rest-apis", &[])?;
        response
            .get("items")
            .and_then(Value::as_array)
            .and_then(|apis| {
                apis.iter()
                    .find(|a| a.get("name").and_then(Value::as_str) == Some(name))
            })
            .cloned()
            .with_context(|| format!("REST API '{}' not found", name))
    }
}

impl ResourceAdapter for ApiGatewayRestApiAdapter {
    fn resource_type(&self) -> &'static str {
        "aws_api_gateway_rest_api"
    }

    fn fetch(&self, cloud: &dyn CloudClient) -> Result<Vec<RemoteObject>> {
        let response = cloud.get("apigateway", "get-rest-apis", &[])?;
        Ok(response
            .get("items")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    fn describe(&self, item: &RemoteObject) -> ResourceDescriptor {
        ResourceDescriptor::new(item.get("name").and_then(Value::as_str))
    }

    fn matches(&self, item: &RemoteObject, instance: &TrackedInstance) -> bool {
        match item.get("name").and_then(Value::as_str) {
            Some(name) => instance.attribute("name") == Some(name),
            None => false,
        }
    }

    fn import(&self, cloud: &dyn CloudClient, identifier: &str) -> Result<Vec<ImportedResource>> {
        let api = self.find_api(cloud, identifier)?;
        let api_id = api
            .get("id")
            .and_then(Value::as_str)
            .with_context(|| format!("REST API '{}' has no id", identifier))?
            .to_string();

        let mut attributes = vec![("name".to_string(), identifier.to_string())];
        if let Some(description) = api.get("description").and_then(Value::as_str) {
            attributes.push(("description".to_string(), description.to_string()));
        }

        let mut results = vec![ImportedResource {
            name: api_id.clone(),
            artifact: ConfigArtifact::new(self.resource_type(), identifier, attributes),
        }];

        // The API artifact comes first: deployments reference it and their
        // commits assume the parent was written.
        let deployments =
            cloud.get("apigateway", "get-deployments", &["--rest-api-id", &api_id])?;

        for deployment in deployments
            .get("items")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
        {
            let Some(deployment_id) = deployment.get("id").and_then(Value::as_str) else {
                continue;
            };

            let artifact = ConfigArtifact::new(
                "aws_api_gateway_deployment",
                &format!("{}_{}", identifier, deployment_id),
                vec![("rest_api_id".to_string(), api_id.clone())],
            );

            results.push(ImportedResource {
                name: format!("{}/{}", api_id, deployment_id),
                artifact,
            });
        }

        Ok(results)
    }
}
