use crate::state::TerraformState;
use crate::traits::{CloudClient, Output};

use super::adapter::UntrackedResource;
use super::error::AdoptError;
use super::registry::AdapterRegistry;

/// Classify every remote resource as tracked or untracked.
///
/// Walks the registry in order, fetches each type's remote listing and
/// scans the tracked instances of that type with the adapter's matcher.
/// A listing failure for one type is reported and that type skipped; the
/// pass continues with the remaining types. Output order is registry
/// order, then fetch order within a type.
pub fn reconcile(
    registry: &AdapterRegistry,
    state: &TerraformState,
    cloud: &dyn CloudClient,
    output: &dyn Output,
) -> Vec<UntrackedResource> {
    let mut untracked = Vec::new();

    for adapter in registry.iter() {
        let resource_type = adapter.resource_type();

        let items = match adapter.fetch(cloud) {
            Ok(items) => items,
            Err(err) => {
                let fetch_err = AdoptError::Fetch {
                    resource_type: resource_type.to_string(),
                    message: err.to_string(),
                };
                output.warning(&format!("{} (skipping this type)", fetch_err));
                continue;
            }
        };

        for item in &items {
            let tracked = state
                .instances_of_type(resource_type)
                .any(|instance| adapter.matches(item, instance));

            if tracked {
                let descriptor = adapter.describe(item);
                output.dimmed(&format!(
                    "Already tracked: {}/{}",
                    resource_type,
                    descriptor.identifier.as_deref().unwrap_or("<no identifier>")
                ));
                continue;
            }

            let descriptor = adapter.describe(item);
            untracked.push(UntrackedResource {
                resource_type: resource_type.to_string(),
                identifier: descriptor.identifier,
            });
        }
    }

    untracked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockCloudClient, MockOutput};
    use serde_json::json;

    fn mock_cloud() -> MockCloudClient {
        MockCloudClient::new()
            .with_response(
                "s3api list-buckets",
                json!({"Buckets": [{"Name": "my-bucket"}, {"Name": "other-bucket"}]}),
            )
            .with_response("iam list-roles", json!({"Roles": [{"RoleName": "deploy"}]}))
            .with_response("route53 list-hosted-zones", json!({"HostedZones": []}))
            .with_response("apigateway get-rest-apis", json!({"items": []}))
    }

    fn state_tracking_bucket(id: &str) -> TerraformState {
        serde_json::from_value(json!({
            "resources": [{
                "type": "aws_s3_bucket",
                "name": "logs",
                "instances": [{"attributes": {"id": id}}]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_tracked_resources_are_excluded() {
        let registry = AdapterRegistry::with_defaults();
        let state = state_tracking_bucket("my-bucket");
        let cloud = mock_cloud();
        let output = MockOutput::new();

        let untracked = reconcile(&registry, &state, &cloud, &output);

        let addresses: Vec<String> = untracked.iter().map(|u| u.address()).collect();
        assert_eq!(
            addresses,
            vec!["aws_s3_bucket/other-bucket", "aws_iam_role/deploy"]
        );
    }

    #[test]
    fn test_empty_state_yields_every_remote_item() {
        let registry = AdapterRegistry::with_defaults();
        let state = TerraformState::default();
        let cloud = mock_cloud();
        let output = MockOutput::new();

        let untracked = reconcile(&registry, &state, &cloud, &output);

        // Registry order, then fetch order within each type
        let addresses: Vec<String> = untracked.iter().map(|u| u.address()).collect();
        assert_eq!(
            addresses,
            vec![
                "aws_s3_bucket/my-bucket",
                "aws_s3_bucket/other-bucket",
                "aws_iam_role/deploy"
            ]
        );
    }

    #[test]
    fn test_fetch_failure_skips_type_and_continues() {
        let registry = AdapterRegistry::with_defaults();
        let state = TerraformState::default();
        let cloud = MockCloudClient::new()
            .with_error("s3api list-buckets", "AccessDenied")
            .with_response("iam list-roles", json!({"Roles": [{"RoleName": "deploy"}]}))
            .with_response("route53 list-hosted-zones", json!({"HostedZones": []}))
            .with_response("apigateway get-rest-apis", json!({"items": []}));
        let output = MockOutput::new();

        let untracked = reconcile(&registry, &state, &cloud, &output);

        assert_eq!(untracked.len(), 1);
        assert_eq!(untracked[0].address(), "aws_iam_role/deploy");

        let warnings = output.get_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("aws_s3_bucket"));
        assert!(warnings[0].contains("AccessDenied"));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let registry = AdapterRegistry::with_defaults();
        let state = state_tracking_bucket("my-bucket");
        let output = MockOutput::new();

        let first = reconcile(&registry, &state, &mock_cloud(), &output);
        let second = reconcile(&registry, &state, &mock_cloud(), &output);

        assert_eq!(first, second);
    }

    #[test]
    fn test_item_without_identifier_is_still_reported() {
        let registry = AdapterRegistry::with_defaults();
        let state = TerraformState::default();
        let cloud = MockCloudClient::new()
            .with_response("s3api list-buckets", json!({"Buckets": []}))
            .with_response("iam list-roles", json!({"Roles": []}))
            .with_response("route53 list-hosted-zones", json!({"HostedZones": []}))
            .with_response(
                "apigateway get-rest-apis",
                json!({"items": [{"id": "ab12cd34ef"}]}),
            );
        let output = MockOutput::new();

        let untracked = reconcile(&registry, &state, &cloud, &output);

        assert_eq!(untracked.len(), 1);
        assert_eq!(untracked[0].identifier, None);
    }

    #[test]
    fn test_tracked_items_are_logged_as_discarded() {
        let registry = AdapterRegistry::with_defaults();
        let state = state_tracking_bucket("my-bucket");
        let output = MockOutput::new();

        reconcile(&registry, &state, &mock_cloud(), &output);

        assert!(output
            .to_text()
            .contains("Already tracked: aws_s3_bucket/my-bucket"));
    }
}
