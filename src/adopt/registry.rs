use super::adapter::ResourceAdapter;
use super::adapters::{ApiGatewayRestApiAdapter, IamRoleAdapter, Route53ZoneAdapter, S3BucketAdapter};

/// Ordered table of resource adapters.
///
/// Iteration follows registration order so reconciliation output and logs
/// are reproducible run to run. Lookup is a linear scan; the table holds a
/// handful of entries.
pub struct AdapterRegistry {
    adapters: Vec<Box<dyn ResourceAdapter>>,
}

impl AdapterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Create a registry with all supported resource types
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(S3BucketAdapter));
        registry.register(Box::new(IamRoleAdapter));
        registry.register(Box::new(Route53ZoneAdapter));
        registry.register(Box::new(ApiGatewayRestApiAdapter));
        registry
    }

    /// Register an adapter. Resource type keys must be unique.
    pub fn register(&mut self, adapter: Box<dyn ResourceAdapter>) {
        debug_assert!(
            self.get(adapter.resource_type()).is_none(),
            "duplicate adapter for resource type '{}'",
            adapter.resource_type()
        );
        self.adapters.push(adapter);
    }

    /// Look up the adapter for a resource type
    pub fn get(&self, resource_type: &str) -> Option<&dyn ResourceAdapter> {
        self.adapters
            .iter()
            .find(|a| a.resource_type() == resource_type)
            .map(|a| a.as_ref())
    }

    /// Iterate adapters in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn ResourceAdapter> {
        self.adapters.iter().map(|a| a.as_ref())
    }

    /// Number of registered adapters
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Check if registry is empty
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults_registers_all_types() {
        let registry = AdapterRegistry::with_defaults();

        assert!(registry.get("aws_s3_bucket").is_some());
        assert!(registry.get("aws_iam_role").is_some());
        assert!(registry.get("aws_route53_zone").is_some());
        assert!(registry.get("aws_api_gateway_rest_api").is_some());
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_get_unknown_type() {
        let registry = AdapterRegistry::with_defaults();
        assert!(registry.get("aws_vpc").is_none());
    }

    #[test]
    fn test_iteration_follows_registration_order() {
        let registry = AdapterRegistry::with_defaults();
        let types: Vec<&str> = registry.iter().map(|a| a.resource_type()).collect();

        assert_eq!(
            types,
            vec![
                "aws_s3_bucket",
                "aws_iam_role",
                "aws_route53_zone",
                "aws_api_gateway_rest_api"
            ]
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = AdapterRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}
