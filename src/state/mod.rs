//! Tracked-resource inventory loaded from a Terraform state snapshot.
//!
//! The snapshot is read once per pass and treated as a read-only input;
//! adopting resources mutates state through the external state tool, never
//! through this module.

pub mod reader;

pub use reader::StateReader;

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Root of the state snapshot
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TerraformState {
    #[serde(default)]
    pub resources: Vec<TrackedResource>,
}

/// One tracked resource record, grouping its instances
#[derive(Debug, Clone, Deserialize)]
pub struct TrackedResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    #[serde(default)]
    pub instances: Vec<TrackedInstance>,
}

/// One instance of a tracked resource
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackedInstance {
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

impl TrackedInstance {
    /// Get an attribute as a string, if present and string-valued
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(|v| v.as_str())
    }
}

impl TerraformState {
    /// Iterate all tracked instances of the given resource type
    pub fn instances_of_type<'a>(
        &'a self,
        resource_type: &'a str,
    ) -> impl Iterator<Item = &'a TrackedInstance> {
        self.resources
            .iter()
            .filter(move |r| r.resource_type == resource_type)
            .flat_map(|r| r.instances.iter())
    }
}
