use anyhow::Result;

use crate::adopt::{AdapterRegistry, AdoptError, ImportOrchestrator, UntrackedResource};
use crate::config::Config;
use crate::context::Context;

/// Import exactly one resource by `<type>/<identifier>` address
pub struct ImportCommand;

impl ImportCommand {
    pub fn execute(ctx: &Context, config: &Config, address: &str) -> Result<()> {
        let (resource_type, identifier) = parse_address(address)?;

        let registry = AdapterRegistry::with_defaults();
        let orchestrator = ImportOrchestrator::new(
            &registry,
            ctx.cloud.as_ref(),
            ctx.command.as_ref(),
            ctx.fs.as_ref(),
            ctx.output.as_ref(),
            &config.state_tool,
        );

        let queue = vec![UntrackedResource {
            resource_type: resource_type.to_string(),
            identifier: Some(identifier.to_string()),
        }];

        let summary = orchestrator.run(&queue, false)?;

        if summary.failed > 0 {
            ctx.output
                .warning(&format!("{} artifact(s) could not be adopted", summary.failed));
        }

        Ok(())
    }
}

/// Split a `<type>/<identifier>` address; both parts must be non-empty
fn parse_address(address: &str) -> Result<(&str, &str), AdoptError> {
    match address.split_once('/') {
        Some((resource_type, identifier))
            if !resource_type.is_empty() && !identifier.is_empty() =>
        {
            Ok((resource_type, identifier))
        }
        _ => Err(AdoptError::InvalidAddress(address.to_string())),
    }
}
