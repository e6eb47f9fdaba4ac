use anyhow::Result;

use crate::adopt::{reconcile, AdapterRegistry};
use crate::config::Config;
use crate::context::Context;
use crate::state::StateReader;

/// List remote resources not yet tracked in state
pub struct ListCommand;

impl ListCommand {
    pub fn execute(ctx: &Context, config: &Config) -> Result<()> {
        let state = StateReader::load(ctx.fs.as_ref(), &config.state_path)?;
        let registry = AdapterRegistry::with_defaults();

        let untracked = reconcile(&registry, &state, ctx.cloud.as_ref(), ctx.output.as_ref());

        ctx.output.section("Untracked resources");

        for resource in &untracked {
            ctx.output.info(&resource.address());
        }

        ctx.output.blank();
        ctx.output.key_value(
            "Untracked",
            &format!("{} resource(s)", untracked.len()),
        );

        Ok(())
    }
}
