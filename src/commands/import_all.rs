use anyhow::Result;

use crate::adopt::{reconcile, AdapterRegistry, ImportOrchestrator};
use crate::config::Config;
use crate::context::Context;
use crate::state::StateReader;

/// Import every untracked resource found by reconciliation
pub struct ImportAllCommand;

impl ImportAllCommand {
    pub fn execute(ctx: &Context, config: &Config, verbose: bool, yes: bool) -> Result<()> {
        let state = StateReader::load(ctx.fs.as_ref(), &config.state_path)?;
        let registry = AdapterRegistry::with_defaults();

        let untracked = reconcile(&registry, &state, ctx.cloud.as_ref(), ctx.output.as_ref());

        if untracked.is_empty() {
            ctx.output.success("State already covers every remote resource");
            return Ok(());
        }

        ctx.output.section("Resources to import");
        for resource in &untracked {
            ctx.output.info(&resource.address());
        }
        ctx.output.blank();

        if !yes
            && !ctx.input.confirm(
                &format!("Import {} resource(s)?", untracked.len()),
                true,
            )?
        {
            ctx.output.info("Import cancelled");
            return Ok(());
        }

        let orchestrator = ImportOrchestrator::new(
            &registry,
            ctx.cloud.as_ref(),
            ctx.command.as_ref(),
            ctx.fs.as_ref(),
            ctx.output.as_ref(),
            &config.state_tool,
        );

        let summary = orchestrator.run(&untracked, verbose)?;

        ctx.output.blank();
        ctx.output
            .key_value("Imported", &summary.committed.to_string());
        if summary.failed > 0 {
            ctx.output.key_value("Failed", &summary.failed.to_string());
            ctx.output
                .warning("Failed adoptions were logged above; re-run to retry them");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::filesystem::FileSystem;
    use crate::traits::{
        MockCloudClient, MockCommandExecutor, MockCommandResult, MockFileSystem, MockOutput,
        MockUserInput,
    };
    use serde_json::json;
    use std::path::Path;
    use std::sync::Arc;

    fn tracked_bucket_state(fs: &MockFileSystem) {
        fs.write(
            Path::new("terraform.tfstate"),
            r#"{"resources": [{"type": "aws_s3_bucket", "name": "logs",
                "instances": [{"attributes": {"id": "my-bucket"}}]}]}"#,
        )
        .unwrap();
    }

    fn cloud_with_one_stray_bucket() -> MockCloudClient {
        MockCloudClient::new()
            .with_response(
                "s3api list-buckets",
                json!({"Buckets": [{"Name": "my-bucket"}, {"Name": "other-bucket"}]}),
            )
            .with_response("iam list-roles", json!({"Roles": []}))
            .with_response("route53 list-hosted-zones", json!({"HostedZones": []}))
            .with_response("apigateway get-rest-apis", json!({"items": []}))
            .with_response("s3api get-bucket-location", json!({"LocationConstraint": null}))
    }

    #[test]
    fn test_import_all_adopts_every_stray() {
        let fs = Arc::new(MockFileSystem::new());
        tracked_bucket_state(&fs);
        let command = Arc::new(MockCommandExecutor::new());
        let output = Arc::new(MockOutput::new());

        let ctx = Context::test_with(
            fs.clone(),
            Arc::new(cloud_with_one_stray_bucket()),
            command.clone(),
            Arc::new(MockUserInput::new()),
            output.clone(),
        );

        ImportAllCommand::execute(&ctx, &Config::default(), false, true).unwrap();

        assert!(fs.has_file(Path::new("aws_s3_bucket.other_bucket.tf")));
        assert_eq!(
            command.executed(),
            vec!["terraform import aws_s3_bucket.other_bucket other-bucket"]
        );
        assert!(output.to_text().contains("Imported: 1"));
    }

    #[test]
    fn test_import_all_completes_despite_commit_failure() {
        let fs = Arc::new(MockFileSystem::new());
        tracked_bucket_state(&fs);
        let command = Arc::new(MockCommandExecutor::with_outputs(vec![MockCommandResult {
            command: "terraform import aws_s3_bucket.other_bucket".to_string(),
            exit_code: 1,
            stdout: String::new(),
            stderr: "state locked".to_string(),
        }]));
        let output = Arc::new(MockOutput::new());

        let ctx = Context::test_with(
            fs.clone(),
            Arc::new(cloud_with_one_stray_bucket()),
            command,
            Arc::new(MockUserInput::new()),
            output.clone(),
        );

        // Still Ok: commit-phase failures are recovered per item
        ImportAllCommand::execute(&ctx, &Config::default(), false, true).unwrap();

        assert!(!fs.has_file(Path::new("aws_s3_bucket.other_bucket.tf")));
        assert!(output.has_error());
        assert!(output.to_text().contains("Failed: 1"));
    }

    #[test]
    fn test_import_all_nothing_to_do() {
        let fs = Arc::new(MockFileSystem::new());
        tracked_bucket_state(&fs);
        let cloud = Arc::new(
            MockCloudClient::new()
                .with_response("s3api list-buckets", json!({"Buckets": [{"Name": "my-bucket"}]}))
                .with_response("iam list-roles", json!({"Roles": []}))
                .with_response("route53 list-hosted-zones", json!({"HostedZones": []}))
                .with_response("apigateway get-rest-apis", json!({"items": []})),
        );
        let command = Arc::new(MockCommandExecutor::new());
        let output = Arc::new(MockOutput::new());

        let ctx = Context::test_with(
            fs,
            cloud,
            command.clone(),
            Arc::new(MockUserInput::new()),
            output.clone(),
        );

        ImportAllCommand::execute(&ctx, &Config::default(), false, true).unwrap();

        assert!(command.executed().is_empty());
        assert!(output.to_text().contains("State already covers"));
    }

    #[test]
    fn test_import_all_respects_declined_confirmation() {
        let fs = Arc::new(MockFileSystem::new());
        tracked_bucket_state(&fs);
        let command = Arc::new(MockCommandExecutor::new());

        let ctx = Context::test_with(
            fs.clone(),
            Arc::new(cloud_with_one_stray_bucket()),
            command.clone(),
            Arc::new(MockUserInput::with_responses(vec![false])),
            Arc::new(MockOutput::new()),
        );

        ImportAllCommand::execute(&ctx, &Config::default(), false, false).unwrap();

        assert!(command.executed().is_empty());
        assert!(!fs.has_file(Path::new("aws_s3_bucket.other_bucket.tf")));
    }
}
