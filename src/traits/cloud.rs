use anyhow::{Context, Result};
use serde_json::Value;
use std::process::Command;

/// Trait for fetching remote resource data from the cloud provider.
///
/// Adapters treat the returned payloads as opaque JSON; only the adapter
/// that issued the call interprets the shape.
pub trait CloudClient: Send + Sync {
    /// Perform one provider API call and return the parsed JSON response
    fn get(&self, service: &str, action: &str, args: &[&str]) -> Result<Value>;
}

/// Cloud client backed by the `aws` CLI.
///
/// Every call shells out to `aws <service> <action> [args..] --output json`
/// and parses stdout. Credentials and account routing are whatever the CLI
/// is configured with.
pub struct AwsCliClient {
    region: Option<String>,
}

impl AwsCliClient {
    pub fn new(region: Option<String>) -> Self {
        Self { region }
    }
}

impl CloudClient for AwsCliClient {
    fn get(&self, service: &str, action: &str, args: &[&str]) -> Result<Value> {
        let mut command = Command::new("aws");
        command.arg(service).arg(action).args(args);

        if let Some(region) = &self.region {
            command.arg("--region").arg(region);
        }

        command.arg("--output").arg("json");

        let output = command
            .output()
            .with_context(|| format!("Failed to run aws {} {}", service, action))?;

        if !output.status.success() {
            anyhow::bail!(
                "aws {} {} failed: {}",
                service,
                action,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        serde_json::from_slice(&output.stdout)
            .with_context(|| format!("aws {} {} returned invalid JSON", service, action))
    }
}

/// Mock cloud client for testing (canned responses per call)
#[allow(dead_code)]
pub struct MockCloudClient {
    responses: std::sync::Mutex<std::collections::HashMap<String, Result<Value, String>>>,
}

#[allow(dead_code)]
impl MockCloudClient {
    pub fn new() -> Self {
        Self {
            responses: std::sync::Mutex::new(std::collections::HashMap::new()),
        }
    }

    /// Configure the response for a call, keyed by `"<service> <action>"` or
    /// by the full `"<service> <action> <args..>"` line (more specific wins)
    pub fn with_response(self, key: &str, value: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(key.to_string(), Ok(value));
        self
    }

    /// Configure a call to fail with the given message
    pub fn with_error(self, key: &str, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(key.to_string(), Err(message.to_string()));
        self
    }
}

impl Default for MockCloudClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CloudClient for MockCloudClient {
    fn get(&self, service: &str, action: &str, args: &[&str]) -> Result<Value> {
        let full = if args.is_empty() {
            format!("{} {}", service, action)
        } else {
            format!("{} {} {}", service, action, args.join(" "))
        };
        let short = format!("{} {}", service, action);

        let responses = self.responses.lock().unwrap();
        let response = responses.get(&full).or_else(|| responses.get(&short));

        match response {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(anyhow::anyhow!("{}", message)),
            None => Err(anyhow::anyhow!("No mock response for: {}", full)),
        }
    }
}
