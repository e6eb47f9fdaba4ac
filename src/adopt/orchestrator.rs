use crate::traits::{CloudClient, CommandExecutor, FileSystem, Output};

use super::adapter::{ImportedResource, UntrackedResource};
use super::error::{AdoptError, AdoptResult};
use super::registry::AdapterRegistry;

/// Outcome counts of a commit phase
#[derive(Debug, Default, PartialEq)]
pub struct CommitSummary {
    pub committed: usize,
    pub failed: usize,
}

/// Drives adoption of untracked resources in two phases.
///
/// The resolve phase turns every queued resource into configuration
/// artifacts and is all-or-nothing: any failure aborts the batch before a
/// single file is written. The commit phase persists each artifact and
/// registers it with the state tool, recovering per item: a failed
/// adoption cleans up (or preserves, in verbose mode) the file it just
/// wrote and moves on.
pub struct ImportOrchestrator<'a> {
    registry: &'a AdapterRegistry,
    cloud: &'a dyn CloudClient,
    command: &'a dyn CommandExecutor,
    fs: &'a dyn FileSystem,
    output: &'a dyn Output,
    state_tool: &'a str,
}

impl<'a> ImportOrchestrator<'a> {
    pub fn new(
        registry: &'a AdapterRegistry,
        cloud: &'a dyn CloudClient,
        command: &'a dyn CommandExecutor,
        fs: &'a dyn FileSystem,
        output: &'a dyn Output,
        state_tool: &'a str,
    ) -> Self {
        Self {
            registry,
            cloud,
            command,
            fs,
            output,
            state_tool,
        }
    }

    /// Import every queued resource. Resolve failures are fatal; commit
    /// failures are logged per item and reflected in the summary.
    pub fn run(&self, queue: &[UntrackedResource], verbose: bool) -> AdoptResult<CommitSummary> {
        let resolved = self.resolve(queue)?;
        Ok(self.commit(&resolved, verbose))
    }

    /// Resolve phase: adapter lookup, identifier validation, detail fetch.
    /// Results keep queue order; a 1-to-N import contributes its results
    /// contiguously.
    fn resolve(&self, queue: &[UntrackedResource]) -> AdoptResult<Vec<ImportedResource>> {
        let mut resolved = Vec::new();

        for entry in queue {
            let adapter = self
                .registry
                .get(&entry.resource_type)
                .ok_or_else(|| AdoptError::UnknownResourceType(entry.resource_type.clone()))?;

            let identifier =
                entry
                    .identifier
                    .as_deref()
                    .ok_or_else(|| AdoptError::MissingIdentifier {
                        resource_type: entry.resource_type.clone(),
                    })?;

            self.output.info(&format!("Resolving {}", entry.address()));

            let results =
                adapter
                    .import(self.cloud, identifier)
                    .map_err(|err| AdoptError::ImportFailed {
                        resource_type: entry.resource_type.clone(),
                        identifier: identifier.to_string(),
                        message: err.to_string(),
                    })?;

            resolved.extend(results);
        }

        Ok(resolved)
    }

    /// Commit phase: write each artifact, then register it with the state
    /// tool. Order equals resolve order; items never affect each other's
    /// eligibility.
    fn commit(&self, resolved: &[ImportedResource], verbose: bool) -> CommitSummary {
        let mut summary = CommitSummary::default();

        for resource in resolved {
            let artifact = &resource.artifact;
            let path = artifact.file_name();

            if let Err(err) = self.fs.write(&path, &artifact.render()) {
                self.output
                    .error(&format!("Failed to write {:?}: {}", path, err));
                summary.failed += 1;
                continue;
            }

            let address = artifact.address();
            let adoption = self
                .command
                .execute(self.state_tool, &["import", &address, &resource.name]);

            match adoption {
                Ok(result) if result.status.success() => {
                    self.output
                        .success(&format!("Imported {} as '{}'", address, resource.name));
                    summary.committed += 1;
                }
                Ok(result) => {
                    let detail = String::from_utf8_lossy(&result.stderr).trim().to_string();
                    self.recover(artifact, verbose, &detail);
                    summary.failed += 1;
                }
                Err(err) => {
                    self.recover(artifact, verbose, &err.to_string());
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    /// Clean up after a failed adoption: delete the artifact, or keep it
    /// under an error-marked name when running verbose.
    fn recover(&self, artifact: &super::artifact::ConfigArtifact, verbose: bool, detail: &str) {
        let path = artifact.file_name();

        if verbose {
            let marker = artifact.error_file_name();
            if let Err(err) = self.fs.rename(&path, &marker) {
                self.output
                    .error(&format!("Failed to preserve {:?}: {}", path, err));
            }
            self.output.dimmed(detail);
            self.output.error(&format!(
                "Adoption of {} failed, artifact kept at {:?}",
                artifact.address(),
                marker
            ));
        } else {
            if let Err(err) = self.fs.remove_file(&path) {
                self.output
                    .error(&format!("Failed to clean up {:?}: {}", path, err));
            }
            self.output.error(&format!(
                "Adoption of {} failed: {}",
                artifact.address(),
                detail
            ));
        }
    }
}
