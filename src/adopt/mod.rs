//! Reconciliation and import-orchestration engine.
//!
//! One pass flows in a single direction: the state snapshot is loaded
//! read-only, the reconciler classifies every remote resource against it,
//! and the orchestrator adopts the untracked ones — writing a
//! configuration artifact per imported resource and registering it
//! through the external state tool.

pub mod adapter;
pub mod adapters;
pub mod artifact;
pub mod error;
pub mod orchestrator;
pub mod reconciler;
pub mod registry;

pub use adapter::{ImportedResource, ResourceAdapter, ResourceDescriptor, UntrackedResource};
pub use artifact::ConfigArtifact;
pub use error::{AdoptError, AdoptResult};
pub use orchestrator::{CommitSummary, ImportOrchestrator};
pub use reconciler::reconcile;
pub use registry::AdapterRegistry;
