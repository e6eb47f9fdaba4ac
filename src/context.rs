use crate::traits::{
    AwsCliClient, CloudClient, CommandExecutor, FileSystem, InquireUserInput, Output,
    RealCommandExecutor, RealFileSystem, TerminalOutput, UserInput,
};
#[cfg(test)]
use crate::traits::{MockCloudClient, MockCommandExecutor, MockFileSystem, MockOutput, MockUserInput};
use std::sync::Arc;

/// Application context that holds all dependencies for dependency injection
pub struct Context {
    pub fs: Arc<dyn FileSystem>,
    pub cloud: Arc<dyn CloudClient>,
    pub command: Arc<dyn CommandExecutor>,
    pub input: Arc<dyn UserInput>,
    pub output: Arc<dyn Output>,
}

impl Context {
    /// Create a new context with real implementations (for production use)
    pub fn new(region: Option<String>) -> Self {
        Self {
            fs: Arc::new(RealFileSystem),
            cloud: Arc::new(AwsCliClient::new(region)),
            command: Arc::new(RealCommandExecutor::new()),
            input: Arc::new(InquireUserInput),
            output: Arc::new(TerminalOutput),
        }
    }

    /// Create a new context with mock implementations (for testing)
    #[cfg(test)]
    #[allow(dead_code)]
    pub fn test() -> Self {
        Self {
            fs: Arc::new(MockFileSystem::new()),
            cloud: Arc::new(MockCloudClient::new()),
            command: Arc::new(MockCommandExecutor::new()),
            input: Arc::new(MockUserInput::new()),
            output: Arc::new(MockOutput::new()),
        }
    }

    /// Create a test context with specific mock implementations
    #[cfg(test)]
    #[allow(dead_code)]
    pub fn test_with(
        fs: Arc<dyn FileSystem>,
        cloud: Arc<dyn CloudClient>,
        command: Arc<dyn CommandExecutor>,
        input: Arc<dyn UserInput>,
        output: Arc<dyn Output>,
    ) -> Self {
        Self {
            fs,
            cloud,
            command,
            input,
            output,
        }
    }
}

impl Clone for Context {
    fn clone(&self) -> Self {
        Self {
            fs: Arc::clone(&self.fs),
            cloud: Arc::clone(&self.cloud),
            command: Arc::clone(&self.command),
            input: Arc::clone(&self.input),
            output: Arc::clone(&self.output),
        }
    }
}
