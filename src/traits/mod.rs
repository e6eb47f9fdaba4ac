pub mod cloud;
pub mod command;
pub mod filesystem;
pub mod output;
pub mod user_input;

pub use cloud::{AwsCliClient, CloudClient};
pub use command::{CommandExecutor, RealCommandExecutor};
pub use filesystem::{FileSystem, RealFileSystem};
pub use output::{Output, TerminalOutput};
pub use user_input::{InquireUserInput, UserInput};

#[cfg(test)]
pub use cloud::MockCloudClient;
#[cfg(test)]
pub use command::{MockCommandExecutor, MockCommandResult};
#[cfg(test)]
pub use filesystem::MockFileSystem;
#[cfg(test)]
pub use output::MockOutput;
#[cfg(test)]
pub use user_input::MockUserInput;
