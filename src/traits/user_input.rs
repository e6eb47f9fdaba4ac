use anyhow::Result;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Trait for user input operations to enable testing with mocks
pub trait UserInput: Send + Sync {
    /// Display a confirmation prompt (yes/no)
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Real user input implementation using inquire crate
pub struct InquireUserInput;

impl UserInput for InquireUserInput {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        use inquire::Confirm;
        let answer = Confirm::new(prompt).with_default(default).prompt()?;
        Ok(answer)
    }
}

/// Mock user input implementation for testing
#[allow(dead_code)]
pub struct MockUserInput {
    responses: Mutex<VecDeque<bool>>,
}

#[allow(dead_code)]
impl MockUserInput {
    /// Create new mock with no pre-configured responses
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
        }
    }

    /// Create a mock that answers every confirmation with the given value
    pub fn with_responses(responses: Vec<bool>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

impl Default for MockUserInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for MockUserInput {
    fn confirm(&self, _prompt: &str, default: bool) -> Result<bool> {
        // Falls back to the default answer when no response is queued
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_confirm_queued_responses() {
        let input = MockUserInput::with_responses(vec![true, false]);

        assert!(input.confirm("Proceed?", false).unwrap());
        assert!(!input.confirm("Proceed?", true).unwrap());
    }

    #[test]
    fn test_mock_confirm_falls_back_to_default() {
        let input = MockUserInput::new();

        assert!(input.confirm("Proceed?", true).unwrap());
        assert!(!input.confirm("Proceed?", false).unwrap());
    }
}
