//! Confirmation guard for destructive actions (delete, complete, edit).

/// Message shown when the caller does not provide one.
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Tem certeza que deseja realizar esta ação?";

/// A blocking yes/no prompt.
pub trait ConfirmPrompt {
    /// Asks the user and blocks until they answer.
    fn ask(&self, message: &str) -> bool;
}

/// Prompt that always gives the same answer, for targets without a dialog
/// and for tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl ConfirmPrompt for FixedAnswer {
    fn ask(&self, message: &str) -> bool {
        tracing::debug!(message, answer = self.0, "confirm answered without a dialog");
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_answer() {
        assert!(FixedAnswer(true).ask(DEFAULT_CONFIRM_MESSAGE));
        assert!(!FixedAnswer(false).ask("Excluir?"));
        assert!(!FixedAnswer::default().ask("Excluir?"));
    }
}
