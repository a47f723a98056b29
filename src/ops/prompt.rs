#![allow(async_fn_in_trait)]

use std::io::ErrorKind;

use anyhow::Context;
use anyhow::Result;
use dialoguer::Input;
#[cfg(test)]
use mockall::automock;

// -----------------------------------------------------------------------------
// PromptOps trait

/// Asking the user for a single line of text
#[cfg_attr(test, automock)]
pub trait PromptOps {
    /// Returns `None` when the user dismissed the prompt.
    async fn input(&self, request: &PromptRequest) -> Result<Option<String>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub title: String,
    pub prompt: String,
    /// Pre-filled, editable text. Clearing it submits an empty answer.
    pub default: String,
}

// -----------------------------------------------------------------------------
// DialoguerPrompt

/// Interactive terminal prompt. Ctrl-C and end of input cancel.
pub struct DialoguerPrompt;

impl PromptOps for DialoguerPrompt {
    async fn input(&self, request: &PromptRequest) -> Result<Option<String>> {
        let request = request.clone();
        let result = tokio::task::spawn_blocking(move || {
            Input::<String>::new()
                .with_prompt(format!("{} ({})", request.title, request.prompt))
                .with_initial_text(request.default)
                .allow_empty(true)
                .interact_text()
        })
        .await
        .context("Prompt task failed")?;

        match result {
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(e))
                if matches!(e.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) =>
            {
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to read input; pass --time when not in a terminal"),
        }
    }
}

// -----------------------------------------------------------------------------
// FixedPrompt

/// Answers every prompt with a value given up front, e.g. from `--time`.
/// `None` behaves like a dismissed prompt.
pub struct FixedPrompt(pub Option<String>);

impl PromptOps for FixedPrompt {
    async fn input(&self, _request: &PromptRequest) -> Result<Option<String>> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PromptRequest {
        PromptRequest {
            title: "Work time:".to_string(),
            prompt: "e.g. 1d".to_string(),
            default: "1d".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fixed_prompt_answers() -> Result<()> {
        let prompt = FixedPrompt(Some("2h".to_string()));
        assert_eq!(prompt.input(&request()).await?, Some("2h".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_fixed_prompt_cancels() -> Result<()> {
        assert_eq!(FixedPrompt(None).input(&request()).await?, None);
        Ok(())
    }
}
