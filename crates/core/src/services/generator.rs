//! AI-assisted contract authoring via an OpenAI-compatible completion API.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::traits::PromptCompletionService;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4-turbo";
const MAX_TOKENS: u32 = 4000;
const TEMPERATURE: f32 = 0.5;

const SYSTEM_PROMPT: &str = "You are an expert Rust smart contract developer specializing in MultiversX blockchain contracts.

Generate a production-ready Rust smart contract based on the user's requirements.

# Technical Requirements:
1. Write code only, no explanations or documentation outside the code itself
2. Use only MultiversX macros and patterns (#[multiversx_sc::contract], etc.)
3. Use MultiversX-specific types (ManagedBuffer, BigUint, TokenIdentifier, etc.)
4. Include proper error handling with require! macros
5. Implement security best practices for MultiversX contracts
6. Include helpful inline comments to explain complex logic

# Output Format:
Return ONLY the raw Rust code with NO markdown formatting, NO code blocks with triple backticks with the rust language specifier, etc.
Just provide the pure Rust code for a MultiversX smart contract.";

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}

/// Completion client for the authoring path.
///
/// Returns the completion content as-is; models occasionally wrap the source
/// in a code fence despite the prompt, so callers pass the result through
/// [`unfence`] before composing or deploying it.
pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Read the API key from the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY environment variable is not set")?;
        Ok(Self::new(api_key))
    }

    /// Override the completion model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl PromptCompletionService for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            anyhow::bail!("prompt is empty");
        }

        tracing::info!(model = %self.model, "Requesting contract generation...");

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": self.model,
                "messages": [
                    { "role": "system", "content": SYSTEM_PROMPT },
                    { "role": "user", "content": prompt }
                ],
                "max_tokens": MAX_TOKENS,
                "temperature": TEMPERATURE
            }))
            .send()
            .await
            .context("Failed to send completion request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "completion request failed (HTTP {}): {}",
                status,
                body.trim()
            );
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .context("Failed to parse completion response")?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("completion response contained no choices")
    }
}

/// Trim a leading/trailing language-tagged code fence from generated source.
///
/// Source without fences passes through unchanged.
pub fn unfence(source: &str) -> String {
    let trimmed = source.trim();
    let trimmed = trimmed
        .strip_prefix("```rust")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfence_strips_language_tagged_fence() {
        let fenced = "```rust\npub trait T {}\n```";
        assert_eq!(unfence(fenced), "pub trait T {}");
    }

    #[test]
    fn test_unfence_strips_bare_fence() {
        let fenced = "```\npub trait T {}\n```";
        assert_eq!(unfence(fenced), "pub trait T {}");
    }

    #[test]
    fn test_unfence_passes_plain_source_through() {
        let plain = "#[multiversx_sc::contract]\npub trait T {}";
        assert_eq!(unfence(plain), plain);
    }

    #[test]
    fn test_unfence_trims_surrounding_whitespace() {
        assert_eq!(unfence("\n\n  ```rust\nfn a() {}\n```  \n"), "fn a() {}");
    }
}
