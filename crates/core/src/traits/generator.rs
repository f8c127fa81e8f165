//! AI-assisted contract authoring seam.

use std::future::Future;

use anyhow::Result;

/// Turns a free-form prompt into contract source text.
///
/// The returned source may still be wrapped in a language-tagged code fence;
/// callers run it through [`crate::services::unfence`] before use.
pub trait PromptCompletionService: Send + Sync {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}
