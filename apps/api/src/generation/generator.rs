//! Pipeline orchestrator: template resolution, substitution, model call.
//!
//! Flow: template_for → render_prompt → TextGenerator::generate_text →
//! return the completion unchanged. One outbound request per call; every
//! failure is single-shot and propagates to the caller untouched.

use std::time::Instant;

use tracing::info;

use crate::errors::AppError;
use crate::generation::features::FeatureKind;
use crate::generation::prompts::render_prompt;
use crate::llm_client::TextGenerator;

/// Runs one generation: renders the feature's template around the user
/// prompt, invokes the model once, and returns its text completion exactly
/// as received. Timing and length diagnostics go to the log sink only; they
/// do not affect the result.
pub async fn generate(
    llm: &dyn TextGenerator,
    feature: FeatureKind,
    user_prompt: &str,
) -> Result<String, AppError> {
    let prompt = render_prompt(feature, user_prompt);

    info!(
        %feature,
        prompt_len = user_prompt.len(),
        "Starting generation"
    );
    let started = Instant::now();

    let output = llm.generate_text(&prompt).await?;

    info!(
        %feature,
        elapsed_ms = started.elapsed().as_millis() as u64,
        output_len = output.len(),
        "Generation completed"
    );

    Ok(output)
}
