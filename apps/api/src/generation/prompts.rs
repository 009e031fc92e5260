//! Prompt templates for the generation pipeline, one per feature.
//!
//! Every template embeds the plain-text formatting guidelines (the model is
//! instructed to structure output without markdown syntax; nothing is
//! enforced programmatically) and carries exactly one `{user_prompt}` slot.
//! The user prompt is substituted verbatim, with no escaping. Injection of
//! instructions through it is a known, accepted risk.

use crate::generation::features::FeatureKind;

/// Substitution slot shared by all templates.
pub const USER_PROMPT_SLOT: &str = "{user_prompt}";

pub const CONTENT_TEMPLATE: &str = "\
Generate structured educational content based on the following prompt.
Include headings, explanations, examples, and key points.

IMPORTANT FORMATTING GUIDELINES:
- DO NOT use markdown syntax (no **, *, _, or backticks)
- Use plain text with clear section headings
- Use simple bullet points or numbered lists where needed
- Add spacing between sections for readability
- If code examples are needed, present them as plain text (without syntax highlighting markers)

PROMPT: {user_prompt}";

pub const QUIZ_TEMPLATE: &str = "\
Generate a quiz based on the following prompt.
Include a mix of multiple choice, true/false, and short answer questions.

IMPORTANT FORMATTING GUIDELINES:
- DO NOT use markdown syntax (no **, *, _, or backticks)
- Use plain text with clear section headings
- Use simple bullet points or numbered lists for questions
- Add spacing between questions and sections
- If code examples are needed, present them as plain text (without syntax highlighting markers)

PROMPT: {user_prompt}";

pub const MATERIALS_TEMPLATE: &str = "\
Generate a comprehensive learning roadmap or materials list based on the following prompt.
Include resources, steps, and recommendations.

IMPORTANT FORMATTING GUIDELINES:
- DO NOT use markdown syntax (no **, *, _, or backticks)
- Use plain text with clear section headings
- Use simple bullet points or numbered lists where needed
- Add spacing between sections for readability
- If code examples are needed, present them as plain text (without syntax highlighting markers)

PROMPT: {user_prompt}";

pub const NOTES_TEMPLATE: &str = "\
Generate concise, organized notes based on the following prompt.
Include key concepts, definitions, and important information.

IMPORTANT FORMATTING GUIDELINES:
- DO NOT use markdown syntax (no **, *, _, or backticks)
- Use plain text with clear section headings
- Use simple bullet points or numbered lists for key points
- Add spacing between sections for readability
- If code examples are needed, present them as plain text (without syntax highlighting markers)

PROMPT: {user_prompt}";

pub const FLASHCARDS_TEMPLATE: &str = "\
Generate flashcards based on the following prompt.
Format as Question: [question] and Answer: [answer] pairs.
Make them concise and focused on key information.

IMPORTANT FORMATTING GUIDELINES:
- DO NOT use markdown syntax (no **, *, _, or backticks)
- Use plain text with clear labeling for questions and answers
- Add spacing between each flashcard for readability
- If code examples are needed, present them as plain text (without syntax highlighting markers)

PROMPT: {user_prompt}";

pub const ASSISTANT_TEMPLATE: &str = "\
You are an educational assistant. Provide a helpful, accurate response to the following question or request.

IMPORTANT FORMATTING GUIDELINES:
- DO NOT use markdown syntax (no **, *, _, or backticks)
- Use plain text with clear section headings where needed
- Use simple bullet points or numbered lists if appropriate
- Add spacing between sections for readability
- If code examples are needed, present them as plain text (without syntax highlighting markers)

QUESTION: {user_prompt}

If this question relates to previous questions you've answered in this conversation, try to maintain context.";

/// Returns the instruction template for a feature.
/// Total over the enumeration: this cannot fail for any `FeatureKind`.
pub fn template_for(feature: FeatureKind) -> &'static str {
    match feature {
        FeatureKind::Content => CONTENT_TEMPLATE,
        FeatureKind::Quiz => QUIZ_TEMPLATE,
        FeatureKind::Materials => MATERIALS_TEMPLATE,
        FeatureKind::Notes => NOTES_TEMPLATE,
        FeatureKind::Flashcards => FLASHCARDS_TEMPLATE,
        FeatureKind::Assistant => ASSISTANT_TEMPLATE,
    }
}

/// Substitutes the user prompt into the feature's template.
pub fn render_prompt(feature: FeatureKind, user_prompt: &str) -> String {
    template_for(feature).replace(USER_PROMPT_SLOT, user_prompt)
}
