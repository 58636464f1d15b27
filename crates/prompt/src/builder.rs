//! Prompt builder for rendering templates.

use crate::types::{BuiltPrompt, PromptDefinition};
use handlebars::Handlebars;
use paperchat_core::{AppError, AppResult};
use std::collections::HashMap;

/// Build a prompt from a definition and input variables.
///
/// Renders both the system and user templates using Handlebars with the
/// provided variables and returns a `BuiltPrompt` ready for LLM execution.
///
/// # Example
/// ```
/// use paperchat_prompt::{build_prompt, qa_prompt};
/// use std::collections::HashMap;
///
/// let mut vars = HashMap::new();
/// vars.insert("context".to_string(), "The paper proposes X.".to_string());
/// vars.insert("question".to_string(), "What does the paper propose?".to_string());
///
/// let built = build_prompt(&qa_prompt(), vars).unwrap();
/// assert!(built.user.contains("What does the paper propose?"));
/// ```
pub fn build_prompt(
    definition: &PromptDefinition,
    variables: HashMap<String, String>,
) -> AppResult<BuiltPrompt> {
    tracing::debug!("Building prompt: {}", definition.id);

    let system = definition
        .system
        .as_deref()
        .map(|template| render_template(template, &variables))
        .transpose()?;

    let user = render_template(&definition.template, &variables)?;

    Ok(BuiltPrompt::new(
        system,
        user,
        definition.id.clone(),
        variables,
    ))
}

/// Render a Handlebars template with variables.
fn render_template(template: &str, variables: &HashMap<String, String>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Disable HTML escaping for plain text
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    let rendered = handlebars
        .render("prompt", &variables)
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))?;

    Ok(rendered)
}
