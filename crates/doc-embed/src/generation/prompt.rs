//! Prompt templates and placeholder rendering for chain steps

use std::collections::HashMap;

/// Prompt builder for persona chains
pub struct PromptBuilder;

impl PromptBuilder {
    /// Fill `{key}` placeholders in a template from the run inputs.
    ///
    /// Placeholders with no matching input are left intact, so a
    /// mis-seeded chain still produces a prompt rather than failing.
    pub fn render_template(template: &str, inputs: &HashMap<String, String>) -> String {
        let mut rendered = template.to_string();
        for (key, value) in inputs {
            rendered = rendered.replace(&format!("{{{}}}", key), value);
        }
        rendered
    }

    /// Build the system prompt for a persona
    pub fn build_system_prompt(role: &str, goal: &str, backstory: &str) -> String {
        format!("You are a {}. Your goal: {}. {}", role, goal, backstory)
    }

    /// Append the previous step's output as context for the next prompt
    pub fn with_previous_output(prompt: &str, previous: &str) -> String {
        format!(
            "{}\n\nOutput of the previous step, provided as context:\n{}",
            prompt, previous
        )
    }
}
