//! Sequential persona chains
//!
//! A chain is a fixed list of steps, each a prompt template dispatched
//! under a persona's system prompt. Steps run strictly in order and each
//! step's output is appended to the next step's prompt as context. One
//! failing step aborts the chain; there is no retry at this level.

pub mod presets;

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::generation::PromptBuilder;
use crate::providers::LlmProvider;

/// A named persona a step speaks as
#[derive(Debug, Clone)]
pub struct Persona {
    /// Short role description ("task planner")
    pub role: String,
    /// What the persona is trying to produce
    pub goal: String,
    /// Background framing for the system prompt
    pub backstory: String,
    /// Sampling temperature for this persona's steps
    pub temperature: f32,
}

impl Persona {
    /// Render the persona into a system prompt
    pub fn system_prompt(&self) -> String {
        PromptBuilder::build_system_prompt(&self.role, &self.goal, &self.backstory)
    }
}

/// One unit of template execution within a chain
#[derive(Debug, Clone)]
pub struct Step {
    /// Label used in logs and outputs
    pub title: String,
    /// Prompt template with `{placeholder}` slots
    pub template: String,
    /// Persona the step runs as
    pub persona: Persona,
}

/// Output of a single executed step
#[derive(Debug, Clone)]
pub struct StepOutput {
    /// The step's title
    pub title: String,
    /// The model's response
    pub output: String,
}

/// A fixed sequence of steps over one LLM provider
pub struct Chain {
    provider: Arc<dyn LlmProvider>,
    steps: Vec<Step>,
}

impl Chain {
    /// Create a chain over a provider
    pub fn new(provider: Arc<dyn LlmProvider>, steps: Vec<Step>) -> Self {
        Self { provider, steps }
    }

    /// Number of steps in the chain
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, threading each output into the next prompt.
    ///
    /// Returns all step outputs; the last one is the chain result.
    pub async fn run(&self, inputs: &HashMap<String, String>) -> Result<Vec<StepOutput>> {
        let mut outputs: Vec<StepOutput> = Vec::with_capacity(self.steps.len());
        let mut previous: Option<String> = None;

        for step in &self.steps {
            let mut prompt = PromptBuilder::render_template(&step.template, inputs);
            if let Some(context) = &previous {
                prompt = PromptBuilder::with_previous_output(&prompt, context);
            }

            tracing::info!("Running chain step '{}' as {}", step.title, step.persona.role);

            let output = self
                .provider
                .generate(&step.persona.system_prompt(), &prompt, step.persona.temperature)
                .await?;

            previous = Some(output.clone());
            outputs.push(StepOutput {
                title: step.title.clone(),
                output,
            });
        }

        Ok(outputs)
    }
}
