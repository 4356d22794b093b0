//! Stock chains
//!
//! Two fixed pipelines: a prompt assembler/refiner pair and a three-step
//! day planner that plans tasks, writes a greeting, then reviews the plan.

use std::sync::Arc;

use crate::providers::LlmProvider;

use super::{Chain, Persona, Step};

/// Inputs expected by [`prompt_refinery`]
pub const PROMPT_REFINERY_INPUTS: &[&str] = &[
    "topic",
    "role_context",
    "objective",
    "task",
    "specifications",
    "expected_output",
    "constraints",
    "complexity",
    "temperature",
];

/// Two-step chain: assemble a structured prompt from the inputs, then
/// refine it to the requested complexity level.
pub fn prompt_refinery(provider: Arc<dyn LlmProvider>) -> Chain {
    let assembler = Persona {
        role: "prompt assembler".to_string(),
        goal: "a structured prompt built from the provided inputs".to_string(),
        backstory: "You assemble structured prompts from the exact strings given to you."
            .to_string(),
        temperature: 0.1,
    };

    let refiner = Persona {
        role: "prompt engineer".to_string(),
        goal: "refine the assembled prompt to the requested complexity level".to_string(),
        backstory: "You apply advanced prompt-engineering techniques to produce precise, \
                    intellectually rigorous prompts."
            .to_string(),
        temperature: 0.8,
    };

    Chain::new(
        provider,
        vec![
            Step {
                title: "assemble".to_string(),
                template: "Build a structured prompt using the exact values below. \
                           Substitute nothing and invent nothing.\n\
                           - Topic: '{topic}'\n\
                           - Role and context: '{role_context}'\n\
                           - Objective: '{objective}'\n\
                           - Task: '{task}'\n\
                           - Specifications: '{specifications}'\n\
                           - Expected output: '{expected_output}'\n\
                           - Constraints: '{constraints}'\n\
                           - Complexity level (1-10): '{complexity}'\n\
                           - Temperature: '{temperature}'\n\
                           Return the prompt as a single string with one \
                           'Label: value' line per item above."
                    .to_string(),
                persona: assembler,
            },
            Step {
                title: "refine".to_string(),
                template: "Refine the assembled prompt to complexity level {complexity} \
                           on a 1-10 scale, where 1 is a rudimentary factual description \
                           and 10 is an essay-grade text with original arguments. Preserve \
                           every element and every original input value, but rewrite each \
                           item with more detail and sophistication. Produce flowing text \
                           that starts with 'You are' followed by the refined role and \
                           context. Do not invent values beyond those provided."
                    .to_string(),
                persona: refiner,
            },
        ],
    )
}

/// Inputs expected by [`day_planner`]
pub const DAY_PLANNER_INPUTS: &[&str] = &["name", "date", "time", "day_part"];

/// Three-step chain: plan tasks for the day part, write a greeting around
/// them, then add a reviewer's comment.
pub fn day_planner(provider: Arc<dyn LlmProvider>) -> Chain {
    let planner = Persona {
        role: "task planner".to_string(),
        goal: "a task list for the day matched to the part of the day".to_string(),
        backstory: "You are an efficient organizer who suggests tasks suited to the hour."
            .to_string(),
        temperature: 0.7,
    };

    let greeter = Persona {
        role: "greeting writer".to_string(),
        goal: "a personalized greeting built around the day's tasks".to_string(),
        backstory: "You write motivational greetings that fold in the plan for the day."
            .to_string(),
        temperature: 0.7,
    };

    let reviewer = Persona {
        role: "plan reviewer".to_string(),
        goal: "a short motivational comment on the plan".to_string(),
        backstory: "You encourage people with positive remarks about their plans.".to_string(),
        temperature: 0.7,
    };

    Chain::new(
        provider,
        vec![
            Step {
                title: "plan".to_string(),
                template: "Produce a JSON object with a single key \"tasks\" holding a \
                           list of exactly 3 task strings appropriate for the {day_part} \
                           (for example planning the day in the morning, or winding down \
                           in the evening). Do not invent times of day and return only \
                           the JSON."
                    .to_string(),
                persona: planner,
            },
            Step {
                title: "greet".to_string(),
                template: "Using the task list from the previous step, return a JSON \
                           object with:\n\
                           - \"name\": '{name}'\n\
                           - \"message\": a greeting like \"Good {day_part}, {name}! \
                           Today you could: \" followed by the tasks separated by commas\n\
                           - \"tasks\": the task list exactly as received\n\
                           - \"date\": '{date}'\n\
                           - \"time\": '{time}'\n\
                           Return only the JSON."
                    .to_string(),
                persona: greeter,
            },
            Step {
                title: "review".to_string(),
                template: "Add a \"comment\" field to the JSON from the previous step: a \
                           short motivational remark grounded in the time '{time}' and \
                           the listed tasks. Do not alter any existing field. Return the \
                           updated JSON."
                    .to_string(),
                persona: reviewer,
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use async_trait::async_trait;

    struct NullLlm;

    #[async_trait]
    impl LlmProvider for NullLlm {
        async fn generate(&self, _: &str, _: &str, _: f32) -> Result<String> {
            Ok(String::new())
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "null"
        }

        fn model(&self) -> &str {
            "null"
        }
    }

    #[test]
    fn test_prompt_refinery_shape() {
        let chain = prompt_refinery(Arc::new(NullLlm));
        assert_eq!(chain.len(), 2);
        for key in PROMPT_REFINERY_INPUTS {
            assert!(
                chain.steps[0].template.contains(&format!("{{{}}}", key)),
                "assemble template missing placeholder {{{}}}",
                key
            );
        }
    }

    #[test]
    fn test_day_planner_shape() {
        let chain = day_planner(Arc::new(NullLlm));
        assert_eq!(chain.len(), 3);
        assert!(chain.steps[0].template.contains("{day_part}"));
        assert!(chain.steps[1].template.contains("{name}"));
        assert!(chain.steps[1].template.contains("{date}"));
        assert!(chain.steps[2].template.contains("{time}"));
    }
}
