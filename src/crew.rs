//! Crew assembly and sequential kickoff
//!
//! The crew is built once at startup: shared LLM config, four agents, four
//! tasks. Kickoff renders each task prompt against the query and runs the
//! tasks strictly in order, feeding every prior output forward as context.
//! Iteration and rate caps on the agents are configuration passed along to
//! the provider side; nothing here enforces them.

use crate::agents::{AgentRoster, AgentSpec};
use crate::config::LlmConfig;
use crate::llm::LlmClient;
use crate::tasks::{default_tasks, TaskSpec};
use crate::template::{render, TemplateContext};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Output of a single completed task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskOutput {
    pub agent_role: String,
    pub output: String,
}

/// Output of a full crew run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewOutput {
    pub task_outputs: Vec<TaskOutput>,
    pub final_output: String,
}

/// The assembled crew: roster, task list, and LLM client.
pub struct Crew {
    roster: AgentRoster,
    tasks: Vec<TaskSpec>,
    client: LlmClient,
}

impl Crew {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let config = Arc::new(config);
        let roster = AgentRoster::new(config.clone());
        let tasks = default_tasks(&roster);
        let client = LlmClient::new(config)?;

        Ok(Self {
            roster,
            tasks,
            client,
        })
    }

    pub fn roster(&self) -> &AgentRoster {
        &self.roster
    }

    pub fn tasks(&self) -> &[TaskSpec] {
        &self.tasks
    }

    /// Run every task in order against the query and document text.
    pub async fn kickoff(&self, query: &str, document_text: &str) -> Result<CrewOutput> {
        let ctx = TemplateContext::new(query);
        let mut task_outputs: Vec<TaskOutput> = Vec::with_capacity(self.tasks.len());

        info!(task_count = self.tasks.len(), "Starting crew kickoff");

        for task in &self.tasks {
            let system = build_system_prompt(&task.agent, task, &ctx)?;
            let user = build_user_prompt(task, &ctx, document_text, &task_outputs)?;

            debug!(
                agent = %task.agent.role,
                system_len = system.len(),
                user_len = user.len(),
                "Dispatching task"
            );

            let output = self.client.complete(&system, &user).await?;

            info!(
                agent = %task.agent.role,
                output_len = output.len(),
                "Task completed"
            );

            task_outputs.push(TaskOutput {
                agent_role: task.agent.role.clone(),
                output,
            });
        }

        let final_output = task_outputs
            .last()
            .map(|t| t.output.clone())
            .unwrap_or_default();

        Ok(CrewOutput {
            task_outputs,
            final_output,
        })
    }
}

/// Assemble the system prompt for one task from its agent's configuration.
pub fn build_system_prompt(
    agent: &AgentSpec,
    task: &TaskSpec,
    ctx: &TemplateContext,
) -> Result<String> {
    let goal = render(&agent.goal, ctx)?;

    Ok(format!(
        "You are {role}.\n\n{backstory}\n\nYour goal: {goal}\n\nStructure your answer as:\n{expected_output}",
        role = agent.role,
        backstory = agent.backstory,
        goal = goal,
        expected_output = task.expected_output,
    ))
}

/// Assemble the user prompt: rendered task description, document text, and
/// any prior task outputs as context.
pub fn build_user_prompt(
    task: &TaskSpec,
    ctx: &TemplateContext,
    document_text: &str,
    prior: &[TaskOutput],
) -> Result<String> {
    let description = render(&task.description, ctx)?;

    let mut prompt = description;
    prompt.push_str("\n\nFinancial document:\n");
    prompt.push_str(document_text);

    for earlier in prior {
        prompt.push_str(&format!(
            "\n\nOutput from {}:\n{}",
            earlier.agent_role, earlier.output
        ));
    }

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_crew() -> Crew {
        Crew::new(LlmConfig::with_api_key("test-key")).unwrap()
    }

    #[test]
    fn test_crew_builds_four_wired_tasks() {
        let crew = test_crew();
        assert_eq!(crew.tasks().len(), 4);
        for task in crew.tasks() {
            assert!(crew.roster().contains(&task.agent));
        }
    }

    #[test]
    fn test_system_prompt_renders_goal() {
        let crew = test_crew();
        let ctx = TemplateContext::new("Is TSLA overvalued?");

        // The analyst goal carries {query}; its rendered form must appear.
        let task = &crew.tasks()[1];
        let system = build_system_prompt(&task.agent, task, &ctx).unwrap();

        assert!(system.contains("Senior Financial Analyst"));
        assert!(system.contains("Is TSLA overvalued?"));
        assert!(!system.contains("{query}"));
        assert!(system.contains("Executive Summary"));
    }

    #[test]
    fn test_user_prompt_carries_document_and_prior_outputs() {
        let crew = test_crew();
        let ctx = TemplateContext::new("Assess liquidity");

        let prior = vec![TaskOutput {
            agent_role: "Financial Document Verifier".to_string(),
            output: "Document approved.".to_string(),
        }];

        let task = &crew.tasks()[3];
        let user = build_user_prompt(task, &ctx, "Revenue: $1M\n", &prior).unwrap();

        assert!(user.contains("Assess liquidity"));
        assert!(user.contains("Revenue: $1M"));
        assert!(user.contains("Output from Financial Document Verifier:"));
        assert!(user.contains("Document approved."));
    }
}
