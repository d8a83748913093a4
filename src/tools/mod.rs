//! Tool trait and registry
//!
//! Tools are deterministic, side-effect-free text operations. The two
//! "analysis" tools are deliberate pass-throughs: whitespace normalization
//! and identity. They exist as seams for future scoring logic, not as
//! analysis — the analytical reasoning lives in the external model.

use crate::error::CrewError;
use crate::loader::{self, DEFAULT_DOCUMENT_PATH};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Collapse all whitespace runs to single spaces.
///
/// Total and idempotent: normalizing an already-normalized string is a
/// no-op.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Return the input unchanged. Extension point for risk scoring that does
/// not exist yet.
pub fn identity(text: &str) -> &str {
    text
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInput {
    pub tool_name: String,
    pub parameters: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    pub success: bool,
    pub data: Value,
    pub error: Option<String>,
}

/// Trait for a single tool (deterministic execution)
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    async fn execute(&self, input: &ToolInput) -> Result<ToolOutput>;
}

/// Tool registry for looking up and executing tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn list(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Look up and run a tool in one call.
    pub async fn execute(&self, input: &ToolInput) -> Result<ToolOutput> {
        let tool = self
            .get(&input.tool_name)
            .ok_or_else(|| CrewError::ToolNotFound(input.tool_name.clone()))?;
        tool.execute(input).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn require_text(input: &ToolInput) -> Result<String> {
    input
        .parameters
        .get("text")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            CrewError::InvalidToolInput("Expected 'text' in tool_input".to_string())
        })
}

/// Read a PDF financial document into normalized text.
///
/// Takes an optional "path" parameter, defaulting to `data/sample.pdf`.
pub struct ReadFinancialDocumentTool;

#[async_trait::async_trait]
impl Tool for ReadFinancialDocumentTool {
    fn name(&self) -> &'static str {
        "read_financial_document"
    }

    fn description(&self) -> &'static str {
        "Read a PDF financial document from a path into normalized text"
    }

    async fn execute(&self, input: &ToolInput) -> Result<ToolOutput> {
        let path = input
            .parameters
            .get("path")
            .and_then(|v| v.as_str())
            .unwrap_or(DEFAULT_DOCUMENT_PATH);

        let full_report = loader::load_financial_document(path)?;

        Ok(ToolOutput {
            success: true,
            data: json!({
                "path": path,
                "text": full_report,
            }),
            error: None,
        })
    }
}

/// Investment analysis pass-through: normalizes document whitespace.
pub struct InvestmentAnalysisTool;

#[async_trait::async_trait]
impl Tool for InvestmentAnalysisTool {
    fn name(&self) -> &'static str {
        "analyze_investment"
    }

    fn description(&self) -> &'static str {
        "Prepare financial document text for investment analysis"
    }

    async fn execute(&self, input: &ToolInput) -> Result<ToolOutput> {
        let text = require_text(input)?;
        let processed_data = normalize_whitespace(&text);

        Ok(ToolOutput {
            success: true,
            data: json!({ "text": processed_data }),
            error: None,
        })
    }
}

/// Risk assessment pass-through: returns the document text unchanged.
pub struct RiskAssessmentTool;

#[async_trait::async_trait]
impl Tool for RiskAssessmentTool {
    fn name(&self) -> &'static str {
        "assess_risk"
    }

    fn description(&self) -> &'static str {
        "Prepare financial document text for risk assessment"
    }

    async fn execute(&self, input: &ToolInput) -> Result<ToolOutput> {
        let text = require_text(input)?;

        Ok(ToolOutput {
            success: true,
            data: json!({ "text": identity(&text) }),
            error: None,
        })
    }
}

/// Create the default registry with all document tools registered.
pub fn create_default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(ReadFinancialDocumentTool));
    registry.register(Arc::new(InvestmentAnalysisTool));
    registry.register(Arc::new(RiskAssessmentTool));

    registry
}
