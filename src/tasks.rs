//! Task definitions
//!
//! Four static prompt templates, each bound to exactly one agent from the
//! roster. Tasks are immutable and reference their agent by Arc identity;
//! the agent must exist before the task is constructed.

use crate::agents::{AgentRoster, AgentSpec};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A static prompt template bound to one agent.
///
/// `description` may contain a `{query}` placeholder; `expected_output` is a
/// plain structured outline handed to the model verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    pub description: String,
    pub expected_output: String,
    pub agent: Arc<AgentSpec>,
    pub async_execution: bool,
}

/// The default crew run order: verify the document first, then analyze,
/// advise, and assess risk on the back of that analysis.
pub fn default_tasks(roster: &AgentRoster) -> Vec<TaskSpec> {
    vec![
        verification(roster.verifier.clone()),
        analyze_financial_document(roster.financial_analyst.clone()),
        investment_analysis(roster.investment_advisor.clone()),
        risk_assessment(roster.risk_assessor.clone()),
    ]
}

/// Document authenticity and completeness check
pub fn verification(agent: Arc<AgentSpec>) -> TaskSpec {
    TaskSpec {
        description: concat!(
            "Verify the authenticity and completeness of the financial document: {query}. ",
            "Assess whether the document is a legitimate financial report. ",
            "Check for required financial statement components. ",
            "Validate data consistency and format compliance. ",
            "Identify any missing or concerning information."
        )
        .to_string(),
        expected_output: r#"Verification report including:
- Document Authenticity Assessment
- Financial Report Type Identification (10-K, Annual Report, etc.)
- Required Components Check (Balance Sheet, Income Statement, Cash Flow)
- Data Quality and Consistency Review
- Red Flags or Concerns Identified
- Verification Status (Approved/Needs Review/Rejected)
- Recommendations for Analysis
- Data collection date and report period confirmation
"#
        .to_string(),
        agent,
        async_execution: false,
    }
}

/// Core document analysis against the user's query
pub fn analyze_financial_document(agent: Arc<AgentSpec>) -> TaskSpec {
    TaskSpec {
        description: concat!(
            "Analyze the financial document provided and answer the user's query: {query}. ",
            "Carefully examine the financial statements, key metrics, and performance indicators. ",
            "Identify important trends, ratios, and financial health indicators. ",
            "Summarize key findings and their implications for investment decisions. ",
            "Use relevant data from the document to support your analysis."
        )
        .to_string(),
        expected_output: r#"Provide a comprehensive financial analysis including:
- Executive Summary of key financial metrics
- Balance Sheet Analysis (assets, liabilities, equity trends)
- Income Statement Review (revenue, profitability, margins)
- Cash Flow Assessment (operating, investing, financing activities)
- Financial Ratios (liquidity, profitability, efficiency ratios)
- Key Findings and Trends
- Investment Implications
- Risk Factors to Consider
- Data sources and references"#
            .to_string(),
        agent,
        async_execution: false,
    }
}

/// Investment recommendations built on the analysis
pub fn investment_analysis(agent: Arc<AgentSpec>) -> TaskSpec {
    TaskSpec {
        description: concat!(
            "Based on the financial document analysis provided, develop professional investment ",
            "recommendations addressing: {query}. ",
            "Evaluate the company's market position, competitive advantages, and growth prospects. ",
            "Assess valuation metrics relative to peers. ",
            "Consider sector trends and macro economic factors. ",
            "Provide specific, actionable investment recommendations with clear rationale."
        )
        .to_string(),
        expected_output: r#"Investment recommendations including:
- Company Overview and Current Valuation
- Valuation Analysis (P/E, P/B, DCF estimates)
- Competitive Position and Market Dynamics
- Growth Prospects and Opportunities
- Key Risks and Concerns
- Investment Rating (Buy/Hold/Sell) with justification
- Target Price and Investment Thesis
- Time Horizon for the recommendation
- Suitable for what investor profile
"#
        .to_string(),
        agent,
        async_execution: false,
    }
}

/// Comprehensive risk profile of the document's subject
pub fn risk_assessment(agent: Arc<AgentSpec>) -> TaskSpec {
    TaskSpec {
        description: concat!(
            "Conduct comprehensive risk assessment based on the financial document: {query}. ",
            "Identify financial, operational, market, and compliance risks. ",
            "Assess the company's ability to manage these risks. ",
            "Analyze sensitivity to market changes, competitive threats, and regulatory changes. ",
            "Quantify risk levels where possible and recommend mitigation strategies."
        )
        .to_string(),
        expected_output: r#"Complete risk assessment including:
- Executive Summary of Risk Profile
- Financial Risk Analysis (liquidity, solvency, debt ratios)
- Operational Risk Assessment (supply chain, key person risk)
- Market Risk (competitive position, industry disruption)
- Regulatory and Compliance Risk
- External Risk Factors (macro, geopolitical)
- Risk Rating (Low/Medium/High) with explanation
- Recommended Risk Mitigation Strategies
- Sensitivity Analysis Results
- Risk-Adjusted Valuation Impact
"#
        .to_string(),
        agent,
        async_execution: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlmConfig;

    fn test_roster() -> AgentRoster {
        AgentRoster::new(Arc::new(LlmConfig::with_api_key("test-key")))
    }

    #[test]
    fn test_default_tasks_cover_all_roles_in_order() {
        let roster = test_roster();
        let tasks = default_tasks(&roster);
        assert_eq!(tasks.len(), 4);

        let roles: Vec<&str> = tasks.iter().map(|t| t.agent.role.as_str()).collect();
        assert_eq!(
            roles,
            vec![
                "Financial Document Verifier",
                "Senior Financial Analyst",
                "Investment Advisor",
                "Risk Assessment Specialist",
            ]
        );
    }

    #[test]
    fn test_every_task_references_a_roster_agent() {
        let roster = test_roster();
        for task in default_tasks(&roster) {
            assert!(
                roster.contains(&task.agent),
                "task agent {} is not a roster instance",
                task.agent.role
            );
        }
    }

    #[test]
    fn test_tasks_are_synchronous() {
        let roster = test_roster();
        assert!(default_tasks(&roster).iter().all(|t| !t.async_execution));
    }
}
