//! Agent definitions
//!
//! Four immutable configuration records, one per role, each bound to the
//! shared LLM configuration. The analytical behavior these describe is
//! executed by the external model; nothing here enforces the caps, they
//! are passed through as configuration values.

use crate::config::LlmConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Configuration for one prompt-driven agent.
///
/// Immutable after construction. `goal` may contain a `{query}` placeholder
/// rendered via [`crate::template::render`] at invocation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSpec {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub verbose: bool,
    pub memory: bool,
    pub max_iter: u32,
    pub max_rpm: u32,
    pub allow_delegation: bool,
    pub llm: Arc<LlmConfig>,
}

/// The four predefined agents, built once at startup and shared by Arc.
#[derive(Debug, Clone)]
pub struct AgentRoster {
    pub financial_analyst: Arc<AgentSpec>,
    pub verifier: Arc<AgentSpec>,
    pub investment_advisor: Arc<AgentSpec>,
    pub risk_assessor: Arc<AgentSpec>,
}

impl AgentRoster {
    pub fn new(llm: Arc<LlmConfig>) -> Self {
        Self {
            financial_analyst: Arc::new(financial_analyst(llm.clone())),
            verifier: Arc::new(verifier(llm.clone())),
            investment_advisor: Arc::new(investment_advisor(llm.clone())),
            risk_assessor: Arc::new(risk_assessor(llm)),
        }
    }

    /// All agents in a stable order, for iteration and integrity checks.
    pub fn all(&self) -> [&Arc<AgentSpec>; 4] {
        [
            &self.financial_analyst,
            &self.verifier,
            &self.investment_advisor,
            &self.risk_assessor,
        ]
    }

    /// True when `agent` is one of the roster's four shared instances.
    pub fn contains(&self, agent: &Arc<AgentSpec>) -> bool {
        self.all().iter().any(|a| Arc::ptr_eq(a, agent))
    }
}

/// Experienced financial analyst
pub fn financial_analyst(llm: Arc<LlmConfig>) -> AgentSpec {
    AgentSpec {
        role: "Senior Financial Analyst".to_string(),
        goal: "Analyze financial documents carefully and provide accurate investment insights based on {query}".to_string(),
        backstory: concat!(
            "You are an experienced financial analyst with deep knowledge of market analysis and investment strategies. ",
            "You have worked in institutional finance for 15+ years and understand regulatory compliance requirements. ",
            "You carefully read and analyze financial reports to extract meaningful insights. ",
            "You provide evidence-based investment recommendations focused on risk-adjusted returns. ",
            "You maintain professional standards and prioritize accuracy over dramatic predictions. ",
            "Your goal is to help investors make informed decisions based on thorough financial analysis."
        ).to_string(),
        verbose: true,
        memory: true,
        max_iter: 5,
        max_rpm: 5,
        allow_delegation: true,
        llm,
    }
}

/// Document verifier
pub fn verifier(llm: Arc<LlmConfig>) -> AgentSpec {
    AgentSpec {
        role: "Financial Document Verifier".to_string(),
        goal: "Verify that uploaded documents are legitimate financial reports and assess their authenticity"
            .to_string(),
        backstory: concat!(
            "You are a meticulous document verification specialist with expertise in financial compliance. ",
            "You have worked in financial regulation and understand documentation standards. ",
            "You carefully validate financial documents against industry standards. ",
            "You can identify genuine financial reports and flag potentially problematic documents. ",
            "You maintain high accuracy standards and provide detailed verification reports. ",
            "You help prevent fraud by conducting thorough document reviews."
        ).to_string(),
        verbose: true,
        memory: true,
        max_iter: 3,
        max_rpm: 3,
        allow_delegation: true,
        llm,
    }
}

/// Certified investment advisor
pub fn investment_advisor(llm: Arc<LlmConfig>) -> AgentSpec {
    AgentSpec {
        role: "Investment Advisor".to_string(),
        goal: "Provide professional investment recommendations based on thorough financial analysis of {query}"
            .to_string(),
        backstory: concat!(
            "You are a certified investment advisor with SEC credentials and 12+ years of experience. ",
            "You specialize in portfolio construction and risk management. ",
            "You follow fiduciary standards and always act in clients' best interests. ",
            "You provide diversified investment recommendations aligned with client risk profiles. ",
            "You base all recommendations on solid financial analysis and market research. ",
            "You maintain professional ethics standards and regulatory compliance at all times."
        ).to_string(),
        verbose: true,
        memory: false,
        max_iter: 4,
        max_rpm: 4,
        allow_delegation: false,
        llm,
    }
}

/// Quantitative risk analyst
pub fn risk_assessor(llm: Arc<LlmConfig>) -> AgentSpec {
    AgentSpec {
        role: "Risk Assessment Specialist".to_string(),
        goal: "Conduct thorough risk analysis based on the financial document provided in {query}".to_string(),
        backstory: concat!(
            "You are a quantitative risk analyst with expertise in financial modeling and risk metrics. ",
            "You have managed portfolios worth billions and understand market dynamics deeply. ",
            "You use established risk frameworks like Value-at-Risk and stress testing. ",
            "You identify both upside and downside scenarios with realistic probability assessments. ",
            "You recommend appropriate hedging strategies based on portfolio composition. ",
            "You maintain disciplined risk management practices aligned with institutional standards."
        ).to_string(),
        verbose: true,
        memory: false,
        max_iter: 4,
        max_rpm: 4,
        allow_delegation: false,
        llm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_llm() -> Arc<LlmConfig> {
        Arc::new(LlmConfig::with_api_key("test-key"))
    }

    #[test]
    fn test_roster_builds_four_distinct_agents() {
        let roster = AgentRoster::new(test_llm());
        let roles: Vec<&str> = roster.all().iter().map(|a| a.role.as_str()).collect();
        assert_eq!(
            roles,
            vec![
                "Senior Financial Analyst",
                "Financial Document Verifier",
                "Investment Advisor",
                "Risk Assessment Specialist",
            ]
        );
    }

    #[test]
    fn test_llm_config_is_shared() {
        let llm = test_llm();
        let roster = AgentRoster::new(llm.clone());
        for agent in roster.all() {
            assert!(Arc::ptr_eq(&agent.llm, &llm));
        }
    }

    #[test]
    fn test_delegation_and_caps() {
        let roster = AgentRoster::new(test_llm());

        assert!(roster.financial_analyst.allow_delegation);
        assert_eq!(roster.financial_analyst.max_iter, 5);
        assert_eq!(roster.financial_analyst.max_rpm, 5);

        assert!(roster.verifier.allow_delegation);
        assert_eq!(roster.verifier.max_iter, 3);

        assert!(!roster.investment_advisor.allow_delegation);
        assert!(!roster.risk_assessor.allow_delegation);
        assert_eq!(roster.risk_assessor.max_rpm, 4);
    }

    #[test]
    fn test_contains_rejects_foreign_agents() {
        let roster = AgentRoster::new(test_llm());
        assert!(roster.contains(&roster.financial_analyst));

        let foreign = Arc::new(financial_analyst(test_llm()));
        assert!(!roster.contains(&foreign));
    }
}
