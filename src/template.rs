//! Prompt template rendering
//!
//! Agent goals and task descriptions carry `{query}` placeholders. Instead
//! of ad-hoc string substitution, rendering takes a typed context and fails
//! at call time when a template names a field the context does not have.
//! `{{` and `}}` escape to literal braces.

use crate::error::CrewError;
use crate::Result;

/// Typed substitution context for agent and task templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    pub query: String,
}

impl TemplateContext {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "query" => Some(&self.query),
            _ => None,
        }
    }
}

/// Render `template`, substituting every `{name}` placeholder from `ctx`.
///
/// Unknown placeholders and malformed braces are errors, not silent
/// pass-throughs, so a bad template fails on the first render rather than
/// reaching the model.
pub fn render(template: &str, ctx: &TemplateContext) -> Result<String> {
    let mut out = String::with_capacity(template.len() + ctx.query.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) if ch.is_ascii_alphanumeric() || ch == '_' => name.push(ch),
                        Some(ch) => {
                            return Err(CrewError::Template(format!(
                                "invalid character '{}' inside placeholder",
                                ch
                            )))
                        }
                        None => {
                            return Err(CrewError::Template(
                                "unterminated placeholder".to_string(),
                            ))
                        }
                    }
                }

                match ctx.field(&name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(CrewError::Template(format!(
                            "unknown placeholder '{{{}}}'",
                            name
                        )))
                    }
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_query() {
        let ctx = TemplateContext::new("Is TSLA a buy?");
        let rendered = render("Answer the user's query: {query}.", &ctx).unwrap();
        assert_eq!(rendered, "Answer the user's query: Is TSLA a buy?.");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let ctx = TemplateContext::new("ignored");
        let rendered = render("no placeholders here", &ctx).unwrap();
        assert_eq!(rendered, "no placeholders here");
    }

    #[test]
    fn test_unknown_placeholder_rejected() {
        let ctx = TemplateContext::new("q");
        let err = render("hello {nope}", &ctx).unwrap_err();
        assert!(matches!(err, CrewError::Template(_)));
    }

    #[test]
    fn test_unterminated_placeholder_rejected() {
        let ctx = TemplateContext::new("q");
        let err = render("hello {query", &ctx).unwrap_err();
        assert!(matches!(err, CrewError::Template(_)));
    }

    #[test]
    fn test_escaped_braces() {
        let ctx = TemplateContext::new("q");
        let rendered = render("literal {{braces}} and {query}", &ctx).unwrap();
        assert_eq!(rendered, "literal {braces} and q");
    }

    #[test]
    fn test_all_agent_and_task_templates_render() {
        use crate::agents::AgentRoster;
        use crate::config::LlmConfig;
        use crate::tasks::default_tasks;
        use std::sync::Arc;

        let llm = Arc::new(LlmConfig::with_api_key("test"));
        let roster = AgentRoster::new(llm);
        let ctx = TemplateContext::new("Analyze this financial document");

        for agent in roster.all() {
            render(&agent.goal, &ctx).unwrap();
        }
        for task in default_tasks(&roster) {
            render(&task.description, &ctx).unwrap();
        }
    }
}
