use anyhow::{anyhow, Result};
use bat::PrettyPrinter;
use console::style;
use flowview::agents::AgentProfile;
use flowview::models::step::{Step, Workflow};
use flowview::models::tool::{ToolCallRequest, ToolResult};
use flowview::workflow::Transition;
use serde_json::{json, Value};

const INDENT: &str = "    ";

pub const EMPTY_WORKFLOW: &str =
    "No workflow data to display. Submit a request to see the agent workflow.";

/// Terminal presentation of a parsed workflow
pub struct Renderer {
    max_chars: usize,
}

impl Renderer {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn print_workflow(&self, workflow: &Workflow, transitions: &[Transition]) -> Result<()> {
        if workflow.is_empty() {
            println!("{}", style(EMPTY_WORKFLOW).dim());
            return Ok(());
        }

        println!("{}", self.header(workflow));
        let count = workflow.steps.len();
        for (index, step) in workflow.steps.iter().enumerate() {
            print!("{}", self.step(step, index + 1, index + 1 == count));
        }

        if !transitions.is_empty() {
            println!("{}", self.handoffs(transitions));
        }

        if let Some(response) = workflow.final_response.as_deref().filter(|r| !r.is_empty()) {
            println!("{}", style("Final Response").bold());
            print_markdown(response)?;
            println!();
        }
        Ok(())
    }

    pub fn print_json(&self, workflow: &Workflow, transitions: &[Transition]) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(&json_document(workflow, transitions))?);
        Ok(())
    }

    fn header(&self, workflow: &Workflow) -> String {
        let count = workflow.steps.len();
        format!(
            "{} {}\n",
            style("Agent Workflow").bold(),
            style(format!("{} step{}", count, if count == 1 { "" } else { "s" })).dim()
        )
    }

    fn step(&self, step: &Step, number: usize, is_last: bool) -> String {
        let mut out = format!(
            "{} {} {}\n",
            style(format!("Step {}", number)).bold(),
            badge(&step.agent),
            style(step.kind.label()).dim()
        );

        if !step.content.is_empty() {
            out.push_str(&self.section("Content", &step.content));
        }

        if let Some(response) = step.assistant_response.as_deref().filter(|r| !r.is_empty()) {
            out.push_str(&self.section("Assistant Response", response));
        }

        if !step.tool_calls.is_empty() {
            out.push_str(&format!("{}{}\n", INDENT, style("Tool Calls:").dim()));
            for call in &step.tool_calls {
                out.push_str(&tool_call(call));
            }
        }

        if !step.tool_results.is_empty() {
            out.push_str(&format!("{}{}\n", INDENT, style("Tool Results:").dim()));
            for result in &step.tool_results {
                out.push_str(&self.tool_result(result));
            }
        }

        if !is_last {
            out.push_str(&format!("{}{}\n", INDENT, style("│").dim()));
        }
        out
    }

    fn section(&self, label: &str, content: &str) -> String {
        format!(
            "{}{}\n{}\n",
            INDENT,
            style(format!("{}:", label)).dim(),
            indent(&truncate(content, self.max_chars), 2)
        )
    }

    fn tool_result(&self, result: &ToolResult) -> String {
        format!(
            "{}✅ {}\n{}\n",
            INDENT.repeat(2),
            style(&result.tool_name).bold(),
            indent(&truncate(&result.result, self.max_chars), 3)
        )
    }

    fn handoffs(&self, transitions: &[Transition]) -> String {
        let mut out = format!("{}\n", style("Handoffs").bold());
        for transition in transitions {
            out.push_str(&format!(
                "{}{} → {} {}\n",
                INDENT,
                badge(&transition.from),
                badge(&transition.to),
                style(format!("(message {})", transition.step_index)).dim()
            ));
        }
        out
    }
}

/// The machine readable document printed by `--json`
pub fn json_document(workflow: &Workflow, transitions: &[Transition]) -> Value {
    json!({
        "steps": workflow.steps,
        "finalResponse": workflow.final_response,
        "transitions": transitions,
    })
}

fn badge(agent: &str) -> String {
    let profile = AgentProfile::for_agent(agent);
    style(format!("{} {}", profile.icon, profile.display_name))
        .color256(profile.color)
        .bold()
        .to_string()
}

fn tool_call(call: &ToolCallRequest) -> String {
    let mut out = format!("{}🔧 {}\n", INDENT.repeat(2), style(&call.name).bold());
    if let Some(arguments) = format_arguments(&call.arguments) {
        out.push_str(&indent(&arguments, 3));
        out.push('\n');
    }
    out
}

/// Pretty printed arguments, or None when there is nothing worth showing
pub fn format_arguments(arguments: &Value) -> Option<String> {
    match arguments {
        Value::Null => None,
        Value::Object(map) if map.is_empty() => None,
        other => serde_json::to_string_pretty(other).ok(),
    }
}

/// Cut content longer than `max_chars` characters, marking the cut with an ellipsis
pub fn truncate(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        content.to_string()
    } else {
        format!("{}...", content.chars().take(max_chars).collect::<String>())
    }
}

fn indent(text: &str, depth: usize) -> String {
    let prefix = INDENT.repeat(depth);
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_markdown(content: &str) -> Result<()> {
    PrettyPrinter::new()
        .input_from_bytes(content.as_bytes())
        .language("markdown")
        .print()
        .map_err(|e| anyhow!("Failed to render response: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowview::models::message::Message;
    use flowview::workflow::{extract_transitions, parse_transcript};

    fn news_workflow() -> (Workflow, Vec<Transition>) {
        let messages = vec![
            Message::user("news?"),
            Message::assistant("")
                .with_name("supervisor")
                .with_tool_request("transfer_to_news_agent", json!({})),
            Message::tool("transfer_to_news_agent", "ok"),
            Message::assistant("Top story...").with_name("news_agent"),
        ];
        (parse_transcript(&messages), extract_transitions(&messages))
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello world", 5), "hello...");

        let long = "é".repeat(600);
        let truncated = truncate(&long, 500);
        assert_eq!(truncated.chars().count(), 503);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_format_arguments() {
        assert_eq!(format_arguments(&Value::Null), None);
        assert_eq!(format_arguments(&json!({})), None);
        assert_eq!(
            format_arguments(&json!({"to": "boss@example.com"})),
            Some("{\n  \"to\": \"boss@example.com\"\n}".to_string())
        );
        assert_eq!(format_arguments(&json!(42)), Some("42".to_string()));
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\nb", 1), "    a\n    b");
    }

    #[test]
    fn test_step_rendering() {
        let (workflow, _) = news_workflow();
        let renderer = Renderer::new(500);
        let out = renderer.step(&workflow.steps[0], 1, true);

        assert!(out.contains("Step 1"));
        assert!(out.contains("News Fetcher"));
        assert!(out.contains("user input"));
        assert!(out.contains("news?"));
        assert!(out.contains("Top story..."));
        assert!(out.contains("transfer_to_news_agent"));
        assert!(!out.contains("│"));
    }

    #[test]
    fn test_step_rendering_truncates_results() {
        let mut step = Step::user_input(0, "hi");
        step.tool_results.push(ToolResult {
            tool_name: "search_news".to_string(),
            result: "x".repeat(40),
            tool_call_id: None,
        });

        let out = Renderer::new(10).step(&step, 1, false);
        assert!(out.contains(&format!("{}...", "x".repeat(10))));
        assert!(!out.contains(&"x".repeat(11)));
        assert!(out.contains("│"));
    }

    #[test]
    fn test_handoffs_rendering() {
        let (_, transitions) = news_workflow();
        let out = Renderer::new(500).handoffs(&transitions);
        assert!(out.contains("Supervisor"));
        assert!(out.contains("News Fetcher"));
        assert!(out.contains("(message 2)"));
    }

    #[test]
    fn test_json_document() {
        let (workflow, transitions) = news_workflow();
        let document = json_document(&workflow, &transitions);

        assert_eq!(document["steps"][0]["agent"], json!("news_agent"));
        assert_eq!(document["steps"][0]["type"], json!("user_input"));
        assert_eq!(document["finalResponse"], json!("Top story..."));
        assert_eq!(document["transitions"][0]["stepIndex"], json!(2));
    }
}
