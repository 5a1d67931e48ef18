/// Prefix the orchestrator gives to tools that hand control to another agent
pub const HANDOFF_PREFIX: &str = "transfer_to_";

/// The orchestrator's root agent, active at the start of every user turn
pub const ROOT_AGENT: &str = "supervisor";

/// Decides which tool names represent a handoff between agents.
///
/// The orchestrator encodes handoffs in tool names only, so this is the single place that
/// knows the convention. The parser and the transition extractor both go through it.
pub trait AgentResolver: Send + Sync {
    /// The agent `tool_name` hands control to, if it is a handoff tool
    fn handoff_target<'a>(&self, tool_name: &'a str) -> Option<&'a str>;

    /// The agent active after `tool_name` ran, given the agent active before it
    fn agent_for<'a>(&self, tool_name: &'a str, prior_agent: &'a str) -> &'a str {
        self.handoff_target(tool_name).unwrap_or(prior_agent)
    }
}

/// Handoff detection through the `transfer_to_<agent>` naming convention
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferPrefix;

impl AgentResolver for TransferPrefix {
    fn handoff_target<'a>(&self, tool_name: &'a str) -> Option<&'a str> {
        tool_name.strip_prefix(HANDOFF_PREFIX)
    }
}

/// [`AgentResolver::agent_for`] using the default naming convention
pub fn agent_for<'a>(tool_name: &'a str, prior_agent: &'a str) -> &'a str {
    TransferPrefix.agent_for(tool_name, prior_agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handoff_tool_switches_agent() {
        assert_eq!(agent_for("transfer_to_news_agent", "supervisor"), "news_agent");
        assert_eq!(
            agent_for("transfer_to_meeting_scheduler_agent", "news_agent"),
            "meeting_scheduler_agent"
        );
    }

    #[test]
    fn test_regular_tool_keeps_prior_agent() {
        assert_eq!(agent_for("search_news", "news_agent"), "news_agent");
        assert_eq!(agent_for("unknown_tool", "supervisor"), "supervisor");
    }

    #[test]
    fn test_prefix_must_lead() {
        assert_eq!(agent_for("please_transfer_to_email_agent", "supervisor"), "supervisor");
        assert_eq!(agent_for("TRANSFER_TO_email_agent", "supervisor"), "supervisor");
    }

    #[test]
    fn test_only_leading_prefix_is_stripped() {
        assert_eq!(
            TransferPrefix.handoff_target("transfer_to_transfer_to_x"),
            Some("transfer_to_x")
        );
    }

    struct ExplicitHandoff;

    impl AgentResolver for ExplicitHandoff {
        fn handoff_target<'a>(&self, tool_name: &'a str) -> Option<&'a str> {
            tool_name.strip_prefix("handoff:")
        }
    }

    #[test]
    fn test_custom_resolver() {
        assert_eq!(ExplicitHandoff.agent_for("handoff:email_agent", "supervisor"), "email_agent");
        assert_eq!(
            ExplicitHandoff.agent_for("transfer_to_email_agent", "supervisor"),
            "supervisor"
        );
    }
}
