//! Display profiles for the agents the orchestrator is known to run

/// Agent the review endpoint's replies are attributed to
pub const SENTIMENT_AGENT: &str = "sentiment_agent";

/// How an agent is presented to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentProfile {
    pub display_name: String,
    pub icon: &'static str,
    /// ANSI 256-colour palette index
    pub color: u8,
}

const KNOWN_AGENTS: &[(&str, &str, &str, u8)] = &[
    ("supervisor", "Supervisor", "🎯", 63),
    ("pdf_summarizer_agent", "PDF Summarizer", "📄", 99),
    ("audio_summarizer_agent", "Audio Summarizer", "🎵", 205),
    ("news_agent", "News Fetcher", "📰", 36),
    ("email_agent", "Emailer", "📧", 214),
    ("meeting_scheduler_agent", "Meeting Scheduler", "📅", 33),
    (SENTIMENT_AGENT, "Sentiment Agent", "💭", 37),
    ("user", "User", "👤", 244),
];

impl AgentProfile {
    /// Look up the profile for an agent id, falling back to a generic one
    pub fn for_agent(agent: &str) -> Self {
        KNOWN_AGENTS
            .iter()
            .find(|(id, ..)| *id == agent)
            .map(|(_, display_name, icon, color)| AgentProfile {
                display_name: display_name.to_string(),
                icon: *icon,
                color: *color,
            })
            .unwrap_or_else(|| AgentProfile {
                display_name: if agent.is_empty() {
                    "Unknown".to_string()
                } else {
                    agent.to_string()
                },
                icon: "🤖",
                color: 248,
            })
    }
}
