use std::fs;
use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{json, Value};

use super::config::OrchestratorConfig;
use crate::agents::SENTIMENT_AGENT;
use crate::errors::{OrchestratorError, OrchestratorResult};
use crate::models::message::Message;
use crate::wire::transcript_from_value;

/// A file sent along with a supervisor request
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new<S: Into<String>>(file_name: S, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> OrchestratorResult<Self> {
        let bytes = fs::read(path).map_err(OrchestratorError::Attachment)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }
}

/// Reply from the review endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewReply {
    #[serde(default)]
    pub session_id: Option<String>,
    pub response: String,
    #[serde(default)]
    pub history: Vec<String>,
}

impl ReviewReply {
    /// The review endpoint only returns text; present it as a two message exchange
    pub fn transcript<S: Into<String>>(&self, user_input: S) -> Vec<Message> {
        vec![
            Message::user(user_input),
            Message::assistant(self.response.clone()).with_name(SENTIMENT_AGENT),
        ]
    }
}

pub struct OrchestratorClient {
    client: Client,
    config: OrchestratorConfig,
}

impl OrchestratorClient {
    pub fn new(config: OrchestratorConfig) -> OrchestratorResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Run a request through the supervisor agent and return its transcript
    pub async fn submit(
        &self,
        content: &str,
        attachment: Option<Attachment>,
    ) -> OrchestratorResult<Vec<Message>> {
        let mut form = Form::new().text("content", content.to_string());
        if let Some(attachment) = attachment {
            tracing::debug!(file = %attachment.file_name, "attaching file");
            form = form.part(
                "file",
                Part::bytes(attachment.bytes).file_name(attachment.file_name),
            );
        }

        let url = self.config.endpoint("/supervisor");
        tracing::info!(%url, "submitting request to supervisor");
        let response = self.client.post(&url).multipart(form).send().await?;
        let body = Self::json_body(response).await?;

        Ok(transcript_from_value(&body)?)
    }

    /// Send free-text feedback to the sentiment review agent
    pub async fn review(&self, user_input: &str) -> OrchestratorResult<ReviewReply> {
        let url = self.config.endpoint("/review");
        tracing::info!(%url, "submitting review");
        let response = self
            .client
            .post(&url)
            .json(&json!({ "user_input": user_input }))
            .send()
            .await?;
        let body = Self::json_body(response).await?;

        Ok(serde_json::from_value(body)?)
    }

    async fn json_body(response: Response) -> OrchestratorResult<Value> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(OrchestratorError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::message::Role;
    use crate::workflow::parse_transcript;
    use wiremock::matchers::{body_json, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn _setup_mock_server(
        endpoint: &str,
        response: ResponseTemplate,
    ) -> (MockServer, OrchestratorClient) {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let client = OrchestratorClient::new(OrchestratorConfig::new(mock_server.uri())).unwrap();
        (mock_server, client)
    }

    #[tokio::test]
    async fn test_submit_returns_transcript() -> anyhow::Result<()> {
        let body = json!({
            "result": {
                "messages": [
                    {"role": "user", "content": "news?"},
                    {"role": "tool", "name": "transfer_to_news_agent", "content": "ok"},
                    {"role": "assistant", "name": "news_agent", "content": "Top story..."}
                ]
            }
        });
        let (_server, client) =
            _setup_mock_server("/supervisor", ResponseTemplate::new(200).set_body_json(body)).await;

        let messages = client.submit("news?", None).await?;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::Tool);

        let workflow = parse_transcript(&messages);
        assert_eq!(workflow.steps[0].agent, "news_agent");
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_sends_attachment() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/supervisor"))
            .and(body_string_contains("report.pdf"))
            .and(body_string_contains("summarize this"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"result": {"messages": []}})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = OrchestratorClient::new(OrchestratorConfig::new(mock_server.uri()))?;
        let attachment = Attachment::new("report.pdf", b"%PDF-1.4".to_vec());
        let messages = client.submit("summarize this", Some(attachment)).await?;
        assert!(messages.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_error_status() {
        let (_server, client) =
            _setup_mock_server("/supervisor", ResponseTemplate::new(500)).await;

        let result = client.submit("news?", None).await;
        match result {
            Err(OrchestratorError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_without_transcript() {
        let (_server, client) = _setup_mock_server(
            "/supervisor",
            ResponseTemplate::new(200).set_body_json(json!({"detail": "nothing"})),
        )
        .await;

        let result = client.submit("news?", None).await;
        assert!(matches!(result, Err(OrchestratorError::Transcript(_))));
    }

    #[tokio::test]
    async fn test_review() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/review"))
            .and(body_json(json!({"user_input": "great service"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "session_id": "abc",
                "response": "Thanks! Please rate us from 1 to 5 stars",
                "history": ["great service", "Thanks! Please rate us from 1 to 5 stars"]
            })))
            .mount(&mock_server)
            .await;

        let client = OrchestratorClient::new(OrchestratorConfig::new(mock_server.uri()))?;
        let reply = client.review("great service").await?;
        assert_eq!(reply.session_id.as_deref(), Some("abc"));
        assert_eq!(reply.history.len(), 2);

        let workflow = parse_transcript(&reply.transcript("great service"));
        assert_eq!(workflow.steps.len(), 1);
        assert_eq!(workflow.steps[0].agent, SENTIMENT_AGENT);
        assert_eq!(
            workflow.final_response.as_deref(),
            Some("Thanks! Please rate us from 1 to 5 stars")
        );
        Ok(())
    }

    #[test]
    fn test_attachment_from_missing_path() {
        let result = Attachment::from_path(Path::new("/definitely/not/here.pdf"));
        assert!(matches!(result, Err(OrchestratorError::Attachment(_))));
    }
}
