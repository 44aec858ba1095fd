//! TravelAgent implementation
//!
//! One user query runs through a fixed two-phase exchange with the model:
//! a tool-decision request that offers the registry, then (only when tools
//! were requested) a final-answer request with no tool offering. The phase
//! enum makes a third round unrepresentable.

use super::config::AgentConfig;
use crate::agent::prompt::build_system_prompt;
use crate::config::{ModelParams, ResolvedLlmConfig};
use crate::error::Result;
use crate::llm::{ChatOptions, ContentBlock, LlmClient, LlmMessage, LlmResponse, ToolChoice};
use crate::tools::{ToolCall, ToolExecutor, ToolRegistry};
use crate::trajectory::{TrajectoryEntry, TrajectoryRecorder};
use std::sync::Arc;

/// The two states a query passes through, in order
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// First request: tools are offered, the model decides whether to use them
    AwaitingToolDecision,

    /// Second request: tool results are in the conversation, no tools offered
    AwaitingFinalAnswer,
}

impl Phase {
    fn number(self) -> usize {
        match self {
            Phase::AwaitingToolDecision => 1,
            Phase::AwaitingFinalAnswer => 2,
        }
    }
}

/// The travel assistant orchestrator
pub struct TravelAgent {
    config: AgentConfig,
    llm_client: Arc<dyn LlmClient>,
    tool_executor: ToolExecutor,
    params: ModelParams,
    trajectory_recorder: Option<TrajectoryRecorder>,
}

impl TravelAgent {
    /// Create a new TravelAgent from resolved LLM configuration
    pub fn new_with_llm_config(
        agent_config: AgentConfig,
        llm_config: ResolvedLlmConfig,
    ) -> Result<Self> {
        let params = llm_config.params.clone();
        let llm_client: Arc<dyn LlmClient> =
            Arc::new(crate::llm::OpenAiClient::new(&llm_config)?);

        let tool_registry = ToolRegistry::default();
        let tool_executor = tool_registry.create_executor(&agent_config.tools);

        Ok(Self {
            config: agent_config,
            llm_client,
            tool_executor,
            params,
            trajectory_recorder: None,
        })
    }

    /// Create a TravelAgent with a custom client and executor
    pub fn with_client(
        agent_config: AgentConfig,
        llm_client: Arc<dyn LlmClient>,
        tool_executor: ToolExecutor,
    ) -> Self {
        Self {
            config: agent_config,
            llm_client,
            tool_executor,
            params: ModelParams::default(),
            trajectory_recorder: None,
        }
    }

    /// Get agent configuration
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Set the trajectory recorder
    pub fn set_trajectory_recorder(&mut self, recorder: TrajectoryRecorder) {
        self.trajectory_recorder = Some(recorder);
    }

    /// Get the trajectory recorder
    pub fn trajectory_recorder(&self) -> Option<&TrajectoryRecorder> {
        self.trajectory_recorder.as_ref()
    }

    /// Run one user query through the two-phase exchange and return the
    /// final natural-language answer.
    ///
    /// The conversation lives only for the duration of this call; there is
    /// no cross-query memory.
    pub async fn handle_query(&self, user_text: &str) -> Result<String> {
        if let Some(recorder) = &self.trajectory_recorder {
            recorder
                .record(TrajectoryEntry::query_start(user_text.to_string()))
                .await?;
        }

        let mut messages = vec![
            LlmMessage::system(self.system_prompt()),
            LlmMessage::user(user_text),
        ];

        let response = self
            .request_completion(Phase::AwaitingToolDecision, messages.clone())
            .await?;

        let requested_calls = Self::collect_tool_calls(&response.message);

        if requested_calls.is_empty() {
            let answer = response.message.get_text().unwrap_or_default();
            self.record_answer(&answer).await?;
            return Ok(answer);
        }

        // The assistant message that carried the tool calls joins the
        // conversation before any results do
        messages.push(response.message);

        // Execute strictly in the order the model listed the calls, one at a
        // time; results land in the conversation in that same order
        for call in requested_calls {
            if let Some(recorder) = &self.trajectory_recorder {
                recorder
                    .record(TrajectoryEntry::tool_call(call.clone()))
                    .await?;
            }

            tracing::info!("executing tool {} (id: {})", call.name, call.id);
            let result = self.tool_executor.execute(call).await;
            if !result.success {
                tracing::warn!(
                    "tool {} returned an error payload: {}",
                    result.tool_name,
                    result.render_payload()
                );
            }

            if let Some(recorder) = &self.trajectory_recorder {
                recorder
                    .record(TrajectoryEntry::tool_result(result.clone()))
                    .await?;
            }

            messages.push(LlmMessage::tool_result(
                result.tool_call_id.clone(),
                !result.success,
                result.render_payload(),
            ));
        }

        let response = self
            .request_completion(Phase::AwaitingFinalAnswer, messages)
            .await?;

        // A phase-2 response asking for more tools is not acted upon; only
        // its text (possibly empty) is returned
        let answer = response.message.get_text().unwrap_or_default();
        self.record_answer(&answer).await?;
        Ok(answer)
    }

    /// Issue the completion request for one phase
    async fn request_completion(
        &self,
        phase: Phase,
        messages: Vec<LlmMessage>,
    ) -> Result<LlmResponse> {
        let tools = match phase {
            Phase::AwaitingToolDecision => Some(self.tool_executor.get_tool_definitions()),
            Phase::AwaitingFinalAnswer => None,
        };

        let options = ChatOptions {
            max_tokens: self.params.max_tokens,
            temperature: Some(self.params.temperature.unwrap_or(0.0)),
            top_p: self.params.top_p,
            tool_choice: match phase {
                Phase::AwaitingToolDecision => Some(ToolChoice::Auto),
                Phase::AwaitingFinalAnswer => None,
            },
        };

        if let Some(recorder) = &self.trajectory_recorder {
            recorder
                .record(TrajectoryEntry::llm_request(
                    phase.number(),
                    messages.clone(),
                    self.llm_client.model_name().to_string(),
                    tools.as_ref().map(|t| t.len()).unwrap_or(0),
                ))
                .await?;
        }

        let response = self
            .llm_client
            .chat_completion(messages, tools, Some(options))
            .await?;

        if let Some(recorder) = &self.trajectory_recorder {
            recorder
                .record(TrajectoryEntry::llm_response(
                    phase.number(),
                    response.message.clone(),
                    response.usage.clone(),
                    response.finish_reason.as_ref().map(|r| format!("{:?}", r)),
                ))
                .await?;
        }

        if let Some(usage) = &response.usage {
            tracing::debug!(
                "phase {} used {} tokens ({} prompt, {} completion)",
                phase.number(),
                usage.total_tokens,
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        Ok(response)
    }

    /// Turn the model's tool-use blocks into dispatchable calls, preserving
    /// the listing order
    fn collect_tool_calls(message: &LlmMessage) -> Vec<ToolCall> {
        message
            .get_tool_uses()
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::ToolUse {
                    id,
                    name,
                    arguments,
                } => Some(ToolCall::from_request(id.clone(), name.clone(), arguments)),
                _ => None,
            })
            .collect()
    }

    fn system_prompt(&self) -> String {
        match &self.config.system_prompt {
            Some(custom) => custom.clone(),
            None => build_system_prompt(&self.tool_executor.list_tools()),
        }
    }

    async fn record_answer(&self, answer: &str) -> Result<()> {
        if let Some(recorder) = &self.trajectory_recorder {
            recorder
                .record(TrajectoryEntry::query_complete(answer.to_string()))
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::llm::{FinishReason, MessageContent, MessageRole, ToolDefinition};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// What the stub saw for one chat completion request
    struct RecordedRequest {
        messages: Vec<LlmMessage>,
        tools_offered: Option<usize>,
        options: Option<ChatOptions>,
    }

    /// Scripted in-memory model boundary
    struct ScriptedClient {
        responses: Mutex<VecDeque<LlmResponse>>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl ScriptedClient {
        fn new(responses: Vec<LlmResponse>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmClient for ScriptedClient {
        async fn chat_completion(
            &self,
            messages: Vec<LlmMessage>,
            tools: Option<Vec<ToolDefinition>>,
            options: Option<ChatOptions>,
        ) -> Result<LlmResponse> {
            self.requests.lock().unwrap().push(RecordedRequest {
                messages,
                tools_offered: tools.map(|t| t.len()),
                options,
            });

            self.responses.lock().unwrap().pop_front().ok_or_else(|| {
                LlmError::InvalidRequest {
                    message: "script exhausted".to_string(),
                }
                .into()
            })
        }

        fn model_name(&self) -> &str {
            "scripted-model"
        }

        fn provider_name(&self) -> &str {
            "stub"
        }
    }

    fn text_response(text: &str) -> LlmResponse {
        LlmResponse {
            message: LlmMessage::assistant(text),
            usage: None,
            model: "scripted-model".to_string(),
            finish_reason: Some(FinishReason::Stop),
        }
    }

    fn tool_response(calls: &[(&str, &str, &str)]) -> LlmResponse {
        let blocks = calls
            .iter()
            .map(|(id, name, arguments)| ContentBlock::ToolUse {
                id: id.to_string(),
                name: name.to_string(),
                arguments: arguments.to_string(),
            })
            .collect();

        LlmResponse {
            message: LlmMessage {
                role: MessageRole::Assistant,
                content: MessageContent::Blocks(blocks),
            },
            usage: None,
            model: "scripted-model".to_string(),
            finish_reason: Some(FinishReason::ToolCalls),
        }
    }

    fn scripted_agent(responses: Vec<LlmResponse>) -> (TravelAgent, Arc<ScriptedClient>) {
        let client = Arc::new(ScriptedClient::new(responses));
        let executor = ToolRegistry::default().create_executor_with_all();
        let agent = TravelAgent::with_client(AgentConfig::default(), client.clone(), executor);
        (agent, client)
    }

    fn tool_message_content(message: &LlmMessage) -> (&str, &str) {
        match &message.content {
            MessageContent::Blocks(blocks) => match &blocks[0] {
                ContentBlock::ToolResult {
                    tool_use_id,
                    content,
                    ..
                } => (tool_use_id.as_str(), content.as_str()),
                other => panic!("expected tool result block, got {:?}", other),
            },
            other => panic!("expected blocks content, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn direct_answer_skips_second_phase() {
        let (agent, client) = scripted_agent(vec![text_response("Pack an umbrella.")]);

        let answer = agent.handle_query("Any packing advice?").await.unwrap();

        assert_eq!(answer, "Pack an umbrella.");
        assert_eq!(client.request_count(), 1);

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests[0].tools_offered, Some(3));
        let options = requests[0].options.as_ref().unwrap();
        assert_eq!(options.tool_choice, Some(ToolChoice::Auto));
        assert_eq!(options.temperature, Some(0.0));
    }

    #[tokio::test]
    async fn tool_round_extends_conversation_in_order() {
        let (agent, client) = scripted_agent(vec![
            tool_response(&[
                ("call_1", "get_weather", r#"{"city":"London"}"#),
                (
                    "call_2",
                    "convert_currency",
                    r#"{"amount":100,"from_currency":"USD","to_currency":"JPY"}"#,
                ),
            ]),
            text_response("Rainy, and your budget is 15500 JPY."),
        ]);

        let answer = agent
            .handle_query("Weather in London, and 100 USD in JPY?")
            .await
            .unwrap();

        assert_eq!(answer, "Rainy, and your budget is 15500 JPY.");
        assert_eq!(client.request_count(), 2);

        let requests = client.requests.lock().unwrap();

        // Second phase offers no tools
        assert_eq!(requests[1].tools_offered, None);
        let options = requests[1].options.as_ref().unwrap();
        assert_eq!(options.tool_choice, None);

        // first-phase length + assistant message + one tool message per call
        assert_eq!(requests[1].messages.len(), requests[0].messages.len() + 1 + 2);

        let messages = &requests[1].messages;
        assert_eq!(messages[2].role, MessageRole::Assistant);

        let (first_id, first_content) = tool_message_content(&messages[3]);
        assert_eq!(first_id, "call_1");
        assert!(first_content.contains("Cloudy with light rain"));

        let (second_id, second_content) = tool_message_content(&messages[4]);
        assert_eq!(second_id, "call_2");
        assert!(second_content.contains("15500"));
    }

    #[tokio::test]
    async fn unknown_tool_error_is_relayed_to_model() {
        let (agent, client) = scripted_agent(vec![
            tool_response(&[("call_7", "book_flight", "{}")]),
            text_response("I can't book flights yet."),
        ]);

        let answer = agent.handle_query("Book me a flight to Oslo").await.unwrap();

        assert_eq!(answer, "I can't book flights yet.");

        let requests = client.requests.lock().unwrap();
        let (id, content) = tool_message_content(&requests[1].messages[3]);
        assert_eq!(id, "call_7");
        assert!(content.contains("Unknown tool: book_flight"));
    }

    #[tokio::test]
    async fn second_phase_tool_requests_are_not_executed() {
        let (agent, client) = scripted_agent(vec![
            tool_response(&[("call_1", "get_weather", r#"{"city":"Tokyo"}"#)]),
            tool_response(&[("call_2", "get_weather", r#"{"city":"Osaka"}"#)]),
        ]);

        // The exchange stops after two requests even though the second
        // response asks for another tool; with no text, the answer is empty
        let answer = agent.handle_query("Weather in Tokyo?").await.unwrap();

        assert_eq!(answer, "");
        assert_eq!(client.request_count(), 2);
    }

    #[tokio::test]
    async fn malformed_arguments_still_reach_the_tool_as_empty() {
        let (agent, client) = scripted_agent(vec![
            tool_response(&[("call_1", "get_weather", "{broken")]),
            text_response("done"),
        ]);

        agent.handle_query("Weather?").await.unwrap();

        // Parsing degraded to an empty argument set, so the tool reports the
        // missing city as an error payload instead of the call failing
        let requests = client.requests.lock().unwrap();
        let (_, content) = tool_message_content(&requests[1].messages[3]);
        assert!(content.contains("error"));
    }

    #[tokio::test]
    async fn trajectory_captures_the_full_exchange() {
        let (mut agent, _client) = scripted_agent(vec![
            tool_response(&[("call_1", "get_weather", r#"{"city":"Dubai"}"#)]),
            text_response("Hot and dry."),
        ]);
        agent.set_trajectory_recorder(TrajectoryRecorder::new());

        agent.handle_query("Weather in Dubai?").await.unwrap();

        // query_start + 2x(llm_request + llm_response) + tool_call +
        // tool_result + query_complete
        let recorder = agent.trajectory_recorder().unwrap();
        assert_eq!(recorder.entry_count().await, 8);
    }
}
