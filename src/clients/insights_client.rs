//! Provides the `InsightsClient`, which narrates analytics through a completion backend.

use crate::aggregation::analytics::summarize;
use crate::ai::client::CompletionClient;
use crate::ai::insights::{build_context, parse_insights};
use crate::ai::prompts::{
    context_preamble, insights_request, single_question, CONTEXT_ACKNOWLEDGEMENT,
    INSIGHTS_SYSTEM_PROMPT, QA_SYSTEM_PROMPT,
};
use crate::ai::types::{AskResponse, ChatMessage, InsightsResponse};
use crate::api::StationQuery;
use crate::{ClimateError, ClimateStats};
use bon::bon;
use chrono::Utc;
use log::info;

pub const INSIGHTS_TEMPERATURE: f32 = 0.7;
pub const QA_TEMPERATURE: f32 = 0.5;
pub const MIN_QUESTION_CHARS: usize = 3;
pub const MAX_QUESTION_CHARS: usize = 500;

/// LLM-backed insights and question answering over the analytics of a selection.
///
/// Created with [`ClimateStats::insights()`], which takes any [`CompletionClient`].
pub struct InsightsClient<'a, L: CompletionClient> {
    client: &'a ClimateStats,
    llm: &'a L,
}

#[bon]
impl<'a, L: CompletionClient> InsightsClient<'a, L> {
    pub(crate) fn new(client: &'a ClimateStats, llm: &'a L) -> Self {
        Self { client, llm }
    }

    async fn context(&self, query: StationQuery) -> Result<(StationQuery, String), ClimateError> {
        let (query, readings) = self.client.validated_readings(query).await?;
        let analytics = summarize(&readings, &query.station_ids);
        Ok((query, build_context(&analytics)))
    }

    /// Asks the model for 3 to 5 insights about the selection and parses them.
    ///
    /// # Errors
    ///
    /// The request validation errors of the read operations, plus
    /// [`ClimateError::Llm`] if the completion backend fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use climate_stats::{ClimateStats, ClimateError, Settings};
    /// # use climate_stats::ai::mock::MockCompletionClient;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ClimateError> {
    /// let climate = ClimateStats::from_settings(&Settings::default()).await?;
    /// let llm = MockCompletionClient::default();
    /// let ids = vec!["66062".to_string()];
    /// let insights = climate.insights(&llm).generate(&ids).call().await?;
    /// for insight in insights.insights {
    ///     println!("{}: {}", insight.title, insight.description);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = generate)]
    #[doc(hidden)]
    pub async fn build_generate(
        &self,
        #[builder(start_fn)] station_ids: &[String],
        year_from: Option<i32>,
        year_to: Option<i32>,
    ) -> Result<InsightsResponse, ClimateError> {
        info!(
            "Generating insights for {} stations, years {:?}..={:?}",
            station_ids.len(),
            year_from,
            year_to
        );
        let (query, context) = self
            .context(StationQuery::new(station_ids, year_from, year_to))
            .await?;

        let answer = self
            .llm
            .complete(
                INSIGHTS_SYSTEM_PROMPT,
                &[ChatMessage::user(insights_request(&context))],
                INSIGHTS_TEMPERATURE,
            )
            .await?;
        let insights = parse_insights(&answer, &query.station_ids);
        info!("Generated {} insights", insights.len());

        Ok(InsightsResponse {
            insights,
            generated_at: Utc::now(),
            model: self.llm.model().to_string(),
        })
    }

    /// Answers a free-form question about the selection.
    ///
    /// With a non-empty `.history(..)` the data context is sent as an opening
    /// user/assistant exchange, followed by the history and then the question.
    ///
    /// # Errors
    ///
    /// [`ClimateError::InvalidQuestion`] unless the question is 3 to 500 characters
    /// long, otherwise as for [`InsightsClient::build_generate`].
    #[builder(start_fn = ask)]
    #[doc(hidden)]
    pub async fn build_ask(
        &self,
        #[builder(start_fn)] question: &str,
        #[builder(start_fn)] station_ids: &[String],
        year_from: Option<i32>,
        year_to: Option<i32>,
        #[builder(default)] history: Vec<ChatMessage>,
    ) -> Result<AskResponse, ClimateError> {
        let length = question.chars().count();
        if !(MIN_QUESTION_CHARS..=MAX_QUESTION_CHARS).contains(&length) {
            return Err(ClimateError::InvalidQuestion(format!(
                "question must be {MIN_QUESTION_CHARS} to {MAX_QUESTION_CHARS} characters, got {length}"
            )));
        }
        info!(
            "Answering question of {} chars with {} history messages",
            length,
            history.len()
        );
        let (_, context) = self
            .context(StationQuery::new(station_ids, year_from, year_to))
            .await?;

        let messages = if history.is_empty() {
            vec![ChatMessage::user(single_question(&context, question))]
        } else {
            let mut messages = Vec::with_capacity(history.len() + 3);
            messages.push(ChatMessage::user(context_preamble(&context)));
            messages.push(ChatMessage::assistant(CONTEXT_ACKNOWLEDGEMENT));
            messages.extend(history);
            messages.push(ChatMessage::user(question));
            messages
        };

        let answer = self
            .llm
            .complete(QA_SYSTEM_PROMPT, &messages, QA_TEMPERATURE)
            .await?;
        Ok(AskResponse {
            answer,
            model: self.llm.model().to_string(),
        })
    }
}
