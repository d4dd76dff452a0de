use climate_stats::ai::mock::MockCompletionClient;
use climate_stats::{ChatMessage, ClimateStats, GrokClient, Settings};

/// Generates insights with the real Grok client when GROK_API_KEY is set, otherwise
/// with the offline mock.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::from_env()?;
    let climate = ClimateStats::from_settings(&settings).await?;
    let ids = vec!["66062".to_string(), "86071".to_string()];

    if settings.llm_configured() {
        let grok = GrokClient::from_settings(&settings)?;
        let insights = climate.insights(&grok).generate(&ids).call().await?;
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    let mock = MockCompletionClient::default()
        .with_response("Which station is warmer?", "Station 66062 is warmer on average.");
    let insights = climate
        .insights(&mock)
        .generate(&ids)
        .year_from(1990)
        .call()
        .await?;
    for insight in &insights.insights {
        println!("[{:?}] {}: {}", insight.kind, insight.title, insight.description);
    }

    let mut history = vec![ChatMessage::user("Summarise the data.")];
    if let Some(first) = insights.insights.first() {
        history.push(ChatMessage::assistant(first.description.clone()));
    }
    let answer = climate
        .insights(&mock)
        .ask("Which station is warmer?", &ids)
        .history(history)
        .call()
        .await?;
    println!("\nQ&A ({}): {}", answer.model, answer.answer);
    Ok(())
}
