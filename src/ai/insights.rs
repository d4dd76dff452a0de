//! Rendering analytics into prompt context and reading insights back out of the
//! model's free-form answer.

use crate::ai::types::{Insight, InsightType};
use crate::types::analytics::AnalyticsResponse;
use crate::types::month::month_name;
use regex::Regex;
use std::sync::LazyLock;

const MAX_INSIGHTS: usize = 5;
const MAX_PARAGRAPH_INSIGHTS: usize = 3;
const MAX_TITLE_CHARS: usize = 100;
const STRUCTURED_CONFIDENCE: f64 = 0.85;
const PARAGRAPH_CONFIDENCE: f64 = 0.75;

static BOLD_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*[:\s]+").expect("valid regex"));
static NUMBERED_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(\d+\.\s*[^:\n]+):\s*").expect("valid regex"));

const TREND_WORDS: &[&str] = &[
    "trend", "increasing", "decreasing", "rise", "fall", "growth", "decline", "over time",
    "since",
];
const ANOMALY_WORDS: &[&str] = &[
    "unusual", "anomaly", "extreme", "outlier", "spike", "unexpected", "abnormal", "record",
];
const COMPARISON_WORDS: &[&str] = &[
    "compared", "versus", "difference", "contrast", "higher than", "lower than", "relative",
];
const PREDICTION_WORDS: &[&str] = &["predict", "forecast", "expect", "likely", "future", "projection"];

/// Formats an analytics response as the plain-text report given to the model.
pub fn build_context(analytics: &AnalyticsResponse) -> String {
    let rule = "=".repeat(50);
    let thin = "-".repeat(50);
    let mut lines = vec![
        rule.clone(),
        "CLIMATE DATA ANALYSIS REPORT".to_string(),
        rule.clone(),
        String::new(),
        format!(
            "Data Period: {} - {}",
            analytics.year_range.0, analytics.year_range.1
        ),
        format!("Total Stations Analyzed: {}", analytics.total_stations),
        String::new(),
        thin.clone(),
        "STATION-BY-STATION ANALYSIS".to_string(),
        thin,
    ];

    for s in &analytics.stations {
        lines.extend([
            String::new(),
            format!("Station: {} (ID: {})", s.station_name, s.station_id),
            format!("   Temperature Range: {}°C to {}°C", s.min_temp, s.max_temp),
            format!("   Mean Temperature: {}°C", s.mean_temp),
            format!("   Standard Deviation: {}°C", s.std_temp),
            format!(
                "   Minimum Recorded: {}°C ({} {})",
                s.min_temp,
                month_name(s.min_temp_month),
                s.min_temp_year
            ),
            format!(
                "   Maximum Recorded: {}°C ({} {})",
                s.max_temp,
                month_name(s.max_temp_month),
                s.max_temp_year
            ),
            format!("   Hottest Year: {} (avg: {}°C)", s.hottest_year, s.hottest_year_temp),
            format!("   Coldest Year: {} (avg: {}°C)", s.coldest_year, s.coldest_year_temp),
            format!("   Data Coverage: {}%", s.data_coverage),
        ]);
    }

    lines.extend([String::new(), rule]);
    lines.join("\n")
}

/// Keyword classification; the first matching category wins.
pub fn classify_insight(text: &str) -> InsightType {
    let lower = text.to_lowercase();
    let has_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has_any(TREND_WORDS) {
        InsightType::Trend
    } else if has_any(ANOMALY_WORDS) {
        InsightType::Anomaly
    } else if has_any(COMPARISON_WORDS) {
        InsightType::Comparison
    } else if has_any(PREDICTION_WORDS) {
        InsightType::Prediction
    } else {
        InsightType::Summary
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// `(title, description)` pairs introduced by `marker`; a description runs until
/// `stop_at` returns the start of the next block.
fn split_blocks<'t>(
    text: &'t str,
    marker: &Regex,
    stop_at: impl Fn(&'t str, usize) -> usize,
) -> Vec<(&'t str, &'t str)> {
    marker
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let title = caps.get(1)?.as_str();
            let end = stop_at(text, whole.end());
            Some((title, &text[whole.end()..end]))
        })
        .take(MAX_INSIGHTS)
        .collect()
}

fn structured_insights(blocks: &[(&str, &str)], station_ids: &[String]) -> Vec<Insight> {
    blocks
        .iter()
        .filter_map(|(title, description)| {
            let title = title.trim();
            let description = description.trim();
            if title.chars().count() < 5 || description.chars().count() < 10 {
                return None;
            }
            let related: Vec<String> = station_ids
                .iter()
                .filter(|id| description.contains(id.as_str()) || title.contains(id.as_str()))
                .cloned()
                .collect();
            Some(Insight {
                kind: classify_insight(&format!("{title} {description}")),
                title: truncate_chars(title, MAX_TITLE_CHARS),
                description: description.to_string(),
                confidence: STRUCTURED_CONFIDENCE,
                related_stations: if related.is_empty() {
                    station_ids.to_vec()
                } else {
                    related
                },
            })
        })
        .collect()
}

fn paragraph_insights(text: &str, station_ids: &[String]) -> Vec<Insight> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .take(MAX_PARAGRAPH_INSIGHTS)
        .filter(|p| p.chars().count() >= 20)
        .map(|paragraph| {
            let first_sentence = paragraph.split(". ").next().unwrap_or(paragraph);
            Insight {
                kind: InsightType::Summary,
                title: truncate_chars(first_sentence, MAX_TITLE_CHARS),
                description: paragraph.to_string(),
                confidence: PARAGRAPH_CONFIDENCE,
                related_stations: station_ids.to_vec(),
            }
        })
        .collect()
}

/// Extracts structured insights from a model answer.
///
/// `**Title**: description` blocks are tried first, then `1. Title: description` items
/// at the start of a line; if neither yields anything usable the answer is split into
/// paragraphs.
pub fn parse_insights(response: &str, station_ids: &[String]) -> Vec<Insight> {
    let bold = split_blocks(response, &BOLD_TITLE, |text, from| {
        text[from..].find("**").map_or(text.len(), |i| from + i)
    });
    let insights = structured_insights(&bold, station_ids);
    if !insights.is_empty() {
        return insights;
    }

    let numbered = split_blocks(response, &NUMBERED_TITLE, |text, from| {
        NUMBERED_TITLE
            .find_at(text, from)
            .map_or(text.len(), |next| next.start())
    });
    let insights = structured_insights(&numbered, station_ids);
    if !insights.is_empty() {
        return insights;
    }

    paragraph_insights(response, station_ids)
}
