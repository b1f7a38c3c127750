pub mod config;
pub mod cues;
pub mod friendly;
pub mod ranking;
pub mod tone;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cues::{extract_highlights, Cue};
use crate::ranking::EmotionRanker;
use crate::tone::{interpret_social, ToneVerdict};

pub use crate::friendly::{DisplayConfidence, FriendlyResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub label: String,
    pub score: f64,
}

impl EmotionScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub emotion: Option<String>,
    pub score: Option<f64>,
    pub emotions: Vec<EmotionScore>,
    pub social_interpretation: ToneVerdict,
    pub highlights: Vec<Cue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub error: String,
}

/// Builds the result from an already-ranked emotion list.
///
/// Scores are rounded before interpretation so the verdict and the
/// reported ranking agree.
pub fn assemble(text: &str, emotions: &[EmotionScore]) -> AnalysisResult {
    let emotions: Vec<EmotionScore> = emotions
        .iter()
        .map(|entry| EmotionScore::new(entry.label.clone(), round4(entry.score)))
        .collect();

    let social_interpretation = interpret_social(text, &emotions);
    let highlights = extract_highlights(text);
    let emotion = emotions.first().map(|entry| entry.label.clone());
    let score = emotions.first().map(|entry| entry.score);

    AnalysisResult {
        text: text.to_string(),
        emotion,
        score,
        emotions,
        social_interpretation,
        highlights,
    }
}

pub async fn analyze<R>(ranker: &R, text: &str) -> Result<AnalysisResult, AnalysisFailure>
where
    R: EmotionRanker + ?Sized,
{
    let emotions = match ranker.rank(text).await {
        Ok(emotions) => emotions,
        Err(err) => {
            warn!(error = %err, "emotion ranking failed");
            return Err(AnalysisFailure {
                error: err.to_string(),
            });
        }
    };

    let result = assemble(text, &emotions);
    debug!(
        emotion = result.emotion.as_deref().unwrap_or("none"),
        tone = result.social_interpretation.tone.label(),
        highlights = result.highlights.len(),
        "analysis complete"
    );
    Ok(result)
}

pub fn round4(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    (value * 10_000.0).round() / 10_000.0
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
