//! Plain-language presentation of a raw analysis for the UI.
//!
//! Confidence here is bucketed from the classifier's top score and is
//! independent of the tone verdict's own confidence.

use serde::{Deserialize, Serialize};

use crate::cues::Cue;
use crate::tone::ToneVerdict;
use crate::{round4, AnalysisResult, EmotionScore};

/// Below this top score the message is reported as unclear.
pub const MIN_CLEAR_SCORE: f64 = 0.55;
pub const HIGH_SCORE: f64 = 0.80;
pub const MEDIUM_SCORE: f64 = 0.60;

const UNCLEAR_LABEL: &str = "Unclear / Not sure";
const UNCLEAR_INTERPRETATION: &str = "It\u{2019}s hard to tell the emotion from this message alone. Try adding one more sentence or some context.";
const FALLBACK_INTERPRETATION: &str =
    "A message can be interpreted in more than one way. Try adding more context.";

const DISPLAY_LABELS: &[(&str, &str, &str)] = &[
    (
        "joy",
        "Joy / Positive",
        "The sender may feel happy, relieved, excited, or supportive.",
    ),
    (
        "anger",
        "Anger / Frustration",
        "The sender may feel frustrated, annoyed, or upset. Sometimes it can also be criticism.",
    ),
    (
        "sadness",
        "Sadness",
        "The sender may feel sad, disappointed, or hurt.",
    ),
    (
        "fear",
        "Worry / Fear",
        "The sender may feel worried, anxious, or uncertain about the situation.",
    ),
    (
        "disgust",
        "Discomfort / Dislike",
        "The sender may feel uncomfortable or strongly dislike the topic.",
    ),
    (
        "surprise",
        "Surprise",
        "The sender may be surprised or did not expect what happened.",
    ),
    (
        "neutral",
        "Neutral",
        "The message might be factual or emotionally neutral.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayConfidence {
    Low,
    Medium,
    High,
}

impl DisplayConfidence {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_SCORE {
            DisplayConfidence::High
        } else if score >= MEDIUM_SCORE {
            DisplayConfidence::Medium
        } else {
            DisplayConfidence::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayConfidence::Low => "Low",
            DisplayConfidence::Medium => "Medium",
            DisplayConfidence::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendlyResult {
    pub emotion: String,
    pub interpretation: String,
    pub confidence: DisplayConfidence,
    pub raw_emotion: String,
    pub raw_score: f64,
    pub emotions: Vec<EmotionScore>,
    pub social_interpretation: ToneVerdict,
    pub highlights: Vec<Cue>,
}

impl FriendlyResult {
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        let raw_emotion = result
            .emotion
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        let score = result.score.unwrap_or(0.0);

        let (emotion, interpretation, confidence) = if score < MIN_CLEAR_SCORE {
            (UNCLEAR_LABEL, UNCLEAR_INTERPRETATION, DisplayConfidence::Low)
        } else {
            let (label, interpretation) = display_for(&raw_emotion)
                .unwrap_or((UNCLEAR_LABEL, FALLBACK_INTERPRETATION));
            (label, interpretation, DisplayConfidence::from_score(score))
        };

        Self {
            emotion: emotion.to_string(),
            interpretation: interpretation.to_string(),
            confidence,
            raw_emotion,
            raw_score: round4(score),
            emotions: result.emotions.clone(),
            social_interpretation: result.social_interpretation.clone(),
            highlights: result.highlights.clone(),
        }
    }
}

fn display_for(label: &str) -> Option<(&'static str, &'static str)> {
    DISPLAY_LABELS
        .iter()
        .find(|(raw, _, _)| *raw == label)
        .map(|&(_, display, interpretation)| (display, interpretation))
}
