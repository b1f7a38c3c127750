//! Social tone heuristics layered over a ranked emotion list.

use serde::{Deserialize, Serialize};

use crate::{round4, EmotionScore};

/// Top two scores closer than this are treated as a toss-up.
pub const AMBIGUITY_MARGIN: f64 = 0.12;
pub const STRONG_SCORE: f64 = 0.70;
pub const TENSION_SCORE: f64 = 0.20;

pub const UNKNOWN_NOTE: &str = "This is an automated guess, not a fact.";
pub const GUESS_NOTE: &str =
    "This is an automated guess (not a truth). If unsure, consider asking the sender.";

const LAUGH_EMOJI: &[&str] = &["\u{1F602}", "\u{1F605}", "\u{1F923}", "\u{1F609}"];
const TEASING_WORDS: &[&str] = &["sure", "yeah right", "as if", "again"];
const TENSION_LABELS: &[&str] = &["anger", "fear", "disgust"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Unknown,
    FriendlyPositive,
    JokingTeasing,
    CriticalAngry,
    HurtSad,
    WorriedAnxious,
    SurprisedConfused,
    NeutralUnclear,
}

impl Tone {
    pub fn label(self) -> &'static str {
        match self {
            Tone::Unknown => "unknown",
            Tone::FriendlyPositive => "friendly_positive",
            Tone::JokingTeasing => "joking_teasing",
            Tone::CriticalAngry => "critical_angry",
            Tone::HurtSad => "hurt_sad",
            Tone::WorriedAnxious => "worried_anxious",
            Tone::SurprisedConfused => "surprised_confused",
            Tone::NeutralUnclear => "neutral_unclear",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn label(self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    fn from_strength(score: f64) -> Self {
        if score >= STRONG_SCORE {
            Confidence::High
        } else {
            Confidence::Medium
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub emotion_hint: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneVerdict {
    pub tone: Tone,
    pub confidence: Confidence,
    pub explanation: String,
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<Alternative>>,
}

impl ToneVerdict {
    fn new(tone: Tone, confidence: Confidence, explanation: &str, note: &str) -> Self {
        Self {
            tone,
            confidence,
            explanation: explanation.to_string(),
            note: note.to_string(),
            alternatives: None,
        }
    }
}

/// Guesses the social tone of `text` from its ranked emotions.
///
/// The ranking drives the call. The raw text is only consulted for the
/// laugh-emoji plus teasing-word shortcut, which returns before the
/// ambiguity downgrade is applied.
pub fn interpret_social(text: &str, emotions: &[EmotionScore]) -> ToneVerdict {
    let Some(top) = emotions.first() else {
        return ToneVerdict::new(
            Tone::Unknown,
            Confidence::Low,
            "Not enough information to infer tone.",
            UNKNOWN_NOTE,
        );
    };

    if looks_like_teasing(text) {
        return ToneVerdict::new(
            Tone::JokingTeasing,
            Confidence::Medium,
            "Emoji + wording suggests a teasing/joking tone (possibly a light jab).",
            GUESS_NOTE,
        );
    }

    let second = emotions.get(1);
    let second_score = second.map(|entry| entry.score).unwrap_or(0.0);
    let ambiguous = (top.score - second_score).abs() < AMBIGUITY_MARGIN;

    let mut verdict = match top.label.as_str() {
        "joy" => {
            let tension = second
                .map(|entry| TENSION_LABELS.contains(&entry.label.as_str()))
                .unwrap_or(false)
                && second_score >= TENSION_SCORE;
            if tension {
                ToneVerdict::new(
                    Tone::JokingTeasing,
                    Confidence::Medium,
                    "Could be joking/teasing (positive but with some tension).",
                    GUESS_NOTE,
                )
            } else {
                ToneVerdict::new(
                    Tone::FriendlyPositive,
                    Confidence::from_strength(top.score),
                    "Sounds positive or friendly.",
                    GUESS_NOTE,
                )
            }
        }
        "anger" | "disgust" => ToneVerdict::new(
            Tone::CriticalAngry,
            Confidence::from_strength(top.score),
            "May sound frustrated, angry, or critical.",
            GUESS_NOTE,
        ),
        "sadness" => ToneVerdict::new(
            Tone::HurtSad,
            Confidence::from_strength(top.score),
            "May sound disappointed, sad, or hurt.",
            GUESS_NOTE,
        ),
        "fear" => ToneVerdict::new(
            Tone::WorriedAnxious,
            Confidence::from_strength(top.score),
            "May sound worried or anxious.",
            GUESS_NOTE,
        ),
        "surprise" => ToneVerdict::new(
            Tone::SurprisedConfused,
            Confidence::Medium,
            "May sound surprised or confused (could be positive or negative).",
            GUESS_NOTE,
        ),
        _ => ToneVerdict::new(
            Tone::NeutralUnclear,
            Confidence::Low,
            "Tone is not clear.",
            GUESS_NOTE,
        ),
    };

    // A blank second label carries no alternative reading.
    if let Some(second) = second.filter(|entry| ambiguous && !entry.label.is_empty()) {
        verdict.confidence = Confidence::Low;
        verdict.explanation =
            "Message may have multiple interpretations (model is uncertain).".to_string();
        verdict.alternatives = Some(vec![
            Alternative {
                emotion_hint: top.label.clone(),
                score: round4(top.score),
            },
            Alternative {
                emotion_hint: second.label.clone(),
                score: round4(second.score),
            },
        ]);
    }

    verdict
}

fn looks_like_teasing(text: &str) -> bool {
    let lowercase = text.to_lowercase();
    let has_laugh = LAUGH_EMOJI.iter().any(|&emoji| text.contains(emoji));
    let has_teasing = TEASING_WORDS.iter().any(|&word| lowercase.contains(word));
    has_laugh && has_teasing
}
