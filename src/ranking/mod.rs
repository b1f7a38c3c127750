pub mod client;

use async_trait::async_trait;
use thiserror::Error;

use crate::EmotionScore;

pub use client::HttpRanker;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("text is empty")]
    EmptyText,

    #[error("emotion ranking request failed: {0}")]
    Request(String),

    #[error("emotion ranking error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("emotion ranking response parse failed: {0}")]
    Malformed(String),

    #[error("invalid emotion ranking: {0}")]
    Invalid(String),
}

/// Produces `(label, score)` pairs for a text, highest score first.
#[async_trait]
pub trait EmotionRanker: Send + Sync {
    async fn rank(&self, text: &str) -> Result<Vec<EmotionScore>, RankingError>;
}

/// Answers every text with the same preset ranking.
#[derive(Debug, Clone, Default)]
pub struct FixedRanker {
    emotions: Vec<EmotionScore>,
}

impl FixedRanker {
    pub fn new(mut emotions: Vec<EmotionScore>) -> Self {
        sort_descending(&mut emotions);
        Self { emotions }
    }

    /// Parses `joy=0.6,anger=0.25` (or `joy:0.6`).
    pub fn parse(spec: &str) -> Result<Self, RankingError> {
        let mut emotions = Vec::new();
        for pair in spec.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
            let (label, score) = pair
                .split_once('=')
                .or_else(|| pair.split_once(':'))
                .ok_or_else(|| RankingError::Invalid(format!("expected label=score, got '{}'", pair)))?;
            let score: f64 = score
                .trim()
                .parse()
                .map_err(|_| RankingError::Invalid(format!("bad score in '{}'", pair)))?;
            if !(0.0..=1.0).contains(&score) {
                return Err(RankingError::Invalid(format!(
                    "score out of range [0, 1] in '{}'",
                    pair
                )));
            }
            emotions.push(EmotionScore::new(label.trim(), score));
        }
        Ok(Self::new(emotions))
    }
}

#[async_trait]
impl EmotionRanker for FixedRanker {
    async fn rank(&self, text: &str) -> Result<Vec<EmotionScore>, RankingError> {
        if text.trim().is_empty() {
            return Err(RankingError::EmptyText);
        }
        Ok(self.emotions.clone())
    }
}

pub(crate) fn sort_descending(emotions: &mut [EmotionScore]) {
    emotions.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
