use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{RankingConfig, ToneConfig};
use crate::ranking::{sort_descending, EmotionRanker, RankingError};
use crate::EmotionScore;

/// Client for a text-classification inference endpoint that answers with
/// `[[{"label": .., "score": ..}, ..]]`.
#[derive(Clone)]
pub struct HttpRanker {
    url: String,
    api_token: Option<String>,
    top_k: usize,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<EmotionScore>>),
    Flat(Vec<EmotionScore>),
}

impl HttpRanker {
    pub fn from_config(config: &ToneConfig) -> Result<Self, String> {
        HttpRanker::new(&config.ranking)
    }

    pub fn new(config: &RankingConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| format!("failed to build ranking client: {}", err))?;
        Ok(Self {
            url: config.model_url(),
            api_token: config
                .api_token
                .clone()
                .filter(|token| !token.trim().is_empty()),
            top_k: config.top_k.max(1),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl EmotionRanker for HttpRanker {
    async fn rank(&self, text: &str) -> Result<Vec<EmotionScore>, RankingError> {
        if text.trim().is_empty() {
            return Err(RankingError::EmptyText);
        }

        let mut request = self.client.post(&self.url).json(&ClassifyRequest { inputs: text });
        if let Some(token) = &self.api_token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|err| RankingError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RankingError::Upstream {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| RankingError::Request(err.to_string()))?;
        let emotions = parse_ranking(&body, self.top_k)?;
        debug!(url = %self.url, labels = emotions.len(), "emotion ranking received");
        Ok(emotions)
    }
}

/// Takes the first input's scores, highest first, keeping `top_k`.
pub fn parse_ranking(body: &str, top_k: usize) -> Result<Vec<EmotionScore>, RankingError> {
    let parsed: ClassifyResponse =
        serde_json::from_str(body).map_err(|err| RankingError::Malformed(err.to_string()))?;
    let mut emotions = match parsed {
        ClassifyResponse::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
        ClassifyResponse::Flat(emotions) => emotions,
    };
    if emotions.is_empty() {
        return Err(RankingError::Malformed("no emotion scores returned".to_string()));
    }
    sort_descending(&mut emotions);
    emotions.truncate(top_k.max(1));
    Ok(emotions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_batch_and_keeps_top_k() {
        let body = r#"[[{"label":"neutral","score":0.05},{"label":"joy","score":0.81},{"label":"anger","score":0.09},{"label":"sadness","score":0.05}]]"#;
        let emotions = parse_ranking(body, 3).unwrap();
        let labels: Vec<&str> = emotions.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["joy", "anger", "neutral"]);
    }

    #[test]
    fn parses_flat_list() {
        let body = r#"[{"label":"fear","score":0.4},{"label":"sadness","score":0.6}]"#;
        let emotions = parse_ranking(body, 5).unwrap();
        assert_eq!(emotions[0].label, "sadness");
        assert_eq!(emotions.len(), 2);
    }

    #[test]
    fn rejects_error_payloads_and_empty_batches() {
        assert!(matches!(
            parse_ranking(r#"{"error":"Model is loading"}"#, 3),
            Err(RankingError::Malformed(_))
        ));
        assert!(matches!(parse_ranking("[[]]", 3), Err(RankingError::Malformed(_))));
    }
}
