//! Hosted-LLM move provider backed by the Gemini API.
//!
//! One request per decision, no internal retries; the game-flow service is
//! responsible for falling back to a local provider when this one fails.
//! The response text is parsed strictly: the first canonical move word wins,
//! anything else is an [`AiError::InvalidMove`].

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::trait_def::{AiError, MoveProvider, OpponentView, ProvidedMove};
use crate::config::ai::GeminiConfig;
use crate::domain::Move;

pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    pub const NAME: &'static str = "gemini";

    pub fn from_config(config: &GeminiConfig) -> Result<Self, AiError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AiError::Unconfigured("GEMINI_API_KEY is not set".into()))?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    fn prompt(view: &OpponentView) -> String {
        let history = if view.opponent_moves.is_empty() {
            "none yet".to_string()
        } else {
            view.opponent_moves
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "You are playing Rock Paper Scissors. The opponent's moves so far, \
             oldest first: {history}. Respond with exactly one word: rock, paper \
             or scissors."
        )
    }

    /// First canonical move word in the model's reply.
    fn parse_move(text: &str) -> Result<Move, AiError> {
        text.split(|c: char| !c.is_ascii_alphabetic())
            .filter(|w| !w.is_empty())
            .find_map(|w| w.parse::<Move>().ok())
            .ok_or_else(|| AiError::InvalidMove(format!("no move word in reply: {text:?}")))
    }
}

#[async_trait]
impl MoveProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn choose(&self, view: &OpponentView) -> Result<ProvidedMove, AiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": Self::prompt(view) }] }]
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Upstream(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::Upstream(format!(
                "model endpoint returned {status}"
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AiError::Upstream(format!("undecodable response: {e}")))?;

        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| AiError::Upstream("response carried no candidates".into()))?;

        let mv = Self::parse_move(&text)?;
        debug!(model = %self.model, chosen = %mv, "gemini move");

        Ok(ProvidedMove {
            mv,
            rationale: Some(text.trim().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_bare_and_embedded_move_words() {
        assert_eq!(GeminiProvider::parse_move("rock").unwrap(), Move::Rock);
        assert_eq!(
            GeminiProvider::parse_move("I choose PAPER this time.").unwrap(),
            Move::Paper
        );
        assert_eq!(
            GeminiProvider::parse_move("scissors\n").unwrap(),
            Move::Scissors
        );
    }

    #[test]
    fn parse_rejects_replies_without_a_move() {
        assert!(matches!(
            GeminiProvider::parse_move("I refuse to play."),
            Err(AiError::InvalidMove(_))
        ));
        assert!(GeminiProvider::parse_move("").is_err());
    }

    #[test]
    fn prompt_lists_history_oldest_first() {
        let view = OpponentView::from_moves(vec![Move::Rock, Move::Scissors]);
        let p = GeminiProvider::prompt(&view);
        assert!(p.contains("rock, scissors"));

        let empty = GeminiProvider::prompt(&OpponentView::default());
        assert!(empty.contains("none yet"));
    }
}
