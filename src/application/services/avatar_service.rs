use std::sync::Arc;

use futures::future::try_join_all;

use crate::application::ports::{LlmClient, LlmClientError, PredictionError, PricePredictor};
use crate::domain::{ArtifactKind, ChatCommand, ReplyMessage, Ticker, TickerError};
use crate::infrastructure::observability::sanitize_prompt;

use super::script_parser::{ScriptError, parse_script};
use super::voice_line_renderer::{RenderError, VoiceLineRenderer};

pub const DEFAULT_GREETING: &str = "Don't forget to leave a message sir, I'm here to help you.";
pub const PREDICT_USAGE: &str = "Usage: predict <ticker>";
pub const PREDICTION_FAILED: &str = "Error while fetching the prediction.";

pub const DEFAULT_SYSTEM_PROMPT: &str = "your name is ruby
You will always reply with a JSON array of messages. With 2 message.
Each message has a text, facialExpression, and animation property.
The facial expressions is default.
The animation is: Talking.";

/// Decides how to answer a chat message and produces the avatar's lines.
pub struct AvatarService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    price_predictor: Arc<dyn PricePredictor>,
    renderer: Arc<VoiceLineRenderer>,
    system_prompt: String,
}

impl<L> AvatarService<L>
where
    L: LlmClient,
{
    pub fn new(
        llm_client: Arc<L>,
        price_predictor: Arc<dyn PricePredictor>,
        renderer: Arc<VoiceLineRenderer>,
        system_prompt: String,
    ) -> Self {
        Self {
            llm_client,
            price_predictor,
            renderer,
            system_prompt,
        }
    }

    pub async fn respond(&self, message: Option<&str>) -> Result<Vec<ReplyMessage>, AvatarError> {
        match ChatCommand::parse(message) {
            ChatCommand::Empty => {
                tracing::debug!("Empty message, answering with the default greeting");
                let greeting =
                    ReplyMessage::new(DEFAULT_GREETING, ReplyMessage::SMILE, ReplyMessage::TALKING);
                let spoken = self.renderer.speak(greeting, ArtifactKind::Default).await?;
                Ok(vec![spoken])
            }
            ChatCommand::Predict(None) => Ok(vec![ReplyMessage::spoken_plainly(PREDICT_USAGE)]),
            ChatCommand::Predict(Some(symbol)) => Ok(vec![self.predict(&symbol).await]),
            ChatCommand::Converse(text) => self.converse(&text).await,
        }
    }

    /// Never fails: any error in this branch becomes a plain apology line.
    async fn predict(&self, symbol: &str) -> ReplyMessage {
        match self.try_predict(symbol).await {
            Ok(message) => message,
            Err(e) => {
                tracing::error!(error = %e, symbol = %symbol.escape_debug(), "Prediction failed");
                ReplyMessage::spoken_plainly(PREDICTION_FAILED)
            }
        }
    }

    async fn try_predict(&self, symbol: &str) -> Result<ReplyMessage, AvatarError> {
        let ticker = Ticker::parse(symbol)?;
        let price = self.price_predictor.predict(&ticker).await?;
        tracing::info!(ticker = %ticker, price, "Prediction received");

        let announcement = ReplyMessage::new(
            prediction_announcement(&ticker, price),
            ReplyMessage::SMILE,
            ReplyMessage::TALKING,
        );
        Ok(self
            .renderer
            .speak(announcement, ArtifactKind::Prediction)
            .await?)
    }

    async fn converse(&self, text: &str) -> Result<Vec<ReplyMessage>, AvatarError> {
        tracing::debug!(prompt = %sanitize_prompt(text), "Requesting scripted reply");

        let raw = self.llm_client.complete(&self.system_prompt, text).await?;
        let lines = parse_script(&raw)?;
        tracing::debug!(lines = lines.len(), "Model reply parsed");

        let replies = try_join_all(lines.into_iter().map(|line| {
            self.renderer
                .speak(ReplyMessage::from(line), ArtifactKind::Message)
        }))
        .await?;

        Ok(replies)
    }
}

pub fn prediction_announcement(ticker: &Ticker, price: f64) -> String {
    format!(
        "The stock price for {} after 2 months will be : ${:.2}",
        ticker, price
    )
}

#[derive(Debug, thiserror::Error)]
pub enum AvatarError {
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
    #[error("script: {0}")]
    Script(#[from] ScriptError),
    #[error("ticker: {0}")]
    Ticker(#[from] TickerError),
    #[error("prediction: {0}")]
    Prediction(#[from] PredictionError),
    #[error("render: {0}")]
    Render(#[from] RenderError),
}
