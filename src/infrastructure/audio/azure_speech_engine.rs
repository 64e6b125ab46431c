use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

const RECOGNITION_PATH: &str = "/speech/recognition/conversation/cognitiveservices/v1";
const WAV_CONTENT_TYPE: &str = "audio/wav; codecs=audio/pcm; samplerate=16000";

/// Azure Speech short-audio recognition: the whole buffer goes up in one request
/// and a single recognition result comes back.
pub struct AzureSpeechEngine {
    client: reqwest::Client,
    endpoint: String,
    subscription_key: String,
    language: String,
}

impl AzureSpeechEngine {
    pub fn new(region: &str, subscription_key: &str, language: &str) -> Self {
        Self::with_base_url(
            &format!("https://{}.stt.speech.microsoft.com", region),
            subscription_key,
            language,
        )
    }

    pub fn with_base_url(base_url: &str, subscription_key: &str, language: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), RECOGNITION_PATH),
            subscription_key: subscription_key.to_string(),
            language: language.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RecognitionResponse {
    recognition_status: String,
    #[serde(default)]
    display_text: Option<String>,
}

#[async_trait]
impl TranscriptionEngine for AzureSpeechEngine {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, TranscriptionError> {
        if audio_data.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            language = %self.language,
            bytes = audio_data.len(),
            "Sending audio to Azure Speech"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("language", self.language.as_str())])
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
            .header(reqwest::header::CONTENT_TYPE, WAV_CONTENT_TYPE)
            .header(reqwest::header::ACCEPT, "application/json")
            .body(audio_data.to_vec())
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: RecognitionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse response: {}", e)))?;

        if result.recognition_status != "Success" {
            return Err(TranscriptionError::RecognitionFailed(
                result.recognition_status,
            ));
        }

        let text = result.display_text.unwrap_or_default();

        tracing::info!(chars = text.len(), "Azure Speech recognition completed");

        Ok(text.trim().to_string())
    }
}
