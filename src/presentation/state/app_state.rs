use std::sync::Arc;

use crate::application::ports::{LlmClient, TranscriptionEngine};
use crate::application::services::AvatarService;

pub struct AppState<L>
where
    L: LlmClient,
{
    pub avatar_service: Arc<AvatarService<L>>,
    pub transcription_engine: Arc<dyn TranscriptionEngine>,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            avatar_service: Arc::clone(&self.avatar_service),
            transcription_engine: Arc::clone(&self.transcription_engine),
        }
    }
}
