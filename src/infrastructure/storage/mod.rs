mod local_audio_workspace;

pub use local_audio_workspace::LocalAudioWorkspace;
