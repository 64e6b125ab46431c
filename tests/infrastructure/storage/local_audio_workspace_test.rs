use tempfile::TempDir;

use virtual_avatar::application::ports::{AudioWorkspace, WorkspaceError};
use virtual_avatar::domain::ArtifactKind;
use virtual_avatar::infrastructure::storage::LocalAudioWorkspace;

#[tokio::test]
async fn given_missing_directory_when_storing_then_creates_it_and_writes_mp3() {
    let root = TempDir::new().unwrap();
    let workspace = LocalAudioWorkspace::new(root.path().join("audios"));

    let paths = workspace
        .store_audio(ArtifactKind::Message, b"mp3-bytes")
        .await
        .unwrap();

    assert!(paths.mp3.starts_with(root.path().join("audios")));
    assert_eq!(std::fs::read(&paths.mp3).unwrap(), b"mp3-bytes");
    assert!(paths.stem.as_str().starts_with("message_"));
    assert_eq!(paths.wav.extension().unwrap(), "wav");
    assert_eq!(paths.json.extension().unwrap(), "json");
}

#[tokio::test]
async fn given_two_stores_in_same_instant_when_storing_then_stems_differ() {
    let root = TempDir::new().unwrap();
    let workspace = LocalAudioWorkspace::new(root.path());

    let (first, second) = tokio::join!(
        workspace.store_audio(ArtifactKind::Prediction, b"a"),
        workspace.store_audio(ArtifactKind::Prediction, b"b"),
    );
    let (first, second) = (first.unwrap(), second.unwrap());

    assert_ne!(first.mp3, second.mp3);
    assert_eq!(std::fs::read(&first.mp3).unwrap(), b"a");
    assert_eq!(std::fs::read(&second.mp3).unwrap(), b"b");
}

#[tokio::test]
async fn given_directory_path_is_a_file_when_storing_then_returns_create_dir_failed() {
    let root = TempDir::new().unwrap();
    let blocker = root.path().join("audios");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let result = LocalAudioWorkspace::new(&blocker)
        .store_audio(ArtifactKind::Default, b"x")
        .await;

    assert!(matches!(result, Err(WorkspaceError::CreateDirFailed { .. })));
}
