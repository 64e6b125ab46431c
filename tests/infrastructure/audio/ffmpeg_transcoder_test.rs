use tempfile::TempDir;

use virtual_avatar::application::ports::{AudioTranscoder, TranscodeError};
use virtual_avatar::infrastructure::audio::FfmpegTranscoder;

use super::scripts::write_script;

#[tokio::test]
async fn given_tool_succeeds_when_transcoding_then_passes_paths_and_returns_stdout() {
    let dir = TempDir::new().unwrap();
    // ffmpeg -y -i <in> <out>: copy in to out
    let tool = write_script(dir.path(), "ffmpeg", r#"cp "$3" "$4" && echo "converted $4""#);
    let input = dir.path().join("line.mp3");
    let output = dir.path().join("line.wav");
    std::fs::write(&input, b"mp3").unwrap();

    let stdout = FfmpegTranscoder::new(&tool)
        .transcode(&input, &output)
        .await
        .unwrap();

    assert!(stdout.contains("converted"));
    assert_eq!(std::fs::read(&output).unwrap(), b"mp3");
}

#[tokio::test]
async fn given_tool_exits_non_zero_when_transcoding_then_returns_process_failed() {
    let dir = TempDir::new().unwrap();
    let tool = write_script(dir.path(), "ffmpeg", "echo 'Invalid data found' >&2; exit 1");

    let result = FfmpegTranscoder::new(&tool)
        .transcode(&dir.path().join("a.mp3"), &dir.path().join("a.wav"))
        .await;

    match result {
        Err(TranscodeError::ProcessFailed { stderr, .. }) => {
            assert_eq!(stderr, "Invalid data found")
        }
        other => panic!("expected ProcessFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn given_missing_binary_when_transcoding_then_returns_spawn_failed() {
    let dir = TempDir::new().unwrap();

    let result = FfmpegTranscoder::new(dir.path().join("no-such-ffmpeg"))
        .transcode(&dir.path().join("a.mp3"), &dir.path().join("a.wav"))
        .await;

    assert!(matches!(result, Err(TranscodeError::SpawnFailed(_))));
}
