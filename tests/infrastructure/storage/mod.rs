mod local_audio_workspace_test;
