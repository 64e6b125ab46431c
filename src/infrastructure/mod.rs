pub mod audio;
pub mod llm;
pub mod observability;
pub mod prediction;
pub mod storage;
