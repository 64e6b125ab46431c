mod prediction;
mod storage;
