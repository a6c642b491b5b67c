pub mod scroll;
pub mod storage;
