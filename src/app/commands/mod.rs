pub mod init;
pub mod snapshot;
pub mod storage;
