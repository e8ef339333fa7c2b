// src/constants.rs

pub const DEFAULT_FTP_PORT: u16 = 21;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DOWNLOAD_BUFFER_SIZE: usize = 128 * 1024;
