mod log_service;

pub use log_service::{group_blocks, read_log_blocks, ServiceError, SEPARATOR_LENGTH};
