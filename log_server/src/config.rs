use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub log_file_path: String,
    pub static_dir: String,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_file_path: std::env::var("LOG_FILE_PATH")
                .unwrap_or_else(|_| "./log.txt".to_string()),
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| "./dist".to_string()),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        PathBuf::from(&self.log_file_path)
    }

    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from(&self.static_dir)
    }
}
