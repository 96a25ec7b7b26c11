use serde::Deserialize;

pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct LogBlocksQuery {
    /// Maximum number of blocks, newest first. Negative returns all of them.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl LogBlocksQuery {
    pub fn max_blocks(&self) -> Option<usize> {
        usize::try_from(self.limit).ok()
    }
}
