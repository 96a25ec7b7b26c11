use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

/// Separator lines are 160 characters minus a trailing ellipsis.
pub const SEPARATOR_LENGTH: usize = 160 - 3;
const SEPARATOR_SYMBOL: char = '-';

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Log file not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn separator() -> String {
    SEPARATOR_SYMBOL.to_string().repeat(SEPARATOR_LENGTH)
}

/// Split a flat log into blocks at separator lines, newest block first.
///
/// Empty blocks are dropped. `limit` of `None` keeps every block.
pub fn group_blocks<'a, I>(lines: I, limit: Option<usize>) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let separator = separator();
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in lines {
        if line.contains(&separator) {
            blocks.push(std::mem::take(&mut current));
        } else {
            current.push(line.to_string());
        }
    }
    blocks.push(current);

    let mut blocks: Vec<Vec<String>> = blocks.into_iter().filter(|b| !b.is_empty()).collect();
    blocks.reverse();
    if let Some(limit) = limit {
        blocks.truncate(limit);
    }
    blocks
}

/// UTF-8 when valid, otherwise each byte is read as a Latin-1 character.
fn decode_log_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Log file is not valid UTF-8, reading it as Latin-1");
            e.into_bytes().iter().map(|&b| b as char).collect()
        }
    }
}

pub async fn read_log_blocks(path: &Path, limit: Option<usize>) -> Result<Vec<Vec<String>>, ServiceError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ServiceError::NotFound(path.display().to_string()),
        _ => ServiceError::Io(e),
    })?;
    let content = decode_log_text(bytes);

    let blocks = group_blocks(content.lines(), limit);
    tracing::debug!("Read {} log blocks from {}", blocks.len(), path.display());
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_log() -> String {
        let sep = format!("[2024-01-01 10:00:00] {}", separator());
        [
            "[2024-01-01 09:00:00] first session",
            "[2024-01-01 09:00:01] Adding to playlist A",
            sep.as_str(),
            sep.as_str(),
            "[2024-01-02 09:00:00] second session",
            sep.as_str(),
            "[2024-01-03 09:00:00] third session",
        ]
        .join("\n")
    }

    #[test]
    fn test_group_blocks_newest_first() {
        let log = sample_log();
        let blocks = group_blocks(log.lines(), None);

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], vec!["[2024-01-03 09:00:00] third session"]);
        assert_eq!(blocks[1], vec!["[2024-01-02 09:00:00] second session"]);
        assert_eq!(blocks[2].len(), 2);
    }

    #[test]
    fn test_group_blocks_limit() {
        let log = sample_log();
        assert_eq!(group_blocks(log.lines(), Some(2)).len(), 2);
        assert_eq!(group_blocks(log.lines(), Some(0)).len(), 0);
        assert_eq!(group_blocks(log.lines(), Some(50)).len(), 3);
    }

    #[test]
    fn test_short_dash_runs_are_not_separators() {
        let blocks = group_blocks(["[t] ----", "[t] next"], None);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 2);
    }

    #[test]
    fn test_empty_log() {
        assert!(group_blocks(std::iter::empty(), None).is_empty());
    }

    #[tokio::test]
    async fn test_read_log_blocks_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_log().as_bytes()).unwrap();

        let blocks = read_log_blocks(file.path(), Some(1)).await.unwrap();
        assert_eq!(blocks, vec![vec!["[2024-01-03 09:00:00] third session".to_string()]]);
    }

    #[test]
    fn test_decode_log_text_falls_back_to_latin1() {
        assert_eq!(decode_log_text("Café".as_bytes().to_vec()), "Café");
        assert_eq!(decode_log_text(b"Caf\xe9".to_vec()), "Café");
    }

    #[tokio::test]
    async fn test_read_latin1_log_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[2024-01-01 10:00:00] Adding to playlist Caf\xe9\n").unwrap();

        let blocks = read_log_blocks(file.path(), None).await.unwrap();
        assert_eq!(
            blocks,
            vec![vec!["[2024-01-01 10:00:00] Adding to playlist Café".to_string()]]
        );
    }

    #[tokio::test]
    async fn test_missing_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_log_blocks(&dir.path().join("log.txt"), None).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
