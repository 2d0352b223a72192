use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Configuration for corpus reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

/// Statistics for a corpus read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Async reader that streams the input corpus line-by-line. A missing file
/// or invalid UTF-8 is fatal: the filter must see the whole corpus or none
/// of it, partial runs would skew the statistics.
pub struct CorpusReader {
    config: ReaderConfig,
}

impl CorpusReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read the corpus line-by-line with async buffered I/O.
    pub async fn read_lines<P: AsRef<Path>>(&self, file_path: P) -> Result<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of corpus: {}", path.display());

        let file = File::open(path)
            .await
            .with_context(|| format!("failed to open corpus {}", path.display()))?;

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut result_lines = Vec::new();
        let mut line_count = 0u64;
        let mut byte_count = 0u64;

        while let Some(line) = lines
            .next_line()
            .await
            .with_context(|| format!("read error in {} at line {}", path.display(), line_count + 1))?
        {
            byte_count += line.len() as u64 + 1; // +1 for newline
            line_count += 1;
            result_lines.push(line);
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: line_count,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Read {}: {} lines, {} bytes in {}ms",
            path.display(),
            line_count,
            byte_count,
            stats.duration_ms
        );

        Ok((result_lines, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs;

    async fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<std::path::PathBuf> {
        let file_path = dir.join(name);
        fs::write(&file_path, content).await?;
        Ok(file_path)
    }

    #[tokio::test]
    async fn test_read_valid_corpus() {
        let temp_dir = TempDir::new().unwrap();
        let reader = CorpusReader::new(ReaderConfig::default());

        let content = "Primera línia.\nSegona línia.\nTercera línia.";
        let file_path = create_test_file(temp_dir.path(), "corpus.txt", content)
            .await
            .unwrap();

        let (lines, stats) = reader.read_lines(&file_path).await.unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Primera línia.");
        assert_eq!(stats.lines_read, 3);
        assert!(stats.bytes_read > 0);
    }

    #[tokio::test]
    async fn test_read_empty_corpus() {
        let temp_dir = TempDir::new().unwrap();
        let reader = CorpusReader::new(ReaderConfig::default());

        let file_path = create_test_file(temp_dir.path(), "empty.txt", "").await.unwrap();

        let (lines, stats) = reader.read_lines(&file_path).await.unwrap();

        assert!(lines.is_empty());
        assert_eq!(stats.lines_read, 0);
    }

    #[tokio::test]
    async fn test_missing_corpus_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let reader = CorpusReader::new(ReaderConfig::default());

        let result = reader.read_lines(temp_dir.path().join("nonexistent.txt")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unicode_content() {
        let temp_dir = TempDir::new().unwrap();
        let reader = CorpusReader::new(ReaderConfig::default());

        let content = "L'aigua és bona.\nCançó d'hivern à la niña.";
        let file_path = create_test_file(temp_dir.path(), "unicode.txt", content)
            .await
            .unwrap();

        let (lines, _stats) = reader.read_lines(&file_path).await.unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "L'aigua és bona.");
    }
}
