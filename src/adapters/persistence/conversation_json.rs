//! Implements ConversationLogPort using a JSON file.
//!
//! Whole log is kept in memory and rewritten on every change.

use crate::domain::{ConversationEntry, DomainError};
use crate::ports::ConversationLogPort;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Default cap on retained exchanges.
pub const DEFAULT_LOG_CAPACITY: usize = 500;

#[derive(Debug, Default, Serialize, Deserialize)]
struct LogData {
    entries: VecDeque<ConversationEntry>,
}

/// JSON file-backed conversation log with a capacity cap.
pub struct JsonConversationLog {
    path: PathBuf,
    capacity: usize,
    cache: tokio::sync::RwLock<LogData>,
}

impl JsonConversationLog {
    pub fn new(path: impl AsRef<Path>, capacity: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            capacity: capacity.max(1),
            cache: tokio::sync::RwLock::new(LogData::default()),
        }
    }

    /// Load entries from disk. A missing file, or one that is not valid log JSON,
    /// starts an empty log; any other read failure is returned.
    /// Entries beyond the cap (e.g. after lowering it) are dropped oldest first.
    pub async fn load(&self) -> Result<(), DomainError> {
        let mut data = match fs::read_to_string(&self.path).await {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "conversation log unreadable, starting empty");
                LogData::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => LogData::default(),
            Err(e) => {
                return Err(DomainError::Log(format!(
                    "read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };
        while data.entries.len() > self.capacity {
            data.entries.pop_front();
        }
        debug!(entries = data.entries.len(), "conversation log loaded");
        *self.cache.write().await = data;
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Write to a temp file, sync, then rename over the target.
    async fn save(&self) -> Result<(), DomainError> {
        let data = self.cache.read().await;
        let json =
            serde_json::to_string_pretty(&*data).map_err(|e| DomainError::Log(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DomainError::Log(format!("create log dir: {}", e)))?;
            }
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Log(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Log(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Log(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Log(format!("atomic rename failed: {}", e)))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl ConversationLogPort for JsonConversationLog {
    async fn append(&self, entry: ConversationEntry) -> Result<(), DomainError> {
        {
            let mut cache = self.cache.write().await;
            cache.entries.push_back(entry);
            while cache.entries.len() > self.capacity {
                cache.entries.pop_front();
            }
        }
        self.save().await
    }

    async fn entries(&self) -> Result<Vec<ConversationEntry>, DomainError> {
        let cache = self.cache.read().await;
        Ok(cache.entries.iter().cloned().collect())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.cache.write().await.entries.clear();
        self.save().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IntentKind;

    fn entry(n: i64) -> ConversationEntry {
        ConversationEntry {
            timestamp: 1_700_000_000 + n,
            query: format!("query {n}"),
            intent: IntentKind::GeneralSearch,
            answer: format!("answer {n}"),
            result_ids: vec![],
        }
    }

    #[tokio::test]
    async fn test_cap_evicts_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonConversationLog::new(dir.path().join("log.json"), 3);
        for n in 0..5 {
            log.append(entry(n)).await.unwrap();
        }
        let entries = log.entries().await.unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].query, "query 2");
        assert_eq!(entries[2].query, "query 4");
    }

    #[tokio::test]
    async fn test_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("log.json");
        let log = JsonConversationLog::new(&path, DEFAULT_LOG_CAPACITY);
        log.append(entry(1)).await.unwrap();
        log.append(entry(2)).await.unwrap();

        let reopened = JsonConversationLog::new(&path, DEFAULT_LOG_CAPACITY);
        reopened.load().await.unwrap();
        assert_eq!(reopened.entries().await.unwrap(), vec![entry(1), entry(2)]);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_reload_applies_smaller_cap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        let log = JsonConversationLog::new(&path, 10);
        for n in 0..4 {
            log.append(entry(n)).await.unwrap();
        }
        let smaller = JsonConversationLog::new(&path, 2);
        smaller.load().await.unwrap();
        let entries = smaller.entries().await.unwrap();
        assert_eq!(entries, vec![entry(2), entry(3)]);
    }

    #[tokio::test]
    async fn test_clear_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        let log = JsonConversationLog::new(&path, DEFAULT_LOG_CAPACITY);
        log.append(entry(1)).await.unwrap();
        log.clear().await.unwrap();

        let reopened = JsonConversationLog::new(&path, DEFAULT_LOG_CAPACITY);
        reopened.load().await.unwrap();
        assert!(reopened.entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonConversationLog::new(dir.path().join("absent.json"), DEFAULT_LOG_CAPACITY);
        log.load().await.unwrap();
        assert!(log.entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_file_is_an_error_and_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        let bytes = [0xff, 0xfe, 0x00, 0x80];
        std::fs::write(&path, bytes).unwrap();

        let log = JsonConversationLog::new(&path, DEFAULT_LOG_CAPACITY);
        let err = log.load().await.unwrap_err();
        assert!(matches!(err, DomainError::Log(_)));
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_directory_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonConversationLog::new(dir.path(), DEFAULT_LOG_CAPACITY);
        assert!(matches!(log.load().await, Err(DomainError::Log(_))));
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        std::fs::write(&path, "{broken").unwrap();
        let log = JsonConversationLog::new(&path, DEFAULT_LOG_CAPACITY);
        log.load().await.unwrap();
        assert!(log.entries().await.unwrap().is_empty());
    }
}
