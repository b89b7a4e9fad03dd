// Debug logging module for asynchronous decision logging
//
// Each answered /move request is appended to a JSONL file from a spawned task, so
// the request/response cycle never waits on disk I/O.

use log::error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::types::{Direction, Snapshot};

/// One line of the decision log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugLogEntry {
    pub turn: i32,
    #[serde(default)]
    pub game_id: String,
    pub chosen_move: String,
    pub snapshot: Snapshot,
    pub timestamp: String,
}

/// Shared debug logger state
/// Uses Arc<Mutex<File>> to allow concurrent async writes from multiple tasks
#[derive(Clone)]
pub struct DebugLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl DebugLogger {
    /// Creates a new debug logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub async fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
            .await
        {
            Ok(file) => {
                log::info!("Debug logging enabled: {}", log_file_path);
                DebugLogger {
                    file: Arc::new(Mutex::new(Some(file))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create debug log file '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a disabled debug logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Logs a move decision asynchronously (fire-and-forget)
    pub fn log_move(&self, turn: i32, game_id: String, snapshot: Snapshot, chosen_move: Direction) {
        if !self.enabled {
            return;
        }

        let entry = DebugLogEntry {
            turn,
            game_id,
            chosen_move: chosen_move.as_str().to_string(),
            snapshot,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        let file_handle = self.file.clone();

        tokio::spawn(async move {
            Self::write_entry(file_handle, entry).await;
        });
    }

    /// Serializes one entry and appends it, flushing so a crash loses at most the current line
    async fn write_entry(file_handle: Arc<Mutex<Option<File>>>, entry: DebugLogEntry) {
        let mut file_guard = file_handle.lock().await;

        let Some(file) = file_guard.as_mut() else {
            return;
        };

        match serde_json::to_string(&entry) {
            Ok(json_line) => {
                let line_with_newline = format!("{}\n", json_line);
                if let Err(e) = file.write_all(line_with_newline.as_bytes()).await {
                    error!("Failed to write debug log entry: {}", e);
                } else if let Err(e) = file.flush().await {
                    error!("Failed to flush debug log: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to serialize debug log entry: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, Snake};
    use std::time::Duration;

    fn snapshot() -> Snapshot {
        Snapshot {
            width: 3,
            height: 3,
            you: "me".to_string(),
            snakes: vec![Snake {
                id: "me".to_string(),
                name: "me".to_string(),
                taunt: String::new(),
                health_points: 100,
                coords: vec![Point::new(1, 1)],
            }],
            food: vec![Point::new(0, 0)],
        }
    }

    #[tokio::test]
    async fn test_disabled_logger_is_noop() {
        let logger = DebugLogger::new(false, "unused.jsonl").await;
        assert!(!logger.is_enabled());
        logger.log_move(0, "g".to_string(), snapshot(), Direction::Up);
    }

    #[tokio::test]
    async fn test_entries_are_written_as_jsonl() {
        let path = std::env::temp_dir().join(format!(
            "pathfinder_debug_{}.jsonl",
            std::process::id()
        ));
        let path_str = path.to_string_lossy().to_string();

        let logger = DebugLogger::new(true, &path_str).await;
        assert!(logger.is_enabled());
        logger.log_move(3, "game-1".to_string(), snapshot(), Direction::Left);

        let mut contents = String::new();
        for _ in 0..50 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            contents = tokio::fs::read_to_string(&path).await.unwrap_or_default();
            if contents.ends_with('\n') {
                break;
            }
        }
        let _ = std::fs::remove_file(&path);

        let entry: DebugLogEntry = serde_json::from_str(contents.trim()).unwrap();
        assert_eq!(entry.turn, 3);
        assert_eq!(entry.game_id, "game-1");
        assert_eq!(entry.chosen_move, "left");
        assert_eq!(entry.snapshot, snapshot());
    }
}
