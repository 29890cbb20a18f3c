//! Rolling file logger with an in-memory circular buffer.
//!
//! Log output goes to one file per day under the application's log
//! directory; files older than [`MAX_LOG_FILES`] days are pruned on
//! rotation. The newest lines are additionally kept in a circular
//! buffer so they can be shown in-app without touching the disk.
//!
//! [`init_logger`] installs a `tracing-subscriber` fmt subscriber whose
//! writer is the rolling file. The subscriber also captures records
//! emitted through the `log` facade, so both `tracing` and `log` macros
//! end up in the same file.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use chrono::Local;

/// Number of daily log files kept on disk.
pub const MAX_LOG_FILES: usize = 7;

/// Number of recent lines held in the circular buffer.
pub const BUFFER_LINES: usize = 256;

static SINK: OnceLock<Arc<Mutex<RollingFile>>> = OnceLock::new();

/// Errors reported by the logger itself.
#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    AlreadyInitialized,
    NotInitialized,
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "log I/O error: {}", e),
            LoggerError::AlreadyInitialized => write!(f, "logger already initialized"),
            LoggerError::NotInitialized => write!(f, "logger not initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

/// Append-only daily log file with rotation and a line buffer.
struct RollingFile {
    dir: PathBuf,
    prefix: String,
    current_date: String,
    file: Option<File>,
    buffer: VecDeque<String>,
}

impl RollingFile {
    fn new(dir: PathBuf, prefix: &str) -> Self {
        Self {
            dir,
            prefix: prefix.to_string(),
            current_date: String::new(),
            file: None,
            buffer: VecDeque::with_capacity(BUFFER_LINES),
        }
    }

    fn file_name(&self, date: &str) -> String {
        format!("{}-{}.log", self.prefix, date)
    }

    /// Open today's file, rotating and pruning when the date changed.
    fn ensure_file(&mut self) -> io::Result<&mut File> {
        let today = Local::now().format("%Y-%m-%d").to_string();
        if self.file.is_none() || self.current_date != today {
            let path = self.dir.join(self.file_name(&today));
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            self.current_date = today;
            self.file = Some(file);
            self.prune_old_files();
        }
        Ok(self.file.as_mut().unwrap())
    }

    /// Remove the oldest log files beyond [`MAX_LOG_FILES`].
    fn prune_old_files(&self) {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return;
        };
        let suffix = ".log";
        let prefix = format!("{}-", self.prefix);
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|n| n.starts_with(&prefix) && n.ends_with(suffix))
            .collect();
        // Date-stamped names sort chronologically.
        names.sort();
        if names.len() > MAX_LOG_FILES {
            let excess = names.len() - MAX_LOG_FILES;
            for name in names.into_iter().take(excess) {
                let _ = fs::remove_file(self.dir.join(name));
            }
        }
    }

    fn push_line(&mut self, line: &str) {
        if self.buffer.len() == BUFFER_LINES {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line.to_string());
    }

    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<usize> {
        for line in String::from_utf8_lossy(buf).lines() {
            if !line.is_empty() {
                self.push_line(line);
            }
        }
        let file = self.ensure_file()?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn recent(&self) -> Vec<String> {
        self.buffer.iter().cloned().collect()
    }
}

/// `io::Write` handle cloned into the subscriber for every event.
struct SinkWriter(Arc<Mutex<RollingFile>>);

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.0.lock() {
            Ok(mut sink) => sink.write_bytes(buf),
            Err(_) => Err(io::Error::new(io::ErrorKind::Other, "log sink poisoned")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Ok(mut sink) = self.0.lock() {
            if let Some(file) = sink.file.as_mut() {
                file.flush()?;
            }
        }
        Ok(())
    }
}

/// Initialize the global logger writing under `log_dir`.
///
/// `app_name` becomes the log file prefix, e.g. `CatMap-2026-08-06.log`.
pub fn init_logger(log_dir: impl Into<PathBuf>, app_name: &str) -> Result<(), LoggerError> {
    let dir = log_dir.into();
    fs::create_dir_all(&dir)?;

    let sink = Arc::new(Mutex::new(RollingFile::new(dir, app_name)));
    SINK.set(sink.clone())
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || SinkWriter(sink.clone()))
        .init();

    Ok(())
}

/// Log an info line through the global logger.
pub fn info(msg: &str) -> Result<(), LoggerError> {
    SINK.get().ok_or(LoggerError::NotInitialized)?;
    tracing::info!("{}", msg);
    Ok(())
}

/// Log an error line through the global logger.
pub fn error(msg: &str) -> Result<(), LoggerError> {
    SINK.get().ok_or(LoggerError::NotInitialized)?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Most recent log lines from the circular buffer, oldest first.
pub fn recent_lines() -> Vec<String> {
    match SINK.get() {
        Some(sink) => sink.lock().map(|s| s.recent()).unwrap_or_default(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_writes_daily_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(Mutex::new(RollingFile::new(
            dir.path().to_path_buf(),
            "Test",
        )));

        let mut writer = SinkWriter(sink.clone());
        writer.write_all(b"hello log\n").unwrap();
        writer.flush().unwrap();

        let date = Local::now().format("%Y-%m-%d").to_string();
        let path = dir.path().join(format!("Test-{}.log", date));
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("hello log"));
    }

    #[test]
    fn test_circular_buffer_caps_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = RollingFile::new(dir.path().to_path_buf(), "Test");

        for i in 0..BUFFER_LINES + 10 {
            sink.write_bytes(format!("line {}\n", i).as_bytes()).unwrap();
        }

        let recent = sink.recent();
        assert_eq!(recent.len(), BUFFER_LINES);
        assert_eq!(recent[0], "line 10");
        assert_eq!(recent[BUFFER_LINES - 1], format!("line {}", BUFFER_LINES + 9));
    }

    #[test]
    fn test_prunes_files_beyond_limit() {
        let dir = tempfile::tempdir().unwrap();
        for day in 1..=MAX_LOG_FILES + 3 {
            let name = format!("Test-2026-01-{:02}.log", day);
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let mut sink = RollingFile::new(dir.path().to_path_buf(), "Test");
        sink.write_bytes(b"today\n").unwrap();

        let count = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(count, MAX_LOG_FILES);
    }

    #[test]
    fn test_unrelated_files_survive_prune() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("keep.txt"), "x").unwrap();
        for day in 1..=MAX_LOG_FILES + 2 {
            let name = format!("Test-2026-01-{:02}.log", day);
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let mut sink = RollingFile::new(dir.path().to_path_buf(), "Test");
        sink.write_bytes(b"today\n").unwrap();

        assert!(dir.path().join("keep.txt").exists());
    }
}
