//! Rolling File Logger
//!
//! Installs a `tracing` subscriber that writes to `<dir>/<app>.log`.
//! When the file grows past [`MAX_FILE_BYTES`] it is rotated to
//! `<app>.log.1`, older files shift up, and the oldest beyond
//! [`MAX_BACKUPS`] is dropped, so the set of files is reused in a cycle.
//! `log` records are bridged into the same subscriber.
//!
//! On Android, output goes to logcat instead.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Size at which the active log file is rotated
pub const MAX_FILE_BYTES: u64 = 1024 * 1024;

/// Number of rotated files kept next to the active one
pub const MAX_BACKUPS: usize = 3;

static SINK: OnceLock<Mutex<RollingFile>> = OnceLock::new();

/// A size-capped log file with numbered backups
pub struct RollingFile {
    dir: PathBuf,
    base_name: String,
    max_bytes: u64,
    max_backups: usize,
    file: Option<File>,
    written: u64,
}

impl RollingFile {
    /// Open (appending to) `<dir>/<base_name>.log`
    pub fn open(dir: &Path, base_name: &str, max_bytes: u64, max_backups: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", base_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            dir: dir.to_path_buf(),
            base_name: base_name.to_string(),
            max_bytes,
            max_backups,
            file: Some(file),
            written,
        })
    }

    /// Path of the active file (`index == 0`) or of a backup
    pub fn path(&self, index: usize) -> PathBuf {
        if index == 0 {
            self.dir.join(format!("{}.log", self.base_name))
        } else {
            self.dir.join(format!("{}.log.{}", self.base_name, index))
        }
    }

    fn rotate(&mut self) -> io::Result<()> {
        // Close the active file before renaming it (required on Windows)
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }

        if self.max_backups == 0 {
            self.file = Some(File::create(self.path(0))?);
            self.written = 0;
            return Ok(());
        }

        let oldest = self.path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_backups).rev() {
            let from = self.path(index);
            if from.exists() {
                fs::rename(&from, self.path(index + 1))?;
            }
        }
        fs::rename(self.path(0), self.path(1))?;

        self.file = Some(File::create(self.path(0))?);
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let file = match self.file.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(self.path(0))?,
        };
        self.file.insert(file).write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Per-event writer handed to the fmt layer; forwards to the global file
struct SinkWriter;

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if cfg!(debug_assertions) {
            let _ = io::stderr().write_all(buf);
        }
        match SINK.get().map(|sink| sink.lock()) {
            Some(Ok(mut file)) => file.write(buf),
            // Poisoned or not installed: drop the line rather than panic
            _ => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match SINK.get().map(|sink| sink.lock()) {
            Some(Ok(mut file)) => file.flush(),
            _ => Ok(()),
        }
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the global logger. Call once, early in app setup.
#[cfg(not(target_os = "android"))]
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    let file = RollingFile::open(&log_dir, app_name, MAX_FILE_BYTES, MAX_BACKUPS)
        .map_err(|e| format!("Failed to open log file in {}: {}", log_dir.display(), e))?;

    SINK.set(Mutex::new(file))
        .map_err(|_| "Logger already initialized".to_string())?;

    tracing_subscriber::fmt()
        .with_writer(|| SinkWriter)
        .with_timer(LocalTime)
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))
}

/// Initialize the global logger. Call once, early in app setup.
#[cfg(target_os = "android")]
pub fn init_logger(_log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag(app_name),
    );
    Ok(())
}

pub fn info(msg: &str) {
    tracing::info!("{}", msg);
}

pub fn error(msg: &str) {
    tracing::error!("{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut log = RollingFile::open(dir.path(), "App", 1024, 2).unwrap();
            log.write_all(b"first\n").unwrap();
        }
        let mut log = RollingFile::open(dir.path(), "App", 1024, 2).unwrap();
        log.write_all(b"second\n").unwrap();
        log.flush().unwrap();

        let content = fs::read_to_string(dir.path().join("App.log")).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_rotates_when_full() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = RollingFile::open(dir.path(), "App", 10, 2).unwrap();

        log.write_all(b"0123456789").unwrap();
        log.write_all(b"next\n").unwrap();
        log.flush().unwrap();

        assert_eq!(fs::read_to_string(log.path(1)).unwrap(), "0123456789");
        assert_eq!(fs::read_to_string(log.path(0)).unwrap(), "next\n");
    }

    #[test]
    fn test_keeps_at_most_max_backups() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = RollingFile::open(dir.path(), "App", 4, 2).unwrap();

        for line in ["aaaa", "bbbb", "cccc", "dddd"] {
            log.write_all(line.as_bytes()).unwrap();
        }
        log.flush().unwrap();

        assert_eq!(fs::read_to_string(log.path(0)).unwrap(), "dddd");
        assert_eq!(fs::read_to_string(log.path(1)).unwrap(), "cccc");
        assert_eq!(fs::read_to_string(log.path(2)).unwrap(), "bbbb");
        assert!(!log.path(3).exists());
    }

    #[test]
    fn test_oversized_first_write_is_not_rotated() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = RollingFile::open(dir.path(), "App", 4, 1).unwrap();

        log.write_all(b"longer than four").unwrap();
        log.flush().unwrap();

        assert!(!log.path(1).exists());
    }
}
