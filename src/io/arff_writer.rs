//! Output file writing.
//!
//! Lines are buffered in memory and appended to the target file in chunks.
//! Each flush opens the file, appends, and closes it again, so no handle is
//! held between chunks.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::errors::{ConvertError, Result, ResultExt};

/// Delete a previous output file. A missing file is not an error.
pub fn remove_stale_output(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed stale output {}", path.display());
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(ConvertError::io(
            format!("Failed to remove stale output {}", path.display()),
            err,
        )),
    }
}

/// Totals reported once a writer is finished
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteStats {
    /// Lines written
    pub lines: usize,
    /// Append operations performed
    pub flushes: usize,
}

/// Line writer that appends to disk whenever its buffer holds more than
/// `threshold` lines
#[derive(Debug)]
pub struct ChunkedLineWriter {
    path: PathBuf,
    threshold: usize,
    buffer: String,
    pending: usize,
    stats: WriteStats,
}

impl ChunkedLineWriter {
    /// Create a writer targeting `path`. Nothing touches the disk until the
    /// first flush.
    pub fn new(path: impl Into<PathBuf>, threshold: usize) -> Self {
        Self {
            path: path.into(),
            threshold,
            buffer: String::new(),
            pending: 0,
            stats: WriteStats::default(),
        }
    }

    /// Target path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Buffer one line; a newline is appended.
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        self.buffer.push_str(line);
        self.buffer.push('\n');
        self.pending += 1;
        if self.pending > self.threshold {
            self.flush()?;
        }
        Ok(())
    }

    /// Buffer every line of an iterator
    pub fn push_lines<'l, I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = &'l str>,
    {
        for line in lines {
            self.push_line(line)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.pending == 0 {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        file.write_all(self.buffer.as_bytes())
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        debug!(
            "Flushed {} lines to {}",
            self.pending,
            self.path.display()
        );
        self.stats.lines += self.pending;
        self.stats.flushes += 1;
        self.buffer.clear();
        self.pending = 0;
        Ok(())
    }

    /// Flush the remainder and report totals
    pub fn finish(mut self) -> Result<WriteStats> {
        self.flush()?;
        Ok(self.stats)
    }
}
