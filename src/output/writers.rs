//! Output destinations

use crate::error::{AuditError, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer for stdout output
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| AuditError::StdoutWrite {
                source: e,
                #[cfg(not(tarpaulin_include))]
                backtrace: crate::error::ErrorTrace::capture(),
            })
    }
}

/// Writer for file output; the file is replaced on every write
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn write_error(&self, source: io::Error) -> AuditError {
        AuditError::OutputWrite {
            path: self.path.clone(),
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: crate::error::ErrorTrace::capture(),
        }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut file = File::create(&self.path).map_err(|e| self.write_error(e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| self.write_error(e))
    }
}

/// Create an output writer based on the output file option
pub fn create_writer(output_file: Option<impl AsRef<Path>>) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StdoutWriter),
    }
}
