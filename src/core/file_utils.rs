//! File utilities: lossy input reading, input discovery and output naming.
//!
//! Discovery looks at a single directory only. An entry qualifies when it is
//! a regular file (symlinks are followed) and its name contains the input
//! marker anywhere, so `data.csv.bak` is picked up too.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::config::ConverterConfig;
use crate::core::errors::{ConvertError, Result, ResultExt};

/// Safe file reading with UTF-8 validation and fallback handling
pub struct FileReader;

impl FileReader {
    /// Read a file to string, decoding invalid UTF-8 lossily
    pub fn read_to_string(file_path: &Path) -> Result<String> {
        let bytes = fs::read(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        match String::from_utf8(bytes) {
            Ok(content) => Ok(content),
            Err(err) => {
                warn!(
                    "File contained invalid UTF-8, converted with lossy encoding: {}",
                    file_path.display()
                );
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        }
    }
}

/// Input file discovery
pub struct InputDiscovery;

impl InputDiscovery {
    /// List candidate inputs in `dir`, in directory listing order.
    pub fn discover_inputs(dir: &Path, config: &ConverterConfig) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory {}", dir.display()))?;

        let mut inputs = Vec::new();
        for entry in entries {
            let entry =
                entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
            let path = entry.path();

            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                debug!("Skipping entry with non UTF-8 name: {}", path.display());
                continue;
            };

            if !name.contains(config.input_marker.as_str()) {
                continue;
            }

            // Broken symlinks and unreadable entries are simply not files.
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_file() => inputs.push(path),
                Ok(_) => debug!("Skipping non-file entry: {}", path.display()),
                Err(err) => debug!("Skipping unreadable entry {}: {}", path.display(), err),
            }
        }

        debug!("Discovered {} input files in {}", inputs.len(), dir.display());
        Ok(inputs)
    }

    /// Output name for an input name: everything before the first `.`, plus
    /// the output extension. `a.weird.csv` becomes `a.arff`.
    pub fn derive_output_name(file_name: &str, config: &ConverterConfig) -> String {
        let prefix = file_name.split('.').next().unwrap_or_default();
        format!("{prefix}.{}", config.output_extension)
    }

    /// Output path beside the input
    pub fn derive_output_path(input: &Path, config: &ConverterConfig) -> Result<PathBuf> {
        let file_name = input
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ConvertError::internal(format!(
                    "Input path has no UTF-8 file name: {}",
                    input.display()
                ))
            })?;

        Ok(input.with_file_name(Self::derive_output_name(file_name, config)))
    }
}
