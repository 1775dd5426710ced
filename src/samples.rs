//! Loading of raw sample files: native-endian `f32`, no header.

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::mem::size_of;
use std::path::{Path, PathBuf};

use log::{info, warn};

const SAMPLE_BYTES: u64 = size_of::<f32>() as u64;

#[derive(Debug)]
pub enum LoadError {
    Open { path: PathBuf, source: io::Error },
    Read(io::Error),
    /// Fewer samples were available than the grid needs.
    Short { wanted: u64, got: u64 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Open { path, source } => write!(f, "cannot open {}: {}", path.display(), source),
            LoadError::Read(e) => write!(f, "error reading samples: {}", e),
            LoadError::Short { wanted, got } => write!(
                f,
                "sample file smaller than given dimensions: need {} samples, found {}",
                wanted, got
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Open { source, .. } => Some(source),
            LoadError::Read(e) => Some(e),
            LoadError::Short { .. } => None,
        }
    }
}

/// Reads exactly `count` samples from the front of `reader`.
///
/// Anything after them is left unread. Running out early is an error; the
/// buffer is never padded.
pub fn from_reader<R: Read>(reader: R, count: u64) -> Result<Vec<f32>, LoadError> {
    let mut bytes = Vec::new();
    reader
        .take(count.saturating_mul(SAMPLE_BYTES))
        .read_to_end(&mut bytes)
        .map_err(LoadError::Read)?;
    let got = bytes.len() as u64 / SAMPLE_BYTES;
    if got < count {
        return Err(LoadError::Short { wanted: count, got });
    }
    Ok(bytes
        .chunks_exact(SAMPLE_BYTES as usize)
        .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

/// Reads `count` samples from the file at `path`, after skipping the first
/// `skip` samples.
pub fn load(path: &Path, count: u64, skip: u64) -> Result<Vec<f32>, LoadError> {
    let open_err = |source| LoadError::Open { path: path.to_path_buf(), source };
    let mut file = File::open(path).map_err(open_err)?;
    let available = file.metadata().map_err(open_err)?.len() / SAMPLE_BYTES;
    if skip > 0 {
        file.seek(SeekFrom::Start(skip.saturating_mul(SAMPLE_BYTES)))
            .map_err(LoadError::Read)?;
    }

    let samples = from_reader(&mut file, count)?;
    info!("Loaded {} samples from {}", samples.len(), path.display());
    let unused = available.saturating_sub(skip).saturating_sub(count);
    if unused > 0 {
        warn!("{} samples after the plotted range are ignored", unused);
    }
    Ok(samples)
}
