pub mod delimited;
pub mod json;

use std::path::{Path, PathBuf};
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("missing input file: {0}")]
    MissingFile(PathBuf),
    #[error("unsupported gzip input without feature enabled: {0}")]
    GzipNotEnabled(PathBuf),
    #[error("io error reading {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

pub fn open_reader(path: &Path) -> Result<Box<dyn io::BufRead>, InputError> {
    let file = std::fs::File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => InputError::MissingFile(path.to_path_buf()),
        _ => InputError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        #[cfg(feature = "gz")]
        {
            let decoder = flate2::read::GzDecoder::new(file);
            return Ok(Box::new(io::BufReader::new(decoder)));
        }
        #[cfg(not(feature = "gz"))]
        {
            return Err(InputError::GzipNotEnabled(path.to_path_buf()));
        }
    }
    Ok(Box::new(io::BufReader::new(file)))
}

pub fn path_display(path: &Path) -> impl fmt::Display + '_ {
    path.to_string_lossy()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;
