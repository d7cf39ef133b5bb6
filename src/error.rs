use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while generating or optimizing assets
#[derive(Debug)]
pub enum AssetError {
    /// None of the candidate source icons exist
    MissingInput { tried: Vec<PathBuf> },
    /// Color string is not 6 hex digits
    InvalidColor(String),
    /// Failed to create an output directory
    CreateDir { path: PathBuf, source: io::Error },
    /// Failed to read a file, its metadata, or a directory listing
    Read { path: PathBuf, source: io::Error },
    /// Failed to write an output file
    Write { path: PathBuf, source: io::Error },
    /// File could not be decoded as an image
    Decode {
        path: PathBuf,
        source: Box<dyn Error + Send + Sync>,
    },
    /// Image could not be encoded as PNG
    Encode {
        path: PathBuf,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::MissingInput { tried } => {
                let tried: Vec<String> = tried.iter().map(|p| p.display().to_string()).collect();
                write!(f, "missing source icon. Tried: {}", tried.join(", "))
            }
            AssetError::InvalidColor(color) => {
                write!(f, "expected 6-digit hex color, got: '{}'", color)
            }
            AssetError::CreateDir { path, source } => {
                write!(f, "failed to create directory {}: {}", path.display(), source)
            }
            AssetError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            AssetError::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            AssetError::Decode { path, source } => {
                write!(f, "failed to decode {}: {}", path.display(), source)
            }
            AssetError::Encode { path, source } => {
                write!(f, "failed to encode {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for AssetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AssetError::CreateDir { source, .. } => Some(source),
            AssetError::Read { source, .. } => Some(source),
            AssetError::Write { source, .. } => Some(source),
            AssetError::Decode { source, .. } => Some(&**source),
            AssetError::Encode { source, .. } => Some(&**source),
            _ => None,
        }
    }
}
