use std::path::PathBuf;

/// Everything that can go wrong outside the numeric core.
#[derive(Debug)]
pub enum Error {
    /// The data or config file could not be opened or read.
    Io { path: PathBuf, source: std::io::Error },
    /// A data row could not be interpreted. `row` is 1-based and counts
    /// the header line when one is present.
    Parse { row: usize, message: String },
    /// The dataset (or one of its partitions) has no rows.
    EmptyDataset(String),
    /// A configuration value is out of range or the config file is malformed.
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Error::Parse { row, message } => write!(f, "Row {}: {}", row, message),
            Error::EmptyDataset(what) => write!(f, "{} contains no rows", what),
            Error::Config(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
