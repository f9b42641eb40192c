use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal harness errors, raised before any run is started.
#[derive(Debug)]
pub enum ExperimentError {
    /// The configuration or the schedule registry was rejected.
    Config(String),
    /// The trajectory output directory could not be created.
    OutputDir { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(reason) => write!(f, "invalid experiment: {reason}"),
            Self::OutputDir { path, source } => {
                write!(f, "cannot create output directory {}: {source}", path.display())
            }
        }
    }
}

impl Error for ExperimentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(_) => None,
            Self::OutputDir { source, .. } => Some(source),
        }
    }
}

/// I/O failure on one run's output. Terminal for the affected run only;
/// sibling runs keep going.
#[derive(Debug)]
pub enum OutputError {
    /// A per-run trajectory file could not be written.
    Trajectory { path: PathBuf, source: io::Error },
    /// The shared results log could not be opened or appended to.
    Results { path: PathBuf, source: io::Error },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trajectory { path, source } => {
                write!(f, "cannot write trajectory {}: {source}", path.display())
            }
            Self::Results { path, source } => {
                write!(f, "cannot append to results log {}: {source}", path.display())
            }
        }
    }
}

impl Error for OutputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Trajectory { source, .. } | Self::Results { source, .. } => Some(source),
        }
    }
}
