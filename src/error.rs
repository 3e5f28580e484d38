use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Route(#[from] directions_core::Error),
}

impl CliError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        use directions_core::Error;

        match self {
            CliError::ConfigRead { .. } | CliError::ConfigParse { .. } => 1,
            CliError::Route(err) => match err {
                Error::FileNotFound { .. } => 3,
                Error::UnknownSource(_) => 4,
                Error::UnknownDestination(_) => 5,
                Error::Unreachable { .. } => 6,
                Error::IoError(_) | Error::InvalidData(_) | Error::InvalidNodeIndex => 1,
            },
        }
    }
}
