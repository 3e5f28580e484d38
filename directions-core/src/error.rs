use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("no route exists, source location does not exist: {0}")]
    UnknownSource(String),
    #[error("no route exists, destination unreachable: {0}")]
    UnknownDestination(String),
    #[error("no route exists, destination unreachable: {from} to {to}")]
    Unreachable { from: String, to: String },
    #[error("Invalid node index")]
    InvalidNodeIndex,
}
