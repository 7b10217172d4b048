use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    /// At least one character must survive stripping the 4-character extension.
    #[error("input path too short to derive an output name: {}", .0.display())]
    PathTooShort(PathBuf),

    #[error("input path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
