#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

/// `ENOENT`
pub const EXIT_NOT_FOUND: i32 = 2;
/// `EIO`
pub const EXIT_IO: i32 = 5;
/// `EINVAL`
pub const EXIT_INVALID: i32 = 22;
/// `ENOTSUP`
pub const EXIT_UNSUPPORTED: i32 = 95;

#[derive(Debug, Error)]
pub enum SplashError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no such file: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid splash image: {0}")]
    InvalidFormat(String),

    #[error("unsupported splash image: {0}")]
    Unsupported(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("image codec: {0}")]
    Codec(String),

    #[error("entry {index} [{name}]: {source}")]
    Entry {
        index: usize,
        name: String,
        #[source]
        source: Box<SplashError>,
    },
}

impl SplashError {
    pub(crate) fn in_entry(self, index: usize, name: &str) -> Self {
        SplashError::Entry {
            index,
            name: name.to_string(),
            source: Box::new(self),
        }
    }

    /// Process exit code for this error, errno-style.
    pub fn errno(&self) -> i32 {
        match self {
            SplashError::InvalidArgument(_) | SplashError::InvalidFormat(_) => EXIT_INVALID,
            SplashError::NotFound(_) => EXIT_NOT_FOUND,
            SplashError::Unsupported(_) => EXIT_UNSUPPORTED,
            SplashError::Io(_) | SplashError::Codec(_) => EXIT_IO,
            SplashError::Entry { source, .. } => source.errno(),
        }
    }
}

pub type SplashResult<T> = Result<T, SplashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errno_follows_kind() {
        assert_eq!(SplashError::InvalidArgument("x".into()).errno(), EXIT_INVALID);
        assert_eq!(SplashError::NotFound("a.img".into()).errno(), EXIT_NOT_FOUND);
        assert_eq!(SplashError::Unsupported("x".into()).errno(), EXIT_UNSUPPORTED);
        assert_eq!(SplashError::Codec("x".into()).errno(), EXIT_IO);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(SplashError::from(io).errno(), EXIT_IO);
    }

    #[test]
    fn entry_error_keeps_source_code_and_names_entry() {
        let e = SplashError::InvalidFormat("bad".into()).in_entry(3, "fastboot");
        assert_eq!(e.errno(), EXIT_INVALID);
        let msg = e.to_string();
        assert!(msg.contains("entry 3"));
        assert!(msg.contains("fastboot"));
    }
}
