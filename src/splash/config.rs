#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use crate::splash::error::{SplashError, SplashResult};

pub const DEFAULT_OUTPUT: &str = "new-logo.img";
pub const DEFAULT_PIC_DIR: &str = "pic";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Container -> image directory.
    Unpack,
    /// Image directory + container -> new container.
    Repack,
    /// Print the offset table.
    Info { verbose: bool },
    /// Structural check of every entry.
    Verify,
}

/// Everything one invocation needs, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    output: Option<PathBuf>,
    pub pic_dir: PathBuf,
    pub mode: Mode,
}

impl Config {
    pub fn new(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        pic_dir: Option<PathBuf>,
        mode: Mode,
    ) -> SplashResult<Config> {
        let input = match input {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Err(SplashError::InvalidArgument("input image not defined".into())),
        };
        Ok(Config {
            input,
            output,
            pic_dir: pic_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_PIC_DIR)),
            mode,
        })
    }

    /// Container file written by a repack.
    pub fn repack_output(&self) -> &Path {
        self.output
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT))
    }

    /// Directory an unpack writes to: an explicit output path, else the pic dir.
    pub fn unpack_dir(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.pic_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_is_invalid_argument() {
        for input in [None, Some(PathBuf::new())] {
            let err = Config::new(input, None, None, Mode::Repack).unwrap_err();
            assert!(matches!(err, SplashError::InvalidArgument(_)));
        }
    }

    #[test]
    fn defaults_apply() {
        let cfg = Config::new(Some("LOGO.img".into()), None, None, Mode::Repack).unwrap();
        assert_eq!(cfg.repack_output(), Path::new("new-logo.img"));
        assert_eq!(cfg.pic_dir, Path::new("pic"));
        assert_eq!(cfg.unpack_dir(), Path::new("pic"));
    }

    #[test]
    fn unpack_prefers_explicit_output() {
        let cfg = Config::new(
            Some("LOGO.img".into()),
            Some("out".into()),
            Some("pics".into()),
            Mode::Unpack,
        )
        .unwrap();
        assert_eq!(cfg.unpack_dir(), Path::new("out"));

        let cfg = Config::new(Some("LOGO.img".into()), None, Some("pics".into()), Mode::Unpack)
            .unwrap();
        assert_eq!(cfg.unpack_dir(), Path::new("pics"));
    }
}
