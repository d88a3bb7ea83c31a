#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use crate::splash::error::{SplashError, SplashResult};
use crate::splash::format::Header;

/// File stem for an entry: its stored name, which must be a single path component.
pub fn entry_stem(index: usize, header: &Header) -> SplashResult<String> {
    let name = header.name_str().into_owned();
    if name.is_empty() {
        return Err(SplashError::InvalidFormat(format!("entry {index} has no name")));
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(SplashError::InvalidFormat(format!(
            "entry {index} name {name:?} is not a plain file name"
        )));
    }
    Ok(name)
}

pub fn image_path(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    dir.join(format!("{stem}.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Header {
        let mut h = Header::zeroed();
        assert!(h.set_name(name));
        h
    }

    #[test]
    fn plain_names_pass() {
        assert_eq!(entry_stem(0, &named("fastboot")).unwrap(), "fastboot");
        assert_eq!(entry_stem(0, &named("lowpower.v2")).unwrap(), "lowpower.v2");
    }

    #[test]
    fn separators_and_dots_are_rejected() {
        for bad in ["", ".", "..", "../boot", "a/b", "a\\b"] {
            assert!(
                matches!(entry_stem(7, &named(bad)), Err(SplashError::InvalidFormat(_))),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn image_path_appends_extension() {
        let p = image_path(Path::new("pic"), "splash", "png");
        assert_eq!(p, Path::new("pic").join("splash.png"));
    }
}
