//! # splashpak
//!
//! Unpack and repack `SPLASH!!` logo partition images: a fixed table of 84
//! run-length-encoded BGR sub-images, each behind a 4096-byte header.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = splashpak::unpack(Path::new("LOGO.img"), Path::new("pic"))?;
//! println!("{} images", report.written.len());
//! splashpak::repack(Path::new("LOGO.img"), Path::new("pic"), Path::new("new-logo.img"))?;
//! # Ok::<(), splashpak::SplashError>(())
//! ```
#![forbid(unsafe_code)]

pub mod splash;

pub use splash::{
    entries, list, repack, unpack, verify, Config, Container, Header, Mode, SplashError,
    SplashResult,
};
