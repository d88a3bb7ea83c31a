#![forbid(unsafe_code)]

mod build;
mod codec;
mod config;
mod error;
mod extract;
mod format;
mod io;
mod ops;
mod path;
mod pixel;
mod read;

pub mod rle;

pub use build::{repack_into, write_header, RepackReport};
pub use codec::{ImageCodec, PngCodec, RgbPixels};
pub use config::{Config, Mode, DEFAULT_OUTPUT, DEFAULT_PIC_DIR};
pub use error::{
    SplashError, SplashResult, EXIT_INVALID, EXIT_IO, EXIT_NOT_FOUND, EXIT_UNSUPPORTED,
};
pub use extract::UnpackReport;
pub use format::{
    EntryInfo, Header, ALIGNMENT, HEADER_SIZE, MAGIC, MAX_OFFSETS, METADATA_SIZE, NAME_SIZE,
    SUPPORTED_SPECIAL,
};
pub use pixel::swap_channels;
pub use read::Container;

pub use ops::{entries, list, repack, run, unpack, verify, verify_container, write_table};

/// Pipelines over an already opened container, for callers bringing their own codec.
pub mod pipeline {
    pub use super::build::repack as repack_container;
    pub use super::extract::unpack as unpack_container;
}
