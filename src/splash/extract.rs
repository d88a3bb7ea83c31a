#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::splash::codec::ImageCodec;
use crate::splash::error::{SplashError, SplashResult};
use crate::splash::format::MAX_OFFSETS;
use crate::splash::path::{entry_stem, image_path};
use crate::splash::pixel::swap_channels;
use crate::splash::read::Container;
use crate::splash::rle;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnpackReport {
    /// Image files written, in table order.
    pub written: Vec<PathBuf>,
    /// Zero-length entries.
    pub skipped: Vec<usize>,
}

/// Write every populated entry of `container` to `<out_dir>/<name>.<ext>`.
///
/// Stops at the first entry that fails; files written before it stay on disk.
pub fn unpack(
    container: &Container,
    out_dir: &Path,
    codec: &dyn ImageCodec,
) -> SplashResult<UnpackReport> {
    std::fs::create_dir_all(out_dir)?;

    let mut report = UnpackReport::default();

    for index in 0..MAX_OFFSETS {
        let entry = container.entry_header(index)?;
        debug!(
            "entry {index}: offset={:#010x} size={} {}x{} special={} name={:?} metadata={:?}",
            container.entry_offset(index)?,
            entry.length,
            entry.width,
            entry.height,
            entry.special,
            entry.name_str(),
            entry.metadata_str()
        );

        if entry.length == 0 {
            debug!("entry {index}: skip, no image data");
            report.skipped.push(index);
            continue;
        }

        let stem = entry_stem(index, &entry)?;
        let payload = container.entry_payload(index, &entry)?;

        let mut pixels = rle::decode(payload);
        swap_channels(&mut pixels);

        let file = codec
            .encode(&pixels, entry.width, entry.height)
            .map_err(|e| e.in_entry(index, &stem))?;

        let out_path = image_path(out_dir, &stem, codec.extension());
        std::fs::write(&out_path, &file)
            .map_err(|e| SplashError::Io(e).in_entry(index, &stem))?;

        info!(
            "entry {index} [{stem}]: {}x{} -> {}",
            entry.width,
            entry.height,
            out_path.display()
        );
        report.written.push(out_path);
    }

    Ok(report)
}
