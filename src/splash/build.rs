#![forbid(unsafe_code)]

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::splash::codec::ImageCodec;
use crate::splash::error::{SplashError, SplashResult};
use crate::splash::format::{Header, HEADER_SIZE, MAX_OFFSETS};
use crate::splash::io::{align_up, to_offset, write_padding, write_u32};
use crate::splash::path::{entry_stem, image_path};
use crate::splash::pixel::swap_channels;
use crate::splash::read::Container;
use crate::splash::rle;

/// Outcome of a repack, by entry index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepackReport {
    /// Entries re-encoded from a replacement image.
    pub replaced: Vec<usize>,
    /// Entries whose original payload was carried over.
    pub kept: Vec<usize>,
    /// Zero-length entries (header only).
    pub skipped: Vec<usize>,
    /// Size of the written container.
    pub bytes: u64,
}

pub fn write_header(w: &mut dyn Write, h: &Header) -> SplashResult<()> {
    w.write_all(&h.magic)?;
    w.write_all(&h.blank)?;
    write_u32(w, h.width)?;
    write_u32(w, h.height)?;
    write_u32(w, h.length)?;
    write_u32(w, h.special)?;
    for &offset in h.offsets.iter() {
        write_u32(w, offset)?;
    }
    w.write_all(&h.name)?;
    w.write_all(&h.metadata)?;
    Ok(())
}

/// Rebuild `container` into the file `output`, pulling replacement images
/// from `pic_dir`.
pub fn repack(
    container: &Container,
    pic_dir: &Path,
    output: &Path,
    codec: &dyn ImageCodec,
) -> SplashResult<RepackReport> {
    let mut out = BufWriter::new(File::create(output)?);
    let report = repack_into(container, pic_dir, &mut out, codec)?;
    out.flush()?;
    info!("wrote {} ({} bytes)", output.display(), report.bytes);
    Ok(report)
}

/// Container layout produced here:
/// - entries in offset-table order, each [header 4096][payload]
/// - entries with a payload are zero padded to the next 4096 boundary
/// - the global header is written last at offset 0
///
/// Zero-length entries keep their original offset-table slot.
pub fn repack_into<W: Write + Seek>(
    container: &Container,
    pic_dir: &Path,
    out: &mut W,
    codec: &dyn ImageCodec,
) -> SplashResult<RepackReport> {
    let mut report = RepackReport::default();
    let mut global = container.header().clone();
    let mut cursor: u64 = 0;

    out.seek(SeekFrom::Start(0))?;

    for index in 0..MAX_OFFSETS {
        let mut entry = container.entry_header(index)?;

        if entry.length == 0 {
            debug!("entry {index}: empty, header only");
            write_header(out, &entry)?;
            cursor += HEADER_SIZE as u64;
            report.skipped.push(index);
            continue;
        }

        global.offsets[index] = to_offset(cursor)?;

        let payload: Cow<'_, [u8]> = if let Some((replacement, stem)) =
            find_replacement(index, &entry, pic_dir, codec.extension())
        {
            let encoded = encode_replacement(&replacement, codec)
                .map_err(|e| e.in_entry(index, &stem))?;
            entry.width = encoded.width;
            entry.height = encoded.height;
            entry.length = u32::try_from(encoded.rle.len()).map_err(|_| {
                SplashError::Unsupported(format!("{} byte payload", encoded.rle.len()))
                    .in_entry(index, &stem)
            })?;
            info!(
                "entry {index} [{stem}]: replaced from {} ({}x{}, {} bytes)",
                replacement.display(),
                entry.width,
                entry.height,
                entry.length
            );
            report.replaced.push(index);
            Cow::Owned(encoded.rle)
        } else {
            info!(
                "entry {index} [{}]: kept ({} bytes)",
                entry.name_str(),
                entry.length
            );
            report.kept.push(index);
            Cow::Borrowed(container.entry_payload(index, &entry)?)
        };

        if index == 0 {
            global.mirror_entry(&entry);
        }

        write_header(out, &entry)?;
        out.write_all(&payload)?;
        cursor += (HEADER_SIZE + payload.len()) as u64;

        let aligned = align_up(cursor);
        write_padding(out, aligned - cursor)?;
        cursor = aligned;
    }

    out.seek(SeekFrom::Start(0))?;
    write_header(out, &global)?;
    out.seek(SeekFrom::Start(cursor))?;

    report.bytes = cursor;
    Ok(report)
}

/// Replacement file for `entry`, when its name is a usable file stem and
/// `<pic_dir>/<name>.<ext>` is a regular file.
fn find_replacement(
    index: usize,
    entry: &Header,
    pic_dir: &Path,
    extension: &str,
) -> Option<(PathBuf, String)> {
    let stem = match entry_stem(index, entry) {
        Ok(stem) => stem,
        Err(e) => {
            warn!("{e}, keeping original payload");
            return None;
        }
    };
    let path = image_path(pic_dir, &stem, extension);
    path.is_file().then_some((path, stem))
}

struct EncodedImage {
    rle: Vec<u8>,
    width: u32,
    height: u32,
}

fn encode_replacement(path: &Path, codec: &dyn ImageCodec) -> SplashResult<EncodedImage> {
    let bytes = std::fs::read(path)?;
    let mut img = codec.decode(&bytes)?;
    swap_channels(&mut img.data);
    Ok(EncodedImage {
        rle: rle::encode(&img.data),
        width: img.width,
        height: img.height,
    })
}
