#![forbid(unsafe_code)]

use blake3::Hasher;
use log::{debug, warn};
use std::io::Write;
use std::path::Path;

use crate::splash::build::{repack as repack_impl, RepackReport};
use crate::splash::codec::PngCodec;
use crate::splash::config::{Config, Mode};
use crate::splash::error::{SplashError, SplashResult};
use crate::splash::extract::{unpack as unpack_impl, UnpackReport};
use crate::splash::format::{EntryInfo, ALIGNMENT, MAX_OFFSETS};
use crate::splash::io::hex32;
use crate::splash::path::entry_stem;
use crate::splash::read::Container;
use crate::splash::rle;

pub fn unpack(input: &Path, out_dir: &Path) -> SplashResult<UnpackReport> {
    let container = Container::open(input)?;
    unpack_impl(&container, out_dir, &PngCodec)
}

pub fn repack(input: &Path, pic_dir: &Path, output: &Path) -> SplashResult<RepackReport> {
    let container = Container::open(input)?;
    repack_impl(&container, pic_dir, output, &PngCodec)
}

/// Read every offset-table slot (without decoding payloads).
pub fn entries(input: &Path) -> SplashResult<Vec<EntryInfo>> {
    let container = Container::open(input)?;
    let mut out = Vec::with_capacity(MAX_OFFSETS);

    for index in 0..MAX_OFFSETS {
        let h = container.entry_header(index)?;
        let payload_hash_hex = if h.length == 0 {
            None
        } else {
            let payload = container.entry_payload(index, &h)?;
            let mut hasher = Hasher::new();
            hasher.update(payload);
            let digest: [u8; 32] = hasher.finalize().into();
            Some(hex32(&digest))
        };

        out.push(EntryInfo {
            index,
            offset: container.entry_offset(index)?,
            width: h.width,
            height: h.height,
            length: h.length,
            special: h.special,
            name: h.name_str().into_owned(),
            metadata: h.metadata_str().into_owned(),
            payload_hash_hex,
        });
    }
    Ok(out)
}

pub fn list(input: &Path, verbose: bool) -> SplashResult<()> {
    let entries = entries(input)?;
    let stdout = std::io::stdout();
    write_table(&mut stdout.lock(), &entries, verbose)
}

/// One row per slot; `verbose` appends the payload digest.
pub fn write_table(w: &mut dyn Write, entries: &[EntryInfo], verbose: bool) -> SplashResult<()> {
    writeln!(w, "INDEX\tOFFSET\t\tWIDTH\tHEIGHT\tLENGTH\tSPECIAL\tNAME\tMETADATA")?;
    for e in entries {
        let name = if e.name.is_empty() { "None" } else { e.name.as_str() };
        write!(
            w,
            "{:5}\t{:08X}\t{:5}\t{:6}\t{:6}\t{:7}\t{}\t[{}]",
            e.index, e.offset, e.width, e.height, e.length, e.special, name, e.metadata
        )?;
        if verbose {
            if let Some(hash) = &e.payload_hash_hex {
                write!(w, "\t{hash}")?;
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Check every populated entry for bounds, RLE shape, pixel count, and name.
/// Returns the number of populated entries.
pub fn verify(input: &Path) -> SplashResult<usize> {
    let container = Container::open(input)?;
    verify_container(&container)
}

pub fn verify_container(container: &Container) -> SplashResult<usize> {
    let mut populated = 0;

    for index in 0..MAX_OFFSETS {
        let h = container.entry_header(index)?;
        if h.length == 0 {
            continue;
        }

        let stem = entry_stem(index, &h)?;
        let payload = container
            .entry_payload(index, &h)
            .map_err(|e| e.in_entry(index, &stem))?;

        if payload.len() % 2 != 0 {
            return Err(SplashError::InvalidFormat(format!(
                "odd RLE length {}",
                payload.len()
            ))
            .in_entry(index, &stem));
        }

        let decoded = rle::decoded_len(payload) as u64;
        if decoded != h.raw_len() {
            return Err(SplashError::InvalidFormat(format!(
                "RLE expands to {decoded} bytes, {}x{} needs {}",
                h.width,
                h.height,
                h.raw_len()
            ))
            .in_entry(index, &stem));
        }

        let offset = container.entry_offset(index)? as u64;
        if offset % ALIGNMENT != 0 {
            warn!("entry {index} [{stem}]: offset {offset:#x} is not page aligned");
        }
        debug!("entry {index} [{stem}]: ok");
        populated += 1;
    }

    Ok(populated)
}

/// Dispatch one configured invocation.
pub fn run(config: &Config) -> SplashResult<()> {
    match config.mode {
        Mode::Unpack => {
            let report = unpack(&config.input, config.unpack_dir())?;
            println!(
                "unpacked {} image(s), skipped {} empty slot(s) -> {}",
                report.written.len(),
                report.skipped.len(),
                config.unpack_dir().display()
            );
        }
        Mode::Repack => {
            let report = repack(&config.input, &config.pic_dir, config.repack_output())?;
            println!(
                "repacked: {} replaced, {} kept, {} empty -> {} ({} bytes)",
                report.replaced.len(),
                report.kept.len(),
                report.skipped.len(),
                config.repack_output().display(),
                report.bytes
            );
        }
        Mode::Info { verbose } => list(&config.input, verbose)?,
        Mode::Verify => {
            let n = verify(&config.input)?;
            println!("ok: {n} entries");
        }
    }
    Ok(())
}
