//! Shared fixture builder for integration tests.
//!
//! Each integration test file compiles as its own crate and uses a subset of
//! these helpers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use splashpak::splash::{write_header, Header, ALIGNMENT, HEADER_SIZE, MAGIC, MAX_OFFSETS};

/// One populated slot of a fixture container.
pub struct Entry<'a> {
    pub index: usize,
    pub name: &'a str,
    pub width: u32,
    pub height: u32,
    pub rle: Vec<u8>,
}

impl<'a> Entry<'a> {
    /// Entry holding `bgr` pixels, RLE-encoded.
    pub fn pixels(index: usize, name: &'a str, width: u32, height: u32, bgr: &[u8]) -> Self {
        assert_eq!(bgr.len() as u32, width * height * 3);
        Entry {
            index,
            name,
            width,
            height,
            rle: splashpak::splash::rle::encode(bgr),
        }
    }
}

fn align_up(pos: u64) -> u64 {
    pos.div_ceil(ALIGNMENT) * ALIGNMENT
}

/// Container bytes with every slot laid out back to back on 4096 boundaries.
/// Empty slots get a header named `empty<index>` and length 0.
pub fn container_bytes(entries: &[Entry<'_>]) -> Vec<u8> {
    let mut headers: Vec<Header> = (0..MAX_OFFSETS)
        .map(|i| {
            let mut h = Header::zeroed();
            h.magic = MAGIC;
            h.special = 1;
            h.set_name(&format!("empty{i}"));
            h
        })
        .collect();
    let mut payloads: Vec<Vec<u8>> = vec![Vec::new(); MAX_OFFSETS];

    for e in entries {
        let h = &mut headers[e.index];
        h.width = e.width;
        h.height = e.height;
        h.length = e.rle.len() as u32;
        assert!(h.set_name(e.name));
        h.metadata[..4].copy_from_slice(b"META");
        payloads[e.index] = e.rle.clone();
    }

    let mut offsets = [0u32; MAX_OFFSETS];
    let mut cursor = 0u64;
    for (slot, payload) in offsets.iter_mut().zip(&payloads) {
        *slot = cursor as u32;
        cursor = align_up(cursor + (HEADER_SIZE + payload.len()) as u64);
    }
    headers[0].offsets = offsets;

    let mut out = Vec::new();
    for (index, h) in headers.iter().enumerate() {
        out.resize(offsets[index] as usize, 0);
        write_header(&mut out, h).unwrap();
        out.extend_from_slice(&payloads[index]);
    }
    out.resize(cursor as usize, 0);
    out
}

pub fn write_container(dir: &Path, file: &str, entries: &[Entry<'_>]) -> PathBuf {
    let path = dir.join(file);
    std::fs::write(&path, container_bytes(entries)).unwrap();
    path
}

/// Read a PNG back into (rgb, width, height).
pub fn read_png(path: &Path) -> (Vec<u8>, u32, u32) {
    use splashpak::splash::{ImageCodec, PngCodec};
    let img = PngCodec.decode(&std::fs::read(path).unwrap()).unwrap();
    (img.data, img.width, img.height)
}

pub fn write_png(path: &Path, rgb: &[u8], width: u32, height: u32) {
    use splashpak::splash::{ImageCodec, PngCodec};
    std::fs::write(path, PngCodec.encode(rgb, width, height).unwrap()).unwrap();
}

/// Small deterministic BGR gradient.
pub fn gradient(width: u32, height: u32, seed: u8) -> Vec<u8> {
    (0..width * height * 3)
        .map(|i| (i as u8 / 5).wrapping_mul(3).wrapping_add(seed))
        .collect()
}
