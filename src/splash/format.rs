#![forbid(unsafe_code)]

use std::borrow::Cow;

/// Splash container magic, first 8 bytes of every header.
pub const MAGIC: [u8; 8] = *b"SPLASH!!";

/// Number of slots in the offset table.
pub const MAX_OFFSETS: usize = 84;

pub const NAME_SIZE: usize = 64;
pub const BLANK_SIZE: usize = 24;
pub const METADATA_SIZE: usize = 3648;

/// On-disk size of one header record.
pub const HEADER_SIZE: usize = 4096;

/// Entries in a repacked container start on this boundary.
pub const ALIGNMENT: u64 = 4096;

/// The only `special` value accepted in the top-level header.
pub const SUPPORTED_SPECIAL: u32 = 1;

/// Header record layout (little-endian):
/// - [magic 8]
/// - [blank 24]
/// - [u32 width][u32 height][u32 length][u32 special]
/// - [u32 offsets * 84]
/// - [name 64, NUL terminated]
/// - [metadata 3648]
///
/// The same record sits at offset 0 (global header) and at every
/// offset-table location (entry header). Entry 0 normally lives at offset 0,
/// so the global header doubles as its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub magic: [u8; 8],
    pub blank: [u8; BLANK_SIZE],
    pub width: u32,
    pub height: u32,
    /// Byte length of the RLE payload that follows; 0 means no image.
    pub length: u32,
    pub special: u32,
    pub offsets: [u32; MAX_OFFSETS],
    pub name: [u8; NAME_SIZE],
    pub metadata: [u8; METADATA_SIZE],
}

impl Header {
    /// All-zero record.
    pub fn zeroed() -> Self {
        Header {
            magic: [0; 8],
            blank: [0; BLANK_SIZE],
            width: 0,
            height: 0,
            length: 0,
            special: 0,
            offsets: [0; MAX_OFFSETS],
            name: [0; NAME_SIZE],
            metadata: [0; METADATA_SIZE],
        }
    }

    /// Name up to the first NUL.
    pub fn name_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(until_nul(&self.name))
    }

    /// Metadata text up to the first NUL.
    pub fn metadata_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(until_nul(&self.metadata))
    }

    /// Store `name`, NUL padded. Returns false if it does not fit with its terminator.
    pub fn set_name(&mut self, name: &str) -> bool {
        let bytes = name.as_bytes();
        if bytes.len() >= NAME_SIZE {
            return false;
        }
        self.name = [0; NAME_SIZE];
        self.name[..bytes.len()].copy_from_slice(bytes);
        true
    }

    /// Copy every per-image field of `entry` into this global header. The
    /// offset table is left alone: the caller owns it while repacking.
    pub fn mirror_entry(&mut self, entry: &Header) {
        self.magic = entry.magic;
        self.blank = entry.blank;
        self.width = entry.width;
        self.height = entry.height;
        self.length = entry.length;
        self.special = entry.special;
        self.name = entry.name;
        self.metadata = entry.metadata;
    }

    /// Pixel bytes an entry of this size decodes to.
    pub fn raw_len(&self) -> u64 {
        self.width as u64 * self.height as u64 * 3
    }
}

fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// Public view of one offset-table slot (for listings and inspectors).
#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub index: usize,
    pub offset: u32,
    pub width: u32,
    pub height: u32,
    pub length: u32,
    pub special: u32,
    pub name: String,
    pub metadata: String,
    /// Blake3 hash (hex) of the RLE payload; `None` for empty slots.
    pub payload_hash_hex: Option<String>,
}
