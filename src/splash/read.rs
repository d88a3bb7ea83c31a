#![forbid(unsafe_code)]

use std::io::Cursor;
use std::path::Path;

use log::debug;

use crate::splash::error::{SplashError, SplashResult};
use crate::splash::format::{
    Header, BLANK_SIZE, HEADER_SIZE, MAGIC, MAX_OFFSETS, METADATA_SIZE, NAME_SIZE,
    SUPPORTED_SPECIAL,
};
use crate::splash::io::{read_exact, read_u32};

impl Header {
    /// Decode one header record from the start of `buf`.
    pub fn parse(buf: &[u8]) -> SplashResult<Header> {
        if buf.len() < HEADER_SIZE {
            return Err(SplashError::InvalidFormat(format!(
                "header needs {HEADER_SIZE} bytes, got {}",
                buf.len()
            )));
        }
        let mut cur = Cursor::new(&buf[..HEADER_SIZE]);

        let magic = read_exact::<8>(&mut cur)?;
        let blank = read_exact::<BLANK_SIZE>(&mut cur)?;
        let width = read_u32(&mut cur)?;
        let height = read_u32(&mut cur)?;
        let length = read_u32(&mut cur)?;
        let special = read_u32(&mut cur)?;

        let mut offsets = [0u32; MAX_OFFSETS];
        for slot in offsets.iter_mut() {
            *slot = read_u32(&mut cur)?;
        }

        let name = read_exact::<NAME_SIZE>(&mut cur)?;
        let metadata = read_exact::<METADATA_SIZE>(&mut cur)?;

        Ok(Header {
            magic,
            blank,
            width,
            height,
            length,
            special,
            offsets,
            name,
            metadata,
        })
    }
}

/// A splash container loaded into memory, with its validated global header.
#[derive(Debug, Clone)]
pub struct Container {
    data: Vec<u8>,
    header: Header,
}

impl Container {
    pub fn open(path: &Path) -> SplashResult<Container> {
        let data = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SplashError::NotFound(path.to_path_buf()),
            _ => SplashError::Io(e),
        })?;
        debug!("read {} ({} bytes)", path.display(), data.len());
        Container::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> SplashResult<Container> {
        if data.len() < MAGIC.len() || data[..MAGIC.len()] != MAGIC {
            return Err(SplashError::InvalidFormat("bad header magic".into()));
        }
        if data.len() < HEADER_SIZE {
            return Err(SplashError::InvalidFormat("file too small".into()));
        }

        let header = Header::parse(&data)?;
        if header.special != SUPPORTED_SPECIAL {
            return Err(SplashError::Unsupported(format!(
                "special flag {} (expected {SUPPORTED_SPECIAL})",
                header.special
            )));
        }

        Ok(Container { data, header })
    }

    /// The global header at offset 0.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Container size in bytes.
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Header stored at `offsets[index]` of the global table.
    pub fn entry_header(&self, index: usize) -> SplashResult<Header> {
        let start = self.entry_offset(index)? as usize;
        let end = start.checked_add(HEADER_SIZE);
        match end {
            Some(end) if end <= self.data.len() => Header::parse(&self.data[start..end]),
            _ => Err(SplashError::InvalidFormat(format!(
                "entry {index} header at {start:#x} is outside the file"
            ))),
        }
    }

    /// The `header.length` payload bytes that follow entry `index`'s header.
    pub fn entry_payload(&self, index: usize, header: &Header) -> SplashResult<&[u8]> {
        let start = self.entry_offset(index)? as usize + HEADER_SIZE;
        let end = start.checked_add(header.length as usize);
        match end {
            Some(end) if end <= self.data.len() => Ok(&self.data[start..end]),
            _ => Err(SplashError::InvalidFormat(format!(
                "entry {index} payload of {} bytes at {start:#x} is outside the file",
                header.length
            ))),
        }
    }

    pub fn entry_offset(&self, index: usize) -> SplashResult<u32> {
        self.header.offsets.get(index).copied().ok_or_else(|| {
            SplashError::InvalidArgument(format!(
                "entry index {index} out of range (max {})",
                MAX_OFFSETS - 1
            ))
        })
    }
}
