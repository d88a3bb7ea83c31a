#![forbid(unsafe_code)]

use std::io::{Read, Write};

use crate::splash::error::{SplashError, SplashResult};
use crate::splash::format::ALIGNMENT;

pub fn write_u32(w: &mut dyn Write, v: u32) -> SplashResult<()> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

pub fn read_exact<const N: usize>(r: &mut dyn Read) -> SplashResult<[u8; N]> {
    let mut buf = [0u8; N];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

pub fn read_u32(r: &mut dyn Read) -> SplashResult<u32> {
    Ok(u32::from_le_bytes(read_exact::<4>(r)?))
}

/// Write `n` zero bytes.
pub fn write_padding(w: &mut dyn Write, n: u64) -> SplashResult<()> {
    const ZEROS: [u8; 4096] = [0; 4096];
    let mut left = n;
    while left > 0 {
        let chunk = left.min(ZEROS.len() as u64) as usize;
        w.write_all(&ZEROS[..chunk])?;
        left -= chunk as u64;
    }
    Ok(())
}

/// Round `pos` up to the next entry boundary.
pub fn align_up(pos: u64) -> u64 {
    pos.div_ceil(ALIGNMENT) * ALIGNMENT
}

/// Narrow a file position to an offset-table value.
pub fn to_offset(pos: u64) -> SplashResult<u32> {
    u32::try_from(pos).map_err(|_| {
        SplashError::Unsupported(format!("offset {pos:#x} does not fit the 32-bit offset table"))
    })
}

pub fn hex32(v: &[u8; 32]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = [0u8; 64];
    for (i, b) in v.iter().copied().enumerate() {
        out[i * 2] = HEX[(b >> 4) as usize];
        out[i * 2 + 1] = HEX[(b & 0xF) as usize];
    }
    String::from_utf8_lossy(&out).into_owned()
}
