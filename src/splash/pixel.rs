#![forbid(unsafe_code)]

/// Swap the first and third byte of every 3-byte pixel (RGB <-> BGR).
///
/// Buffers whose length is not a multiple of 3 are left untouched.
pub fn swap_channels(buf: &mut [u8]) {
    if buf.len() % 3 != 0 {
        return;
    }
    for px in buf.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
}
