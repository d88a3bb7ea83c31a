#![forbid(unsafe_code)]

//! Byte run-length codec used for splash payloads.
//!
//! The stream is a flat list of `[value][count]` pairs. `count` is a single
//! byte, so runs longer than 255 are split. There are no escape codes.

/// Encode `raw` as `(value, count)` pairs, one per maximal run, counts in `1..=255`.
pub fn encode(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut bytes = raw.iter().copied();
    let Some(mut last) = bytes.next() else {
        return out;
    };
    let mut count: u8 = 1;

    for b in bytes {
        if b == last && count < u8::MAX {
            count += 1;
            continue;
        }
        out.push(last);
        out.push(count);
        last = b;
        count = 1;
    }
    out.push(last);
    out.push(count);
    out
}

/// Expand `(value, count)` pairs. A trailing unpaired byte is ignored.
pub fn decode(rle: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(decoded_len(rle));
    for pair in rle.chunks_exact(2) {
        out.resize(out.len() + pair[1] as usize, pair[0]);
    }
    out
}

/// Length `decode(rle)` would produce.
pub fn decoded_len(rle: &[u8]) -> usize {
    rle.chunks_exact(2).map(|pair| pair[1] as usize).sum()
}
