//! Payload compressor — gzip, used only to size packets.
//!
//! Small inputs can come out larger than they went in (gzip adds an 18-byte
//! header and trailer), so a ratio above 1.0 is normal for short payloads.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

/// Compress `data`, returning the compressed bytes and
/// `compressed_len / original_len`. The ratio is 1.0 for empty input.
pub fn compress(data: &str) -> std::io::Result<(Vec<u8>, f64)> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data.as_bytes())?;
    let compressed = encoder.finish()?;

    let ratio = if data.is_empty() {
        1.0
    } else {
        compressed.len() as f64 / data.len() as f64
    };
    Ok((compressed, ratio))
}

/// Length of the gzip output for `data`.
pub fn compressed_len(data: &str) -> std::io::Result<usize> {
    compress(data).map(|(bytes, _)| bytes.len())
}
