/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading bytes in pngchunks
//!
//! This exposes the trait implemented by sources that the
//! [`PositionedReader`](crate::bytestream::PositionedReader) can read from.

use crate::bytestream::reader::ByteIoError;

/// The de-facto input trait implemented for byte sources.
///
/// A source answers reads at absolute offsets and does not track
/// a position of its own, the cursor lives in
/// [`PositionedReader`](crate::bytestream::PositionedReader).
///
/// # Considerations
///
/// Implementations exist for `&[u8]` and `Vec<u8>` in all configurations, and with the
/// `std` feature for [`Cursor`](std::io::Cursor), [`BufReader`](std::io::BufReader) and
/// [`File`](std::fs::File). Readers backed by the `std::io` traits seek before every read,
/// so wrap files in a `BufReader` when reading many small fields.
pub trait ByteSource {
    /// Read bytes starting at `offset` into `buf` returning how many bytes were read
    ///
    /// Fewer bytes than `buf.len()` are only returned when the source ends
    /// before `buf` could be filled, reading past the end returns `Ok(0)`.
    ///
    /// ## Arguments
    /// - `offset`: Absolute position in the source of the first byte to read
    /// - `buf`: The buffer to fill with bytes
    ///
    /// ## Returns
    ///  - `Ok(usize)` - Actual bytes read into the buffer
    ///  - `Err()` - The error encountered when reading bytes for which we couldn't recover
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, ByteIoError>;

    /// A human readable name of the source, used in logs
    fn name(&self) -> &'static str;
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    #[inline(always)]
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        (**self).read_at(offset, buf)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
