/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when extracting and decoding chunks
use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

use pngchunks_core::bytestream::ByteIoError;

use crate::enums::ChunkTag;

/// Errors returned by the chunk extractor and the payload decoder
///
/// Extraction errors (`BadSignature`, `ShortRead`, `SeekError`, `IoError`)
/// end the whole extraction. `MalformedChunk` errors only come from
/// [`decode`](crate::decode) and concern the single record passed to it.
pub enum PngChunkErrors
{
    /// The first eight bytes are not the png signature, carries the bytes found
    BadSignature([u8; 8]),
    /// The source ended before a requested read could be satisfied.
    ///
    /// This is also what a file without an `IEND` chunk produces, the
    /// extractor keeps asking for a chunk header after the last chunk.
    ShortRead { expected: usize, found: usize },
    /// A chunk's payload does not have the layout its type requires
    MalformedChunk(ChunkTag, &'static str),
    MalformedChunkOwned(ChunkTag, String),
    /// The reader's cursor was moved to an impossible position
    SeekError(String),
    /// The byte source failed for a reason other than running out of bytes
    IoError(ByteIoError),
    /// The stored crc does not match the one computed from the chunk tag and data
    BadCrc { expected: i32, found: i32 }
}

impl PngChunkErrors
{
    /// Return true if the error means the source ended too early
    pub const fn is_truncated(&self) -> bool
    {
        matches!(self, Self::ShortRead { .. })
    }
}

impl Debug for PngChunkErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        match self
        {
            Self::BadSignature(found) =>
            {
                write!(f, "Bad PNG signature, not a png. Found bytes {found:02X?}")
            }
            Self::ShortRead { expected, found } => write!(
                f,
                "Truncated stream, expected {expected} bytes but only {found} were available"
            ),
            Self::MalformedChunk(tag, reason) => write!(f, "Malformed {tag} chunk: {reason}"),
            Self::MalformedChunkOwned(tag, reason) =>
            {
                write!(f, "Malformed {tag} chunk: {reason}")
            }
            Self::SeekError(reason) => write!(f, "Invalid seek: {reason}"),
            Self::IoError(err) => write!(f, "I/O error: {err:?}"),
            Self::BadCrc { expected, found } => write!(
                f,
                "CRC does not match, expected {expected} but found {found}",
            )
        }
    }
}

impl Display for PngChunkErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        Debug::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PngChunkErrors
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)>
    {
        match self
        {
            Self::IoError(err) => Some(err),
            _ => None
        }
    }
}

impl From<ByteIoError> for PngChunkErrors
{
    fn from(value: ByteIoError) -> Self
    {
        match value
        {
            ByteIoError::NotEnoughBytes(expected, found) => Self::ShortRead { expected, found },
            ByteIoError::SeekError(reason) => Self::SeekError(reason),
            err => Self::IoError(err)
        }
    }
}

#[cfg(test)]
mod tests
{
    use pngchunks_core::bytestream::{PositionedReader, SeekOrigin};

    use super::*;

    #[test]
    fn byte_errors_convert()
    {
        let data: &[u8] = &[1, 2];
        let mut reader = PositionedReader::new(data);

        let seek_err = PngChunkErrors::from(reader.seek(SeekOrigin::Current(-1)).unwrap_err());
        assert!(matches!(seek_err, PngChunkErrors::SeekError(_)));
        assert!(!seek_err.is_truncated());

        let short_err = PngChunkErrors::from(reader.get_u32_be_err().unwrap_err());
        assert!(matches!(
            short_err,
            PngChunkErrors::ShortRead { expected: 4, found: 2 }
        ));
        assert!(short_err.is_truncated());
    }
}
