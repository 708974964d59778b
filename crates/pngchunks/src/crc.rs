/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Crc checks for extracted chunks
#![cfg(feature = "crc")]

use crate::error::PngChunkErrors;
use crate::extractor::ChunkRecord;

/// Compute the crc of a record from its chunk type and data
///
/// The result uses the same signed representation as [`ChunkRecord::crc`]
/// so the two can be compared directly.
pub fn calculate_crc(record: &ChunkRecord) -> i32
{
    let mut hasher = crc32fast::Hasher::new();

    hasher.update(record.chunk_type().as_bytes());
    hasher.update(record.data());

    hasher.finalize() as i32
}

/// Check that the crc stored in the file matches the one computed
/// from the record's chunk type and data
///
/// # Errors
/// [`BadCrc`](PngChunkErrors::BadCrc) with the stored value as `expected`
/// and the computed one as `found`
pub fn verify_crc(record: &ChunkRecord) -> Result<(), PngChunkErrors>
{
    let found = calculate_crc(record);

    if found != record.crc()
    {
        return Err(PngChunkErrors::BadCrc {
            expected: record.crc(),
            found
        });
    }
    Ok(())
}
