/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use pngchunks_core::bytestream::{ByteSource, PositionedReader};
use pngchunks_core::log::{debug, trace};

use crate::constants::{CHUNK_CRC_SIZE, IEND, PNG_SIGNATURE};
use crate::enums::ChunkTag;
use crate::error::PngChunkErrors;
use crate::options::ExtractOptions;

/// A single chunk as read from the file
///
/// Records are created by the extractor and read only afterwards.
/// The data is a copy, it does not borrow from the source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChunkRecord
{
    position:   u64,
    length:     u32,
    chunk_type: ChunkTag,
    data:       Vec<u8>,
    crc:        i32
}

impl ChunkRecord
{
    /// Build a record from its parts, the length is taken from `data`
    ///
    /// # Errors
    /// - If `data` is longer than a chunk length field can describe
    /// - If the chunk would end past `u64::MAX`, see [`end_position`](Self::end_position)
    pub fn new(
        position: u64, chunk_type: ChunkTag, data: Vec<u8>, crc: i32
    ) -> Result<ChunkRecord, PngChunkErrors>
    {
        let length = u32::try_from(data.len()).map_err(|_| {
            PngChunkErrors::MalformedChunk(chunk_type, "data longer than u32::MAX bytes")
        })?;

        if position
            .checked_add(u64::from(length) + CHUNK_CRC_SIZE)
            .is_none()
        {
            return Err(PngChunkErrors::MalformedChunk(
                chunk_type,
                "chunk ends past the largest possible offset"
            ));
        }

        Ok(ChunkRecord {
            position,
            length,
            chunk_type,
            data,
            crc
        })
    }
    /// Offset of the first data byte within the source.
    ///
    /// The length and type fields occupy the eight bytes before it.
    pub const fn position(&self) -> u64
    {
        self.position
    }
    /// Length of the chunk data as declared in the file
    pub const fn length(&self) -> u32
    {
        self.length
    }
    /// The chunk's type tag
    pub const fn chunk_type(&self) -> ChunkTag
    {
        self.chunk_type
    }
    /// The chunk data, exactly [`length`](Self::length) bytes
    pub fn data(&self) -> &[u8]
    {
        &self.data
    }
    /// The crc stored after the data, as a big endian signed integer.
    ///
    /// This is the value from the file, it is never checked against
    /// the data, see [`verify_crc`](crate::verify_crc) for that.
    pub const fn crc(&self) -> i32
    {
        self.crc
    }
    /// Offset of the first byte after this chunk's crc, which is where
    /// the next chunk's length field starts
    ///
    /// Records built by the extractor and by [`new`](Self::new) never overflow here.
    pub const fn end_position(&self) -> u64
    {
        self.position + self.length as u64 + CHUNK_CRC_SIZE
    }
    /// Destroy the record returning the data
    pub fn into_data(self) -> Vec<u8>
    {
        self.data
    }
}

/// Walks the chunks of a png file
///
/// The extractor owns a [`PositionedReader`] and moves its cursor one
/// chunk at a time, there is no rewinding, so each extractor
/// can run a single extraction. Create a new one to extract again.
///
/// # Example
/// ```
/// use pngchunks::{ChunkExtractor, ExtractOptions};
///
/// let data: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
/// let mut extractor = ChunkExtractor::new(data);
/// // a signature without chunks is a truncated file
/// let err = extractor.extract(ExtractOptions::new()).unwrap_err();
/// assert!(err.is_truncated());
/// ```
pub struct ChunkExtractor<T: ByteSource>
{
    stream: PositionedReader<T>
}

impl<T: ByteSource> ChunkExtractor<T>
{
    /// Create an extractor that reads `source` from its first byte
    pub fn new(source: T) -> ChunkExtractor<T>
    {
        ChunkExtractor::new_with_reader(PositionedReader::new(source))
    }
    /// Create an extractor that starts reading at the current
    /// position of `reader`, which must point to a png signature
    pub fn new_with_reader(reader: PositionedReader<T>) -> ChunkExtractor<T>
    {
        ChunkExtractor { stream: reader }
    }
    /// Return the current position of the underlying reader
    pub const fn position(&self) -> u64
    {
        self.stream.position()
    }
    /// Destroy the extractor returning the byte source
    pub fn consume(self) -> T
    {
        self.stream.consume()
    }

    fn read_signature(&mut self) -> Result<(), PngChunkErrors>
    {
        let signature = self.stream.read_fixed_bytes_or_error::<8>()?;

        if signature != PNG_SIGNATURE
        {
            return Err(PngChunkErrors::BadSignature(signature));
        }
        trace!("Found png signature in {}", self.stream.get_ref().name());

        Ok(())
    }

    fn read_chunk_header(&mut self) -> Result<(u32, ChunkTag), PngChunkErrors>
    {
        // Format is length - chunk type - [data] -  crc chunk
        let chunk_length = self.stream.get_u32_be_err()?;
        let chunk_type = ChunkTag::new(self.stream.read_fixed_bytes_or_error::<4>()?);

        Ok((chunk_length, chunk_type))
    }

    fn read_chunk_body(
        &mut self, length: u32, chunk_type: ChunkTag
    ) -> Result<ChunkRecord, PngChunkErrors>
    {
        let position = self.stream.position();
        let data_length = usize::try_from(length).map_err(|_| {
            PngChunkErrors::MalformedChunk(chunk_type, "chunk length does not fit in memory")
        })?;

        let data = self.stream.read_exact(data_length)?;
        let crc = self.stream.get_i32_be_err()?;

        Ok(ChunkRecord {
            position,
            length,
            chunk_type,
            data,
            crc
        })
    }

    /// Check the png signature then read chunks until `IEND`
    /// or until `options` says to stop.
    ///
    /// Chunks are returned in file order. Chunks rejected by the filter are
    /// skipped by moving the cursor past their data and crc.
    ///
    /// # Errors
    /// - [`BadSignature`](PngChunkErrors::BadSignature) if the file does not start with the png signature.
    /// - [`ShortRead`](PngChunkErrors::ShortRead) if the source ends inside a chunk or
    ///   before an `IEND` chunk was seen.
    /// - Any error of the underlying source.
    ///
    /// No chunks are returned when an error occurs.
    pub fn extract(&mut self, options: ExtractOptions) -> Result<Vec<ChunkRecord>, PngChunkErrors>
    {
        self.read_signature()?;

        let mut chunks = Vec::new();

        loop
        {
            let (length, chunk_type) = self.read_chunk_header()?;

            if options.accepts(chunk_type)
            {
                let chunk = self.read_chunk_body(length, chunk_type)?;

                trace!(
                    "Read {} chunk, {} bytes at offset {}",
                    chunk_type,
                    length,
                    chunk.position
                );
                chunks.push(chunk);

                if let Some(max_chunks) = options.get_max_chunks()
                {
                    if chunks.len() >= max_chunks
                    {
                        debug!("Reached limit of {} chunks, stopping", max_chunks);
                        break;
                    }
                }
            }
            else
            {
                trace!("Skipping {} chunk, {} bytes", chunk_type, length);
                // skip data and crc
                self.stream.skip(u64::from(length) + CHUNK_CRC_SIZE)?;
            }

            if chunk_type == IEND
            {
                debug!("Reached IEND at offset {}", self.stream.position());
                break;
            }
        }

        Ok(chunks)
    }
}

/// Extract chunks from a png byte source.
///
/// This is a shorthand for `ChunkExtractor::new(source).extract(options)`,
/// see [`ChunkExtractor::extract`] for details.
///
/// # Example
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
///
/// use pngchunks::{decode, extract, DecodedPayload, ExtractOptions};
///
/// let file = BufReader::new(File::open("image.png").unwrap());
/// let chunks = extract(file, ExtractOptions::new()).unwrap();
///
/// if let Ok(DecodedPayload::Header(header)) = decode(&chunks[0]) {
///     println!("{}x{}", header.width, header.height);
/// }
/// ```
pub fn extract<T: ByteSource>(
    source: T, options: ExtractOptions
) -> Result<Vec<ChunkRecord>, PngChunkErrors>
{
    ChunkExtractor::new(source).extract(options)
}
