/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
use alloc::vec::Vec;

use crate::enums::PngChunkType;
use crate::error::PngChunkErrors;
use crate::extractor::ChunkRecord;
use crate::headers::{parse_ihdr, parse_plte, parse_text};

/// Contents of an `IHDR` chunk
///
/// Values are reported as stored, none of them is validated
/// against the combinations the png standard allows.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImageHeader
{
    pub width:              u32,
    pub height:             u32,
    pub bit_depth:          u8,
    pub color_type:         u8,
    pub compression_method: u8,
    pub filter_method:      u8,
    pub interlace_method:   u8
}

/// A single `PLTE` entry
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaletteEntry
{
    pub red:   u8,
    pub green: u8,
    pub blue:  u8
}

impl PaletteEntry
{
    /// Return the entry as `[red, green, blue]`
    pub const fn to_array(self) -> [u8; 3]
    {
        [self.red, self.green, self.blue]
    }
}

impl From<PaletteEntry> for [u8; 3]
{
    fn from(value: PaletteEntry) -> Self
    {
        value.to_array()
    }
}

/// Contents of a `tEXt` chunk
///
/// Both strings are decoded as ISO 8859-1 (Latin-1), the
/// character set the png standard prescribes for them.
///
/// ASCII text comes out the same as with a UTF-8 decoder, other bytes do not.
/// Each byte becomes one `char`, so text written as UTF-8 shows up
/// with one character per encoded byte, `C3 A9` reads as `"\u{c3}\u{a9}"`
/// rather than `"\u{e9}"`. Use [`core::str::from_utf8`] on the raw chunk data
/// when a writer is known to emit UTF-8.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextChunk
{
    pub keyword: String,
    pub text:    String
}

/// The decoded payload of a chunk
///
/// Tags without a dedicated decoder end up as [`Opaque`](DecodedPayload::Opaque).
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DecodedPayload
{
    /// `IHDR`
    Header(ImageHeader),
    /// `PLTE`, entries in file order
    Palette(Vec<PaletteEntry>),
    /// `IDAT`, still compressed.
    ///
    /// Images usually split their data over several such chunks,
    /// concatenate them in file order before inflating.
    ImageData(Vec<u8>),
    /// `IEND`
    Trailer,
    /// `tEXt`
    Text(TextChunk),
    /// Any other chunk, carries the raw data
    Opaque(Vec<u8>)
}

/// Decode the payload of a chunk according to its type
///
/// This performs no I/O and keeps no state, records can be
/// decoded in any order and from any thread.
///
/// # Errors
/// [`MalformedChunk`](PngChunkErrors::MalformedChunk) if the payload does
/// not have the layout its type requires:
/// - `IHDR` data that is not exactly 13 bytes
/// - `PLTE` data whose length is not a multiple of 3
/// - `tEXt` data without a null separator, or with a keyword
///   that is empty or longer than 79 bytes
///
/// Other chunk types never fail, `IEND` data is ignored.
///
/// # Example
/// ```
/// use pngchunks::{decode, ChunkRecord, ChunkTag, DecodedPayload};
///
/// let record = ChunkRecord::new(33, ChunkTag::new(*b"tEXt"), b"Title\0PngSuite".to_vec(), 0).unwrap();
///
/// match decode(&record).unwrap() {
///     DecodedPayload::Text(text) => {
///         assert_eq!(text.keyword, "Title");
///         assert_eq!(text.text, "PngSuite");
///     }
///     _ => unreachable!()
/// }
/// ```
pub fn decode(record: &ChunkRecord) -> Result<DecodedPayload, PngChunkErrors>
{
    match PngChunkType::from_tag(record.chunk_type())
    {
        PngChunkType::IHDR => parse_ihdr(record).map(DecodedPayload::Header),
        PngChunkType::PLTE => parse_plte(record).map(DecodedPayload::Palette),
        PngChunkType::IDAT => Ok(DecodedPayload::ImageData(record.data().to_vec())),
        PngChunkType::IEND => Ok(DecodedPayload::Trailer),
        PngChunkType::tEXt => parse_text(record).map(DecodedPayload::Text),
        PngChunkType::unkn => Ok(DecodedPayload::Opaque(record.data().to_vec()))
    }
}
