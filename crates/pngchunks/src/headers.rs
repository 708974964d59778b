/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use pngchunks_core::bytestream::PositionedReader;
use pngchunks_core::log::info;

use crate::decoder::{ImageHeader, PaletteEntry, TextChunk};
use crate::error::PngChunkErrors;
use crate::extractor::ChunkRecord;

/// Longest keyword a tEXt chunk may carry
const MAX_KEYWORD_LENGTH: usize = 79;

pub(crate) fn parse_ihdr(chunk: &ChunkRecord) -> Result<ImageHeader, PngChunkErrors>
{
    if chunk.length() != 13
    {
        return Err(PngChunkErrors::MalformedChunkOwned(
            chunk.chunk_type(),
            format!("IHDR length must be 13 bytes, found {}", chunk.length())
        ));
    }

    let mut stream = PositionedReader::new(chunk.data());

    let header = ImageHeader {
        width:              stream.get_u32_be_err()?,
        height:             stream.get_u32_be_err()?,
        bit_depth:          stream.get_u8_err()?,
        color_type:         stream.get_u8_err()?,
        compression_method: stream.get_u8_err()?,
        filter_method:      stream.get_u8_err()?,
        interlace_method:   stream.get_u8_err()?
    };

    info!("Width: {}", header.width);
    info!("Height: {}", header.height);
    info!("Depth: {}", header.bit_depth);
    info!("Color type: {}", header.color_type);
    info!("Interlace: {}", header.interlace_method);

    Ok(header)
}

pub(crate) fn parse_plte(chunk: &ChunkRecord) -> Result<Vec<PaletteEntry>, PngChunkErrors>
{
    if chunk.length() % 3 != 0
    {
        return Err(PngChunkErrors::MalformedChunkOwned(
            chunk.chunk_type(),
            format!(
                "PLTE length must be a multiple of 3, found {}",
                chunk.length()
            )
        ));
    }

    let palette = chunk
        .data()
        .chunks_exact(3)
        .map(|pal_chunk| PaletteEntry {
            red:   pal_chunk[0],
            green: pal_chunk[1],
            blue:  pal_chunk[2]
        })
        .collect();

    Ok(palette)
}

/// Map each byte to the char with the same code point
fn latin1_to_string(bytes: &[u8]) -> String
{
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

pub(crate) fn parse_text(chunk: &ChunkRecord) -> Result<TextChunk, PngChunkErrors>
{
    // Keyword:        1-79 bytes (character string)
    // Null separator: 1 byte
    // Text:           n bytes (character string)
    let data = chunk.data();

    let null_pos = data.iter().position(|&byte| byte == 0).ok_or(
        PngChunkErrors::MalformedChunk(chunk.chunk_type(), "no null separator after keyword")
    )?;

    if null_pos == 0
    {
        return Err(PngChunkErrors::MalformedChunk(
            chunk.chunk_type(),
            "keyword is empty"
        ));
    }
    if null_pos > MAX_KEYWORD_LENGTH
    {
        return Err(PngChunkErrors::MalformedChunkOwned(
            chunk.chunk_type(),
            format!("keyword is {null_pos} bytes long, at most {MAX_KEYWORD_LENGTH} are allowed")
        ));
    }

    Ok(TextChunk {
        keyword: latin1_to_string(&data[..null_pos]),
        text:    latin1_to_string(&data[null_pos + 1..])
    })
}
