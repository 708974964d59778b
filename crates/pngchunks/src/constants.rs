/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Signature and chunk tags of the png container
#![allow(non_upper_case_globals)]

use crate::enums::ChunkTag;

/// The eight bytes every png file starts with
///
/// See <https://www.w3.org/TR/2003/REC-PNG-20031110/#5PNG-file-signature>
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Size of the crc trailing a chunk's data
pub const CHUNK_CRC_SIZE: u64 = 4;

// -- Critical chunks --

/// Image header
pub const IHDR: ChunkTag = ChunkTag::new(*b"IHDR");
/// Palette
pub const PLTE: ChunkTag = ChunkTag::new(*b"PLTE");
/// Image data
pub const IDAT: ChunkTag = ChunkTag::new(*b"IDAT");
/// Image trailer, the last chunk of every png
pub const IEND: ChunkTag = ChunkTag::new(*b"IEND");

// -- Ancillary chunks --

/// Textual data
pub const tEXt: ChunkTag = ChunkTag::new(*b"tEXt");
