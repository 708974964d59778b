/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In memory png files shared by the integration tests
#![allow(dead_code)]

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Text chunks of the PngSuite `ct1n0g04.png` image, in file order
pub const SUITE_TEXTS: [(&str, &str); 6] = [
    ("Title", "PngSuite"),
    ("Author", "Willem A.J. van Schaik\n(willem@schaik.com)"),
    ("Copyright", "Copyright Willem van Schaik, Singapore 1995-96"),
    (
        "Description",
        "A compilation of a set of images created to test the\nvarious color-types of the PNG format."
    ),
    ("Software", "Created on a NeXTstation color using \"pnmtopng\"."),
    ("Disclaimer", "Freeware.")
];

/// Chunk tags of [`suite_file`], in file order
pub const SUITE_TAGS: [&[u8; 4]; 10] = [
    b"IHDR", b"gAMA", b"tEXt", b"tEXt", b"tEXt", b"tEXt", b"tEXt", b"tEXt", b"IDAT", b"IEND"
];

/// Frame `data` as a chunk: length, tag, data and a correct crc
pub fn chunk(tag: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(tag);
    hasher.update(data);

    let mut out = Vec::with_capacity(data.len() + 12);
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&hasher.finalize().to_be_bytes());
    out
}

/// A signature followed by the given chunks
pub fn png_file(chunks: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let mut out = PNG_SIGNATURE.to_vec();

    for (tag, data) in chunks {
        out.extend_from_slice(&chunk(tag, data));
    }
    out
}

/// IHDR payload for a non interlaced image
pub fn ihdr_data(width: u32, height: u32, depth: u8, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[depth, color_type, 0, 0, 0]);
    data
}

pub fn text_data(keyword: &str, text: &str) -> Vec<u8> {
    let mut data = keyword.as_bytes().to_vec();
    data.push(0);
    data.extend_from_slice(text.as_bytes());
    data
}

/// A file laid out like PngSuite's `ct1n0g04.png`
///
/// A 32x32 four bit grayscale header, a gamma chunk, six text chunks,
/// one data chunk and the trailer.
pub fn suite_file() -> Vec<u8> {
    let mut chunks = vec![
        (b"IHDR", ihdr_data(32, 32, 4, 0)),
        (b"gAMA", 100_000_u32.to_be_bytes().to_vec()),
    ];
    for (keyword, text) in SUITE_TEXTS {
        chunks.push((b"tEXt", text_data(keyword, text)));
    }
    // not a valid zlib stream, nothing here inflates it
    chunks.push((b"IDAT", (0..=255_u8).cycle().take(300).collect()));
    chunks.push((b"IEND", Vec::new()));

    png_file(&chunks)
}
