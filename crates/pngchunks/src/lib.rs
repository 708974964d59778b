/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A png chunk reader
//!
//! This splits a png file into its chunks and decodes the payloads of
//! the handful of chunk types most tools care about. It does not inflate
//! or unfilter image data, it only gives access to what the container holds.
//!
//! # Features
//! - Works on anything implementing [`ByteSource`](pngchunks_core::bytestream::ByteSource),
//!   slices and vectors always, files and `std::io` readers with the `std` feature.
//! - Filtered chunks are skipped without reading their data.
//! - `no_std` support, `alloc` is required.
//!
//! # Usage
//! Add the library to `Cargo.toml`
//!
//! ```toml
//! pngchunks="0.1"
//! ```
//!
//! #### Extract every chunk
//!
//! Extraction stops after the `IEND` chunk, anything after it is never read.
//!
//!```no_run
//! use pngchunks::{extract, ExtractOptions};
//!
//! let data = std::fs::read("image.png").unwrap();
//! let chunks = extract(data.as_slice(), ExtractOptions::new()).unwrap();
//!
//! for chunk in &chunks {
//!     println!("{} at {} ({} bytes)", chunk.chunk_type(), chunk.position(), chunk.length());
//! }
//! ```
//!
//! #### Extract only some chunks
//!
//! A filter decides which chunks are read, and a limit caps how many are returned.
//!
//!```no_run
//! use pngchunks::{extract, ChunkTag, DecodedPayload, ExtractOptions, decode};
//!
//! let data = std::fs::read("image.png").unwrap();
//!
//! let text_only = |tag: ChunkTag| tag == "tEXt";
//! let options = ExtractOptions::new().set_filter(&text_only).set_max_chunks(4);
//!
//! for chunk in extract(data.as_slice(), options).unwrap() {
//!     if let Ok(DecodedPayload::Text(text)) = decode(&chunk) {
//!         println!("{}: {}", text.keyword, text.text);
//!     }
//! }
//! ```
//!
//! # Crc values
//!
//! Extraction reports the stored crc of each chunk but never checks it.
//! With the `crc` feature, [`verify_crc`] compares it against the chunk contents.
//!
//! # Alternatives
//! - [png](https://crates.io/crates/png) crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[cfg(feature = "crc")]
pub use crc::{calculate_crc, verify_crc};
pub use decoder::{decode, DecodedPayload, ImageHeader, PaletteEntry, TextChunk};
pub use enums::ChunkTag;
pub use extractor::{extract, ChunkExtractor, ChunkRecord};
pub use options::{ChunkFilter, ExtractOptions};
pub use pngchunks_core;

pub mod constants;
mod crc;
mod decoder;
mod enums;
pub mod error;
mod extractor;
mod headers;
mod options;
mod serde;
