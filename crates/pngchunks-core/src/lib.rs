/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the pngchunks crates
//!
//! This crate provides the I/O layer the chunk extractor sits on
//!
//! It currently contains
//!
//! - A [`ByteSource`](bytestream::ByteSource) trait for random access byte sources,
//!   implemented for slices, vectors and (with `std`) readers and files.
//! - A [`PositionedReader`](bytestream::PositionedReader) that keeps a single cursor
//!   over such a source and offers exact, endian aware reads.
//! - Logging macros that forward to the `log` crate or compile to nothing.
//!
//! This library is `#[no_std]` with `alloc` needed for the `Vec`s returned
//! by exact reads.
//!
//! # Features
//!  - `std`: Implements byte sources for `std::io` readers and `std::fs::File`.
//!
//!  - `log`: Forwards the logging macros to the `log` facade.
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod log;
