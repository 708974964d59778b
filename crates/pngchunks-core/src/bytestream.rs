/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A positioned reader over random access byte sources
//!
//! The [`ByteSource`] trait is the only thing a decoder needs from
//! whatever holds the bytes, it reads at absolute offsets and keeps no cursor.
//!
//! [`PositionedReader`] layers sequential semantics on top, keeping the one cursor
//! every read and seek moves.
pub use reader::{ByteIoError, PositionedReader, SeekOrigin};
pub use traits::ByteSource;

mod reader;
mod traits;
