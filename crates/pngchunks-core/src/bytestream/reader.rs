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
use core::fmt::{Debug, Display, Formatter};

use crate::bytestream::ByteSource;
use crate::log::trace;

pub(crate) mod slice_readers;
pub(crate) mod std_readers;

/// Largest single request made to the underlying source when
/// reading a caller sized buffer.
///
/// A length field read from a damaged file may claim gigabytes, growing the
/// output in steps means a truncated source fails before we allocate all of it.
const MAX_READ_STEP: usize = 1 << 16;

/// Enumeration of possible methods to seek within a [`PositionedReader`].
///
/// It is analogous to the [SeekFrom](std::io::SeekFrom) in the std library but
/// only moves the reader's cursor, the source is never touched by a seek.
#[derive(Copy, PartialEq, Eq, Clone, Debug)]
pub enum SeekOrigin {
    /// Sets the cursor to the provided number of bytes.
    Start(u64),

    /// Sets the cursor to the current position plus the specified number of
    /// bytes.
    ///
    /// It is possible to seek beyond the end of a source, but it's an error to
    /// seek before byte 0.
    Current(i64)
}

pub enum ByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    TryFromIntError(core::num::TryFromIntError),
    // requested, read
    NotEnoughBytes(usize, usize),
    SeekError(String)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ByteIoError::StdIoError(err) => {
                write!(f, "Underlying I/O error {err}")
            }
            ByteIoError::TryFromIntError(err) => {
                write!(f, "Cannot convert to int {err}")
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                write!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::SeekError(err) => {
                write!(f, "Seek error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ByteIoError::StdIoError(err) => Some(err),
            ByteIoError::TryFromIntError(err) => Some(err),
            _ => None
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<core::num::TryFromIntError> for ByteIoError {
    fn from(value: core::num::TryFromIntError) -> Self {
        ByteIoError::TryFromIntError(value)
    }
}

/// A reader keeping a single cursor over a random access [`ByteSource`]
///
/// Every read starts at the cursor and moves it forward by the number of bytes
/// the source actually returned, seeks move the cursor without reading.
pub struct PositionedReader<T: ByteSource> {
    inner:    T,
    position: u64
}

impl<T: ByteSource> PositionedReader<T> {
    /// Create a reader whose cursor points to the first byte of `source`
    pub fn new(source: T) -> PositionedReader<T> {
        PositionedReader {
            inner:    source,
            position: 0
        }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were reading
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    /// Return a reference to the underlying source
    #[inline(always)]
    pub const fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Return the current position of the cursor.
    #[inline(always)]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Move the cursor, returning its new position
    ///
    /// # Errors
    /// Seeking before the start of the source or past `u64::MAX` is a misuse
    /// of the reader and is reported as a seek error, the cursor is left untouched
    pub fn seek(&mut self, from: SeekOrigin) -> Result<u64, ByteIoError> {
        match from {
            SeekOrigin::Start(position) => {
                self.position = position;
            }
            SeekOrigin::Current(delta) => {
                self.position = self.position.checked_add_signed(delta).ok_or_else(|| {
                    ByteIoError::SeekError(format!(
                        "cannot move cursor at {} by {} bytes",
                        self.position, delta
                    ))
                })?;
            }
        }
        Ok(self.position)
    }

    /// Skip `num` bytes without reading them
    #[inline]
    pub fn skip(&mut self, num: u64) -> Result<u64, ByteIoError> {
        trace!("Skipping {} bytes from position {}", num, self.position);
        let delta = i64::try_from(num)?;
        self.seek(SeekOrigin::Current(delta))
    }

    /// Move the cursor `num` bytes backwards
    #[inline]
    pub fn rewind(&mut self, num: u64) -> Result<u64, ByteIoError> {
        let delta = i64::try_from(num)?;
        self.seek(SeekOrigin::Current(-delta))
    }

    /// Fill `buf` with bytes starting at the cursor.
    ///
    /// The cursor advances by the number of bytes the source returned, even when
    /// that number falls short of `buf.len()`.
    ///
    /// # Errors
    /// - `NotEnoughBytes(requested, read)` if the source ended before `buf` was full.
    /// - Any error returned by the source.
    pub fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let bytes_read = self.inner.read_at(self.position, buf)?;
        self.position += bytes_read as u64;

        if bytes_read != buf.len() {
            return Err(ByteIoError::NotEnoughBytes(buf.len(), bytes_read));
        }
        Ok(())
    }

    /// Read exactly `length` bytes into a new vector.
    ///
    /// See [`read_exact_into`](Self::read_exact_into) for cursor and error semantics,
    /// the `read` count reported on a short read covers everything consumed by this call.
    pub fn read_exact(&mut self, length: usize) -> Result<Vec<u8>, ByteIoError> {
        let mut out = Vec::with_capacity(length.min(MAX_READ_STEP));

        while out.len() < length {
            let start = out.len();
            let step = (length - start).min(MAX_READ_STEP);

            out.resize(start + step, 0);

            let bytes_read = self.inner.read_at(self.position, &mut out[start..])?;
            self.position += bytes_read as u64;

            if bytes_read != step {
                return Err(ByteIoError::NotEnoughBytes(length, start + bytes_read));
            }
        }
        Ok(out)
    }

    /// Read `N` bytes into an array or return an error if the source ends first
    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.read_exact_into(&mut byte_store)?;
        Ok(byte_store)
    }
}

macro_rules! get_single_type {
    ($name:tt,$int_type:tt) => {
        impl<T: ByteSource> PositionedReader<T>
        {
            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying source cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$int_type, ByteIoError>
            {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let space = self.read_fixed_bytes_or_error::<SIZE_OF_VAL>()?;

                Ok($int_type::from_be_bytes(space))
            }
        }
    };
}

get_single_type!(get_u32_be_err, u32);
get_single_type!(get_i32_be_err, i32);

impl<T: ByteSource> PositionedReader<T> {
    /// Read a single byte or return an error if the source ended
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        let [byte] = self.read_fixed_bytes_or_error::<1>()?;
        Ok(byte)
    }
}
