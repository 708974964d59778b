/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "std")]

use std::fs::File;
use std::io::{BufReader, Cursor, ErrorKind, Read, Seek, SeekFrom};

use crate::bytestream::{ByteIoError, ByteSource};

/// Seek `reader` to `offset` then read until `buf` is full or the reader is exhausted
fn read_at_std<R: Read + Seek>(
    reader: &mut R, offset: u64, buf: &mut [u8]
) -> Result<usize, ByteIoError> {
    reader.seek(SeekFrom::Start(offset))?;

    let mut bytes_read = 0;

    while bytes_read < buf.len() {
        match reader.read(&mut buf[bytes_read..]) {
            Ok(0) => break,
            Ok(n) => bytes_read += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ByteIoError::from(e))
        }
    }
    Ok(bytes_read)
}

impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    #[inline(always)]
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        read_at_std(self, offset, buf)
    }

    fn name(&self) -> &'static str {
        "Cursor<T>"
    }
}

impl<T: Read + Seek> ByteSource for BufReader<T> {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        // a relative seek keeps the buffered bytes around, an absolute one drops them
        let current = self.stream_position()?;

        if current != offset {
            let delta = i64::try_from(offset)? - i64::try_from(current)?;
            self.seek_relative(delta)?;
        }

        let mut bytes_read = 0;

        while bytes_read < buf.len() {
            match self.read(&mut buf[bytes_read..]) {
                Ok(0) => break,
                Ok(n) => bytes_read += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ByteIoError::from(e))
            }
        }
        Ok(bytes_read)
    }

    fn name(&self) -> &'static str {
        "BufReader<T>"
    }
}

impl ByteSource for File {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        read_at_std(self, offset, buf)
    }

    fn name(&self) -> &'static str {
        "File"
    }
}
