/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use crate::bytestream::{ByteIoError, ByteSource};

/// Copy as many bytes as available from `data[offset..]` into `buf`
#[inline(always)]
fn read_from_slice(data: &[u8], offset: u64, buf: &mut [u8]) -> usize {
    let len = data.len();
    // offsets that do not fit a usize are past the end of any slice
    let start = usize::try_from(offset).map_or(len, |offset| offset.min(len));
    let end = start.saturating_add(buf.len()).min(len);

    buf[..end - start].copy_from_slice(&data[start..end]);

    end - start
}

impl ByteSource for &[u8] {
    #[inline(always)]
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        Ok(read_from_slice(self, offset, buf))
    }

    fn name(&self) -> &'static str {
        "&[u8]"
    }
}

impl ByteSource for Vec<u8> {
    #[inline(always)]
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        Ok(read_from_slice(self, offset, buf))
    }

    fn name(&self) -> &'static str {
        "Vec<u8>"
    }
}

#[cfg(test)]
mod tests {
    use super::read_from_slice;

    #[test]
    fn partial_and_out_of_range_reads() {
        let data = [1_u8, 2, 3, 4];
        let mut buf = [0_u8; 3];

        assert_eq!(read_from_slice(&data, 0, &mut buf), 3);
        assert_eq!(buf, [1, 2, 3]);

        assert_eq!(read_from_slice(&data, 2, &mut buf), 2);
        assert_eq!(&buf[..2], &[3, 4]);

        assert_eq!(read_from_slice(&data, 4, &mut buf), 0);
        assert_eq!(read_from_slice(&data, u64::MAX, &mut buf), 0);
    }
}
