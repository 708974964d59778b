/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms, non_camel_case_types)]

use core::fmt::{Debug, Display, Formatter, Write};
use core::str::FromStr;

/// The four byte type code of a chunk
///
/// Tags are compared byte for byte, so `IHDR` and `ihdr` are different tags.
///
/// The case of each letter carries a property bit, see the
/// [chunk naming conventions](https://www.w3.org/TR/2003/REC-PNG-20031110/#5Chunk-naming-conventions).
/// Extraction and decoding never look at these bits, they are exposed for callers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ChunkTag([u8; 4]);

impl ChunkTag
{
    /// Create a tag from its four raw bytes
    pub const fn new(bytes: [u8; 4]) -> ChunkTag
    {
        ChunkTag(bytes)
    }
    /// Return the raw bytes of the tag as they appear in the file
    pub const fn as_bytes(&self) -> &[u8; 4]
    {
        &self.0
    }
    /// Return the tag as a string slice if all four bytes are ASCII
    ///
    /// Tags of a valid png are always ASCII letters.
    pub fn as_str(&self) -> Option<&str>
    {
        if self.0.is_ascii()
        {
            core::str::from_utf8(&self.0).ok()
        }
        else
        {
            None
        }
    }
    /// Return true if the chunk is critical (first letter uppercase)
    ///
    /// A decoder that does not recognise a critical chunk cannot
    /// display the image correctly
    pub const fn is_critical(&self) -> bool
    {
        self.0[0] & (1 << 5) == 0
    }
    /// Return true if the chunk is public (second letter uppercase)
    pub const fn is_public(&self) -> bool
    {
        self.0[1] & (1 << 5) == 0
    }
    /// Return true if the reserved bit is unset (third letter uppercase),
    /// as required for all chunks of the current png version
    pub const fn is_reserved_bit_valid(&self) -> bool
    {
        self.0[2] & (1 << 5) == 0
    }
    /// Return true if the chunk may be copied by editors that
    /// do not understand it (fourth letter lowercase)
    pub const fn is_safe_to_copy(&self) -> bool
    {
        self.0[3] & (1 << 5) != 0
    }
    /// Return true if [`decode`](crate::decode) produces a dedicated
    /// variant for this tag rather than passing its bytes through
    pub fn is_known(&self) -> bool
    {
        PngChunkType::from_tag(*self) != PngChunkType::unkn
    }
}

impl Display for ChunkTag
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        for byte in self.0
        {
            if byte.is_ascii_graphic()
            {
                f.write_char(char::from(byte))?;
            }
            else
            {
                write!(f, "\\x{byte:02x}")?;
            }
        }
        Ok(())
    }
}

impl Debug for ChunkTag
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "ChunkTag({self})")
    }
}

impl From<[u8; 4]> for ChunkTag
{
    fn from(value: [u8; 4]) -> Self
    {
        ChunkTag(value)
    }
}

impl FromStr for ChunkTag
{
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let bytes: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| "A chunk tag must be exactly four bytes long")?;

        if !bytes.is_ascii()
        {
            return Err("A chunk tag must be ASCII");
        }
        Ok(ChunkTag(bytes))
    }
}

impl PartialEq<[u8; 4]> for ChunkTag
{
    fn eq(&self, other: &[u8; 4]) -> bool
    {
        &self.0 == other
    }
}

impl PartialEq<str> for ChunkTag
{
    fn eq(&self, other: &str) -> bool
    {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for ChunkTag
{
    fn eq(&self, other: &&str) -> bool
    {
        self.0 == other.as_bytes()
    }
}

/// Chunk types with a dedicated payload decoder, see
/// <https://www.w3.org/TR/2003/REC-PNG-20031110/>
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum PngChunkType
{
    IHDR,
    PLTE,
    IDAT,
    IEND,
    tEXt,
    unkn
}

impl PngChunkType
{
    pub(crate) fn from_tag(tag: ChunkTag) -> PngChunkType
    {
        match tag.as_bytes()
        {
            b"IHDR" => PngChunkType::IHDR,
            b"PLTE" => PngChunkType::PLTE,
            b"IDAT" => PngChunkType::IDAT,
            b"IEND" => PngChunkType::IEND,
            b"tEXt" => PngChunkType::tEXt,
            _ => PngChunkType::unkn
        }
    }
}

#[cfg(test)]
mod tests
{
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn property_bits_follow_letter_case()
    {
        let ihdr = ChunkTag::new(*b"IHDR");
        assert!(ihdr.is_critical());
        assert!(ihdr.is_public());
        assert!(ihdr.is_reserved_bit_valid());
        assert!(!ihdr.is_safe_to_copy());

        let private = ChunkTag::new(*b"prVt");
        assert!(!private.is_critical());
        assert!(!private.is_public());
        assert!(private.is_reserved_bit_valid());
        assert!(private.is_safe_to_copy());
    }

    #[test]
    fn parse_and_display()
    {
        let tag: ChunkTag = "tEXt".parse().unwrap();
        assert_eq!(tag, "tEXt");
        assert_eq!(tag.as_str(), Some("tEXt"));
        assert_eq!(tag.to_string(), "tEXt");
        assert!(tag.is_known());

        assert!("IHD".parse::<ChunkTag>().is_err());
        assert!("IHDRR".parse::<ChunkTag>().is_err());

        let odd = ChunkTag::new([b'a', 0, 0xFF, b'Z']);
        assert_eq!(odd.as_str(), None);
        assert_eq!(odd.to_string(), "a\\x00\\xffZ");
        assert!(!odd.is_known());
    }
}
