/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::enums::ChunkTag;
use crate::extractor::ChunkRecord;

impl Serialize for ChunkTag
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.collect_str(self)
    }
}

impl Serialize for ChunkRecord
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ChunkRecord", 5)?;

        state.serialize_field("position", &self.position())?;
        state.serialize_field("length", &self.length())?;
        state.serialize_field("type", &self.chunk_type())?;
        state.serialize_field("data", self.data())?;
        state.serialize_field("crc", &self.crc())?;

        state.end()
    }
}
