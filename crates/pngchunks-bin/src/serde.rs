use std::path::Path;

use pngchunks::error::PngChunkErrors;
use pngchunks::{ChunkRecord, DecodedPayload};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// What the command line reports for a single chunk
pub struct ChunkReport<'a>
{
    record:    &'a ChunkRecord,
    with_data: bool,
    decoded:   Option<Result<DecodedPayload, PngChunkErrors>>,
    crc_ok:    Option<bool>
}

impl<'a> ChunkReport<'a>
{
    pub fn new(record: &'a ChunkRecord, with_data: bool) -> ChunkReport<'a>
    {
        ChunkReport {
            record,
            with_data,
            decoded: None,
            crc_ok: None
        }
    }

    pub fn set_decoded(&mut self, decoded: Result<DecodedPayload, PngChunkErrors>)
    {
        self.decoded = Some(decoded);
    }

    pub fn set_crc_ok(&mut self, crc_ok: bool)
    {
        self.crc_ok = Some(crc_ok);
    }
}

impl<'a> Serialize for ChunkReport<'a>
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let fields = 4
            + usize::from(self.with_data)
            + usize::from(self.decoded.is_some())
            + usize::from(self.crc_ok.is_some());

        let mut state = serializer.serialize_struct("ChunkReport", fields)?;

        state.serialize_field("position", &self.record.position())?;
        state.serialize_field("length", &self.record.length())?;
        state.serialize_field("type", &self.record.chunk_type())?;
        state.serialize_field("crc", &self.record.crc())?;

        if self.with_data
        {
            state.serialize_field("data", self.record.data())?;
        }
        if let Some(crc_ok) = self.crc_ok
        {
            state.serialize_field("crc_ok", &crc_ok)?;
        }
        match &self.decoded
        {
            Some(Ok(payload)) => state.serialize_field("decoded", payload)?,
            Some(Err(err)) => state.serialize_field("decode_error", &err.to_string())?,
            None => ()
        }

        state.end()
    }
}

/// All chunks read from one file
pub struct FileReport<'a>
{
    file:   &'a Path,
    size:   u64,
    chunks: Vec<ChunkReport<'a>>
}

impl<'a> FileReport<'a>
{
    pub fn new(file: &'a Path, size: u64, chunks: Vec<ChunkReport<'a>>) -> FileReport<'a>
    {
        FileReport { file, size, chunks }
    }
}

impl<'a> Serialize for FileReport<'a>
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("FileReport", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("chunks", &self.chunks)?;

        state.end()
    }
}
