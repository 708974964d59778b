/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Formatter};

use crate::enums::ChunkTag;

/// A predicate deciding whether a chunk is read into a
/// [`ChunkRecord`](crate::ChunkRecord) or skipped
pub type ChunkFilter<'a> = &'a dyn Fn(ChunkTag) -> bool;

/// Options influencing which chunks the extractor returns
///
/// The filter is borrowed, keep the closure alive in a binding for as long
/// as the options are in use.
///
/// ```
/// use pngchunks::{ChunkTag, ExtractOptions};
///
/// let text_only = |tag: ChunkTag| tag == "tEXt";
/// let options = ExtractOptions::new()
///     .set_filter(&text_only)
///     .set_max_chunks(3);
///
/// assert_eq!(options.get_max_chunks(), Some(3));
/// assert!(!options.accepts(ChunkTag::new(*b"IDAT")));
/// ```
#[derive(Copy, Clone, Default)]
pub struct ExtractOptions<'a>
{
    filter:     Option<ChunkFilter<'a>>,
    max_chunks: Option<usize>
}

impl<'a> ExtractOptions<'a>
{
    /// Options accepting every chunk with no limit on how many are returned
    pub fn new() -> ExtractOptions<'a>
    {
        ExtractOptions::default()
    }

    /// Only materialize chunks whose tag `filter` returns true for
    ///
    /// Rejected chunks are skipped without reading their data and do not
    /// count towards [`set_max_chunks`](Self::set_max_chunks).
    /// An `IEND` chunk still ends extraction when rejected.
    pub fn set_filter<F: Fn(ChunkTag) -> bool + 'a>(mut self, filter: &'a F) -> Self
    {
        self.filter = Some(filter);
        self
    }

    /// Stop after `max_chunks` chunks have been materialized, even if
    /// `IEND` has not been reached.
    ///
    /// Zero removes the limit.
    pub fn set_max_chunks(mut self, max_chunks: usize) -> Self
    {
        self.max_chunks = (max_chunks != 0).then_some(max_chunks);
        self
    }

    /// Get the configured chunk limit, `None` if unbounded
    pub const fn get_max_chunks(&self) -> Option<usize>
    {
        self.max_chunks
    }

    /// Return true if a chunk with this tag should be materialized
    pub fn accepts(&self, tag: ChunkTag) -> bool
    {
        self.filter.map_or(true, |filter| filter(tag))
    }
}

impl Debug for ExtractOptions<'_>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        f.debug_struct("ExtractOptions")
            .field("filter", &self.filter.map(|_| "Fn(ChunkTag) -> bool"))
            .field("max_chunks", &self.max_chunks)
            .finish()
    }
}
