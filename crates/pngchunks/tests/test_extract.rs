/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufReader, Cursor};

use nanorand::{Rng, WyRand};
use pngchunks::error::PngChunkErrors;
use pngchunks::{decode, extract, ChunkExtractor, ChunkRecord, ChunkTag, DecodedPayload, ExtractOptions};

mod common;

use common::{chunk, png_file, suite_file, SUITE_TAGS, SUITE_TEXTS};

fn extract_all(data: &[u8]) -> Vec<ChunkRecord> {
    extract(data, ExtractOptions::new()).unwrap()
}

/// Every record must point at its own bytes in the file and
/// chunks must follow each other without gaps
fn assert_framing(data: &[u8], chunks: &[ChunkRecord]) {
    let mut expected_position = 16;

    for record in chunks {
        assert_eq!(record.position(), expected_position);
        assert_eq!(record.length() as usize, record.data().len());

        let start = record.position() as usize - 8;
        let end = record.end_position() as usize;

        assert_eq!(
            &data[start..end],
            chunk(record.chunk_type().as_bytes(), record.data()).as_slice()
        );
        assert_eq!(
            &data[end - 4..end],
            &record.crc().to_be_bytes(),
            "crc mismatch for {}",
            record.chunk_type()
        );
        expected_position = record.end_position() + 8;
    }
}

#[test]
fn test_suite_file_chunk_order() {
    let data = suite_file();
    let chunks = extract_all(&data);

    assert_eq!(chunks.len(), 10);

    let tags: Vec<ChunkTag> = chunks.iter().map(|c| c.chunk_type()).collect();
    let expected: Vec<ChunkTag> = SUITE_TAGS.iter().map(|tag| ChunkTag::new(**tag)).collect();
    assert_eq!(tags, expected);

    assert_framing(&data, &chunks);
}

#[test]
fn test_first_and_last_chunk() {
    let data = suite_file();
    let chunks = extract_all(&data);

    let first = &chunks[0];
    assert_eq!(first.chunk_type(), "IHDR");
    assert_eq!(first.position(), 16);
    assert_eq!(first.length(), 13);
    assert_eq!(first.crc(), -1813919703);

    let last = chunks.last().unwrap();
    assert_eq!(last.chunk_type(), "IEND");
    assert_eq!(last.length(), 0);
    assert_eq!(last.crc(), -1371381630);
    assert_eq!(last.end_position(), data.len() as u64);
}

#[test]
fn test_max_chunks_returns_prefix() {
    let data = suite_file();
    let all = extract_all(&data);

    let first_three = extract(data.as_slice(), ExtractOptions::new().set_max_chunks(3)).unwrap();
    let tags: Vec<String> = first_three
        .iter()
        .map(|c| c.chunk_type().to_string())
        .collect();
    assert_eq!(tags, ["IHDR", "gAMA", "tEXt"]);

    match decode(&first_three[2]).unwrap() {
        DecodedPayload::Text(text) => {
            assert_eq!(text.keyword, "Title");
            assert_eq!(text.text, "PngSuite");
        }
        other => panic!("Expected a text chunk, found {other:?}")
    }

    for k in 1..=all.len() + 2 {
        let prefix = extract(data.as_slice(), ExtractOptions::new().set_max_chunks(k)).unwrap();
        let expected = &all[..k.min(all.len())];
        assert_eq!(prefix.as_slice(), expected, "limit {k}");
    }
}

#[test]
fn test_zero_max_chunks_is_unbounded() {
    let data = suite_file();
    let chunks = extract(data.as_slice(), ExtractOptions::new().set_max_chunks(0)).unwrap();

    assert_eq!(chunks.len(), 10);
}

#[test]
fn test_filter_selects_chunks() {
    let data = suite_file();
    let all = extract_all(&data);

    let header_and_text = |tag: ChunkTag| tag == "IHDR" || tag == "tEXt";
    let options = ExtractOptions::new().set_filter(&header_and_text);
    let chunks = extract(data.as_slice(), options).unwrap();

    assert_eq!(chunks.len(), 7);
    assert_eq!(chunks.iter().filter(|c| c.chunk_type() == "IHDR").count(), 1);
    assert_eq!(chunks.iter().filter(|c| c.chunk_type() == "tEXt").count(), 6);

    // skipped chunks must not disturb the records that are kept
    let expected: Vec<ChunkRecord> = all
        .into_iter()
        .filter(|c| header_and_text(c.chunk_type()))
        .collect();
    assert_eq!(chunks, expected);

    for (record, (keyword, text)) in chunks[1..].iter().zip(SUITE_TEXTS) {
        match decode(record).unwrap() {
            DecodedPayload::Text(decoded) => {
                assert_eq!(decoded.keyword, keyword);
                assert_eq!(decoded.text, text);
            }
            other => panic!("Expected a text chunk, found {other:?}")
        }
    }
}

#[test]
fn test_filter_and_limit_combined() {
    let data = suite_file();

    let text_only = |tag: ChunkTag| tag == "tEXt";
    let options = ExtractOptions::new()
        .set_filter(&text_only)
        .set_max_chunks(2);
    let chunks = extract(data.as_slice(), options).unwrap();

    assert_eq!(chunks.len(), 2);
    assert!(chunks.iter().all(|c| c.chunk_type() == "tEXt"));
}

#[test]
fn test_rejected_iend_still_stops() {
    let mut data = suite_file();
    let file_length = data.len() as u64;
    // anything after IEND must never be looked at
    data.extend_from_slice(b"garbage after the trailer");

    let nothing = |_: ChunkTag| false;
    let mut extractor = ChunkExtractor::new(data.as_slice());
    let chunks = extractor
        .extract(ExtractOptions::new().set_filter(&nothing))
        .unwrap();

    assert!(chunks.is_empty());
    assert_eq!(extractor.position(), file_length);
}

#[test]
fn test_trailing_bytes_ignored() {
    let data = suite_file();
    let mut padded = data.clone();
    padded.extend_from_slice(&[0xFF; 37]);

    assert_eq!(extract_all(&data), extract_all(&padded));
}

#[test]
fn test_bad_signature() {
    let mut data = suite_file();
    data[..6].copy_from_slice(b"GIF89a");

    match extract(data.as_slice(), ExtractOptions::new()) {
        Err(PngChunkErrors::BadSignature(found)) => assert_eq!(&found[..6], b"GIF89a"),
        other => panic!("Expected a signature error, found {other:?}")
    }
}

#[test]
fn test_source_shorter_than_signature() {
    let data = [0x89, b'P', b'N'];
    let err = extract(&data[..], ExtractOptions::new()).unwrap_err();

    assert!(err.is_truncated());
}

#[test]
fn test_missing_iend_is_short_read() {
    let data = suite_file();
    // drop the trailer, 12 bytes for an empty chunk
    let without_trailer = &data[..data.len() - 12];

    let err = extract(without_trailer, ExtractOptions::new()).unwrap_err();
    assert!(err.is_truncated(), "{err:?}");
}

#[test]
fn test_truncated_inside_chunk() {
    let data = suite_file();
    let all = extract_all(&data);
    let idat = all.iter().find(|c| c.chunk_type() == "IDAT").unwrap();
    // cut the file in the middle of the data
    let cut = &data[..idat.position() as usize + 100];

    match extract(cut, ExtractOptions::new()) {
        Err(PngChunkErrors::ShortRead { expected, found }) => {
            assert_eq!(expected, idat.length() as usize);
            assert_eq!(found, 100);
        }
        other => panic!("Expected a short read, found {other:?}")
    }
    // the same cut is fine if extraction stops before it
    let before = extract(cut, ExtractOptions::new().set_max_chunks(8)).unwrap();
    assert_eq!(before.len(), 8);
}

#[test]
fn test_truncated_inside_skipped_chunk() {
    let data = suite_file();
    let cut = &data[..data.len() - 20];

    let header_only = |tag: ChunkTag| tag == "IHDR";
    let err = extract(cut, ExtractOptions::new().set_filter(&header_only)).unwrap_err();

    assert!(err.is_truncated(), "{err:?}");
}

#[test]
fn test_empty_data_chunk() {
    let data = png_file(&[
        (b"IHDR", common::ihdr_data(1, 1, 8, 0)),
        (b"IDAT", Vec::new()),
        (b"IEND", Vec::new())
    ]);
    let chunks = extract_all(&data);

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[1].length(), 0);
    assert!(chunks[1].data().is_empty());
    assert_framing(&data, &chunks);
}

#[test]
fn test_random_chunk_layout() {
    let mut rng = WyRand::new_seed(0x5EED);

    for _ in 0..50 {
        let count = rng.generate_range(0_usize..20);
        let mut chunks = Vec::with_capacity(count + 1);

        for _ in 0..count {
            // a lower case first letter keeps random tags from being IEND
            let tag = [
                b'a' + rng.generate_range(0_u8..26),
                b'A' + rng.generate_range(0_u8..26),
                b'A' + rng.generate_range(0_u8..26),
                b'a' + rng.generate_range(0_u8..26)
            ];
            let mut data = vec![0; rng.generate_range(0_usize..3000)];
            rng.fill_bytes(&mut data);

            chunks.push((tag, data));
        }
        chunks.push((*b"IEND", Vec::new()));

        let borrowed: Vec<(&[u8; 4], Vec<u8>)> =
            chunks.iter().map(|(tag, data)| (tag, data.clone())).collect();
        let file = png_file(&borrowed);
        let extracted = extract_all(&file);

        assert_eq!(extracted.len(), chunks.len());
        for (record, (tag, data)) in extracted.iter().zip(&chunks) {
            assert_eq!(record.chunk_type(), *tag);
            assert_eq!(record.data(), data.as_slice());
        }
        assert_framing(&file, &extracted);
    }
}

#[test]
fn test_png_crate_output() {
    let (width, height) = (17_u32, 9_u32);
    let pixels: Vec<u8> = (0..width * height * 3).map(|x| (x % 251) as u8).collect();

    let mut data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut data, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder
            .add_text_chunk("Comment".to_string(), "written by the png crate".to_string())
            .unwrap();

        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&pixels).unwrap();
        writer.finish().unwrap();
    }

    let chunks = extract_all(&data);
    assert_framing(&data, &chunks);

    match decode(&chunks[0]).unwrap() {
        DecodedPayload::Header(header) => {
            assert_eq!(header.width, width);
            assert_eq!(header.height, height);
            assert_eq!(header.bit_depth, 8);
            assert_eq!(header.color_type, 2);
            assert_eq!(header.interlace_method, 0);
        }
        other => panic!("Expected a header, found {other:?}")
    }

    let text = chunks
        .iter()
        .filter(|c| c.chunk_type() == "tEXt")
        .find_map(|c| match decode(c) {
            Ok(DecodedPayload::Text(text)) => Some(text),
            _ => None
        })
        .unwrap();
    assert_eq!(text.keyword, "Comment");
    assert_eq!(text.text, "written by the png crate");

    assert!(chunks.iter().any(|c| c.chunk_type() == "IDAT"));
    assert_eq!(chunks.last().unwrap().chunk_type(), "IEND");
}

#[test]
fn test_std_readers() {
    let data = suite_file();
    let expected = extract_all(&data);

    let from_cursor = extract(Cursor::new(data.clone()), ExtractOptions::new()).unwrap();
    assert_eq!(from_cursor, expected);

    let from_buffered = extract(
        BufReader::with_capacity(7, Cursor::new(data.as_slice())),
        ExtractOptions::new()
    )
    .unwrap();
    assert_eq!(from_buffered, expected);

    let from_vec = extract(data, ExtractOptions::new()).unwrap();
    assert_eq!(from_vec, expected);
}
