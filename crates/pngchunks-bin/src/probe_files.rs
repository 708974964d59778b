/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{error, info, warn};
use pngchunks::error::PngChunkErrors;
use pngchunks::{decode, extract, verify_crc, ChunkRecord, ChunkTag, ExtractOptions};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::serde::{ChunkReport, FileReport};

fn read_chunks(path: &Path, options: &CmdOptions) -> Result<(u64, Vec<ChunkRecord>), PngChunkErrors> {
    let file = File::open(path).map_err(|err| PngChunkErrors::IoError(err.into()))?;
    let size = file
        .metadata()
        .map_err(|err| PngChunkErrors::IoError(err.into()))?
        .len();

    let filter = |tag: ChunkTag| options.accepts(tag);
    let extract_options = ExtractOptions::new()
        .set_filter(&filter)
        .set_max_chunks(options.max_chunks);

    let chunks = extract(BufReader::new(file), extract_options)?;

    Ok((size, chunks))
}

fn build_report<'a>(path: &'a Path, size: u64, chunks: &'a [ChunkRecord], options: &CmdOptions) -> FileReport<'a> {
    let mut reports = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        let mut report = ChunkReport::new(chunk, options.with_data);

        if options.verify_crc {
            let crc_ok = match verify_crc(chunk) {
                Ok(()) => true,
                Err(err) => {
                    warn!("{}: {} chunk at {}: {}", path.display(), chunk.chunk_type(), chunk.position(), err);
                    false
                }
            };
            report.set_crc_ok(crc_ok);
        }
        if options.decode {
            let decoded = decode(chunk);

            if let Err(err) = &decoded {
                warn!("{}: {}", path.display(), err);
            }
            report.set_decoded(decoded);
        }
        reports.push(report);
    }
    FileReport::new(path, size, reports)
}

/// Read chunks of every input file, and print them to standard output.
///
/// Returns the number of files that could not be read.
pub fn probe_input_files(args: &ArgMatches, options: &CmdOptions) -> usize {
    let mut failures = 0;

    let Some(inputs) = args.get_many::<PathBuf>("in") else {
        return failures;
    };

    for in_file in inputs {
        info!("Reading chunks from {}", in_file.display());

        match read_chunks(in_file, options) {
            Ok((size, chunks)) => {
                info!("Read {} chunks", chunks.len());

                let report = build_report(in_file, size, &chunks, options);

                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        error!("Could not serialize chunks of {}: {}", in_file.display(), err);
                        failures += 1;
                    }
                }
            }
            Err(err) => {
                error!("Could not read {}: {}", in_file.display(), err);
                failures += 1;
            }
        }
    }
    failures
}
