/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use pngchunks::ChunkTag;

#[derive(Debug, Clone, Default)]
pub struct CmdOptions {
    pub filter:     Vec<ChunkTag>,
    pub max_chunks: usize,
    pub decode:     bool,
    pub verify_crc: bool,
    pub with_data:  bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions::default()
    }

    /// Return true if chunks with this tag should be read
    pub fn accepts(&self, tag: ChunkTag) -> bool {
        self.filter.is_empty() || self.filter.contains(&tag)
    }
}

fn get_flag(options: &ArgMatches, id: &str) -> bool {
    options.get_one::<bool>(id).copied().unwrap_or(false)
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(tags) = options.get_many::<ChunkTag>("filter") {
        cmd_options.filter = tags.copied().collect();
        info!("Reading only {:?} chunks", cmd_options.filter);
    }
    cmd_options.max_chunks = options.get_one::<usize>("max-chunks").copied().unwrap_or(0);

    if cmd_options.max_chunks != 0 {
        info!("Stopping after {} chunks", cmd_options.max_chunks);
    }
    cmd_options.decode = get_flag(options, "decode");
    cmd_options.verify_crc = get_flag(options, "verify-crc");
    cmd_options.with_data = get_flag(options, "with-data");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if get_flag(options, "debug") {
        log_level = Level::Debug;
    } else if get_flag(options, "trace") {
        log_level = Level::Trace;
    } else if get_flag(options, "warn") {
        log_level = Level::Warn
    } else if get_flag(options, "info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
