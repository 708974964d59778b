/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;
use std::str::FromStr;

use clap::{value_parser, Arg, ArgAction, Command};
use pngchunks::ChunkTag;

fn parse_tag(tag: &str) -> Result<ChunkTag, String> {
    ChunkTag::from_str(tag).map_err(|reason| format!("invalid chunk tag {tag:?}: {reason}"))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pngchunks")
        .about("List and decode the chunks of png files")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read chunks from")
            .long("input")
            .action(ArgAction::Append)
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("filter")
            .long("filter")
            .help_heading("EXTRACTION")
            .help("Only read chunks with these tags, e.g IHDR,tEXt")
            .long_help("Comma separated list of chunk tags to read.\nOther chunks are skipped without reading their data, an IEND chunk still ends extraction.")
            .action(ArgAction::Append)
            .value_delimiter(',')
            .value_parser(parse_tag))
        .arg(Arg::new("max-chunks")
            .long("max-chunks")
            .help_heading("EXTRACTION")
            .help("Stop after this many chunks have been read, 0 means no limit")
            .value_parser(value_parser!(usize))
            .default_value("0"))
        .arg(Arg::new("decode")
            .long("decode")
            .help_heading("EXTRACTION")
            .action(ArgAction::SetTrue)
            .help("Decode chunk payloads"))
        .arg(Arg::new("verify-crc")
            .long("verify-crc")
            .help_heading("EXTRACTION")
            .action(ArgAction::SetTrue)
            .help("Check each chunk's stored crc against its contents"))
        .arg(Arg::new("with-data")
            .long("with-data")
            .help_heading("EXTRACTION")
            .action(ArgAction::SetTrue)
            .help("Include raw chunk data in the output"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the chunks read"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "pngchunks",
                "-i",
                "a.png",
                "--input",
                "b.png",
                "--filter",
                "IHDR,tEXt",
                "--filter",
                "PLTE",
                "--max-chunks",
                "3",
                "--decode"
            ])
            .unwrap();

        let inputs: Vec<&PathBuf> = matches.get_many::<PathBuf>("in").unwrap().collect();
        assert_eq!(inputs, [&PathBuf::from("a.png"), &PathBuf::from("b.png")]);

        let tags: Vec<String> = matches
            .get_many::<ChunkTag>("filter")
            .unwrap()
            .map(|tag| tag.to_string())
            .collect();
        assert_eq!(tags, ["IHDR", "tEXt", "PLTE"]);

        assert_eq!(matches.get_one::<usize>("max-chunks"), Some(&3));
        assert_eq!(matches.get_one::<bool>("decode"), Some(&true));
        assert_eq!(matches.get_one::<bool>("verify-crc"), Some(&false));
    }

    #[test]
    fn test_input_is_required() {
        assert!(create_cmd_args()
            .try_get_matches_from(["pngchunks", "--decode"])
            .is_err());
    }

    #[test]
    fn test_bad_tag_rejected() {
        assert!(create_cmd_args()
            .try_get_matches_from(["pngchunks", "-i", "a.png", "--filter", "IHDRX"])
            .is_err());
    }
}
