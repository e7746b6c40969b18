/*!
 Command line options and the validated settings built from them.
*/

use std::path::PathBuf;

use clap::{crate_version, value_parser, Arg, ArgAction, ArgMatches, Command};

use plist_decoder::xml::options::{DecodeOptions, UnknownTagPolicy, DEFAULT_MAX_DEPTH};

use crate::app::{error::RuntimeError, export_type::ExportType};

// CLI Arg Names
pub const OPTION_PATH: &str = "path";
pub const OPTION_FORMAT: &str = "format";
pub const OPTION_STRICT: &str = "strict";
pub const OPTION_MAX_DEPTH: &str = "max-depth";

// Other CLI Text
pub const SUPPORTED_FORMATS: &str = "summary, txt, json";
pub const ABOUT: &str = concat!(
    "The `plist-inspect` binary decodes an XML property list\n",
    "and reports its version, root kind, or full contents.\n"
);

#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    /// Path to the property list file to decode
    pub plist_path: PathBuf,
    /// How to render the decoded document
    pub export_type: ExportType,
    /// Settings handed to the decoder
    pub decode_options: DecodeOptions,
}

impl Options {
    pub fn from_args(args: &ArgMatches) -> Result<Self, RuntimeError> {
        let plist_path = args.get_one::<PathBuf>(OPTION_PATH).ok_or_else(|| {
            RuntimeError::InvalidOptions(format!("Option `{OPTION_PATH}` is required"))
        })?;
        let format = args
            .get_one::<String>(OPTION_FORMAT)
            .map(String::as_str)
            .unwrap_or("summary");
        let strict = args.get_flag(OPTION_STRICT);
        let max_depth = args
            .get_one::<usize>(OPTION_MAX_DEPTH)
            .copied()
            .unwrap_or(DEFAULT_MAX_DEPTH);

        // Build the export type
        let export_type = ExportType::from_cli(format).ok_or_else(|| {
            RuntimeError::InvalidOptions(format!(
                "{format} is not a valid export type! Must be one of <{SUPPORTED_FORMATS}>"
            ))
        })?;

        // The root container alone needs a depth of 1
        if max_depth == 0 {
            return Err(RuntimeError::InvalidOptions(format!(
                "Option `--{OPTION_MAX_DEPTH}` must be at least 1"
            )));
        }

        let unknown_tags = if strict {
            UnknownTagPolicy::Reject
        } else {
            UnknownTagPolicy::Skip
        };

        Ok(Options {
            plist_path: plist_path.clone(),
            export_type,
            decode_options: DecodeOptions::default()
                .unknown_tags(unknown_tags)
                .max_depth(max_depth),
        })
    }
}

/// Build the command line parser
pub fn get_command() -> Command {
    Command::new("plist-inspect")
        .version(crate_version!())
        .about(ABOUT)
        .arg_required_else_help(true)
        .arg(
            Arg::new(OPTION_PATH)
                .help("Path to the XML property list to decode")
                .required(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new(OPTION_FORMAT)
                .short('f')
                .long(OPTION_FORMAT)
                .help("Specify a single output format for the decoded document\n")
                .value_name(SUPPORTED_FORMATS)
                .default_value("summary")
                .display_order(0),
        )
        .arg(
            Arg::new(OPTION_STRICT)
                .short('s')
                .long(OPTION_STRICT)
                .help("Fail on elements that do not name a value type instead of skipping them\n")
                .action(ArgAction::SetTrue)
                .display_order(1),
        )
        .arg(
            Arg::new(OPTION_MAX_DEPTH)
                .short('d')
                .long(OPTION_MAX_DEPTH)
                .help(format!(
                    "Deepest allowed nesting of dict and array elements\nIf omitted, the default is {DEFAULT_MAX_DEPTH}\n"
                ))
                .value_name("N")
                .value_parser(value_parser!(usize))
                .display_order(2),
        )
}

/// Parse arguments from the command line
pub fn from_command_line() -> ArgMatches {
    get_command().get_matches()
}
