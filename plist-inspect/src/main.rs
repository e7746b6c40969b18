#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod app;
mod exporters;

use std::process::exit;

pub use exporters::{exporter::Exporter, json::JSON, summary::Summary, txt::TXT};

use app::{
    options::{from_command_line, Options},
    runtime::Config,
};

fn main() {
    // Get args from command line
    let args = from_command_line();
    // Create application options
    let options = Options::from_args(&args).unwrap_or_else(|why| {
        eprintln!("{why}");
        exit(1);
    });

    match Config::new(options) {
        Ok(app) => {
            if let Err(why) = app.start() {
                eprintln!("Unable to export: {why}");
                exit(1);
            }
        }
        Err(why) => {
            eprintln!("error unmarshalling plist: {why}");
            exit(1);
        }
    }
}
