use std::path::Path;

use crate::config::{ServerConfig, DEFAULT_CSV_PATH};
use crate::server;
use crate::worlddata::transform::transform_csv_file;
use crate::worlddata::WorldDataOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Convert,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("convert") => Some(Command::Convert),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Convert) => handle_convert(args),
        None => {
            eprintln!("usage: worldpop <serve|convert>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let config = ServerConfig::from_env();
    match server::run_server(&config) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

/// Run the transformer against a CSV path (default: the configured source
/// file) and print the JSON document to stdout.
fn handle_convert(args: &[String]) -> i32 {
    let path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_CSV_PATH);

    match transform_csv_file(Path::new(path)) {
        Ok(WorldDataOutcome::Document(document)) => match serde_json::to_string_pretty(&document) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize world data: {err}");
                1
            }
        },
        Ok(WorldDataOutcome::Unavailable(reason)) => {
            eprintln!("no data available from '{path}': {reason}");
            1
        }
        Err(err) => {
            eprintln!("convert failed: {err}");
            1
        }
    }
}
